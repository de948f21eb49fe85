//! Program loading, reset, and hazard-mode changes.

use super::{ExecutionState, Processor, ProcessorEvent};
use crate::core::pipeline::signals::HazardMode;
use crate::soc::memory::ProgramMemory;
use crate::stats::SimStats;

impl Processor {
    /// Installs a program.
    ///
    /// The first program starts execution from power-on state. Loading over an
    /// existing program resets the processor, which also clears data memory.
    pub fn load_program(&mut self, program: ProgramMemory) {
        let words = program.len();
        let previous = self.seq.datapath.replace_program(program);
        tracing::debug!(words, replaced = previous.is_some(), "program loaded");
        self.seq.events.push(ProcessorEvent::ProgramLoaded);
        if previous.is_some() {
            self.reset();
        } else {
            self.start();
        }
    }

    /// Returns every component to power-on state, clears data memory and the
    /// statistics, and restarts the loaded program.
    ///
    /// The clock is forced low without raising edges. Without a program the processor
    /// stays in [`ExecutionState::NoProgram`].
    pub fn reset(&mut self) {
        let seq = &mut self.seq;
        if seq.state.is_running() {
            seq.events.push(ProcessorEvent::ExecutionStopped);
        }
        seq.datapath.reset();
        seq.events.push(ProcessorEvent::DataMemoryCleared);
        seq.checking_for_end = false;
        seq.stats = SimStats::default();
        self.clock.reset();
        tracing::debug!("processor reset");

        if self.seq.datapath.program().is_some() {
            self.start();
        } else {
            self.seq.state = ExecutionState::NoProgram;
        }
    }

    /// Changes the hazard policy. The pipeline is not reset.
    pub fn set_mode(&mut self, mode: HazardMode) {
        if mode == self.seq.datapath.mode() {
            return;
        }
        tracing::debug!(from = %self.seq.datapath.mode(), to = %mode, "hazard mode changed");
        self.seq.datapath.set_mode(mode);
        self.seq.events.push(ProcessorEvent::ModeChanged(mode));
    }

    fn start(&mut self) {
        self.seq.state = ExecutionState::Running;
        self.seq.events.push(ProcessorEvent::ExecutionStarted);
    }
}
