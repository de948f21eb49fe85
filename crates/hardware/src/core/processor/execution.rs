//! Edge dispatch and stepping.
//!
//! The clock delivers each edge to [`Sequencer::on_edge`] synchronously. While the
//! processor is running, the edges are applied as follows:
//! 1. **Falling:** The PC and stage registers latch; statistics record stalls and flushes.
//! 2. **Fallen:** The control path commits. Fail mode then checks for hazards, and an
//!    armed end check finishes the program once the pipeline is drained.
//! 3. **Rising:** Program fetch, data memory access, and register write-back.
//! 4. **Risen:** The synchronizers commit.

use std::time::Instant;

use super::{ExecutionState, Processor, ProcessorEvent, Sequencer};
use crate::clock::{ClockEdge, ClockProvider, Polarity, ProviderKind};
use crate::common::constants::BUBBLE_ADDRESS;
use crate::common::error::{ClockError, SimError};
use crate::core::pipeline::signals::HazardMode;
use crate::soc::memory::MemoryAccess;

impl Sequencer {
    pub(super) fn on_edge(&mut self, edge: ClockEdge) {
        if !self.state.is_running() {
            return;
        }
        match edge {
            ClockEdge::Falling => {
                let report = self.datapath.latch_control_path();
                self.stats.record_control(&report);
            }
            ClockEdge::Fallen => {
                self.commit(Polarity::Negative);
                self.events.push(ProcessorEvent::ControlPathUpdated);
                if self.trace_pipeline {
                    self.trace_snapshot();
                }
                self.check_for_failure();
                self.check_for_end();
            }
            ClockEdge::Rising => {
                let report = self.datapath.latch_data_path();
                if let Some(address) = report.out_of_bounds {
                    self.events.push(ProcessorEvent::OutOfBoundsAccess(address));
                    if !self.checking_for_end {
                        tracing::debug!(
                            address = format_args!("{address:#010x}"),
                            "fetch left the program, waiting for the pipeline to drain"
                        );
                        self.checking_for_end = true;
                    }
                }
                if let Some(MemoryAccess::Stored(address)) = report.access {
                    self.events.push(ProcessorEvent::WordStored(address));
                }
                if let Some(reg) = report.written {
                    self.events.push(ProcessorEvent::RegisterWritten(reg));
                }
                self.stats.record_data(&report);
            }
            ClockEdge::Risen => {
                self.commit(Polarity::Positive);
                self.events.push(ProcessorEvent::DataPathUpdated);
            }
        }
    }

    fn commit(&mut self, polarity: Polarity) {
        for component in self.datapath.change_outputs(polarity) {
            tracing::trace!(%component, "state changed");
            self.events.push(ProcessorEvent::StateChanged(component));
        }
    }

    fn check_for_failure(&mut self) {
        if self.datapath.mode() != HazardMode::Fail {
            return;
        }
        let hazards = self.datapath.control().check_hazard();
        if hazards.is_empty() {
            return;
        }
        tracing::info!(%hazards, pc = format_args!("{:#010x}", self.datapath.pc().address()), "hazard in fail mode");
        self.state = ExecutionState::Failed(hazards);
        self.events.push(ProcessorEvent::ExecutionStopped);
        self.events.push(ProcessorEvent::Failure(hazards));
    }

    fn check_for_end(&mut self) {
        if !self.state.is_running() || !self.checking_for_end || !self.datapath.is_drained() {
            return;
        }
        tracing::info!(cycles = self.stats.cycles, "program finished");
        self.checking_for_end = false;
        self.state = ExecutionState::Finished;
        self.events.push(ProcessorEvent::ExecutionStopped);
        self.events.push(ProcessorEvent::ProgramFinished);
    }

    fn trace_snapshot(&self) {
        let dp = &self.datapath;
        tracing::info!(
            cycle = self.stats.cycles,
            pc = format_args!("{:#010x}", dp.pc().address()),
            if_id = %Slot(dp.fetch().instruction_address()),
            id_ex = %Slot(dp.decode().instruction_address()),
            ex_mem = %Slot(dp.execute().instruction_address()),
            mem_wb = %Slot(dp.memory().instruction_address()),
            "pipeline"
        );
    }
}

/// Displays a stage-register address, or `-` for a bubble.
struct Slot(u32);

impl std::fmt::Display for Slot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.0 == BUBBLE_ADDRESS {
            f.write_str("-")
        } else {
            write!(f, "{:#06x}", self.0)
        }
    }
}

impl Processor {
    /// Inverts the clock once on behalf of the manual provider.
    ///
    /// # Errors
    ///
    /// [`ClockError::NotProvider`] if the timed provider owns the clock.
    pub fn half_step(&mut self) -> Result<(), SimError> {
        let seq = &mut self.seq;
        self.clock
            .invert(ProviderKind::Manual, |edge| seq.on_edge(edge))
            .map_err(SimError::from)
    }

    /// Advances one full clock cycle (two half steps).
    ///
    /// # Errors
    ///
    /// [`ClockError::NotProvider`] if the timed provider owns the clock.
    pub fn step(&mut self) -> Result<(), SimError> {
        self.half_step()?;
        self.half_step()
    }

    /// Applies every inversion the timed provider owes at `now`.
    ///
    /// # Returns
    ///
    /// The number of inversions applied.
    ///
    /// # Errors
    ///
    /// [`ClockError::NotTimed`] if the manual provider owns the clock.
    pub fn pump_timed(&mut self, now: Instant) -> Result<u32, SimError> {
        let due = self.clock.timed_mut()?.due(now);
        for _ in 0..due {
            let seq = &mut self.seq;
            self.clock.invert(ProviderKind::Timed, |edge| seq.on_edge(edge))?;
        }
        Ok(due)
    }

    /// Starts or stops the timed provider's oscillation.
    ///
    /// # Errors
    ///
    /// [`ClockError::NotTimed`] if the manual provider owns the clock.
    pub fn set_timer_enabled(&mut self, enabled: bool, now: Instant) -> Result<(), ClockError> {
        self.clock.timed_mut()?.set_enabled(enabled, now);
        tracing::debug!(enabled, "timed clock toggled");
        Ok(())
    }

    /// Hands the clock to another provider. The level is unchanged.
    pub fn set_clock_provider(&mut self, provider: ClockProvider) {
        self.clock.set_provider(provider);
    }
}
