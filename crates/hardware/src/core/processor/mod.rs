//! Processor Definition and Lifecycle.
//!
//! This module defines the top-level `Processor`, which owns the clock and the datapath
//! and decides when the datapath responds to clock edges. It coordinates the following:
//! 1. **Lifecycle:** `NoProgram` → `Running` → `Finished` or `Failed`, with reset and reload.
//! 2. **Edge Dispatch:** Falling edges latch and commit the control path, rising edges the
//!    data path, and both are ignored unless the processor is running.
//! 3. **Termination:** Out-of-bounds fetches arm the end check; a drained pipeline finishes
//!    the program. In fail mode any hazard stops execution.
//! 4. **Observation:** Events, statistics, and read access to every component.

/// Edge dispatch and stepping.
pub mod execution;

/// Observation events and the bounded event log.
pub mod events;

/// Program loading, reset, and hazard-mode changes.
pub mod lifecycle;

use std::fmt;

use crate::clock::{ClockProvider, ProviderKind, SystemClock, TimedClock};
use crate::common::error::ClockError;
use crate::common::reg::Register;
use crate::config::Config;
use crate::core::datapath::Datapath;
use crate::core::pipeline::control::ControlUnit;
use crate::core::pipeline::signals::{HazardMode, HazardTypes};
use crate::soc::memory::{DataMemory, ProgramMemory};
use crate::stats::SimStats;

pub use events::{EventLog, ProcessorEvent};

/// Where the processor is in its lifecycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ExecutionState {
    /// No program has been loaded; clock edges are ignored.
    #[default]
    NoProgram,
    /// Clock edges advance the pipeline.
    Running,
    /// Every instruction left the pipeline after the PC ran past the program.
    Finished,
    /// Fail mode detected the hazards.
    Failed(HazardTypes),
}

impl ExecutionState {
    /// Returns `true` while clock edges advance the pipeline.
    pub const fn is_running(self) -> bool {
        matches!(self, Self::Running)
    }
}

impl fmt::Display for ExecutionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoProgram => f.write_str("no program"),
            Self::Running => f.write_str("running"),
            Self::Finished => f.write_str("finished"),
            Self::Failed(hazards) => write!(f, "failed ({hazards})"),
        }
    }
}

/// Everything the clock's edge handler mutates.
///
/// Kept apart from the clock so an inversion can borrow both at once.
#[derive(Debug)]
struct Sequencer {
    datapath: Datapath,
    state: ExecutionState,
    /// Set by the first out-of-bounds fetch; cleared by reset.
    checking_for_end: bool,
    events: EventLog,
    stats: SimStats,
    trace_pipeline: bool,
}

/// The simulated pipelined processor.
///
/// The processor starts with no program and ignores the clock until one is loaded.
/// Observation events accumulate in a bounded log until
/// [`Processor::drain_events`] is called.
#[derive(Debug)]
pub struct Processor {
    /// Shared two-phase clock.
    clock: SystemClock,
    /// Datapath, lifecycle state, events, and statistics.
    seq: Sequencer,
}

impl Processor {
    /// Creates a processor with no program.
    ///
    /// # Arguments
    ///
    /// * `clock` - The clock that drives the processor.
    /// * `config` - Hazard mode, event retention, and pipeline tracing.
    pub fn new(clock: SystemClock, config: &Config) -> Self {
        tracing::debug!(mode = %config.general.hazard_mode, "processor created");
        Self {
            clock,
            seq: Sequencer {
                datapath: Datapath::new(config.general.hazard_mode),
                state: ExecutionState::NoProgram,
                checking_for_end: false,
                events: EventLog::with_capacity(config.general.event_capacity),
                stats: SimStats::default(),
                trace_pipeline: config.general.trace_pipeline,
            },
        }
    }

    /// Creates a processor from a configuration, including its clock provider.
    ///
    /// A timed provider is created disabled with the configured half-period.
    ///
    /// # Errors
    ///
    /// [`ClockError::IntervalTooShort`] if the half-period is under 1 ms.
    pub fn from_config(config: &Config) -> Result<Self, ClockError> {
        let provider = match config.clock.provider {
            ProviderKind::Manual => ClockProvider::Manual,
            ProviderKind::Timed => {
                ClockProvider::Timed(TimedClock::new(config.clock.half_period())?)
            }
        };
        Ok(Self::new(SystemClock::with_provider(provider), config))
    }

    /// The clock.
    pub const fn clock(&self) -> &SystemClock {
        &self.clock
    }

    /// Lifecycle state.
    pub const fn state(&self) -> ExecutionState {
        self.seq.state
    }

    /// Returns `true` while clock edges advance the pipeline.
    pub const fn is_running(&self) -> bool {
        self.seq.state.is_running()
    }

    /// Returns `true` once the loaded program has drained from the pipeline.
    pub const fn has_finished(&self) -> bool {
        matches!(self.seq.state, ExecutionState::Finished)
    }

    /// The hazards that stopped execution in fail mode, if any.
    pub const fn failure(&self) -> Option<HazardTypes> {
        match self.seq.state {
            ExecutionState::Failed(hazards) => Some(hazards),
            _ => None,
        }
    }

    /// Active hazard policy.
    pub const fn mode(&self) -> HazardMode {
        self.seq.datapath.mode()
    }

    /// The datapath, for read access to every component.
    pub const fn datapath(&self) -> &Datapath {
        &self.seq.datapath
    }

    /// The loaded program.
    pub const fn program(&self) -> Option<&ProgramMemory> {
        self.seq.datapath.program()
    }

    /// Visible program counter.
    pub const fn pc(&self) -> u32 {
        self.seq.datapath.pc().address()
    }

    /// Value of a general-purpose register.
    pub const fn register(&self, reg: Register) -> u32 {
        self.seq.datapath.registers().read(reg)
    }

    /// The data memory.
    pub const fn data_memory(&self) -> &DataMemory {
        self.seq.datapath.data_memory()
    }

    /// The control unit evaluated on the visible state.
    pub const fn control(&self) -> ControlUnit<'_> {
        self.seq.datapath.control()
    }

    /// The ALU result for the instruction in execute.
    pub fn alu_result(&self) -> u32 {
        self.seq.datapath.alu().result()
    }

    /// Writes a data memory word directly, outside the clocked data path.
    pub fn poke_word(&mut self, address: u32, value: u32) {
        tracing::debug!(address = format_args!("{address:#010x}"), value, "data memory poked");
        self.seq.datapath.data_memory_mut().store_word(address, value);
        self.seq.events.push(ProcessorEvent::WordStored(address));
    }

    /// Statistics since the last reset.
    pub const fn stats(&self) -> &SimStats {
        &self.seq.stats
    }

    /// Retained events.
    pub const fn events(&self) -> &EventLog {
        &self.seq.events
    }

    /// Removes and returns every retained event, oldest first.
    pub fn drain_events(&mut self) -> Vec<ProcessorEvent> {
        self.seq.events.drain().collect()
    }
}
