//! Simulator: a processor plus the loop that runs it.
//!
//! The processor only reacts to clock edges. The simulator supplies them, either as
//! fast manual steps ([`Simulator::run`]) or in real time from the timed provider
//! ([`Simulator::run_timed`]), and stops at the end of the program, at a fail-mode
//! hazard, or at the configured cycle limit.

use std::fmt;
use std::path::Path;
use std::thread;
use std::time::Instant;

use crate::clock::TimedClock;
use crate::common::error::{ClockError, SimError};
use crate::config::Config;
use crate::core::Processor;
use crate::core::pipeline::signals::HazardTypes;
use crate::core::processor::ExecutionState;
use crate::sim::loader::{Assembler, load_program};

/// How a run ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunOutcome {
    /// The program drained from the pipeline.
    Finished {
        /// Cycles executed since the last reset.
        cycles: u64,
    },
    /// Fail mode detected a hazard.
    Failed {
        /// Cycles executed since the last reset.
        cycles: u64,
        /// Hazards that were detected.
        hazards: HazardTypes,
    },
    /// The cycle limit was reached with the program still running.
    CycleLimit {
        /// Cycles executed since the last reset.
        cycles: u64,
    },
}

impl fmt::Display for RunOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Finished { cycles } => write!(f, "finished after {cycles} cycles"),
            Self::Failed { cycles, hazards } => {
                write!(f, "failed after {cycles} cycles: {}", hazards.describe().join(", "))
            }
            Self::CycleLimit { cycles } => write!(f, "stopped at the {cycles}-cycle limit"),
        }
    }
}

/// Top-level simulator.
#[derive(Debug)]
pub struct Simulator {
    /// The simulated processor.
    pub processor: Processor,
    max_cycles: u64,
}

impl Simulator {
    /// Creates a simulator with no program.
    ///
    /// # Errors
    ///
    /// [`SimError::Clock`] if the configured clock period is unusable.
    pub fn new(config: &Config) -> Result<Self, SimError> {
        Ok(Self {
            processor: Processor::from_config(config)?,
            max_cycles: config.general.max_cycles,
        })
    }

    /// Assembles `path` and loads it into the processor.
    ///
    /// # Errors
    ///
    /// [`SimError::Load`] if assembly or instruction validation fails.
    pub fn load(&mut self, assembler: &impl Assembler, path: &Path) -> Result<(), SimError> {
        let program = load_program(assembler, path)?;
        self.processor.load_program(program);
        Ok(())
    }

    /// Cycle limit applied by the run loops.
    pub const fn max_cycles(&self) -> u64 {
        self.max_cycles
    }

    /// Advances the processor by one clock cycle.
    ///
    /// # Errors
    ///
    /// [`SimError::NoProgram`] before a program is loaded, or a clock error if the
    /// manual provider does not own the clock.
    pub fn tick(&mut self) -> Result<(), SimError> {
        if self.processor.program().is_none() {
            return Err(SimError::NoProgram);
        }
        self.processor.step()
    }

    /// Outcome of the run so far, or `None` while the program is still running.
    pub const fn outcome(&self) -> Option<RunOutcome> {
        let cycles = self.processor.stats().cycles;
        match self.processor.state() {
            ExecutionState::Finished => Some(RunOutcome::Finished { cycles }),
            ExecutionState::Failed(hazards) => Some(RunOutcome::Failed { cycles, hazards }),
            ExecutionState::NoProgram | ExecutionState::Running => None,
        }
    }

    /// Steps the manual clock until the program ends or the cycle limit is reached.
    ///
    /// # Errors
    ///
    /// [`SimError::NoProgram`] before a program is loaded, or a clock error if the
    /// manual provider does not own the clock.
    pub fn run(&mut self) -> Result<RunOutcome, SimError> {
        let mut executed = 0;
        while self.processor.is_running() && executed < self.max_cycles {
            self.tick()?;
            executed += 1;
        }
        self.finish()
    }

    /// Runs in real time from the timed provider, sleeping between half-periods.
    ///
    /// # Errors
    ///
    /// [`SimError::NoProgram`] before a program is loaded, or
    /// [`ClockError::NotTimed`] if the manual provider owns the clock.
    pub fn run_timed(&mut self) -> Result<RunOutcome, SimError> {
        if self.processor.program().is_none() {
            return Err(SimError::NoProgram);
        }
        let interval = self
            .processor
            .clock()
            .timed()
            .map(TimedClock::interval)
            .ok_or(ClockError::NotTimed)?;
        let start = self.processor.stats().cycles;
        self.processor.set_timer_enabled(true, Instant::now())?;
        while self.processor.is_running()
            && self.processor.stats().cycles - start < self.max_cycles
        {
            thread::sleep(interval);
            let _ = self.processor.pump_timed(Instant::now())?;
        }
        self.processor.set_timer_enabled(false, Instant::now())?;
        self.finish()
    }

    fn finish(&self) -> Result<RunOutcome, SimError> {
        if self.processor.program().is_none() {
            return Err(SimError::NoProgram);
        }
        let outcome = self.outcome().unwrap_or(RunOutcome::CycleLimit {
            cycles: self.processor.stats().cycles,
        });
        tracing::debug!(%outcome, "run ended");
        Ok(outcome)
    }
}
