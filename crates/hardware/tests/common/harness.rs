//! Processor harness.

use pipesim_core::clock::SystemClock;
use pipesim_core::common::Register;
use pipesim_core::config::Config;
use pipesim_core::core::pipeline::signals::HazardMode;
use pipesim_core::core::{ExecutionState, Processor, ProcessorEvent};

use super::builder::ProgramBuilder;

/// Upper bound on cycles for [`TestContext::run_to_end`].
const CYCLE_LIMIT: usize = 1_000;

/// Owns a manually clocked processor.
pub struct TestContext {
    pub cpu: Processor,
}

impl TestContext {
    pub fn new(mode: HazardMode) -> Self {
        let _ = tracing_subscriber::fmt()
            .with_test_writer()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .try_init();

        let mut config = Config::default();
        config.general.hazard_mode = mode;
        Self {
            cpu: Processor::new(SystemClock::manual(), &config),
        }
    }

    /// Pre-loads a data memory word.
    pub fn with_word(mut self, address: u32, value: u32) -> Self {
        self.cpu.poke_word(address, value);
        self
    }

    /// Loads a program, which starts execution.
    pub fn load(mut self, program: ProgramBuilder) -> Self {
        self.cpu.load_program(program.build());
        self
    }

    pub fn step(&mut self) {
        self.cpu.step().expect("manual clock owns the processor");
    }

    pub fn steps(&mut self, count: usize) {
        for _ in 0..count {
            self.step();
        }
    }

    /// Steps until the processor stops running.
    pub fn run_to_end(&mut self) {
        let _ = self.steps_to_end();
    }

    /// Steps until the processor stops running.
    ///
    /// # Returns
    ///
    /// The number of full steps taken.
    pub fn steps_to_end(&mut self) -> usize {
        let mut steps = 0;
        while self.cpu.is_running() {
            assert!(steps < CYCLE_LIMIT, "program did not terminate");
            self.step();
            steps += 1;
        }
        steps
    }

    pub fn reg(&self, reg: Register) -> u32 {
        self.cpu.register(reg)
    }

    pub fn state(&self) -> ExecutionState {
        self.cpu.state()
    }

    pub fn events(&mut self) -> Vec<ProcessorEvent> {
        self.cpu.drain_events()
    }
}
