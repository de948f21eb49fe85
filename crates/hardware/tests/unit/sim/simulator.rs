//! Simulator Tests.

use std::io::Write;

use pipesim_core::Simulator;
use pipesim_core::clock::ProviderKind;
use pipesim_core::common::Register::{T0, T1, T2};
use pipesim_core::common::{ClockError, SimError};
use pipesim_core::config::Config;
use pipesim_core::core::pipeline::signals::{HazardMode, HazardTypes};
use pipesim_core::sim::{ListingAssembler, RunOutcome};
use pretty_assertions::assert_eq;
use tempfile::NamedTempFile;

const ADD_LISTING: &str = "24080005\n24090003\n01095021\n";
const COMPUTE_USE_LISTING: &str = "24080005\n25090001\n";

fn simulator(mode: HazardMode, max_cycles: u64) -> Simulator {
    let mut config = Config::default();
    config.general.hazard_mode = mode;
    config.general.max_cycles = max_cycles;
    Simulator::new(&config).expect("default clock")
}

fn listing(text: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp file");
    file.write_all(text.as_bytes()).expect("write listing");
    file
}

#[test]
fn runs_to_completion() {
    let mut sim = simulator(HazardMode::StallAndForward, 100);
    let file = listing(ADD_LISTING);
    sim.load(&ListingAssembler, file.path()).expect("valid listing");

    assert_eq!(sim.outcome(), None);
    assert_eq!(sim.run().expect("run"), RunOutcome::Finished { cycles: 7 });
    assert_eq!(sim.processor.register(T2), 8);
    assert_eq!(sim.outcome(), Some(RunOutcome::Finished { cycles: 7 }));
}

#[test]
fn fail_mode_reports_hazard() {
    let mut sim = simulator(HazardMode::Fail, 100);
    let file = listing(COMPUTE_USE_LISTING);
    sim.load(&ListingAssembler, file.path()).expect("valid listing");

    let outcome = sim.run().expect("run");
    assert_eq!(
        outcome,
        RunOutcome::Failed {
            cycles: 2,
            hazards: HazardTypes::COMPUTE_USE_EXECUTE,
        }
    );
    assert_eq!(sim.processor.register(T1), 0);
    assert!(outcome.to_string().starts_with("failed after 2 cycles"));
}

#[test]
fn stall_mode_resolves_the_same_program() {
    let mut sim = simulator(HazardMode::Stall, 100);
    let file = listing(COMPUTE_USE_LISTING);
    sim.load(&ListingAssembler, file.path()).expect("valid listing");

    assert!(matches!(sim.run(), Ok(RunOutcome::Finished { .. })));
    assert_eq!((sim.processor.register(T0), sim.processor.register(T1)), (5, 6));
    assert_eq!(sim.processor.stats().stalls_data, 2);
}

#[test]
fn endless_jump_hits_the_cycle_limit() {
    let mut sim = simulator(HazardMode::StallAndForward, 25);
    let file = listing("08000000\n");
    sim.load(&ListingAssembler, file.path()).expect("valid listing");

    let outcome = sim.run().expect("run");
    assert_eq!(outcome, RunOutcome::CycleLimit { cycles: 25 });
    assert!(sim.processor.is_running());

    // A second run is granted a fresh allowance.
    assert_eq!(sim.run().expect("run"), RunOutcome::CycleLimit { cycles: 50 });
}

#[test]
fn running_without_program_is_an_error() {
    let mut sim = simulator(HazardMode::StallAndForward, 10);
    assert!(matches!(sim.run(), Err(SimError::NoProgram)));
    assert!(matches!(sim.tick(), Err(SimError::NoProgram)));
    assert!(matches!(sim.run_timed(), Err(SimError::NoProgram)));
}

#[test]
fn timed_run_needs_timed_provider() {
    let mut sim = simulator(HazardMode::StallAndForward, 10);
    let file = listing(ADD_LISTING);
    sim.load(&ListingAssembler, file.path()).expect("valid listing");
    assert!(matches!(
        sim.run_timed(),
        Err(SimError::Clock(ClockError::NotTimed))
    ));
}

#[test]
fn timed_run_finishes() {
    let mut config = Config::default();
    config.clock.provider = ProviderKind::Timed;
    config.clock.period = 1;
    let mut sim = Simulator::new(&config).expect("valid period");
    let file = listing(ADD_LISTING);
    sim.load(&ListingAssembler, file.path()).expect("valid listing");

    assert!(matches!(sim.run_timed(), Ok(RunOutcome::Finished { .. })));
    assert_eq!(sim.processor.register(T2), 8);
    assert!(matches!(
        sim.tick(),
        Err(SimError::Clock(ClockError::NotProvider { .. }))
    ));
}

#[test]
fn failed_load_keeps_previous_program() {
    let mut sim = simulator(HazardMode::StallAndForward, 100);
    let good = listing(ADD_LISTING);
    let bad = listing("error: undefined label `loop`\n");
    sim.load(&ListingAssembler, good.path()).expect("valid listing");

    assert!(matches!(
        sim.load(&ListingAssembler, bad.path()),
        Err(SimError::Load(_))
    ));
    assert_eq!(sim.processor.program().map(|p| p.len()), Some(3));
}
