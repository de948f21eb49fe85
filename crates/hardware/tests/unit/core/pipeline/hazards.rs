//! Data Hazard Detection Tests.
//!
//! Verifies `compute_use` and `load_use` for an instruction in decode against the
//! instructions in execute (ID/EX) and memory (EX/MEM), under each hazard mode.

use pipesim_core::common::Register::{self, T0, T1, T2, Zero};
use pipesim_core::core::pipeline::control::preliminary_signals;
use pipesim_core::core::pipeline::hazards::{compute_use, id_ex_destination, load_use};
use pipesim_core::core::pipeline::latches::{ExMemLatch, IdExLatch};
use pipesim_core::core::pipeline::signals::{HazardMode, HazardTypes};
use pipesim_core::isa::{Function, Instruction, Opcode};

use crate::common::{ExMemBuilder, IdExBuilder};

/// Helper: `addu rd, rs, rt`.
fn addu(rd: Register, rs: Register, rt: Register) -> Instruction {
    Instruction::r_type(Function::Addu, rd, rs, rt).expect("addu")
}

/// Helper: `addiu rt, rs, imm`.
fn addiu(rt: Register, rs: Register) -> Instruction {
    Instruction::i_type(Opcode::Addiu, rt, rs, 1).expect("addiu")
}

/// Helper: `lw rt, 0(rs)`.
fn lw(rt: Register, rs: Register) -> Instruction {
    Instruction::i_type(Opcode::Lw, rt, rs, 0).expect("lw")
}

/// Helper: an ID/EX entry decoded from `inst` without hazards.
fn in_execute(inst: Instruction) -> IdExLatch {
    IdExBuilder::new()
        .address(0)
        .instruction(inst)
        .signals(preliminary_signals(inst))
        .build()
}

fn check(
    mode: HazardMode,
    fetched: Instruction,
    id_ex: &IdExLatch,
    ex_mem: &ExMemLatch,
) -> HazardTypes {
    let signals = preliminary_signals(fetched);
    compute_use(mode, signals, fetched, id_ex, ex_mem) | load_use(mode, signals, fetched, id_ex, ex_mem)
}

// ══════════════════════════════════════════════════════════
// 1. Compute/use
// ══════════════════════════════════════════════════════════

#[test]
fn compute_use_execute_on_rt() {
    let hazards = check(
        HazardMode::Stall,
        addu(T2, T0, T1),
        &in_execute(addiu(T1, Zero)),
        &ExMemLatch::default(),
    );
    assert_eq!(hazards, HazardTypes::COMPUTE_USE_EXECUTE);
}

#[test]
fn compute_use_execute_on_rs_of_immediate() {
    let hazards = check(
        HazardMode::Fail,
        addiu(T1, T0),
        &in_execute(addiu(T0, Zero)),
        &ExMemLatch::default(),
    );
    assert_eq!(hazards, HazardTypes::COMPUTE_USE_EXECUTE);
}

#[test]
fn compute_use_memory_on_rs_of_immediate() {
    let hazards = check(
        HazardMode::Stall,
        addiu(T1, T0),
        &IdExLatch::default(),
        &ExMemBuilder::new().writes(T0, 5).build(),
    );
    assert_eq!(hazards, HazardTypes::COMPUTE_USE_MEMORY);
}

#[test]
fn both_stages_reported_together() {
    let hazards = check(
        HazardMode::Stall,
        addu(T2, T1, T1),
        &in_execute(addiu(T1, Zero)),
        &ExMemBuilder::new().writes(T1, 5).build(),
    );
    assert_eq!(
        hazards,
        HazardTypes::COMPUTE_USE_EXECUTE | HazardTypes::COMPUTE_USE_MEMORY
    );
}

#[test]
fn r_type_rs_is_not_checked() {
    // Only rt is matched for register-format consumers.
    let hazards = check(
        HazardMode::Stall,
        addu(T2, T0, T1),
        &in_execute(addiu(T0, Zero)),
        &ExMemBuilder::new().writes(T0, 5).build(),
    );
    assert!(hazards.is_empty(), "got {hazards}");
}

#[test]
fn writes_to_zero_never_conflict() {
    let producer = in_execute(addiu(Zero, T1));
    assert!(!producer.signals.reg_write, "RegWrite suppressed for $zero");
    let hazards = check(HazardMode::Stall, addu(T2, Zero, Zero), &producer, &ExMemLatch::default());
    assert!(hazards.is_empty());
}

#[test]
fn forwarding_resolves_compute_use() {
    let hazards = check(
        HazardMode::StallAndForward,
        addu(T2, T1, T1),
        &in_execute(addiu(T1, Zero)),
        &ExMemBuilder::new().writes(T1, 5).build(),
    );
    assert!(hazards.is_empty(), "got {hazards}");
}

// ══════════════════════════════════════════════════════════
// 2. Load/use
// ══════════════════════════════════════════════════════════

#[test]
fn load_in_execute_always_stalls() {
    for mode in HazardMode::ALL {
        let hazards = check(
            mode,
            addu(T1, T0, T0),
            &in_execute(lw(T0, Zero)),
            &ExMemLatch::default(),
        );
        assert_eq!(hazards, HazardTypes::LOAD_USE_EXECUTE, "{mode}");
    }
}

#[test]
fn load_in_memory_stalls_only_without_forwarding() {
    let ex_mem = ExMemBuilder::new().loads(T0).build();
    let fetched = addu(T1, T0, T0);

    assert_eq!(
        check(HazardMode::Stall, fetched, &IdExLatch::default(), &ex_mem),
        HazardTypes::LOAD_USE_MEMORY
    );
    assert_eq!(
        check(HazardMode::Fail, fetched, &IdExLatch::default(), &ex_mem),
        HazardTypes::LOAD_USE_MEMORY
    );
    assert!(check(HazardMode::StallAndForward, fetched, &IdExLatch::default(), &ex_mem).is_empty());
}

#[test]
fn loads_are_not_compute_use() {
    let hazards = check(
        HazardMode::Stall,
        addiu(T1, T0),
        &in_execute(lw(T0, Zero)),
        &ExMemLatch::default(),
    );
    assert!(!hazards.compute_use_execute);
    assert!(hazards.load_use_execute);
}

#[test]
fn store_value_register_is_not_checked() {
    let store = Instruction::i_type(Opcode::Sw, T0, Zero, 16).expect("sw");
    let hazards = check(HazardMode::Stall, store, &in_execute(addiu(T0, Zero)), &ExMemLatch::default());
    assert!(hazards.is_empty(), "sw reads rt without RegWrite");
}

#[test]
fn destination_follows_reg_dst() {
    assert_eq!(id_ex_destination(&in_execute(addu(T2, T0, T1))), T2);
    assert_eq!(id_ex_destination(&in_execute(addiu(T1, T0))), T1);
    assert_eq!(id_ex_destination(&in_execute(lw(T0, Zero))), T0);
}
