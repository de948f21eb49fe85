//! Data Hazard Detection and Forwarding.
//!
//! This module implements the checks that keep the pipeline consistent when an
//! instruction in decode (the IF/ID register) reads a register that an older
//! instruction has not yet written back. It provides:
//! 1. **Compute/Use Detection:** ALU results still in ID/EX or EX/MEM. Only checked when
//!    forwarding is disabled.
//! 2. **Load/Use Detection:** Load results still in ID/EX (always) or EX/MEM (without
//!    forwarding).
//! 3. **Forwarding Selection:** Which stage supplies an ALU operand.
//!
//! Source operands are matched in a fixed order. The `rt` check applies to instructions
//! that write `rd` (R-type) or that assert both `Branch` and `MemWrite`; the `rs` check
//! applies only to instructions that write `rt` (immediates and loads). Other reads,
//! such as the `rs` operand of an R-type or the `rt` operand of a store, are not
//! checked, and the `rs` check against ID/EX also requires that entry to write `rt`.

use crate::common::reg::Register;
use crate::core::pipeline::latches::{ExMemLatch, IdExLatch, MemWbLatch};
use crate::core::pipeline::signals::{ControlSignals, ForwardSource, HazardMode, HazardTypes};
use crate::isa::Instruction;

/// Register the ID/EX entry will write (`rd` if `RegDst`, otherwise `rt`).
pub const fn id_ex_destination(id_ex: &IdExLatch) -> Register {
    if id_ex.signals.reg_dst {
        id_ex.instruction.rd()
    } else {
        id_ex.instruction.rt()
    }
}

const fn reads_rt(signals: ControlSignals) -> bool {
    (signals.reg_write && signals.reg_dst) || (signals.branch && signals.mem_write)
}

const fn reads_rs(signals: ControlSignals) -> bool {
    signals.reg_write && !signals.reg_dst
}

/// Matches the decoded instruction's sources against an EX/MEM destination.
fn conflicts_with_ex_mem(signals: ControlSignals, fetched: Instruction, ex_mem: &ExMemLatch) -> bool {
    (reads_rt(signals) && ex_mem.destination == fetched.rt())
        || (reads_rs(signals) && ex_mem.destination == fetched.rs())
}

/// Matches the decoded instruction's sources against an ID/EX destination.
fn conflicts_with_id_ex(signals: ControlSignals, fetched: Instruction, id_ex: &IdExLatch) -> bool {
    let destination = id_ex_destination(id_ex);
    (reads_rt(signals) && destination == fetched.rt())
        || (reads_rs(signals) && !id_ex.signals.reg_dst && destination == fetched.rs())
}

/// Detects compute/use hazards.
///
/// # Arguments
///
/// * `mode` - Active hazard policy; forwarding resolves every compute/use hazard.
/// * `signals` - Preliminary control signals of the instruction in decode.
/// * `fetched` - The instruction in decode (IF/ID).
/// * `id_ex` - The instruction in execute.
/// * `ex_mem` - The instruction in memory.
///
/// # Returns
///
/// `ComputeUseMemory` and/or `ComputeUseExecute`, or no hazard.
pub fn compute_use(
    mode: HazardMode,
    signals: ControlSignals,
    fetched: Instruction,
    id_ex: &IdExLatch,
    ex_mem: &ExMemLatch,
) -> HazardTypes {
    let mut hazards = HazardTypes::NONE;
    if mode.forwards() {
        return hazards;
    }
    if ex_mem.signals.reg_write
        && !ex_mem.signals.mem_read
        && conflicts_with_ex_mem(signals, fetched, ex_mem)
    {
        hazards.compute_use_memory = true;
    }
    if id_ex.signals.reg_write
        && !id_ex.signals.mem_read
        && conflicts_with_id_ex(signals, fetched, id_ex)
    {
        hazards.compute_use_execute = true;
    }
    hazards
}

/// Detects load/use hazards.
///
/// A load in ID/EX always stalls: its word is read on the next rising edge, too late
/// for the ALU even with forwarding. A load in EX/MEM stalls only without forwarding.
///
/// # Arguments
///
/// Same as [`compute_use`].
///
/// # Returns
///
/// `LoadUseMemory` and/or `LoadUseExecute`, or no hazard.
pub fn load_use(
    mode: HazardMode,
    signals: ControlSignals,
    fetched: Instruction,
    id_ex: &IdExLatch,
    ex_mem: &ExMemLatch,
) -> HazardTypes {
    let mut hazards = HazardTypes::NONE;
    if !mode.forwards() && ex_mem.signals.mem_read && conflicts_with_ex_mem(signals, fetched, ex_mem)
    {
        hazards.load_use_memory = true;
    }
    if id_ex.signals.mem_read && conflicts_with_id_ex(signals, fetched, id_ex) {
        hazards.load_use_execute = true;
    }
    hazards
}

/// Selects the stage that supplies the value of `source` to the ALU.
///
/// EX/MEM takes priority over MEM/WB; without a match the register file value read
/// during decode is used.
pub fn forward_source(source: Register, ex_mem: &ExMemLatch, mem_wb: &MemWbLatch) -> ForwardSource {
    if ex_mem.signals.reg_write && ex_mem.destination == source {
        ForwardSource::Execute
    } else if mem_wb.signals.reg_write && mem_wb.destination == source {
        ForwardSource::Memory
    } else {
        ForwardSource::Decode
    }
}

/// Resolves an operand through `source`.
///
/// # Arguments
///
/// * `source` - Forwarding decision from [`forward_source`].
/// * `decoded` - Value read from the register file during decode.
/// * `ex_mem` - Supplies its ALU result for [`ForwardSource::Execute`].
/// * `mem_wb` - Supplies its write-back value for [`ForwardSource::Memory`].
pub const fn resolve_operand(
    source: ForwardSource,
    decoded: u32,
    ex_mem: &ExMemLatch,
    mem_wb: &MemWbLatch,
) -> u32 {
    match source {
        ForwardSource::Decode => decoded,
        ForwardSource::Execute => ex_mem.alu_result,
        ForwardSource::Memory => mem_wb.write_back_value(),
    }
}
