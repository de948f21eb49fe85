//! Instruction Decode (ID) Stage.
//!
//! Latches the control unit's decode of the IF/ID instruction together with both
//! register file operands. A stall shows up here as `NONE` signals, which marks the
//! new ID/EX entry as a bubble unless the instruction is a `j` (whose signals are
//! always `NONE`).

use crate::common::constants::BUBBLE_ADDRESS;
use crate::core::datapath::Datapath;
use crate::core::pipeline::latches::IdExLatch;
use crate::isa::Opcode;

/// Computes the next ID/EX entry.
pub fn decode_stage(dp: &Datapath) -> IdExLatch {
    let control = dp.control();
    let if_id = dp.fetch().state();
    let instruction = if_id.instruction;
    let signals = control.signals();

    let instruction_address = if signals.is_none() && instruction.opcode() != Opcode::J {
        BUBBLE_ADDRESS
    } else {
        if_id.instruction_address
    };

    IdExLatch {
        signals,
        instruction_address,
        instruction,
        following_address: if_id.following_address,
        alu_op: control.alu_op(),
        read_value_1: dp.registers().read(instruction.rs()),
        read_value_2: dp.registers().read(instruction.rt()),
    }
}
