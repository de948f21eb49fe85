//! Instruction Execute (EX) Stage.
//!
//! Latches the ALU result of the ID/EX instruction, its branch target, destination
//! register, and the value a store will write.

use crate::core::datapath::Datapath;
use crate::core::pipeline::hazards::id_ex_destination;
use crate::core::pipeline::latches::ExMemLatch;

/// Computes the next EX/MEM entry.
pub fn execute_stage(dp: &Datapath) -> ExMemLatch {
    let id_ex = dp.decode().state();
    ExMemLatch {
        signals: id_ex.signals,
        instruction_address: id_ex.instruction_address,
        alu_result: dp.alu().result(),
        branch_target: id_ex
            .following_address
            .wrapping_add(id_ex.instruction.sign_extended_immediate() << 2),
        destination: id_ex_destination(id_ex),
        memory_write_value: dp.rt_value(),
    }
}
