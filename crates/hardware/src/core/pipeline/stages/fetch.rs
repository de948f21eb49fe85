//! Instruction Fetch (IF) Stage.
//!
//! Computes, on the falling pre-edge, the next program counter and the next contents
//! of the IF/ID register. The instruction itself was read from program memory by the
//! program synchronizer on the preceding rising edge.

use crate::common::constants::{BUBBLE_ADDRESS, WORD_SIZE};
use crate::core::datapath::Datapath;
use crate::core::pipeline::latches::IfIdLatch;
use crate::core::pipeline::signals::PcSource;
use crate::isa::Instruction;

/// Computes the next program counter.
///
/// # Returns
///
/// The pending value unchanged while a data hazard stalls the PC; otherwise the branch
/// target, the jump target, or the sequential address.
pub fn next_pc(dp: &Datapath) -> u32 {
    let control = dp.control();
    if control.stall_pc() {
        return dp.pc().pending();
    }
    match control.pc_source() {
        PcSource::Branch => {
            let id_ex = dp.decode().state();
            id_ex
                .following_address
                .wrapping_add(id_ex.instruction.sign_extended_immediate() << 2)
        }
        PcSource::Jump => dp.fetch().state().instruction.target(),
        PcSource::Next => dp.pc().address().wrapping_add(WORD_SIZE),
    }
}

/// Computes the next IF/ID entry.
///
/// A taken branch flushes the register. A stall holds it, even when the program
/// synchronizer has already run past the end of the program. Otherwise the fetched
/// instruction is latched, or a bubble if nothing was fetched.
pub fn fetch_stage(dp: &Datapath) -> IfIdLatch {
    let control = dp.control();
    let fetched = dp.program_sync().instruction();
    let pending = dp.fetch().pending();

    if control.flush_fetch() {
        return IfIdLatch {
            instruction_address: BUBBLE_ADDRESS,
            instruction: Instruction::BUBBLE,
            following_address: pending.following_address,
        };
    }
    if control.stall_fetch() {
        return pending.clone();
    }
    if fetched.is_bubble() {
        return IfIdLatch {
            instruction_address: BUBBLE_ADDRESS,
            instruction: Instruction::BUBBLE,
            following_address: pending.following_address,
        };
    }
    let pc = dp.pc().address();
    IfIdLatch {
        instruction_address: pc,
        instruction: fetched,
        following_address: pc.wrapping_add(WORD_SIZE),
    }
}
