//! ALU bitwise logic operations.

use crate::core::pipeline::signals::AluOp;

/// Executes a bitwise operation.
///
/// # Returns
///
/// The 32-bit result, or `0` for non-logic operations.
pub const fn execute(op: AluOp, a: u32, b: u32) -> u32 {
    match op {
        AluOp::And => a & b,
        AluOp::Or => a | b,
        AluOp::Nor => !(a | b),
        AluOp::Xor => a ^ b,
        _ => 0,
    }
}
