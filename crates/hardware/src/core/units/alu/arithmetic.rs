//! ALU arithmetic operations.
//!
//! `addu`/`subu` semantics: 32-bit two's-complement arithmetic that wraps on
//! overflow instead of trapping.

use crate::core::pipeline::signals::AluOp;

/// Executes an arithmetic operation.
///
/// # Returns
///
/// The wrapped 32-bit result, or `0` for non-arithmetic operations.
pub const fn execute(op: AluOp, a: u32, b: u32) -> u32 {
    match op {
        AluOp::Add => a.wrapping_add(b),
        AluOp::Subtract => a.wrapping_sub(b),
        _ => 0,
    }
}
