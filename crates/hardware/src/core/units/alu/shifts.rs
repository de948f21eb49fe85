//! ALU shift operations.
//!
//! Implements the variable shifts `sllv`, `srlv`, and `srav`. The shift amount is the
//! low five bits of the right operand; the left operand is the value shifted.

use crate::core::pipeline::signals::AluOp;

/// Bit mask for the shift amount (0-31).
const SHAMT_MASK: u32 = 0x1f;

/// Executes a shift operation.
///
/// # Arguments
///
/// * `op` - The ALU operation to perform (must be a shift variant).
/// * `a`  - The value to be shifted.
/// * `b`  - The shift amount (upper bits ignored).
///
/// # Returns
///
/// The shifted value. A right arithmetic shift of a negative value fills with ones.
/// Returns `0` for non-shift operations.
pub const fn execute(op: AluOp, a: u32, b: u32) -> u32 {
    let amount = b & SHAMT_MASK;
    match op {
        AluOp::ShiftLeftLogical => a << amount,
        AluOp::ShiftRightLogical => a >> amount,
        AluOp::ShiftRightArithmetic => ((a as i32) >> amount) as u32,
        _ => 0,
    }
}
