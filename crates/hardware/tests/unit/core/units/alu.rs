//! ALU Operation Tests.
//!
//! Deterministic vectors for every ALU operation: wrapping add and subtract, the
//! four bitwise operations, and the variable shifts with their five-bit amount.

use pipesim_core::core::pipeline::signals::AluOp;
use pipesim_core::core::units::alu::Alu;
use rstest::rstest;

// ─── Arithmetic ──────────────────────────────────────────────────────────────

#[rstest]
#[case(AluOp::Add, 5, 3, 8)]
#[case(AluOp::Add, 0xFFFF_FFFF, 1, 0)]
#[case(AluOp::Add, 0x7FFF_FFFF, 1, 0x8000_0000)]
#[case(AluOp::Subtract, 5, 3, 2)]
#[case(AluOp::Subtract, 0, 1, 0xFFFF_FFFF)]
#[case(AluOp::Subtract, 0x8000_0000, 1, 0x7FFF_FFFF)]
fn arithmetic_wraps(#[case] op: AluOp, #[case] a: u32, #[case] b: u32, #[case] expected: u32) {
    assert_eq!(Alu::execute(op, a, b), expected);
}

// ─── Logic ───────────────────────────────────────────────────────────────────

#[rstest]
#[case(AluOp::And, 0xF0F0_F0F0, 0xFF00_FF00, 0xF000_F000)]
#[case(AluOp::Or, 0xF0F0_F0F0, 0x0F00_0000, 0xFFF0_F0F0)]
#[case(AluOp::Xor, 0xFFFF_0000, 0xF0F0_F0F0, 0x0F0F_F0F0)]
#[case(AluOp::Nor, 0, 0, 0xFFFF_FFFF)]
#[case(AluOp::Nor, 0xFFFF_0000, 0x0000_00FF, 0x0000_FF00)]
fn logic(#[case] op: AluOp, #[case] a: u32, #[case] b: u32, #[case] expected: u32) {
    assert_eq!(Alu::execute(op, a, b), expected);
}

// ─── Shifts ──────────────────────────────────────────────────────────────────

#[rstest]
#[case(AluOp::ShiftLeftLogical, 1, 4, 16)]
#[case(AluOp::ShiftLeftLogical, 0xDEAD_BEEF, 0, 0xDEAD_BEEF)]
#[case(AluOp::ShiftLeftLogical, 1, 31, 0x8000_0000)]
#[case(AluOp::ShiftLeftLogical, 1, 32, 1)]
#[case(AluOp::ShiftLeftLogical, 1, 0xFFFF_FFE1, 2)]
#[case(AluOp::ShiftRightLogical, 0x8000_0000, 31, 1)]
#[case(AluOp::ShiftRightLogical, 0xF000_0000, 4, 0x0F00_0000)]
#[case(AluOp::ShiftRightArithmetic, 0xF000_0000, 4, 0xFF00_0000)]
#[case(AluOp::ShiftRightArithmetic, 0x7000_0000, 4, 0x0700_0000)]
#[case(AluOp::ShiftRightArithmetic, 0x8000_0000, 31, 0xFFFF_FFFF)]
#[case(AluOp::ShiftRightArithmetic, 0x8000_0000, 0, 0x8000_0000)]
#[case(AluOp::ShiftRightArithmetic, 0xF000_0000, 0, 0xF000_0000)]
#[case(AluOp::ShiftRightArithmetic, 0xF000_0000, 32, 0xF000_0000)]
fn shifts_use_low_five_bits(
    #[case] op: AluOp,
    #[case] a: u32,
    #[case] b: u32,
    #[case] expected: u32,
) {
    assert_eq!(Alu::execute(op, a, b), expected, "{op:?} {a:#x} by {b}");
}
