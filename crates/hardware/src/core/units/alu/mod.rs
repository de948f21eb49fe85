//! Arithmetic Logic Unit (ALU).
//!
//! This module implements the integer ALU used in the execute stage. The operation
//! itself is a pure function ([`Alu::execute`]); [`ArithmeticLogicUnit`] is the
//! combinational block wired into the datapath, which selects its operands from the
//! ID/EX register or, when forwarding, from a later stage.
//!
//! Operations are organized into submodules by category:
//! - [`arithmetic`]: Add, Subtract
//! - [`logic`]:      And, Or, Nor, Xor
//! - [`shifts`]:     `ShiftLeftLogical`, `ShiftRightLogical`, `ShiftRightArithmetic`

/// Wrapping addition and subtraction.
pub mod arithmetic;

/// Bitwise logical operations.
pub mod logic;

/// Variable shift operations.
pub mod shifts;

use crate::core::datapath::Datapath;
use crate::core::pipeline::hazards::resolve_operand;
use crate::core::pipeline::signals::AluOp;

/// Stateless ALU operation dispatcher.
#[derive(Clone, Copy, Debug)]
pub struct Alu;

impl Alu {
    /// Executes an ALU operation.
    ///
    /// # Arguments
    ///
    /// * `op` - The operation.
    /// * `a`  - Left operand (the value shifted, for shifts).
    /// * `b`  - Right operand (the shift amount, for shifts).
    ///
    /// # Examples
    ///
    /// ```
    /// use pipesim_core::core::pipeline::signals::AluOp;
    /// use pipesim_core::core::units::alu::Alu;
    ///
    /// assert_eq!(Alu::execute(AluOp::Add, 0xFFFF_FFFF, 1), 0);
    /// assert_eq!(Alu::execute(AluOp::Nor, 0, 0), 0xFFFF_FFFF);
    /// assert_eq!(Alu::execute(AluOp::ShiftRightArithmetic, 0x8000_0000, 4), 0xF800_0000);
    /// ```
    pub const fn execute(op: AluOp, a: u32, b: u32) -> u32 {
        match op {
            AluOp::Add | AluOp::Subtract => arithmetic::execute(op, a, b),
            AluOp::And | AluOp::Or | AluOp::Nor | AluOp::Xor => logic::execute(op, a, b),
            AluOp::ShiftLeftLogical | AluOp::ShiftRightLogical | AluOp::ShiftRightArithmetic => {
                shifts::execute(op, a, b)
            }
        }
    }
}

/// The ALU as wired into the datapath.
#[derive(Clone, Copy, Debug)]
pub struct ArithmeticLogicUnit<'a> {
    dp: &'a Datapath,
}

impl<'a> ArithmeticLogicUnit<'a> {
    /// Creates the view.
    pub const fn new(dp: &'a Datapath) -> Self {
        Self { dp }
    }

    /// Left operand: read value 1, or the forwarded value of `rs`.
    pub fn left_operand(&self) -> u32 {
        let dp = self.dp;
        let id_ex = dp.decode().state();
        if !dp.mode().forwards() {
            return id_ex.read_value_1;
        }
        resolve_operand(
            dp.control().forward_a(),
            id_ex.read_value_1,
            dp.execute().state(),
            dp.memory().state(),
        )
    }

    /// Right operand: the sign-extended immediate when `ALUSrc` is set, otherwise read
    /// value 2 or the forwarded value of `rt`.
    pub fn right_operand(&self) -> u32 {
        let dp = self.dp;
        let id_ex = dp.decode().state();
        if id_ex.signals.alu_src {
            id_ex.instruction.sign_extended_immediate()
        } else {
            dp.rt_value()
        }
    }

    /// Result of the operation latched in ID/EX.
    pub fn result(&self) -> u32 {
        Alu::execute(
            self.dp.decode().state().alu_op,
            self.left_operand(),
            self.right_operand(),
        )
    }
}
