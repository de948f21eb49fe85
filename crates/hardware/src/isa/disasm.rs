//! Instruction Disassembler.
//!
//! Renders an [`Instruction`] as assembly text for tracing, the CLI listing view,
//! and test diagnostics.
//!
//! # Usage
//!
//! ```
//! use pipesim_core::common::Register;
//! use pipesim_core::isa::{Function, Instruction};
//!
//! let inst = Instruction::r_type(Function::Addu, Register::T2, Register::T0, Register::T1)?;
//! assert_eq!(inst.to_string(), "addu $t2, $t0, $t1");
//! # Ok::<(), pipesim_core::common::InstructionError>(())
//! ```

use std::fmt;

use crate::isa::funct::Function;
use crate::isa::instruction::Instruction;
use crate::isa::opcodes::Opcode;

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_bubble() {
            return f.write_str("bubble");
        }
        match self.opcode() {
            Opcode::RType => {
                let function = self.function().unwrap_or(Function::Bubble);
                // Variable shifts list rt before rs.
                if function.is_shift() {
                    write!(f, "{function} {}, {}, {}", self.rd(), self.rt(), self.rs())
                } else {
                    write!(f, "{function} {}, {}, {}", self.rd(), self.rs(), self.rt())
                }
            }
            Opcode::J => write!(f, "j 0x{:07X}", self.target()),
            Opcode::Beq => write!(f, "beq {}, {}, {}", self.rs(), self.rt(), self.immediate()),
            Opcode::Lw | Opcode::Sw => write!(
                f,
                "{} {}, {}({})",
                self.opcode(),
                self.rt(),
                self.immediate(),
                self.rs()
            ),
            Opcode::Addiu | Opcode::Andi | Opcode::Ori | Opcode::Xori => write!(
                f,
                "{} {}, {}, {}",
                self.opcode(),
                self.rt(),
                self.rs(),
                self.immediate()
            ),
        }
    }
}
