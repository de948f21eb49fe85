//! Instruction Set Architecture (ISA) Definitions.
//!
//! Contains the supported MIPS subset: opcodes, R-type function codes, the validated
//! instruction word, and its textual form.
//!
//! # Instructions
//!
//! * R-type: `addu`, `subu`, `and`, `or`, `xor`, `nor`, `sllv`, `srlv`, `srav`.
//! * I-type: `addiu`, `andi`, `ori`, `xori`, `beq`, `lw`, `sw`.
//! * J-type: `j`.

/// Instruction disassembler (`Display` for `Instruction`).
pub mod disasm;

/// R-type function codes.
pub mod funct;

/// Instruction word validation, field extraction, and encoding.
pub mod instruction;

/// Primary opcodes.
pub mod opcodes;

pub use funct::Function;
pub use instruction::{Instruction, InstructionType};
pub use opcodes::Opcode;
