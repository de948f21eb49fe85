//! Instruction set tests.

/// Disassembler output.
pub mod disasm;


/// Encode/decode properties.
pub mod properties;
