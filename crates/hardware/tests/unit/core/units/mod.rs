//! Execution unit tests.

/// ALU operation table.
pub mod alu;
