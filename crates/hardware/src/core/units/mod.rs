//! Execution units.
//!
//! Combinational functional blocks used by the execute stage.

/// Arithmetic Logic Unit for integer operations.
pub mod alu;
