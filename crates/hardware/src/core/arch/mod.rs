//! Architectural State.
//!
//! Holds the programmer-visible state of the processor:
//! 1. **Registers:** The general-purpose register file.
//! 2. **Program Counter:** The fetch address.

/// General-purpose register file.
pub mod gpr;

/// Program counter.
pub mod pc;

pub use gpr::RegisterFile;
pub use pc::ProgramCounter;
