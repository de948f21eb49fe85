//! Common types shared throughout the simulator.
//!
//! This module provides the building blocks used by every other component:
//! 1. **Constants:** Bubble sentinel, word size, and instruction field layout.
//! 2. **Error Handling:** Construction, program memory, clock, load, and configuration errors.
//! 3. **Registers:** The MIPS register names.

/// Common constants used throughout the simulator.
pub mod constants;

/// Error types.
pub mod error;

/// Register names.
pub mod reg;

pub use constants::{BUBBLE_ADDRESS, WORD_SIZE};
pub use error::{ClockError, ConfigError, InstructionError, LoadError, ProgramError, SimError};
pub use reg::Register;
