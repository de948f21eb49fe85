//! Memory subsystem surrounding the pipeline.

/// Program and data memories and their synchronizers.
pub mod memory;

pub use memory::{DataMemory, ProgramMemory};
