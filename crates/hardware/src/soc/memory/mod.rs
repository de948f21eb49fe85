//! Processor Memories.
//!
//! This module implements the two memories and their clocked adapters. It provides:
//! 1. **Program Memory:** The immutable loaded program.
//! 2. **Data Memory:** Sparse word storage.
//! 3. **Synchronizers:** Positive-edge components that connect both to the pipeline.

/// Sparse data memory.
pub mod data;

/// Immutable program storage.
pub mod program;

/// Positive-edge memory adapters.
pub mod sync;

pub use data::DataMemory;
pub use program::ProgramMemory;
pub use sync::{DataMemorySynchronizer, MemoryAccess, ProgramMemorySynchronizer};
