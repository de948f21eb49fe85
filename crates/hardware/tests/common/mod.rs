//! Shared test infrastructure.

/// Program and stage-register builders.
pub mod builder;

/// Processor harness.
pub mod harness;

pub use builder::{ExMemBuilder, IdExBuilder, MemWbBuilder, ProgramBuilder};
pub use harness::TestContext;
