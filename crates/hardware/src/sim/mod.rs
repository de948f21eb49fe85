//! Simulation driver and program loading.
//!
//! Provides the assembler interface the core consumes, a loader for machine-code
//! listings, and the run loop that drives a [`crate::core::Processor`] to completion.

/// Assembler interface and machine-code listings.
pub mod loader;

/// Run loop over a processor.
pub mod simulator;

pub use loader::{Assembler, ListingAssembler, load_program};
pub use simulator::{RunOutcome, Simulator};
