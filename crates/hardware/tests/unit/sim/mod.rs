/// Listing parsing and program assembly.
pub mod loader;

/// Run loops and outcomes.
pub mod simulator;
