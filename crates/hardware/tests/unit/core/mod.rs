//! Core tests.

/// Hazard detection, forwarding, and the control unit.
pub mod pipeline;

/// Processor lifecycle and whole-program runs.
pub mod processor;

/// Execution units.
pub mod units;
