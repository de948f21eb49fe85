//! Pipeline tests.


/// Operand forwarding selection.
pub mod forwarding;

/// Compute/use and load/use detection.
pub mod hazards;
