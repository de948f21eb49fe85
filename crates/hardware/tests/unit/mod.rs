//! # Unit Components
//!
//! This module serves as the central hub for the tests of each simulator component,
//! from instruction words up to whole programs running through the processor.


/// JSON configuration parsing, defaults, and validation.
pub mod config;

/// Datapath, control unit, hazards, ALU, and processor lifecycle.
pub mod core;

/// Instruction validation, encoding, and disassembly.
pub mod isa;

/// Listing loader and the simulator run loop.
pub mod sim;
