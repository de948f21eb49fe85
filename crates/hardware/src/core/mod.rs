//! Core processor implementation.
//!
//! This module contains the simulated processor: the pipeline, execution units,
//! architectural state, the datapath that owns the clocked components, and the
//! processor that coordinates them with the clock.

/// Architectural state (register file, program counter).
pub mod arch;

/// Clocked components and the two clock phases.
pub mod datapath;

/// Instruction pipeline implementation (stages, latches, hazards, signals, control).
pub mod pipeline;

/// Top-level processor and its lifecycle.
pub mod processor;

/// Execution units (ALU).
pub mod units;

pub use self::datapath::{Component, Datapath};
pub use self::processor::{ExecutionState, Processor, ProcessorEvent};
