//! Instruction pipeline implementation.
//!
//! This module contains the implementation of the five-stage instruction pipeline.
//! It includes the following components:
//! 1. **Control:** Decode, next-PC selection, stall and flush decisions.
//! 2. **Hazards:** Detection of compute/use and load/use hazards, and forwarding.
//! 3. **Latches:** Stage registers between the five stages (IF/ID, ID/EX, EX/MEM, MEM/WB).
//! 4. **Signals:** Control signals and selector types.
//! 5. **Stages:** Pre-edge rules of Fetch, Decode, Execute, Memory, and Writeback.
//! 6. **Traits:** The two-phase clocked component contract.

/// Control unit (decode, PC source, forwarding, stall/flush).
pub mod control;

/// Pipeline hazard detection and forwarding logic.
pub mod hazards;

/// Inter-stage pipeline latches (IF/ID, ID/EX, EX/MEM, MEM/WB).
pub mod latches;

/// Control signals generated during instruction decode.
pub mod signals;

/// Pipeline stage implementations (fetch, decode, execute, memory, writeback).
pub mod stages;

/// Two-phase clocked component trait.
pub mod traits;

pub use control::ControlUnit;
pub use signals::{AluOp, ControlSignals, ForwardSource, HazardMode, HazardTypes, PcSource};
