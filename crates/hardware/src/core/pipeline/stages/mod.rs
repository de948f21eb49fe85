//! Pipeline stage implementations.
//!
//! The pre-edge rules of every pipeline component. Each function reads only the
//! visible state of the datapath and returns the value to latch:
//! 1. **Fetch:** Next PC and the IF/ID entry.
//! 2. **Decode:** Control signals and register operands into ID/EX.
//! 3. **Execute:** ALU result, branch target, and store value into EX/MEM.
//! 4. **Memory:** The EX/MEM entry and loaded word into MEM/WB.
//! 5. **Writeback:** The register file write on the rising edge.

/// ID: signals, ALU operation, and register reads.
pub mod decode;

/// EX: ALU result, destination, and store value.
pub mod execute;

/// IF: next PC and the fetched instruction.
pub mod fetch;

/// MEM: pass-through of the EX/MEM entry.
pub mod memory;

/// WB: register file write.
pub mod writeback;

pub use decode::decode_stage;
pub use execute::execute_stage;
pub use fetch::{fetch_stage, next_pc};
pub use memory::mem_stage;
pub use writeback::wb_stage;
