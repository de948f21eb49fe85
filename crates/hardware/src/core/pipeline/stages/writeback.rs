//! Writeback (WB) Stage.
//!
//! Writes the MEM/WB result into the register file on the rising edge. This is the
//! only writer of the register file.

use crate::common::reg::Register;
use crate::core::datapath::Datapath;

/// Performs the write-back of the MEM/WB register.
///
/// # Returns
///
/// The register written, if any.
pub fn wb_stage(dp: &mut Datapath) -> Option<Register> {
    dp.registers.write_back(dp.memory.state())
}
