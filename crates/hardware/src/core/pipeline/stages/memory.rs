//! Memory Access (MEM) Stage.
//!
//! The access itself happens on the rising edge in the data synchronizer; this stage
//! passes the EX/MEM entry through together with the word the synchronizer loaded.

use crate::core::datapath::Datapath;
use crate::core::pipeline::latches::MemWbLatch;

/// Computes the next MEM/WB entry.
pub fn mem_stage(dp: &Datapath) -> MemWbLatch {
    let ex_mem = dp.execute().state();
    MemWbLatch {
        signals: ex_mem.signals,
        instruction_address: ex_mem.instruction_address,
        alu_result: ex_mem.alu_result,
        destination: ex_mem.destination,
        read_value: dp.data_sync().read_value(),
    }
}
