//! MIPS General-Purpose Register File.
//!
//! This module implements the register file. It performs the following:
//! 1. **Storage:** Maintains the 31 writable registers (`$at`-`$ra`).
//! 2. **Invariant Enforcement:** `$zero` is never stored; it reads as 0 and ignores writes.
//! 3. **Write-Back:** Writes the MEM/WB result on the rising edge, at most once per cycle.

use crate::common::constants::REGISTER_COUNT;
use crate::common::reg::Register;
use crate::core::pipeline::latches::MemWbLatch;

/// `$zero` is not stored.
const STORED: usize = REGISTER_COUNT - 1;

/// General-purpose register file.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegisterFile {
    regs: [u32; STORED],
}

impl RegisterFile {
    /// Creates a register file with every register zero.
    pub const fn new() -> Self {
        Self { regs: [0; STORED] }
    }

    /// Reads a register. `$zero` always returns 0.
    pub const fn read(&self, reg: Register) -> u32 {
        match reg.index().checked_sub(1) {
            Some(slot) => self.regs[slot],
            None => 0,
        }
    }

    /// Writes a register. Writes to `$zero` are ignored.
    pub(crate) const fn write(&mut self, reg: Register, value: u32) {
        if let Some(slot) = reg.index().checked_sub(1) {
            self.regs[slot] = value;
        }
    }

    /// Performs the write-back of the MEM/WB register.
    ///
    /// # Returns
    ///
    /// The register written, if the entry asserts `RegWrite`.
    pub(crate) fn write_back(&mut self, mem_wb: &MemWbLatch) -> Option<Register> {
        if !mem_wb.signals.reg_write {
            return None;
        }
        let value = mem_wb.write_back_value();
        self.write(mem_wb.destination, value);
        tracing::trace!(reg = %mem_wb.destination, value = format_args!("{value:#010x}"), "register written");
        Some(mem_wb.destination)
    }

    /// Clears every register.
    pub fn reset(&mut self) {
        self.regs = [0; STORED];
    }

    /// Iterates over all 32 registers with their values, `$zero` included.
    pub fn iter(&self) -> impl Iterator<Item = (Register, u32)> + '_ {
        Register::ALL.into_iter().map(|reg| (reg, self.read(reg)))
    }

    /// Prints the register file to stdout, four registers per line.
    pub fn dump(&self) {
        for row in Register::ALL.chunks(4) {
            let line: Vec<String> = row
                .iter()
                .map(|&reg| format!("{:>5}={:#010x}", reg.to_string(), self.read(reg)))
                .collect();
            println!("{}", line.join("  "));
        }
    }
}
