//! Simulation statistics collection and reporting.
//!
//! This module tracks the behaviour of the pipeline over a run. It provides:
//! 1. **Cycle and CPI:** Total cycles, issued and retired instructions, and derived metrics.
//! 2. **Instruction mix:** Issued instructions by [`InstructionType`].
//! 3. **Hazards:** Data-hazard stall cycles, fetch flushes, and jumps taken.
//! 4. **State traffic:** Register writes and data memory loads and stores.

use std::time::Instant;

use crate::core::datapath::{ControlPathReport, DataPathReport};
use crate::isa::InstructionType;
use crate::soc::memory::MemoryAccess;

/// Simulation statistics structure tracking pipeline metrics.
///
/// Counters are updated by the processor on every edge while it is running and
/// cleared when it resets.
#[derive(Clone, Debug)]
pub struct SimStats {
    start_time: Instant,
    /// Falling edges processed while running.
    pub cycles: u64,
    /// Instructions that entered the execute stage.
    pub instructions_issued: u64,
    /// Instructions that left the pipeline through MEM/WB.
    pub instructions_retired: u64,

    /// Issued register-format instructions.
    pub inst_register: u64,
    /// Issued immediate-format arithmetic and logic instructions.
    pub inst_immediate: u64,
    /// Issued loads and stores.
    pub inst_memory: u64,
    /// Issued branches.
    pub inst_branch: u64,
    /// Issued jumps.
    pub inst_jump: u64,

    /// Cycles the PC and fetch register were held by a data hazard.
    pub stalls_data: u64,
    /// Fetch-register flushes caused by taken branches.
    pub flushes: u64,
    /// Cycles the PC was loaded from a jump target.
    pub jumps: u64,

    /// Register-file writes.
    pub register_writes: u64,
    /// Data memory loads.
    pub memory_reads: u64,
    /// Data memory stores.
    pub memory_writes: u64,
}

impl Default for SimStats {
    fn default() -> Self {
        Self {
            start_time: Instant::now(),
            cycles: 0,
            instructions_issued: 0,
            instructions_retired: 0,
            inst_register: 0,
            inst_immediate: 0,
            inst_memory: 0,
            inst_branch: 0,
            inst_jump: 0,
            stalls_data: 0,
            flushes: 0,
            jumps: 0,
            register_writes: 0,
            memory_reads: 0,
            memory_writes: 0,
        }
    }
}

impl SimStats {
    pub(crate) fn record_control(&mut self, report: &ControlPathReport) {
        self.cycles += 1;
        self.stalls_data += u64::from(report.stalled);
        self.flushes += u64::from(report.flushed);
        self.jumps += u64::from(report.jumped);
        if let Some(kind) = report.issued {
            self.instructions_issued += 1;
            match kind {
                InstructionType::Register => self.inst_register += 1,
                InstructionType::Immediate => self.inst_immediate += 1,
                InstructionType::Memory => self.inst_memory += 1,
                InstructionType::Branch => self.inst_branch += 1,
                InstructionType::Jump => self.inst_jump += 1,
            }
        }
    }

    pub(crate) fn record_data(&mut self, report: &DataPathReport) {
        self.instructions_retired += u64::from(report.retired);
        self.register_writes += u64::from(report.written.is_some());
        match report.access {
            Some(MemoryAccess::Loaded(_)) => self.memory_reads += 1,
            Some(MemoryAccess::Stored(_)) => self.memory_writes += 1,
            None => {}
        }
    }

    /// Cycles per retired instruction, or `0.0` before anything retires.
    pub fn cpi(&self) -> f64 {
        if self.instructions_retired == 0 {
            0.0
        } else {
            self.cycles as f64 / self.instructions_retired as f64
        }
    }

    /// Prints the selected report sections to stdout.
    ///
    /// Sections are `summary`, `mix`, and `hazards`; an empty slice prints all of them.
    pub fn print_sections(&self, sections: &[String]) {
        let want = |s: &str| sections.is_empty() || sections.iter().any(|x| x == s);
        let seconds = self.start_time.elapsed().as_secs_f64();
        let cyc = self.cycles.max(1);
        let issued = self.instructions_issued.max(1);

        if want("summary") {
            println!("\n==========================================================");
            println!("MIPS PIPELINE SIMULATION STATISTICS");
            println!("==========================================================");
            println!("host_seconds             {seconds:.4} s");
            println!("sim_cycles               {}", self.cycles);
            println!("sim_insts_issued         {}", self.instructions_issued);
            println!("sim_insts_retired        {}", self.instructions_retired);
            println!("sim_cpi                  {:.4}", self.cpi());
            println!("----------------------------------------------------------");
        }
        if want("mix") {
            println!("INSTRUCTION MIX");
            for (name, count) in [
                ("register", self.inst_register),
                ("immediate", self.inst_immediate),
                ("memory", self.inst_memory),
                ("branch", self.inst_branch),
                ("jump", self.inst_jump),
            ] {
                println!(
                    "  op.{name:<19} {count} ({:.2}%)",
                    (count as f64 / issued as f64) * 100.0
                );
            }
            println!("----------------------------------------------------------");
        }
        if want("hazards") {
            println!("HAZARDS");
            println!(
                "  stalls.data            {} ({:.2}% of cycles)",
                self.stalls_data,
                (self.stalls_data as f64 / cyc as f64) * 100.0
            );
            println!("  flushes.branch         {}", self.flushes);
            println!("  jumps                  {}", self.jumps);
            println!("  reg.writes             {}", self.register_writes);
            println!("  mem.loads              {}", self.memory_reads);
            println!("  mem.stores             {}", self.memory_writes);
            println!("==========================================================");
        }
    }

    /// Prints the full statistics report.
    pub fn print(&self) {
        self.print_sections(&[]);
    }
}
