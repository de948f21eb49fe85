//! Memory Synchronizers.
//!
//! Positive-edge adapters between the pipeline and the two memories:
//! 1. **Program:** Reads the instruction at the PC every cycle. Reading past the end of
//!    the program yields a bubble and reports the address instead of failing.
//! 2. **Data:** Performs the store or load requested by the EX/MEM register. Stores
//!    take effect immediately; loaded words become visible one cycle later.

use crate::clock::Polarity;
use crate::core::pipeline::latches::ExMemLatch;
use crate::core::pipeline::traits::ClockedComponent;
use crate::isa::Instruction;
use crate::soc::memory::data::DataMemory;
use crate::soc::memory::program::ProgramMemory;

/// Fetches instructions from program memory.
#[derive(Clone, Debug, Default)]
pub struct ProgramMemorySynchronizer {
    program: Option<ProgramMemory>,
    instruction: Instruction,
    next: Instruction,
}

impl ProgramMemorySynchronizer {
    /// Creates a synchronizer with no program.
    pub fn new() -> Self {
        Self::default()
    }

    /// The loaded program.
    pub const fn program(&self) -> Option<&ProgramMemory> {
        self.program.as_ref()
    }

    /// Installs a program, returning the previous one.
    pub(crate) fn replace_program(&mut self, program: ProgramMemory) -> Option<ProgramMemory> {
        self.program.replace(program)
    }

    /// Instruction read during the last rising edge.
    pub const fn instruction(&self) -> Instruction {
        self.instruction
    }

    /// Reads the instruction at `pc`.
    ///
    /// # Returns
    ///
    /// The address if it lies outside the program; the pending instruction is then a bubble.
    pub(crate) fn change_state(&mut self, pc: u32) -> Option<u32> {
        let Some(program) = &self.program else {
            self.next = Instruction::BUBBLE;
            return None;
        };
        match program.instruction_at(pc) {
            Ok(instruction) => {
                self.next = instruction;
                None
            }
            Err(err) => {
                tracing::debug!(%err, "fetch outside program");
                self.next = Instruction::BUBBLE;
                Some(pc)
            }
        }
    }
}

impl ClockedComponent for ProgramMemorySynchronizer {
    fn polarity(&self) -> Polarity {
        Polarity::Positive
    }

    fn change_outputs(&mut self) -> bool {
        let changed = self.next != self.instruction;
        self.instruction = self.next;
        changed
    }

    fn reset(&mut self) {
        self.instruction = Instruction::BUBBLE;
        self.next = Instruction::BUBBLE;
    }
}

/// Data memory operation performed on a rising edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MemoryAccess {
    /// A word was stored at the address.
    Stored(u32),
    /// A word was read from the address.
    Loaded(u32),
}

/// Performs loads and stores for the EX/MEM register.
#[derive(Clone, Debug, Default)]
pub struct DataMemorySynchronizer {
    memory: DataMemory,
    read_value: u32,
    next_read_value: u32,
}

impl DataMemorySynchronizer {
    /// Creates a synchronizer over empty memory.
    pub fn new() -> Self {
        Self::default()
    }

    /// The data memory.
    pub const fn memory(&self) -> &DataMemory {
        &self.memory
    }

    pub(crate) fn memory_mut(&mut self) -> &mut DataMemory {
        &mut self.memory
    }

    /// Word returned by the most recent load.
    pub const fn read_value(&self) -> u32 {
        self.read_value
    }

    /// Applies the memory operation requested by `ex_mem`.
    pub(crate) fn change_state(&mut self, ex_mem: &ExMemLatch) -> Option<MemoryAccess> {
        let address = ex_mem.alu_result;
        if ex_mem.signals.mem_write {
            self.memory.store_word(address, ex_mem.memory_write_value);
            Some(MemoryAccess::Stored(address))
        } else if ex_mem.signals.mem_read {
            self.next_read_value = self.memory.load_word(address);
            Some(MemoryAccess::Loaded(address))
        } else {
            None
        }
    }
}

impl ClockedComponent for DataMemorySynchronizer {
    fn polarity(&self) -> Polarity {
        Polarity::Positive
    }

    fn change_outputs(&mut self) -> bool {
        let changed = self.next_read_value != self.read_value;
        self.read_value = self.next_read_value;
        changed
    }

    fn reset(&mut self) {
        self.read_value = 0;
        self.next_read_value = 0;
    }
}
