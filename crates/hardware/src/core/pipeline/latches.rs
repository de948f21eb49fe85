//! Pipeline stage registers.
//!
//! This module defines the four latches between the five pipeline stages:
//! Fetch → IF/ID → Decode → ID/EX → Execute → EX/MEM → Memory → MEM/WB → Writeback.
//!
//! 1. **Two-Phase State:** Every register holds a visible state and a pending state.
//!    The pending state is computed on the falling pre-edge and committed on the
//!    falling post-edge, so every stage reads the values of the previous cycle.
//! 2. **Bubbles:** A register whose instruction address is odd holds no instruction.
//!
//! The register naming follows the instruction being *processed* by the stage that
//! reads it: the fetch register (IF/ID) feeds decode, the decode register (ID/EX)
//! feeds the ALU, and so on.

use crate::clock::Polarity;
use crate::common::constants::BUBBLE_ADDRESS;
use crate::common::reg::Register;
use crate::core::pipeline::signals::{AluOp, ControlSignals};
use crate::core::pipeline::traits::ClockedComponent;
use crate::isa::Instruction;

/// Fields every stage register carries.
pub trait StageState: Clone + PartialEq + Default {
    /// Control signals latched with the instruction.
    fn signals(&self) -> ControlSignals;

    /// Address of the instruction, or [`BUBBLE_ADDRESS`].
    fn instruction_address(&self) -> u32;
}

/// Entry in the IF/ID register (fetch to decode).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IfIdLatch {
    /// Address of the fetched instruction.
    pub instruction_address: u32,
    /// The fetched instruction.
    pub instruction: Instruction,
    /// Address of the sequentially following instruction (the delay slot).
    pub following_address: u32,
}

impl Default for IfIdLatch {
    fn default() -> Self {
        Self {
            instruction_address: BUBBLE_ADDRESS,
            instruction: Instruction::BUBBLE,
            following_address: 0,
        }
    }
}

impl StageState for IfIdLatch {
    fn signals(&self) -> ControlSignals {
        ControlSignals::NONE
    }

    fn instruction_address(&self) -> u32 {
        self.instruction_address
    }
}

/// Entry in the ID/EX register (decode to execute).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IdExLatch {
    /// Control signals produced by the control unit.
    pub signals: ControlSignals,
    /// Address of the decoded instruction.
    pub instruction_address: u32,
    /// The decoded instruction.
    pub instruction: Instruction,
    /// Address following the instruction; base of the branch target.
    pub following_address: u32,
    /// Operation the ALU applies while this entry is in execute.
    pub alu_op: AluOp,
    /// Register file value of `rs`.
    pub read_value_1: u32,
    /// Register file value of `rt`.
    pub read_value_2: u32,
}

impl Default for IdExLatch {
    fn default() -> Self {
        Self {
            signals: ControlSignals::NONE,
            instruction_address: BUBBLE_ADDRESS,
            instruction: Instruction::BUBBLE,
            following_address: 0,
            alu_op: AluOp::default(),
            read_value_1: 0,
            read_value_2: 0,
        }
    }
}

impl StageState for IdExLatch {
    fn signals(&self) -> ControlSignals {
        self.signals
    }

    fn instruction_address(&self) -> u32 {
        self.instruction_address
    }
}

/// Entry in the EX/MEM register (execute to memory).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExMemLatch {
    /// Control signals carried from decode.
    pub signals: ControlSignals,
    /// Address of the instruction.
    pub instruction_address: u32,
    /// ALU result; the effective address for loads and stores.
    pub alu_result: u32,
    /// Branch destination (`following_address + (immediate << 2)`).
    pub branch_target: u32,
    /// Register written back (`rd` if `RegDst`, otherwise `rt`).
    pub destination: Register,
    /// Value a store writes to data memory.
    pub memory_write_value: u32,
}

impl Default for ExMemLatch {
    fn default() -> Self {
        Self {
            signals: ControlSignals::NONE,
            instruction_address: BUBBLE_ADDRESS,
            alu_result: 0,
            branch_target: 0,
            destination: Register::Zero,
            memory_write_value: 0,
        }
    }
}

impl StageState for ExMemLatch {
    fn signals(&self) -> ControlSignals {
        self.signals
    }

    fn instruction_address(&self) -> u32 {
        self.instruction_address
    }
}

/// Entry in the MEM/WB register (memory to writeback).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MemWbLatch {
    /// Control signals carried from execute.
    pub signals: ControlSignals,
    /// Address of the instruction.
    pub instruction_address: u32,
    /// ALU result carried from execute.
    pub alu_result: u32,
    /// Register written back.
    pub destination: Register,
    /// Word returned by a load.
    pub read_value: u32,
}

impl Default for MemWbLatch {
    fn default() -> Self {
        Self {
            signals: ControlSignals::NONE,
            instruction_address: BUBBLE_ADDRESS,
            alu_result: 0,
            destination: Register::Zero,
            read_value: 0,
        }
    }
}

impl MemWbLatch {
    /// Value written back: the loaded word for loads, the ALU result otherwise.
    pub const fn write_back_value(&self) -> u32 {
        if self.signals.mem_read {
            self.read_value
        } else {
            self.alu_result
        }
    }
}

impl StageState for MemWbLatch {
    fn signals(&self) -> ControlSignals {
        self.signals
    }

    fn instruction_address(&self) -> u32 {
        self.instruction_address
    }
}

/// A negative-edge pipeline register.
#[derive(Clone, Debug, Default)]
pub struct StageRegister<S> {
    current: S,
    next: S,
}

impl<S: StageState> StageRegister<S> {
    /// Creates a register holding a bubble.
    pub fn new() -> Self {
        Self::default()
    }

    /// Visible contents.
    pub const fn state(&self) -> &S {
        &self.current
    }

    /// Contents that will become visible on the next commit.
    pub const fn pending(&self) -> &S {
        &self.next
    }

    /// Latched control signals.
    pub fn signals(&self) -> ControlSignals {
        self.current.signals()
    }

    /// Latched instruction address.
    pub fn instruction_address(&self) -> u32 {
        self.current.instruction_address()
    }

    /// Returns `true` if the register holds no instruction.
    pub fn has_bubble(&self) -> bool {
        self.instruction_address() & 3 != 0
    }

    /// Stores the pending state computed on the pre-edge.
    pub(crate) fn latch(&mut self, next: S) {
        self.next = next;
    }
}

impl<S: StageState> ClockedComponent for StageRegister<S> {
    fn polarity(&self) -> Polarity {
        Polarity::Negative
    }

    fn change_outputs(&mut self) -> bool {
        let moved = self.next.instruction_address() != self.current.instruction_address();
        self.current.clone_from(&self.next);
        moved
    }

    fn reset(&mut self) {
        self.current = S::default();
        self.next = S::default();
    }
}

/// The IF/ID register.
pub type FetchStageRegister = StageRegister<IfIdLatch>;

/// The ID/EX register.
pub type DecodeStageRegister = StageRegister<IdExLatch>;

/// The EX/MEM register.
pub type ExecuteStageRegister = StageRegister<ExMemLatch>;

/// The MEM/WB register.
pub type MemoryStageRegister = StageRegister<MemWbLatch>;
