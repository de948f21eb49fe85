//! Control Unit.
//!
//! Combinational decode, hazard, and forwarding logic. Every output is recomputed on
//! demand from the visible contents of the stage registers, so reading it never
//! changes the datapath. It provides:
//! 1. **Decode:** Opcode → control signals and ALU operation.
//! 2. **Next PC:** Branch, jump, or sequential; a taken branch wins over a jump.
//! 3. **Hazard Response:** Stall and flush decisions, and the operand forwarding sources.

use crate::core::datapath::Datapath;
use crate::core::pipeline::hazards;
use crate::core::pipeline::signals::{AluOp, ControlSignals, ForwardSource, HazardTypes, PcSource};
use crate::core::units::alu::ArithmeticLogicUnit;
use crate::isa::{Function, Instruction, Opcode};

/// Decodes the control signals of `instruction`, ignoring hazards.
///
/// Instructions that would write `$zero` leave `RegWrite` low so that they never
/// appear as the producer of a hazard.
pub const fn preliminary_signals(instruction: Instruction) -> ControlSignals {
    let none = ControlSignals::NONE;
    match instruction.opcode() {
        Opcode::Addiu | Opcode::Andi | Opcode::Ori | Opcode::Xori => ControlSignals {
            alu_src: true,
            reg_write: !instruction.rt().is_zero(),
            ..none
        },
        Opcode::Beq => ControlSignals {
            branch: true,
            reg_dst: true,
            ..none
        },
        Opcode::J => none,
        Opcode::Lw => ControlSignals {
            mem_read: true,
            reg_write: !instruction.rt().is_zero(),
            ..none
        },
        Opcode::RType => ControlSignals {
            reg_dst: true,
            reg_write: !instruction.rd().is_zero(),
            ..none
        },
        Opcode::Sw => ControlSignals {
            mem_write: true,
            alu_src: true,
            reg_dst: true,
            ..none
        },
    }
}

/// Maps an instruction to the ALU operation it performs.
///
/// # Panics
///
/// If `instruction` is the bubble word. Bubbles are recognised by their address before
/// the opcode is consulted, so reaching this arm means the decode tables are broken.
pub fn alu_op(instruction: Instruction) -> AluOp {
    match instruction.opcode() {
        Opcode::Addiu | Opcode::Lw | Opcode::Sw => AluOp::Add,
        Opcode::Andi => AluOp::And,
        Opcode::Beq => AluOp::Subtract,
        Opcode::J | Opcode::Ori => AluOp::Or,
        Opcode::Xori => AluOp::Xor,
        Opcode::RType => match instruction.function() {
            Some(Function::Addu) => AluOp::Add,
            Some(Function::And) => AluOp::And,
            Some(Function::Nor) => AluOp::Nor,
            Some(Function::Or) => AluOp::Or,
            Some(Function::Sllv) => AluOp::ShiftLeftLogical,
            Some(Function::Srav) => AluOp::ShiftRightArithmetic,
            Some(Function::Srlv) => AluOp::ShiftRightLogical,
            Some(Function::Subu) => AluOp::Subtract,
            Some(Function::Xor) => AluOp::Xor,
            Some(Function::Bubble) | None => {
                panic!("no ALU operation for R-type word {:#010x}", instruction.raw())
            }
        },
    }
}

/// Read-only view of the control unit over a datapath.
#[derive(Clone, Copy, Debug)]
pub struct ControlUnit<'a> {
    dp: &'a Datapath,
}

impl<'a> ControlUnit<'a> {
    /// Creates the view.
    pub const fn new(dp: &'a Datapath) -> Self {
        Self { dp }
    }

    fn fetched(&self) -> Instruction {
        self.dp.fetch().state().instruction
    }

    /// Control signals of the instruction in decode, ignoring hazards.
    pub fn preliminary_signals(&self) -> ControlSignals {
        preliminary_signals(self.fetched())
    }

    fn data_hazards(&self, signals: ControlSignals) -> HazardTypes {
        let dp = self.dp;
        let fetched = self.fetched();
        let id_ex = dp.decode().state();
        let ex_mem = dp.execute().state();
        hazards::compute_use(dp.mode(), signals, fetched, id_ex, ex_mem)
            | hazards::load_use(dp.mode(), signals, fetched, id_ex, ex_mem)
    }

    /// Control signals latched into ID/EX: the preliminary signals, or `NONE` while a
    /// data hazard stalls decode.
    pub fn signals(&self) -> ControlSignals {
        let signals = self.preliminary_signals();
        if signals.is_none() || !self.data_hazards(signals).is_empty() {
            ControlSignals::NONE
        } else {
            signals
        }
    }

    /// ALU operation latched into ID/EX.
    pub fn alu_op(&self) -> AluOp {
        if self.dp.fetch().has_bubble() {
            AluOp::Or
        } else {
            alu_op(self.fetched())
        }
    }

    /// Source of the next PC.
    pub fn pc_source(&self) -> PcSource {
        if self.dp.decode().signals().branch && ArithmeticLogicUnit::new(self.dp).result() == 0 {
            PcSource::Branch
        } else if self.fetched().opcode() == Opcode::J {
            PcSource::Jump
        } else {
            PcSource::Next
        }
    }

    /// Forwarding source of the ALU left operand (`rs` of the instruction in execute).
    pub fn forward_a(&self) -> ForwardSource {
        let dp = self.dp;
        hazards::forward_source(
            dp.decode().state().instruction.rs(),
            dp.execute().state(),
            dp.memory().state(),
        )
    }

    /// Forwarding source of the ALU right operand and store value (`rt`).
    pub fn forward_b(&self) -> ForwardSource {
        let dp = self.dp;
        hazards::forward_source(
            dp.decode().state().instruction.rt(),
            dp.execute().state(),
            dp.memory().state(),
        )
    }

    /// Whether the fetch register is replaced by a bubble (taken branch).
    pub fn flush_fetch(&self) -> bool {
        self.pc_source() == PcSource::Branch
    }

    /// Whether the fetch register holds its instruction.
    pub fn stall_fetch(&self) -> bool {
        !self.check_hazard().is_empty()
    }

    /// Whether the PC holds its address. A taken branch does not stall the PC.
    pub fn stall_pc(&self) -> bool {
        !self.data_hazards(self.preliminary_signals()).is_empty()
    }

    /// Every hazard currently present.
    pub fn check_hazard(&self) -> HazardTypes {
        let mut hazards = self.data_hazards(self.preliminary_signals());
        if self.pc_source() == PcSource::Branch {
            hazards.branch = true;
        }
        hazards
    }
}
