//! Fluent builders for programs and stage-register entries.

use pipesim_core::common::Register;
use pipesim_core::core::pipeline::latches::{ExMemLatch, IdExLatch, MemWbLatch};
use pipesim_core::core::pipeline::signals::ControlSignals;
use pipesim_core::isa::{Function, Instruction, Opcode};
use pipesim_core::soc::ProgramMemory;

/// Builds a program one instruction at a time, in assembly operand order.
#[derive(Debug, Default)]
pub struct ProgramBuilder {
    instructions: Vec<Instruction>,
}

impl ProgramBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(mut self, instruction: Instruction) -> Self {
        self.instructions.push(instruction);
        self
    }

    fn r(self, function: Function, rd: Register, rs: Register, rt: Register) -> Self {
        self.push(Instruction::r_type(function, rd, rs, rt).expect("valid R-type"))
    }

    fn i(self, opcode: Opcode, rt: Register, rs: Register, imm: i16) -> Self {
        self.push(Instruction::i_type(opcode, rt, rs, imm).expect("valid I-type"))
    }

    /// `addiu rt, rs, imm`
    pub fn addiu(self, rt: Register, rs: Register, imm: i16) -> Self {
        self.i(Opcode::Addiu, rt, rs, imm)
    }

    /// `andi rt, rs, imm`
    pub fn andi(self, rt: Register, rs: Register, imm: i16) -> Self {
        self.i(Opcode::Andi, rt, rs, imm)
    }

    /// `ori rt, rs, imm`
    pub fn ori(self, rt: Register, rs: Register, imm: i16) -> Self {
        self.i(Opcode::Ori, rt, rs, imm)
    }

    /// `xori rt, rs, imm`
    pub fn xori(self, rt: Register, rs: Register, imm: i16) -> Self {
        self.i(Opcode::Xori, rt, rs, imm)
    }

    /// `addu rd, rs, rt`
    pub fn addu(self, rd: Register, rs: Register, rt: Register) -> Self {
        self.r(Function::Addu, rd, rs, rt)
    }

    /// `subu rd, rs, rt`
    pub fn subu(self, rd: Register, rs: Register, rt: Register) -> Self {
        self.r(Function::Subu, rd, rs, rt)
    }

    /// `and rd, rs, rt`
    pub fn and(self, rd: Register, rs: Register, rt: Register) -> Self {
        self.r(Function::And, rd, rs, rt)
    }

    /// `or rd, rs, rt`
    pub fn or(self, rd: Register, rs: Register, rt: Register) -> Self {
        self.r(Function::Or, rd, rs, rt)
    }

    /// `nor rd, rs, rt`
    pub fn nor(self, rd: Register, rs: Register, rt: Register) -> Self {
        self.r(Function::Nor, rd, rs, rt)
    }

    /// R-type `sllv` from its fields; the ALU shifts the `rs` value by the `rt` value.
    pub fn sllv(self, rd: Register, rs: Register, rt: Register) -> Self {
        self.r(Function::Sllv, rd, rs, rt)
    }

    /// `lw rt, offset(rs)`
    pub fn lw(self, rt: Register, offset: i16, rs: Register) -> Self {
        self.i(Opcode::Lw, rt, rs, offset)
    }

    /// `sw rt, offset(rs)`
    pub fn sw(self, rt: Register, offset: i16, rs: Register) -> Self {
        self.i(Opcode::Sw, rt, rs, offset)
    }

    /// `beq rs, rt, offset`
    pub fn beq(self, rs: Register, rt: Register, offset: i16) -> Self {
        self.i(Opcode::Beq, rt, rs, offset)
    }

    /// `j target`
    pub fn j(self, target: u32) -> Self {
        self.push(Instruction::j_type(target).expect("valid jump target"))
    }

    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    pub fn build(self) -> ProgramMemory {
        self.instructions.into_iter().collect()
    }
}

/// Builds an ID/EX entry.
#[derive(Debug, Default)]
pub struct IdExBuilder(IdExLatch);

impl IdExBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn address(mut self, address: u32) -> Self {
        self.0.instruction_address = address;
        self
    }

    pub fn instruction(mut self, instruction: Instruction) -> Self {
        self.0.instruction = instruction;
        self
    }

    pub fn signals(mut self, signals: ControlSignals) -> Self {
        self.0.signals = signals;
        self
    }

    pub fn build(self) -> IdExLatch {
        self.0
    }
}

/// Builds an EX/MEM entry.
#[derive(Debug, Default)]
pub struct ExMemBuilder(ExMemLatch);

impl ExMemBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// An ALU instruction writing `alu_result` to `destination`.
    pub fn writes(mut self, destination: Register, alu_result: u32) -> Self {
        self.0.instruction_address = 0;
        self.0.destination = destination;
        self.0.alu_result = alu_result;
        self.0.signals.reg_write = true;
        self
    }

    /// A load into `destination`.
    pub fn loads(mut self, destination: Register) -> Self {
        self = self.writes(destination, 0);
        self.0.signals.mem_read = true;
        self
    }

    pub fn build(self) -> ExMemLatch {
        self.0
    }
}

/// Builds a MEM/WB entry.
#[derive(Debug, Default)]
pub struct MemWbBuilder(MemWbLatch);

impl MemWbBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// An ALU instruction writing `alu_result` to `destination`.
    pub fn writes(mut self, destination: Register, alu_result: u32) -> Self {
        self.0.instruction_address = 0;
        self.0.destination = destination;
        self.0.alu_result = alu_result;
        self.0.signals.reg_write = true;
        self
    }

    /// A load of `value` into `destination`.
    pub fn loaded(mut self, destination: Register, value: u32) -> Self {
        self = self.writes(destination, 0);
        self.0.signals.mem_read = true;
        self.0.read_value = value;
        self
    }

    pub fn build(self) -> MemWbLatch {
        self.0
    }
}
