//! Instruction encoding and decoding.
//!
//! This module provides the validated `Instruction` word. It performs:
//! 1. **Validation:** Rejects words whose opcode, or R-type function, is unsupported.
//! 2. **Field Extraction:** Opcode, function, registers, immediate, and jump target.
//! 3. **Encoding:** Builders for the R, I, and J formats.
//! 4. **Classification:** Groups instructions by `InstructionType`.

use crate::common::constants::{
    FUNCT_MASK, IMMEDIATE_MASK, MAX_JUMP_TARGET, OPCODE_SHIFT, RD_SHIFT, REG_MASK, RS_SHIFT,
    RT_SHIFT, TARGET_MASK, WORD_SIZE,
};
use crate::common::error::InstructionError;
use crate::common::reg::Register;
use crate::isa::funct::Function;
use crate::isa::opcodes::Opcode;

/// Broad class of an instruction, used for statistics and display.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InstructionType {
    /// ALU operation with an immediate operand (`addiu`, `andi`, `ori`, `xori`).
    Immediate,
    /// ALU operation on two registers.
    Register,
    /// Unconditional jump.
    Jump,
    /// Conditional branch.
    Branch,
    /// Load or store.
    Memory,
}

/// An immutable, validated 32-bit instruction word.
///
/// The all-zero word is the bubble: opcode R-type with the reserved bubble function.
/// It means "no instruction" and is never executed as an operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Instruction {
    raw: u32,
    opcode: Opcode,
    function: Option<Function>,
}

impl Default for Instruction {
    fn default() -> Self {
        Self::BUBBLE
    }
}

impl Instruction {
    /// The bubble word.
    pub const BUBBLE: Self = Self {
        raw: 0,
        opcode: Opcode::RType,
        function: Some(Function::Bubble),
    };

    /// Validates a raw word.
    ///
    /// # Arguments
    ///
    /// * `raw` - The 32-bit machine word.
    ///
    /// # Returns
    ///
    /// The instruction, or an error if the opcode is unsupported, the word is R-type
    /// with an unsupported function, or it uses the bubble function without being
    /// the all-zero word.
    pub const fn new(raw: u32) -> Result<Self, InstructionError> {
        let opcode_bits = (raw >> OPCODE_SHIFT) as u8;
        let Some(opcode) = Opcode::from_bits(opcode_bits) else {
            return Err(InstructionError::InvalidOpcode(opcode_bits));
        };
        if !matches!(opcode, Opcode::RType) {
            return Ok(Self {
                raw,
                opcode,
                function: None,
            });
        }
        let function_bits = (raw & FUNCT_MASK) as u8;
        match Function::from_bits(function_bits) {
            None => Err(InstructionError::InvalidFunction(function_bits)),
            Some(Function::Bubble) if raw != 0 => Err(InstructionError::MalformedBubble(raw)),
            Some(function) => Ok(Self {
                raw,
                opcode,
                function: Some(function),
            }),
        }
    }

    /// Encodes an R-type instruction (`function rd, rs, rt`).
    pub const fn r_type(
        function: Function,
        rd: Register,
        rs: Register,
        rt: Register,
    ) -> Result<Self, InstructionError> {
        Self::new(
            (rs as u32) << RS_SHIFT
                | (rt as u32) << RT_SHIFT
                | (rd as u32) << RD_SHIFT
                | function as u32,
        )
    }

    /// Encodes an I-type instruction (`opcode rt, rs, immediate`).
    ///
    /// Branches and memory operations use the same layout: `beq rs, rt, offset` and
    /// `lw rt, offset(rs)`.
    pub const fn i_type(
        opcode: Opcode,
        rt: Register,
        rs: Register,
        immediate: i16,
    ) -> Result<Self, InstructionError> {
        if matches!(opcode, Opcode::RType | Opcode::J) {
            return Err(InstructionError::FormatMismatch {
                opcode,
                format: "I-type",
            });
        }
        Self::new(
            (opcode as u32) << OPCODE_SHIFT
                | (rs as u32) << RS_SHIFT
                | (rt as u32) << RT_SHIFT
                | (immediate as u16) as u32,
        )
    }

    /// Encodes a `j` to the byte address `target`.
    ///
    /// # Arguments
    ///
    /// * `target` - Destination address; must be word-aligned and at most `0x0FFFFFFC`.
    pub const fn j_type(target: u32) -> Result<Self, InstructionError> {
        if target % WORD_SIZE != 0 {
            return Err(InstructionError::MisalignedTarget(target));
        }
        if target > MAX_JUMP_TARGET {
            return Err(InstructionError::TargetOutOfRange(target));
        }
        Self::new((Opcode::J as u32) << OPCODE_SHIFT | target >> 2)
    }

    /// Returns the raw machine word.
    pub const fn raw(self) -> u32 {
        self.raw
    }

    /// Returns `true` for the all-zero bubble word.
    pub const fn is_bubble(self) -> bool {
        self.raw == 0
    }

    /// Returns the major opcode.
    pub const fn opcode(self) -> Opcode {
        self.opcode
    }

    /// Returns the function code for R-type words, `None` otherwise.
    pub const fn function(self) -> Option<Function> {
        self.function
    }

    /// Returns the `rs` field.
    pub const fn rs(self) -> Register {
        Register::from_field(self.raw >> RS_SHIFT & REG_MASK)
    }

    /// Returns the `rt` field.
    pub const fn rt(self) -> Register {
        Register::from_field(self.raw >> RT_SHIFT & REG_MASK)
    }

    /// Returns the `rd` field.
    pub const fn rd(self) -> Register {
        Register::from_field(self.raw >> RD_SHIFT & REG_MASK)
    }

    /// Returns the 16-bit immediate as a signed value.
    pub const fn immediate(self) -> i16 {
        (self.raw & IMMEDIATE_MASK) as u16 as i16
    }

    /// Returns the immediate sign-extended to 32 bits.
    pub const fn sign_extended_immediate(self) -> u32 {
        self.immediate() as i32 as u32
    }

    /// Returns the jump target as a byte address (word index shifted left by 2).
    pub const fn target(self) -> u32 {
        (self.raw & TARGET_MASK) << 2
    }

    /// Classifies the instruction.
    pub const fn instruction_type(self) -> InstructionType {
        match self.opcode {
            Opcode::RType => InstructionType::Register,
            Opcode::J => InstructionType::Jump,
            Opcode::Beq => InstructionType::Branch,
            Opcode::Lw | Opcode::Sw => InstructionType::Memory,
            Opcode::Addiu | Opcode::Andi | Opcode::Ori | Opcode::Xori => {
                InstructionType::Immediate
            }
        }
    }
}

impl TryFrom<u32> for Instruction {
    type Error = InstructionError;

    fn try_from(raw: u32) -> Result<Self, Self::Error> {
        Self::new(raw)
    }
}

impl From<Instruction> for u32 {
    fn from(instruction: Instruction) -> Self {
        instruction.raw
    }
}
