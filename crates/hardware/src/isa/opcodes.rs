//! Primary Opcodes.
//!
//! Defines the 6-bit major opcodes (bits 31-26) of the supported instruction subset.

use std::fmt;

/// Major opcode of a supported instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Opcode {
    /// Register-register operation; the function field selects the ALU operation.
    RType = 0x00,
    /// Unconditional jump.
    J = 0x02,
    /// Branch if equal.
    Beq = 0x04,
    /// Add immediate unsigned (no overflow trap).
    Addiu = 0x09,
    /// Bitwise AND with immediate.
    Andi = 0x0C,
    /// Bitwise OR with immediate.
    Ori = 0x0D,
    /// Bitwise XOR with immediate.
    Xori = 0x0E,
    /// Load word.
    Lw = 0x23,
    /// Store word.
    Sw = 0x2B,
}

impl Opcode {
    /// Every supported opcode.
    pub const ALL: [Self; 9] = [
        Self::RType,
        Self::J,
        Self::Beq,
        Self::Addiu,
        Self::Andi,
        Self::Ori,
        Self::Xori,
        Self::Lw,
        Self::Sw,
    ];

    /// Decodes a 6-bit opcode field, returning `None` for unsupported values.
    pub const fn from_bits(bits: u8) -> Option<Self> {
        match bits {
            0x00 => Some(Self::RType),
            0x02 => Some(Self::J),
            0x04 => Some(Self::Beq),
            0x09 => Some(Self::Addiu),
            0x0C => Some(Self::Andi),
            0x0D => Some(Self::Ori),
            0x0E => Some(Self::Xori),
            0x23 => Some(Self::Lw),
            0x2B => Some(Self::Sw),
            _ => None,
        }
    }

    /// Returns the encoded opcode value.
    pub const fn bits(self) -> u8 {
        self as u8
    }

    /// Returns the assembler mnemonic (`"rtype"` for the R-type group).
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::RType => "rtype",
            Self::J => "j",
            Self::Beq => "beq",
            Self::Addiu => "addiu",
            Self::Andi => "andi",
            Self::Ori => "ori",
            Self::Xori => "xori",
            Self::Lw => "lw",
            Self::Sw => "sw",
        }
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}
