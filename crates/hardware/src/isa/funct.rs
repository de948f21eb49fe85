//! R-type Function Codes.
//!
//! Defines the 6-bit function field (bits 5-0) values accepted when the opcode is R-type.

use std::fmt;

/// Function code of a supported R-type instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Function {
    /// Reserved for the all-zero bubble word; never a real operation.
    Bubble = 0x00,
    /// Shift left logical by register.
    Sllv = 0x04,
    /// Shift right logical by register.
    Srlv = 0x06,
    /// Shift right arithmetic by register.
    Srav = 0x07,
    /// Add unsigned (no overflow trap).
    Addu = 0x21,
    /// Subtract unsigned (no overflow trap).
    Subu = 0x23,
    /// Bitwise AND.
    And = 0x24,
    /// Bitwise OR.
    Or = 0x25,
    /// Bitwise XOR.
    Xor = 0x26,
    /// Bitwise NOR.
    Nor = 0x27,
}

impl Function {
    /// Every function code that encodes a real operation.
    pub const OPERATIONS: [Self; 9] = [
        Self::Sllv,
        Self::Srlv,
        Self::Srav,
        Self::Addu,
        Self::Subu,
        Self::And,
        Self::Or,
        Self::Xor,
        Self::Nor,
    ];

    /// Decodes a 6-bit function field, returning `None` for unsupported values.
    pub const fn from_bits(bits: u8) -> Option<Self> {
        match bits {
            0x00 => Some(Self::Bubble),
            0x04 => Some(Self::Sllv),
            0x06 => Some(Self::Srlv),
            0x07 => Some(Self::Srav),
            0x21 => Some(Self::Addu),
            0x23 => Some(Self::Subu),
            0x24 => Some(Self::And),
            0x25 => Some(Self::Or),
            0x26 => Some(Self::Xor),
            0x27 => Some(Self::Nor),
            _ => None,
        }
    }

    /// Returns the encoded function value.
    pub const fn bits(self) -> u8 {
        self as u8
    }

    /// Returns `true` for the variable shifts, whose operands print as `rd, rt, rs`.
    pub const fn is_shift(self) -> bool {
        matches!(self, Self::Sllv | Self::Srlv | Self::Srav)
    }

    /// Returns the assembler mnemonic.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Bubble => "bubble",
            Self::Sllv => "sllv",
            Self::Srlv => "srlv",
            Self::Srav => "srav",
            Self::Addu => "addu",
            Self::Subu => "subu",
            Self::And => "and",
            Self::Or => "or",
            Self::Xor => "xor",
            Self::Nor => "nor",
        }
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}
