//! MIPS Register Names.
//!
//! This module provides the `Register` enum naming the 32 architectural registers
//! by their assembler mnemonics. It provides:
//! 1. **Decoding:** Conversion from a 5-bit register field.
//! 2. **Display:** The `$name` form used by the disassembler.

use std::fmt;

/// One of the 32 general-purpose registers, by ABI name.
///
/// Register 0 (`$zero`) is hard-wired to zero: it is never stored, and writes to it
/// are discarded by the register file.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Register {
    /// Constant zero.
    #[default]
    Zero = 0,
    /// Assembler temporary.
    At,
    /// Function result 0.
    V0,
    /// Function result 1.
    V1,
    /// Argument 0.
    A0,
    /// Argument 1.
    A1,
    /// Argument 2.
    A2,
    /// Argument 3.
    A3,
    /// Temporary 0.
    T0,
    /// Temporary 1.
    T1,
    /// Temporary 2.
    T2,
    /// Temporary 3.
    T3,
    /// Temporary 4.
    T4,
    /// Temporary 5.
    T5,
    /// Temporary 6.
    T6,
    /// Temporary 7.
    T7,
    /// Saved 0.
    S0,
    /// Saved 1.
    S1,
    /// Saved 2.
    S2,
    /// Saved 3.
    S3,
    /// Saved 4.
    S4,
    /// Saved 5.
    S5,
    /// Saved 6.
    S6,
    /// Saved 7.
    S7,
    /// Temporary 8.
    T8,
    /// Temporary 9.
    T9,
    /// Kernel reserved 0.
    K0,
    /// Kernel reserved 1.
    K1,
    /// Global pointer.
    Gp,
    /// Stack pointer.
    Sp,
    /// Saved 8 / frame pointer.
    S8,
    /// Return address.
    Ra,
}

impl Register {
    /// All registers in index order.
    pub const ALL: [Self; 32] = [
        Self::Zero,
        Self::At,
        Self::V0,
        Self::V1,
        Self::A0,
        Self::A1,
        Self::A2,
        Self::A3,
        Self::T0,
        Self::T1,
        Self::T2,
        Self::T3,
        Self::T4,
        Self::T5,
        Self::T6,
        Self::T7,
        Self::S0,
        Self::S1,
        Self::S2,
        Self::S3,
        Self::S4,
        Self::S5,
        Self::S6,
        Self::S7,
        Self::T8,
        Self::T9,
        Self::K0,
        Self::K1,
        Self::Gp,
        Self::Sp,
        Self::S8,
        Self::Ra,
    ];

    const NAMES: [&'static str; 32] = [
        "zero", "at", "v0", "v1", "a0", "a1", "a2", "a3", "t0", "t1", "t2", "t3", "t4", "t5",
        "t6", "t7", "s0", "s1", "s2", "s3", "s4", "s5", "s6", "s7", "t8", "t9", "k0", "k1", "gp",
        "sp", "s8", "ra",
    ];

    /// Decodes a register from the low five bits of `field`.
    pub const fn from_field(field: u32) -> Self {
        Self::ALL[(field & 0x1F) as usize]
    }

    /// Returns the register number (0-31).
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the ABI name without the `$` prefix.
    pub const fn name(self) -> &'static str {
        Self::NAMES[self as usize]
    }

    /// Returns `true` for the hard-wired `$zero` register.
    pub const fn is_zero(self) -> bool {
        matches!(self, Self::Zero)
    }
}

impl fmt::Display for Register {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}", self.name())
    }
}
