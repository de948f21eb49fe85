//! Pipeline control signals and selector types.
//!
//! This module defines the values the control unit produces. It performs:
//! 1. **Control Signals:** The six datapath control lines latched with each instruction.
//! 2. **Operation Selection:** The ALU operation and next-PC source.
//! 3. **Hazard Reporting:** Hazard categories, forwarding sources, and the hazard policy.

use std::fmt;
use std::ops::{BitOr, BitOrAssign};
use std::str::FromStr;

use serde::Deserialize;

/// Control lines latched with an instruction as it moves down the pipeline.
///
/// All lines low (`ControlSignals::NONE`) marks a squashed or invalid instruction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ControlSignals {
    /// ALU right operand is the sign-extended immediate instead of read value 2.
    pub alu_src: bool,
    /// Destination register is `rd` instead of `rt`.
    pub reg_dst: bool,
    /// Store to data memory.
    pub mem_write: bool,
    /// Load from data memory; the loaded word is written back instead of the ALU result.
    pub mem_read: bool,
    /// Conditional branch.
    pub branch: bool,
    /// Write the result back to the register file.
    pub reg_write: bool,
}

impl ControlSignals {
    /// All lines low.
    pub const NONE: Self = Self {
        alu_src: false,
        reg_dst: false,
        mem_write: false,
        mem_read: false,
        branch: false,
        reg_write: false,
    };

    /// Returns `true` when every line is low.
    pub const fn is_none(self) -> bool {
        !(self.alu_src
            || self.reg_dst
            || self.mem_write
            || self.mem_read
            || self.branch
            || self.reg_write)
    }

    const fn names(self) -> [(bool, &'static str); 6] {
        [
            (self.alu_src, "ALUSrc"),
            (self.reg_dst, "RegDst"),
            (self.mem_write, "MemWrite"),
            (self.mem_read, "MemRead"),
            (self.branch, "Branch"),
            (self.reg_write, "RegWrite"),
        ]
    }
}

impl fmt::Display for ControlSignals {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_flags(f, &self.names())
    }
}

/// ALU operation selected by the control unit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum AluOp {
    /// 32-bit wrapping addition.
    Add,
    /// 32-bit wrapping subtraction.
    Subtract,
    /// Shift left logical.
    ShiftLeftLogical,
    /// Shift right arithmetic.
    ShiftRightArithmetic,
    /// Shift right logical.
    ShiftRightLogical,
    /// Bitwise AND.
    And,
    /// Bitwise OR. Also selected for bubbles.
    #[default]
    Or,
    /// Bitwise NOR.
    Nor,
    /// Bitwise XOR.
    Xor,
}

/// Source of the next program counter value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PcSource {
    /// Sequential: address + 4.
    #[default]
    Next,
    /// Taken branch resolved in the execute stage.
    Branch,
    /// Jump being decoded.
    Jump,
}

/// Pipeline stage supplying an ALU operand.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ForwardSource {
    /// The value read from the register file during decode.
    #[default]
    Decode,
    /// The ALU result held in the EX/MEM register.
    Execute,
    /// The write-back value held in the MEM/WB register.
    Memory,
}

/// Policy applied when a hazard is detected.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HazardMode {
    /// Stop the processor and report the hazard.
    Fail,
    /// Insert bubbles until the hazard clears.
    Stall,
    /// Forward results where possible and stall otherwise.
    #[default]
    StallAndForward,
}

impl HazardMode {
    /// Every mode.
    pub const ALL: [Self; 3] = [Self::Fail, Self::Stall, Self::StallAndForward];

    /// Returns `true` if results are forwarded to the ALU.
    pub const fn forwards(self) -> bool {
        matches!(self, Self::StallAndForward)
    }

    /// Returns the configuration name of the mode.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Fail => "fail",
            Self::Stall => "stall",
            Self::StallAndForward => "stall_and_forward",
        }
    }
}

impl fmt::Display for HazardMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown hazard mode name.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown hazard mode `{0}` (expected fail, stall, or stall_and_forward)")]
pub struct ParseHazardModeError(pub String);

impl FromStr for HazardMode {
    type Err = ParseHazardModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace('-', "_").as_str() {
            "fail" => Ok(Self::Fail),
            "stall" => Ok(Self::Stall),
            "stall_and_forward" | "forward" => Ok(Self::StallAndForward),
            _ => Err(ParseHazardModeError(s.to_owned())),
        }
    }
}

/// Set of detected hazards.
///
/// Every category is detected independently; several may be present at once.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct HazardTypes {
    /// A taken branch flushes the fetch stage.
    pub branch: bool,
    /// Decoded instruction reads a result still in the EX/MEM register.
    pub compute_use_memory: bool,
    /// Decoded instruction reads a result still in the ID/EX register.
    pub compute_use_execute: bool,
    /// Decoded instruction reads a load result still in the EX/MEM register.
    pub load_use_memory: bool,
    /// Decoded instruction reads a load result still in the ID/EX register.
    pub load_use_execute: bool,
}

impl HazardTypes {
    /// No hazard.
    pub const NONE: Self = Self {
        branch: false,
        compute_use_memory: false,
        compute_use_execute: false,
        load_use_memory: false,
        load_use_execute: false,
    };

    /// Only the branch hazard.
    pub const BRANCH: Self = Self {
        branch: true,
        ..Self::NONE
    };

    /// Only the compute/use hazard against EX/MEM.
    pub const COMPUTE_USE_MEMORY: Self = Self {
        compute_use_memory: true,
        ..Self::NONE
    };

    /// Only the compute/use hazard against ID/EX.
    pub const COMPUTE_USE_EXECUTE: Self = Self {
        compute_use_execute: true,
        ..Self::NONE
    };

    /// Only the load/use hazard against EX/MEM.
    pub const LOAD_USE_MEMORY: Self = Self {
        load_use_memory: true,
        ..Self::NONE
    };

    /// Only the load/use hazard against ID/EX.
    pub const LOAD_USE_EXECUTE: Self = Self {
        load_use_execute: true,
        ..Self::NONE
    };

    /// Returns `true` if no hazard is present.
    pub const fn is_empty(self) -> bool {
        !(self.branch
            || self.compute_use_memory
            || self.compute_use_execute
            || self.load_use_memory
            || self.load_use_execute)
    }

    /// Returns `true` if every hazard in `other` is also in `self`.
    pub const fn contains(self, other: Self) -> bool {
        (self.branch || !other.branch)
            && (self.compute_use_memory || !other.compute_use_memory)
            && (self.compute_use_execute || !other.compute_use_execute)
            && (self.load_use_memory || !other.load_use_memory)
            && (self.load_use_execute || !other.load_use_execute)
    }

    /// Human-readable explanations, one per reported stage pair.
    ///
    /// Compute/use takes precedence over load/use when both are reported against the
    /// same stage.
    pub fn describe(self) -> Vec<&'static str> {
        let mut lines = Vec::new();
        if self.branch {
            lines.push("Branch");
        }
        if self.compute_use_execute {
            lines.push("Compute/use between decode and execute");
        } else if self.load_use_execute {
            lines.push("Load/use between decode and execute");
        }
        if self.compute_use_memory {
            lines.push("Compute/use between decode and memory");
        } else if self.load_use_memory {
            lines.push("Load/use between decode and memory");
        }
        lines
    }

    const fn names(self) -> [(bool, &'static str); 5] {
        [
            (self.branch, "Branch"),
            (self.compute_use_memory, "ComputeUseMemory"),
            (self.compute_use_execute, "ComputeUseExecute"),
            (self.load_use_memory, "LoadUseMemory"),
            (self.load_use_execute, "LoadUseExecute"),
        ]
    }
}

impl BitOr for HazardTypes {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self {
            branch: self.branch || rhs.branch,
            compute_use_memory: self.compute_use_memory || rhs.compute_use_memory,
            compute_use_execute: self.compute_use_execute || rhs.compute_use_execute,
            load_use_memory: self.load_use_memory || rhs.load_use_memory,
            load_use_execute: self.load_use_execute || rhs.load_use_execute,
        }
    }
}

impl BitOrAssign for HazardTypes {
    fn bitor_assign(&mut self, rhs: Self) {
        *self = *self | rhs;
    }
}

impl fmt::Display for HazardTypes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_flags(f, &self.names())
    }
}

fn write_flags(f: &mut fmt::Formatter<'_>, flags: &[(bool, &str)]) -> fmt::Result {
    let mut set = flags.iter().filter(|(on, _)| *on).map(|(_, name)| *name);
    let Some(first) = set.next() else {
        return f.write_str("None");
    };
    f.write_str(first)?;
    for name in set {
        write!(f, " | {name}")?;
    }
    Ok(())
}
