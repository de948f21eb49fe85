//! Global Pipeline Constants.
//!
//! This module defines constants shared across the simulator. It includes:
//! 1. **Sentinels:** The address value that marks a stage register as a bubble.
//! 2. **Instruction Fields:** Masks and shifts for the three MIPS encodings.
//! 3. **Architecture Sizes:** Word size and register file geometry.

/// Instruction address carried by a stage register that holds no instruction.
///
/// Real instruction addresses are word-aligned, so any odd value is unambiguous.
pub const BUBBLE_ADDRESS: u32 = 1;

/// Size of one instruction or data word in bytes.
pub const WORD_SIZE: u32 = 4;

/// Number of architectural general-purpose registers, including `$zero`.
pub const REGISTER_COUNT: usize = 32;

/// Bit position of the opcode field.
pub const OPCODE_SHIFT: u32 = 26;

/// Bit position of the `rs` field.
pub const RS_SHIFT: u32 = 21;

/// Bit position of the `rt` field.
pub const RT_SHIFT: u32 = 16;

/// Bit position of the `rd` field.
pub const RD_SHIFT: u32 = 11;

/// Mask for any 5-bit register field after shifting.
pub const REG_MASK: u32 = 0x1F;

/// Mask for the R-type function field.
pub const FUNCT_MASK: u32 = 0x3F;

/// Mask for the I-type immediate field.
pub const IMMEDIATE_MASK: u32 = 0xFFFF;

/// Mask for the J-type word-index target field.
pub const TARGET_MASK: u32 = 0x03FF_FFFF;

/// Largest byte address a J-type instruction can encode.
pub const MAX_JUMP_TARGET: u32 = 0x0FFF_FFFC;
