//! Program Memory.
//!
//! Immutable instruction storage indexed by `address / 4`. Reading past the end is
//! reported as [`ProgramError::OutOfBounds`], which the fetch synchronizer turns into
//! the end-of-program signal.

use crate::common::constants::WORD_SIZE;
use crate::common::error::{LoadError, ProgramError};
use crate::isa::Instruction;

/// A loaded program.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProgramMemory {
    instructions: Vec<Instruction>,
}

impl ProgramMemory {
    /// Wraps already-validated instructions.
    pub const fn new(instructions: Vec<Instruction>) -> Self {
        Self { instructions }
    }

    /// Validates machine words produced by an assembler.
    ///
    /// # Errors
    ///
    /// [`LoadError::Instruction`] for the first word with an unsupported opcode or function.
    pub fn from_words(words: &[u32]) -> Result<Self, LoadError> {
        let instructions = words
            .iter()
            .enumerate()
            .map(|(index, &word)| {
                Instruction::new(word).map_err(|source| LoadError::Instruction {
                    index,
                    word,
                    source,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(instructions))
    }

    /// Reads the instruction at a byte address.
    ///
    /// # Errors
    ///
    /// [`ProgramError::Misaligned`] if `address` is not a multiple of 4, and
    /// [`ProgramError::OutOfBounds`] if it lies past the last instruction.
    pub fn instruction_at(&self, address: u32) -> Result<Instruction, ProgramError> {
        if address % WORD_SIZE != 0 {
            return Err(ProgramError::Misaligned(address));
        }
        self.instructions
            .get((address / WORD_SIZE) as usize)
            .copied()
            .ok_or(ProgramError::OutOfBounds(address))
    }

    /// Number of instructions.
    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    /// Returns `true` for an empty program.
    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    /// Size of the program in bytes.
    pub fn extent(&self) -> u32 {
        u32::try_from(self.instructions.len())
            .unwrap_or(u32::MAX / WORD_SIZE)
            .saturating_mul(WORD_SIZE)
    }

    /// Iterates over `(address, instruction)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (u32, Instruction)> + '_ {
        (0_u32..)
            .step_by(WORD_SIZE as usize)
            .zip(self.instructions.iter().copied())
    }
}

impl FromIterator<Instruction> for ProgramMemory {
    fn from_iter<I: IntoIterator<Item = Instruction>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
