//! Error definitions.
//!
//! This module defines the recoverable error conditions of the simulator. It provides:
//! 1. **Construction Errors:** Malformed instruction words and jump targets.
//! 2. **Program Memory Errors:** Instruction reads outside the loaded program.
//! 3. **Clock Errors:** Inversions requested by a provider that does not own the clock.
//! 4. **Load and Configuration Errors:** Listing files, assembler output, and JSON configuration.
//!
//! Hazards detected in fail mode and the end of a program are not errors; they are
//! terminal processor states reported through [`crate::core::processor::ExecutionState`].

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

use crate::clock::ProviderKind;
use crate::isa::opcodes::Opcode;

/// Failure to build an [`crate::isa::Instruction`] from a word or from fields.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum InstructionError {
    /// The opcode field does not name a supported instruction.
    #[error("the opcode {0:#04x} is not a supported instruction")]
    InvalidOpcode(u8),

    /// The word is R-type and its function field is not supported.
    #[error("the R-type function {0:#04x} is not a supported instruction")]
    InvalidFunction(u8),

    /// The word uses the bubble function but is not the all-zero bubble word.
    #[error("{0:#010x} uses the reserved bubble function with non-zero fields")]
    MalformedBubble(u32),

    /// A jump target is not word-aligned.
    #[error("jump target {0:#010x} is not word-aligned")]
    MisalignedTarget(u32),

    /// A jump target does not fit in the 26-bit word index.
    #[error("jump target {0:#010x} exceeds 0x0FFFFFFC")]
    TargetOutOfRange(u32),

    /// The opcode cannot be encoded with the requested instruction format.
    #[error("opcode {opcode} cannot be encoded as a {format} instruction")]
    FormatMismatch {
        /// Opcode that was supplied.
        opcode: Opcode,
        /// Format that was requested.
        format: &'static str,
    },
}

/// Failure to read an instruction from program memory.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ProgramError {
    /// The address is not a multiple of the word size.
    #[error("instruction address {0:#010x} is not word-aligned")]
    Misaligned(u32),

    /// The address lies past the end of the loaded program.
    #[error("instruction address {0:#010x} is outside the program")]
    OutOfBounds(u32),
}

/// Misuse of the system clock or its providers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ClockError {
    /// A provider tried to drive the clock while another provider owns it.
    #[error("the {requested:?} provider does not own the system clock")]
    NotProvider {
        /// Provider that attempted the inversion.
        requested: ProviderKind,
    },

    /// The timed provider was given an interval shorter than one millisecond.
    #[error("clock interval {0:?} is shorter than 1 ms")]
    IntervalTooShort(Duration),

    /// A timed-provider operation was requested while the manual provider owns the clock.
    #[error("the system clock is not driven by a timed provider")]
    NotTimed,
}

/// Failure to turn assembler output into a program.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The listing could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A line of the listing is not a machine word.
    #[error("line {line}: {message}")]
    Parse {
        /// One-based line number.
        line: usize,
        /// Description of the problem.
        message: String,
    },

    /// A word was produced but is not a valid instruction.
    #[error("word {index} ({word:#010x}): {source}")]
    Instruction {
        /// Zero-based position of the word in the program.
        index: usize,
        /// The offending word.
        word: u32,
        /// Why the word was rejected.
        #[source]
        source: InstructionError,
    },

    /// The assembler reported errors instead of producing words.
    #[error("assembler reported {} error(s): {}", .0.len(), .0.join("; "))]
    Assembler(Vec<String>),
}

/// Invalid simulator configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration text is not valid JSON for [`crate::Config`].
    #[error("invalid configuration: {0}")]
    Json(#[from] serde_json::Error),

    /// A numeric field lies outside its permitted range.
    #[error("{field} = {value} is outside {min}..={max}")]
    OutOfRange {
        /// Dotted name of the field.
        field: &'static str,
        /// Value that was supplied.
        value: u64,
        /// Smallest permitted value.
        min: u64,
        /// Largest permitted value.
        max: u64,
    },
}

/// Top-level error returned by the processor and simulator APIs.
#[derive(Debug, Error)]
pub enum SimError {
    /// The clock refused an inversion.
    #[error(transparent)]
    Clock(#[from] ClockError),

    /// A program could not be loaded.
    #[error(transparent)]
    Load(#[from] LoadError),

    /// The configuration was rejected.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// An operation needs a loaded program.
    #[error("no program is loaded")]
    NoProgram,
}
