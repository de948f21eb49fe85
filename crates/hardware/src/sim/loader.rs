//! Program Loader.
//!
//! This module connects an assembler to program memory. It performs:
//! 1. **Assembly:** An [`Assembler`] turns a source path into machine words or a list of
//!    diagnostics.
//! 2. **Listings:** [`ListingAssembler`] reads text files of hex words, one per line.
//! 3. **Validation:** [`load_program`] wraps the words into instructions, rejecting any
//!    word with an unsupported opcode or function.

use std::fs;
use std::path::Path;

use crate::common::error::LoadError;
use crate::soc::memory::ProgramMemory;

/// Prefix of a diagnostic line in a listing.
const ERROR_PREFIX: &str = "error:";

/// Produces machine words from a source file.
pub trait Assembler {
    /// Assembles the file at `path`.
    ///
    /// # Errors
    ///
    /// [`LoadError::Assembler`] with the assembler's messages, or any error raised while
    /// reading the source.
    fn assemble(&self, path: &Path) -> Result<Vec<u32>, LoadError>;
}

/// Reads listings of already-assembled machine words.
///
/// Each non-blank line holds one 32-bit word in hexadecimal, with or without a `0x`
/// prefix. Text after `#` or `;` is a comment. Lines beginning with `error:` are
/// diagnostics; if any are present the listing is rejected with all of them.
#[derive(Clone, Copy, Debug, Default)]
pub struct ListingAssembler;

impl ListingAssembler {
    /// Parses listing text.
    ///
    /// # Errors
    ///
    /// [`LoadError::Assembler`] if the listing carries diagnostics, otherwise
    /// [`LoadError::Parse`] for the first line that is not a word.
    pub fn parse(text: &str) -> Result<Vec<u32>, LoadError> {
        let mut words = Vec::new();
        let mut diagnostics = Vec::new();
        let mut first_bad_line = None;

        for (index, raw) in text.lines().enumerate() {
            let line = raw.trim();
            if let Some(message) = line.strip_prefix(ERROR_PREFIX) {
                diagnostics.push(message.trim().to_owned());
                continue;
            }
            let line = line
                .split(['#', ';'])
                .next()
                .unwrap_or_default()
                .trim();
            if line.is_empty() {
                continue;
            }
            match parse_word(line) {
                Ok(word) => words.push(word),
                Err(message) => {
                    if first_bad_line.is_none() {
                        first_bad_line = Some(LoadError::Parse {
                            line: index + 1,
                            message,
                        });
                    }
                }
            }
        }

        if !diagnostics.is_empty() {
            return Err(LoadError::Assembler(diagnostics));
        }
        first_bad_line.map_or(Ok(words), Err)
    }
}

impl Assembler for ListingAssembler {
    fn assemble(&self, path: &Path) -> Result<Vec<u32>, LoadError> {
        let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text)
    }
}

fn parse_word(token: &str) -> Result<u32, String> {
    let digits = token
        .strip_prefix("0x")
        .or_else(|| token.strip_prefix("0X"))
        .unwrap_or(token)
        .replace('_', "");
    if digits.is_empty()
        || digits.len() > 8
        || !digits.bytes().all(|b| b.is_ascii_hexdigit())
    {
        return Err(format!("`{token}` is not a 32-bit hex word"));
    }
    u32::from_str_radix(&digits, 16).map_err(|e| format!("`{token}`: {e}"))
}

/// Assembles `path` and builds program memory from the result.
///
/// # Errors
///
/// Any [`LoadError`] from the assembler, or [`LoadError::Instruction`] for the first
/// word that is not a supported instruction.
pub fn load_program(assembler: &impl Assembler, path: &Path) -> Result<ProgramMemory, LoadError> {
    let words = assembler.assemble(path)?;
    let program = ProgramMemory::from_words(&words)?;
    tracing::debug!(path = %path.display(), words = program.len(), "program assembled");
    Ok(program)
}
