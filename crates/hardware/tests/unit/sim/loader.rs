//! Loader Tests.

use std::io::Write;
use std::path::Path;

use pipesim_core::common::LoadError;
use pipesim_core::isa::Opcode;
use pipesim_core::sim::{Assembler, ListingAssembler, load_program};
use pretty_assertions::assert_eq;
use tempfile::NamedTempFile;

fn listing(text: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp file");
    file.write_all(text.as_bytes()).expect("write listing");
    file
}

/// Hands out a fixed set of words regardless of path.
struct Canned(Vec<u32>);

impl Assembler for Canned {
    fn assemble(&self, _path: &Path) -> Result<Vec<u32>, LoadError> {
        Ok(self.0.clone())
    }
}

#[test]
fn listing_with_comments_loads() {
    let file = listing(
        "# add two constants\n\
         24080005   ; addiu $t0, $zero, 5\n\
         \n\
         0x24090003\n\
         0x0109_5021 # addu $t2, $t0, $t1\n",
    );
    let program = load_program(&ListingAssembler, file.path()).expect("valid listing");
    assert_eq!(program.len(), 3);
    let opcodes: Vec<_> = program.iter().map(|(_, inst)| inst.opcode()).collect();
    assert_eq!(opcodes, vec![Opcode::Addiu, Opcode::Addiu, Opcode::RType]);
}

#[test]
fn diagnostics_win_over_words() {
    let text = "24080005\nerror: unknown mnemonic `addx`\nzz\nerror:   bad register\n";
    match ListingAssembler::parse(text) {
        Err(LoadError::Assembler(messages)) => {
            assert_eq!(messages, vec!["unknown mnemonic `addx`", "bad register"]);
        }
        other => panic!("expected diagnostics, got {other:?}"),
    }
}

#[test]
fn first_bad_line_is_reported() {
    match ListingAssembler::parse("24080005\n\n123456789\nqq\n") {
        Err(LoadError::Parse { line, message }) => {
            assert_eq!(line, 3);
            assert!(message.contains("123456789"), "{message}");
        }
        other => panic!("expected a parse error, got {other:?}"),
    }
}

#[test]
fn signed_tokens_are_not_words() {
    for text in ["24080005\n+5\n", "24080005\n0x+5\n"] {
        assert!(
            matches!(ListingAssembler::parse(text), Err(LoadError::Parse { line: 2, .. })),
            "{text:?}"
        );
    }
}

#[test]
fn invalid_instruction_is_located() {
    let err = load_program(&Canned(vec![0x2408_0005, 0x0000_0001]), Path::new("canned"))
        .unwrap_err();
    assert!(
        matches!(err, LoadError::Instruction { index: 1, word: 1, .. }),
        "{err}"
    );
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("missing.hex");
    let err = load_program(&ListingAssembler, &path).unwrap_err();
    match err {
        LoadError::Io { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("expected an I/O error, got {other}"),
    }
}
