//! Encode/Decode Properties.
//!
//! For every valid opcode and function combination, building an instruction from
//! fields and reading the fields back yields the same values, and revalidating the
//! raw word yields the same instruction.

use pipesim_core::common::Register;
use pipesim_core::isa::{Function, Instruction, Opcode};
use proptest::prelude::*;

fn register() -> impl Strategy<Value = Register> {
    (0_usize..32).prop_map(|index| Register::ALL[index])
}

fn function() -> impl Strategy<Value = Function> {
    prop::sample::select(Function::OPERATIONS.to_vec())
}

fn i_opcode() -> impl Strategy<Value = Opcode> {
    prop::sample::select(
        Opcode::ALL
            .into_iter()
            .filter(|op| !matches!(op, Opcode::RType | Opcode::J))
            .collect::<Vec<_>>(),
    )
}

proptest! {
    #[test]
    fn r_type_round_trips(f in function(), rd in register(), rs in register(), rt in register()) {
        let inst = Instruction::r_type(f, rd, rs, rt).expect("valid R-type");
        prop_assert_eq!(inst.function(), Some(f));
        prop_assert_eq!((inst.rd(), inst.rs(), inst.rt()), (rd, rs, rt));
        prop_assert_eq!(Instruction::new(inst.raw()), Ok(inst));
    }

    #[test]
    fn i_type_round_trips(op in i_opcode(), rt in register(), rs in register(), imm in any::<i16>()) {
        let inst = Instruction::i_type(op, rt, rs, imm).expect("valid I-type");
        prop_assert_eq!(inst.opcode(), op);
        prop_assert_eq!((inst.rt(), inst.rs(), inst.immediate()), (rt, rs, imm));
        prop_assert_eq!(inst.sign_extended_immediate(), i32::from(imm) as u32);
        prop_assert_eq!(Instruction::new(inst.raw()), Ok(inst));
    }

    #[test]
    fn j_type_round_trips(index in 0_u32..=0x03FF_FFFF) {
        let target = index << 2;
        let inst = Instruction::j_type(target).expect("aligned, in range");
        prop_assert_eq!(inst.opcode(), Opcode::J);
        prop_assert_eq!(inst.target(), target);
    }

    #[test]
    fn validation_agrees_with_opcode_table(word in any::<u32>()) {
        let opcode_bits = (word >> 26) as u8;
        match Instruction::new(word) {
            Ok(inst) => {
                prop_assert_eq!(inst.raw(), word);
                prop_assert_eq!(inst.opcode().bits(), opcode_bits);
            }
            Err(_) => {
                let r_type_ok = opcode_bits == 0
                    && Function::OPERATIONS.iter().any(|f| f.bits() == (word & 0x3F) as u8);
                prop_assert!(
                    Opcode::from_bits(opcode_bits).is_none() || (opcode_bits == 0 && !r_type_ok),
                    "rejected a word with a supported encoding: {:#010x}", word
                );
            }
        }
    }
}
