//! Disassembler Format Tests.

use pipesim_core::isa::Instruction;
use rstest::rstest;

#[rstest]
#[case(0x0000_0000, "bubble")]
#[case(0x0109_5021, "addu $t2, $t0, $t1")]
#[case(0x0109_5023, "subu $t2, $t0, $t1")]
#[case(0x0109_5027, "nor $t2, $t0, $t1")]
#[case(0x0109_5004, "sllv $t2, $t1, $t0")]
#[case(0x0109_5007, "srav $t2, $t1, $t0")]
#[case(0x2408_0005, "addiu $t0, $zero, 5")]
#[case(0x2408_FFFE, "addiu $t0, $zero, -2")]
#[case(0x3128_00FF, "andi $t0, $t1, 255")]
#[case(0x8C08_0000, "lw $t0, 0($zero)")]
#[case(0xAFBF_FFFC, "sw $ra, -4($sp)")]
#[case(0x1109_FFFF, "beq $t0, $t1, -1")]
#[case(0x0800_0008, "j 0x0000020")]
fn renders_assembly(#[case] word: u32, #[case] text: &str) {
    let inst = Instruction::new(word).expect("valid word");
    assert_eq!(inst.to_string(), text);
}
