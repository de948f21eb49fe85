//! Operand Forwarding Tests.

use pipesim_core::common::Register::{T0, T1, Zero};
use pipesim_core::core::pipeline::hazards::{forward_source, resolve_operand};
use pipesim_core::core::pipeline::latches::{ExMemLatch, MemWbLatch};
use pipesim_core::core::pipeline::signals::ForwardSource;

use crate::common::{ExMemBuilder, MemWbBuilder};

#[test]
fn no_producer_uses_the_register_file() {
    let source = forward_source(T0, &ExMemLatch::default(), &MemWbLatch::default());
    assert_eq!(source, ForwardSource::Decode);
    assert_eq!(
        resolve_operand(source, 42, &ExMemLatch::default(), &MemWbLatch::default()),
        42
    );
}

#[test]
fn execute_wins_over_memory() {
    let ex_mem = ExMemBuilder::new().writes(T0, 3).build();
    let mem_wb = MemWbBuilder::new().writes(T0, 5).build();
    let source = forward_source(T0, &ex_mem, &mem_wb);
    assert_eq!(source, ForwardSource::Execute);
    assert_eq!(resolve_operand(source, 0, &ex_mem, &mem_wb), 3);
}

#[test]
fn memory_forwards_alu_result_or_loaded_word() {
    let ex_mem = ExMemBuilder::new().writes(T1, 3).build();

    let computed = MemWbBuilder::new().writes(T0, 5).build();
    assert_eq!(forward_source(T0, &ex_mem, &computed), ForwardSource::Memory);
    assert_eq!(resolve_operand(ForwardSource::Memory, 0, &ex_mem, &computed), 5);

    let loaded = MemWbBuilder::new().loaded(T0, 7).build();
    assert_eq!(resolve_operand(ForwardSource::Memory, 0, &ex_mem, &loaded), 7);
}

#[test]
fn producers_without_reg_write_are_ignored() {
    let mut ex_mem = ExMemBuilder::new().writes(T0, 3).build();
    ex_mem.signals.reg_write = false;
    assert_eq!(
        forward_source(T0, &ex_mem, &MemWbLatch::default()),
        ForwardSource::Decode
    );
}

#[test]
fn bubbles_never_forward_zero_register() {
    // Bubble entries carry `$zero` as destination but no RegWrite.
    assert_eq!(
        forward_source(Zero, &ExMemLatch::default(), &MemWbLatch::default()),
        ForwardSource::Decode
    );
}
