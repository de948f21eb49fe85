//! Program Counter.
//!
//! A negative-edge register holding the address of the next instruction to fetch.
//! The next value is chosen by the control unit's PC source and held while a data
//! hazard stalls the pipeline.

use crate::clock::Polarity;
use crate::core::pipeline::traits::ClockedComponent;

/// The program counter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ProgramCounter {
    address: u32,
    next: u32,
}

impl ProgramCounter {
    /// Creates a program counter at address 0.
    pub const fn new() -> Self {
        Self { address: 0, next: 0 }
    }

    /// Current address.
    pub const fn address(&self) -> u32 {
        self.address
    }

    /// Address that will become current on the next commit.
    pub const fn pending(&self) -> u32 {
        self.next
    }

    pub(crate) const fn latch(&mut self, next: u32) {
        self.next = next;
    }
}

impl ClockedComponent for ProgramCounter {
    fn polarity(&self) -> Polarity {
        Polarity::Negative
    }

    fn change_outputs(&mut self) -> bool {
        let changed = self.next != self.address;
        self.address = self.next;
        changed
    }

    fn reset(&mut self) {
        *self = Self::new();
    }
}
