//! Data Memory.
//!
//! Sparse word storage addressed by 32-bit byte address. Addresses that were never
//! written read as zero, and iteration is in ascending address order.

use std::collections::BTreeMap;

/// Sparse data memory.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DataMemory {
    words: BTreeMap<u32, u32>,
}

impl DataMemory {
    /// Creates an empty memory.
    pub const fn new() -> Self {
        Self {
            words: BTreeMap::new(),
        }
    }

    /// Reads the word at `address`, or 0 if it was never written.
    pub fn load_word(&self, address: u32) -> u32 {
        self.words.get(&address).copied().unwrap_or(0)
    }

    /// Writes `value` at `address`.
    pub fn store_word(&mut self, address: u32, value: u32) {
        let _ = self.words.insert(address, value);
    }

    /// Removes every stored word.
    pub fn clear(&mut self) {
        self.words.clear();
    }

    /// Number of addresses that have been written.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns `true` if nothing has been written.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterates over written words in ascending address order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        self.words.iter().map(|(&address, &value)| (address, value))
    }
}
