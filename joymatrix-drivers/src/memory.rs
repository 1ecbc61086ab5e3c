//! RAM-backed key-value store
//!
//! Keeps values for the lifetime of the program. Useful on boards without
//! spare EEPROM and as a stand-in on the host.

use heapless::Vec;
use joymatrix_core::traits::{KeyValueStore, StorageError, StorageKey};

/// Key-value store in RAM, `N` bytes per value
pub struct MemoryStore<const N: usize> {
    slots: [Option<Vec<u8, N>>; StorageKey::COUNT],
}

impl<const N: usize> Default for MemoryStore<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> MemoryStore<N> {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            slots: core::array::from_fn(|_| None),
        }
    }

    /// Forget a value
    pub fn remove(&mut self, key: StorageKey) {
        self.slots[key.as_u8() as usize] = None;
    }

    /// Check if a value is stored
    pub fn contains(&self, key: StorageKey) -> bool {
        self.slots[key.as_u8() as usize].is_some()
    }
}

impl<const N: usize> KeyValueStore for MemoryStore<N> {
    fn load(&mut self, key: StorageKey, buffer: &mut [u8]) -> Result<usize, StorageError> {
        let value = self.slots[key.as_u8() as usize]
            .as_ref()
            .ok_or(StorageError::NotFound)?;
        let out = buffer
            .get_mut(..value.len())
            .ok_or(StorageError::BufferTooSmall)?;
        out.copy_from_slice(value);
        Ok(value.len())
    }

    fn save(&mut self, key: StorageKey, data: &[u8]) -> Result<(), StorageError> {
        let value = Vec::from_slice(data).map_err(|_| StorageError::Full)?;
        self.slots[key.as_u8() as usize] = Some(value);
        Ok(())
    }
}
