//! Persistent key-value storage trait
//!
//! The backing medium (EEPROM, flash, RAM) is the board's concern. Values
//! are opaque byte strings; callers encode them with postcard.

/// Storage keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum StorageKey {
    /// Tuning configuration (postcard `DeviceConfig`)
    DeviceConfig = 0,
    /// Best score and win count (postcard `HighscoreRecord`)
    Highscore = 1,
}

impl StorageKey {
    /// Number of keys
    pub const COUNT: usize = 2;

    /// Get the key as a byte value
    pub fn as_u8(self) -> u8 {
        self as u8
    }

    /// Create a key from a byte value
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(StorageKey::DeviceConfig),
            1 => Some(StorageKey::Highscore),
            _ => None,
        }
    }
}

/// Errors from storage operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StorageError {
    /// Medium read or write failed
    Io,
    /// Key not found
    NotFound,
    /// Buffer too small for the data
    BufferTooSmall,
    /// Data corrupted or undecodable
    Corrupted,
    /// Storage is full
    Full,
}

/// Key-value storage
pub trait KeyValueStore {
    /// Read a value by key into `buffer`
    ///
    /// Returns the number of bytes read.
    fn load(&mut self, key: StorageKey, buffer: &mut [u8]) -> Result<usize, StorageError>;

    /// Write a value by key, replacing any previous value
    fn save(&mut self, key: StorageKey, data: &[u8]) -> Result<(), StorageError>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for &mut T {
    fn load(&mut self, key: StorageKey, buffer: &mut [u8]) -> Result<usize, StorageError> {
        (**self).load(key, buffer)
    }

    fn save(&mut self, key: StorageKey, data: &[u8]) -> Result<(), StorageError> {
        (**self).save(key, data)
    }
}
