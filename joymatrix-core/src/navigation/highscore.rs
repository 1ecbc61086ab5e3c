//! Highscore persistence
//!
//! The record is postcard-encoded under [`StorageKey::Highscore`]. A
//! missing or unreadable record reads as empty so the screen always has
//! something to show.

use serde::{Deserialize, Serialize};

use crate::state::GameOutcome;
use crate::traits::{KeyValueStore, StorageError, StorageKey};

/// Maximum serialized record size
pub const MAX_RECORD_SIZE: usize = 16;

/// Best score and win count
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct HighscoreRecord {
    /// Best score ever reached
    pub score: u32,
    /// Games won
    pub games_won: u16,
}

impl HighscoreRecord {
    /// Fold a finished game into the record
    ///
    /// Returns `true` if the record changed.
    pub fn record(&mut self, outcome: GameOutcome, score: u32) -> bool {
        let mut changed = false;
        if score > self.score {
            self.score = score;
            changed = true;
        }
        if outcome == GameOutcome::Won {
            self.games_won = self.games_won.saturating_add(1);
            changed = true;
        }
        changed
    }

    /// Load the record, reading errors as an empty record
    pub fn load<S: KeyValueStore>(store: &mut S) -> Self {
        match Self::try_load(store) {
            Ok(record) => record,
            Err(StorageError::NotFound) => Self::default(),
            Err(e) => {
                warn!("Highscore unreadable: {:?}", e);
                Self::default()
            }
        }
    }

    /// Load the record, reporting why it could not be read
    ///
    /// A record that fails to decode is [`StorageError::Corrupted`].
    pub fn try_load<S: KeyValueStore>(store: &mut S) -> Result<Self, StorageError> {
        let mut buffer = [0u8; MAX_RECORD_SIZE];
        let len = store.load(StorageKey::Highscore, &mut buffer)?;
        postcard::from_bytes(&buffer[..len]).map_err(|_| StorageError::Corrupted)
    }

    /// Store the record
    pub fn save<S: KeyValueStore>(&self, store: &mut S) -> Result<(), StorageError> {
        let mut buffer = [0u8; MAX_RECORD_SIZE];
        let bytes =
            postcard::to_slice(self, &mut buffer).map_err(|_| StorageError::BufferTooSmall)?;
        store.save(StorageKey::Highscore, bytes)
    }
}
