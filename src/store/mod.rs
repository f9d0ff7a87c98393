//! Persistence layer with pluggable storage backends.
//!
//! History is one ordered JSON sequence in a single named slot. Backends
//! expose get/set/remove of slot text; [`HistoryStore`] owns the encoding
//! and the fail-closed read path.

mod file;
mod memory;

pub use file::FileBackend;
pub use memory::MemoryBackend;

use tracing::warn;

use crate::domain::{PredictionRecord, ResultEntry};
use crate::error::{Result, StoreError};

/// Slot name holding the prediction history sequence.
pub const HISTORY_SLOT: &str = "history";

/// Keyed text storage for durable slots.
///
/// `get` fails closed: a backend that cannot read a slot reports it as
/// absent rather than erroring. Writes and removals surface their errors.
pub trait StorageBackend: Send + Sync {
    /// Read the slot text, `None` if the slot is absent or unreadable.
    fn get(&self, key: &str) -> Option<String>;

    /// Overwrite the slot text. Must not leave a partial value visible to
    /// a subsequent `get`.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Remove the slot. Removing an absent slot is not an error.
    fn remove(&self, key: &str) -> Result<()>;
}

/// Ordered, append-only prediction history over a [`StorageBackend`].
pub struct HistoryStore<B> {
    backend: B,
    slot: String,
}

impl<B: StorageBackend> HistoryStore<B> {
    pub fn new(backend: B) -> Self {
        Self::with_slot(backend, HISTORY_SLOT)
    }

    pub fn with_slot(backend: B, slot: impl Into<String>) -> Self {
        Self {
            backend,
            slot: slot.into(),
        }
    }

    /// Load the full history sequence.
    ///
    /// An absent slot or one holding data that does not parse as a record
    /// sequence yields an empty history; parse failures are logged, never
    /// returned.
    pub fn load(&self) -> Vec<PredictionRecord> {
        let Some(text) = self.backend.get(&self.slot) else {
            return Vec::new();
        };
        match serde_json::from_str(&text) {
            Ok(records) => records,
            Err(e) => {
                warn!(slot = %self.slot, error = %e, "malformed history slot, treating as empty");
                Vec::new()
            }
        }
    }

    /// Overwrite the slot with the full sequence.
    pub fn save(&self, records: &[PredictionRecord]) -> Result<()> {
        let text = serde_json::to_string(records).map_err(StoreError::Encode)?;
        self.backend.set(&self.slot, &text)
    }

    /// Append the successful entries of a batch, preserving order.
    ///
    /// Error-marked entries are dropped. Returns how many records were
    /// persisted.
    pub fn append(&self, entries: Vec<ResultEntry>) -> Result<usize> {
        let mut records = self.load();
        let before = records.len();
        records.extend(entries.into_iter().filter_map(ResultEntry::into_record));
        self.save(&records)?;
        Ok(records.len() - before)
    }

    /// Reset the slot to the empty-sequence representation.
    pub fn clear(&self) -> Result<()> {
        self.backend.remove(&self.slot)
    }
}
