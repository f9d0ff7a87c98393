//! In-memory backend implementation for testing.

use std::collections::HashMap;

use parking_lot::RwLock;

use super::StorageBackend;
use crate::error::Result;

/// In-memory slot storage for testing purposes.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    slots: RwLock<HashMap<String, String>>,
}

impl MemoryBackend {
    /// Create a new empty memory backend.
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageBackend for MemoryBackend {
    fn get(&self, key: &str) -> Option<String> {
        self.slots.read().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.slots
            .write()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.slots.write().remove(key);
        Ok(())
    }
}
