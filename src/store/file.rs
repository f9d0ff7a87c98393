//! File-backed slot storage under the application home directory.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::warn;

use super::StorageBackend;
use crate::error::{Result, StoreError};

/// One file per slot: `<dir>/<key>.json`.
///
/// Writes go through a temp file in the same directory followed by a
/// rename, so a reader never observes a partially written slot.
#[derive(Debug, Clone)]
pub struct FileBackend {
    dir: PathBuf,
}

impl FileBackend {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn slot_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }

    fn temp_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!(".{key}.json.tmp"))
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl StorageBackend for FileBackend {
    fn get(&self, key: &str) -> Option<String> {
        match fs::read_to_string(self.slot_path(key)) {
            Ok(text) => Some(text),
            Err(e) if e.kind() == ErrorKind::NotFound => None,
            Err(e) => {
                warn!(key, error = %e, "failed to read slot, treating as absent");
                None
            }
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let write = || -> std::io::Result<()> {
            fs::create_dir_all(&self.dir)?;
            let tmp = self.temp_path(key);
            fs::write(&tmp, value)?;
            fs::rename(&tmp, self.slot_path(key))
        };
        write().map_err(|source| {
            StoreError::Write {
                slot: key.to_string(),
                source,
            }
            .into()
        })
    }

    fn remove(&self, key: &str) -> Result<()> {
        match fs::remove_file(self.slot_path(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(source) => Err(StoreError::Clear {
                slot: key.to_string(),
                source,
            }
            .into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ResultEntry;
    use crate::store::HistoryStore;

    fn entry(smiles: &str) -> ResultEntry {
        ResultEntry {
            smiles: smiles.to_string(),
            prediction: Some(-1.5),
            solubility: None,
            solubility_class: Some("Средняя растворимость".to_string()),
            image: None,
            error: None,
        }
    }

    #[test]
    fn history_survives_store_reopen() {
        let dir = tempfile::tempdir().unwrap();

        let store = HistoryStore::new(FileBackend::new(dir.path()));
        store.append(vec![entry("CCO")]).unwrap();
        drop(store);

        let reopened = HistoryStore::new(FileBackend::new(dir.path()));
        let records = reopened.load();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].smiles, "CCO");
    }

    #[test]
    fn missing_slot_file_loads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = HistoryStore::new(FileBackend::new(dir.path()));
        assert!(store.load().is_empty());
    }

    #[test]
    fn corrupt_slot_file_loads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("history.json"), "][").unwrap();

        let store = HistoryStore::new(FileBackend::new(dir.path()));
        assert!(store.load().is_empty());
    }

    #[test]
    fn clear_removes_the_slot_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = HistoryStore::new(FileBackend::new(dir.path()));
        store.append(vec![entry("CCO")]).unwrap();
        assert!(dir.path().join("history.json").exists());

        store.clear().unwrap();
        assert!(!dir.path().join("history.json").exists());
        assert!(store.load().is_empty());
    }

    #[test]
    fn set_creates_missing_directories() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");

        let backend = FileBackend::new(&nested);
        backend.set("history", "[]").unwrap();
        assert_eq!(backend.get("history").as_deref(), Some("[]"));
    }

    #[test]
    fn no_temp_file_left_behind_after_set() {
        let dir = tempfile::tempdir().unwrap();
        let backend = FileBackend::new(dir.path());
        backend.set("history", "[]").unwrap();
        assert!(!dir.path().join(".history.json.tmp").exists());
    }
}
