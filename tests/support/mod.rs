use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

/// Temporary data directory holding a history slot for integration tests.
pub struct TempDataDir {
    path: PathBuf,
}

impl TempDataDir {
    pub fn create(name: &str) -> Self {
        let mut path = std::env::temp_dir();
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos();
        path.push(format!("solq-{name}-{nanos}"));
        std::fs::create_dir_all(&path).expect("create temp data dir");
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write raw slot text, bypassing the store, to set up fixtures.
    pub fn seed_history(&self, json: &str) {
        std::fs::write(self.path.join("history.json"), json).expect("seed history slot");
    }

    pub fn history_file(&self) -> PathBuf {
        self.path.join("history.json")
    }
}

impl Drop for TempDataDir {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.path);
    }
}
