//! Path utilities for solq.
//!
//! All data lives under `~/.solq/`:
//! - `~/.solq/config.toml` - main configuration
//! - `~/.solq/history.json` - prediction history slot

use std::path::PathBuf;

/// Returns the solq home directory (`~/.solq/`).
pub fn home_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".solq")
}

/// Returns the default config file path (`~/.solq/config.toml`).
pub fn default_config() -> PathBuf {
    home_dir().join("config.toml")
}
