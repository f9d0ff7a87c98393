//! Solq - command-line front end for solubility prediction services.
//!
//! This crate batches SMILES input to an external log-solubility (logS)
//! prediction service, renders each batch, and keeps a durable local
//! history of successful predictions that can be re-rendered, replayed,
//! exported to CSV, and cleared.
//!
//! # Modules
//!
//! - [`cli`] - Command definitions and handlers
//! - [`client`] - HTTP clients for the prediction service and PubChem
//! - [`config`] - Configuration loading from TOML files
//! - [`domain`] - Prediction records and solubility classification
//! - [`error`] - Error types for the crate
//! - [`export`] - CSV encoding of history records
//! - [`render`] - Terminal rendering of results and history cards
//! - [`store`] - History persistence with pluggable storage backends
//!
//! # Example
//!
//! ```no_run
//! use solq::store::{HistoryStore, MemoryBackend};
//!
//! let store = HistoryStore::new(MemoryBackend::new());
//! assert!(store.load().is_empty());
//! ```

pub mod cli;
pub mod client;
pub mod config;
pub mod domain;
pub mod error;
pub mod export;
pub mod render;
pub mod store;
