//! Domain types: prediction records and solubility classification.

mod record;

pub use record::{PredictionRecord, ResultEntry, SolubilityBucket};
