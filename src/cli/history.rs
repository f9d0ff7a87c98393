//! Handlers for the `history` command group.

use dialoguer::Confirm;

use super::{output, predict, ClearArgs, ExportArgs, HistoryArgs, RepeatArgs};
use crate::client::PredictionClient;
use crate::config::Config;
use crate::error::{ExportError, Result};
use crate::export;
use crate::render;
use crate::store::{FileBackend, HistoryStore, StorageBackend};

/// Execute `history show`.
pub fn execute_show(args: HistoryArgs) -> Result<()> {
    let store = HistoryStore::new(FileBackend::new(&args.data_dir));
    let records = store.load();

    output::section("Prediction History");
    print!("{}", render::history_view(&records));
    Ok(())
}

/// Execute `history repeat <index>`: re-run the prediction for a record.
pub async fn execute_repeat(args: RepeatArgs) -> Result<()> {
    let store = HistoryStore::new(FileBackend::new(&args.data_dir));
    let records = store.load();
    let record = records.get(args.index).ok_or(ExportError::RecordNotFound {
        index: args.index,
        len: records.len(),
    })?;
    let smiles = record.smiles.clone();
    output::field("repeating", &smiles);

    let config = Config::load_or_default(&args.config)?;
    let model = predict::resolve_model(&config, args.model.as_deref())?;
    let client = PredictionClient::new(config.service.base_url.clone());
    predict::run_batch(&client, &model, &[smiles], &args.data_dir).await
}

/// Execute `history export [--index N] [--output FILE]`.
pub fn execute_export(args: ExportArgs) -> Result<()> {
    let store = HistoryStore::new(FileBackend::new(&args.data_dir));
    let records = store.load();

    let (csv, default_name) = match args.index {
        Some(index) => {
            let csv = export::encode_one(&records, index)?;
            (csv, export::export_one_filename(index))
        }
        None => {
            if records.is_empty() {
                return Err(ExportError::EmptyHistory.into());
            }
            (
                export::encode_all(&records),
                export::EXPORT_ALL_FILENAME.to_string(),
            )
        }
    };

    let path = args
        .output
        .unwrap_or_else(|| std::path::PathBuf::from(default_name));
    std::fs::write(&path, &csv)?;
    output::success(&format!(
        "Exported {} record(s) to {}",
        csv.lines().count() - 1,
        path.display()
    ));
    Ok(())
}

/// Execute `history clear [--yes]`.
pub fn execute_clear(args: ClearArgs) -> Result<()> {
    let store = HistoryStore::new(FileBackend::new(&args.data_dir));
    let records = store.load();

    if records.is_empty() {
        output::note("History is already empty.");
        return Ok(());
    }

    let confirmed = args.yes
        || Confirm::new()
            .with_prompt(format!(
                "Clear all {} history record(s)? This cannot be undone",
                records.len()
            ))
            .default(false)
            .interact()?;

    if clear_if_confirmed(&store, confirmed)? {
        output::success("History cleared");
    } else {
        output::note("Aborted, history unchanged.");
    }
    Ok(())
}

/// Clear gate: the store is only touched when confirmation was given.
/// Returns whether a clear happened.
pub(crate) fn clear_if_confirmed<B: StorageBackend>(
    store: &HistoryStore<B>,
    confirmed: bool,
) -> Result<bool> {
    if !confirmed {
        return Ok(false);
    }
    store.clear()?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ResultEntry;
    use crate::store::MemoryBackend;

    fn populated_store() -> HistoryStore<MemoryBackend> {
        let store = HistoryStore::new(MemoryBackend::new());
        store
            .append(vec![ResultEntry {
                smiles: "CCO".to_string(),
                prediction: Some(-0.77),
                solubility: None,
                solubility_class: None,
                image: None,
                error: None,
            }])
            .unwrap();
        store
    }

    #[test]
    fn declined_confirmation_leaves_history_untouched() {
        let store = populated_store();
        let cleared = clear_if_confirmed(&store, false).unwrap();
        assert!(!cleared);
        assert_eq!(store.load().len(), 1);
    }

    #[test]
    fn confirmed_clear_empties_history() {
        let store = populated_store();
        let cleared = clear_if_confirmed(&store, true).unwrap();
        assert!(cleared);
        assert!(store.load().is_empty());
    }
}
