//! Handler for the `predict` command.

use std::path::Path;

use tracing::debug;

use super::{output, PredictArgs};
use crate::client::PredictionClient;
use crate::config::{Config, MODELS};
use crate::error::{ConfigError, Result, ServiceError};
use crate::render;
use crate::store::{FileBackend, HistoryStore};

/// Execute `predict`.
pub async fn execute(args: PredictArgs) -> Result<()> {
    let config = Config::load_or_default(&args.config)?;
    let model = resolve_model(&config, args.model.as_deref())?;
    let client = PredictionClient::new(config.service.base_url.clone());

    let mut smiles = collect_smiles(&args)?;
    if let Some(mol) = &args.mol {
        let converted = client.convert_mol(mol).await?;
        output::field("from MOL", &converted);
        smiles.push(converted);
    }
    if smiles.is_empty() {
        return Err(ServiceError::EmptyBatch.into());
    }

    run_batch(&client, &model, &smiles, &args.data_dir).await
}

/// Issue one batch, render the current results, and record the successes.
///
/// Shared by `predict`, `search --predict`, and `history repeat`. The
/// rendered batch always includes failed items; only successes reach the
/// history store.
pub(crate) async fn run_batch(
    client: &PredictionClient,
    model: &str,
    smiles: &[String],
    data_dir: &Path,
) -> Result<()> {
    let pb = output::spinner(&format!("Predicting {} molecule(s)...", smiles.len()));
    let entries = match client.predict(smiles, model).await {
        Ok(entries) => {
            output::spinner_success(&pb, &format!("{} result(s) received", entries.len()));
            entries
        }
        Err(e) => {
            output::spinner_fail(&pb, "prediction request failed");
            return Err(e);
        }
    };

    output::section("Results");
    print!("{}", render::results_view(&entries));

    let failed = entries.iter().filter(|e| e.is_error()).count();
    let store = HistoryStore::new(FileBackend::new(data_dir));
    let kept = store.append(entries)?;
    debug!(kept, failed, "batch recorded");

    if failed > 0 {
        output::warning(&format!("{failed} item(s) failed and were not recorded"));
    }
    if kept > 0 {
        output::success(&format!("{kept} result(s) added to history"));
    }
    Ok(())
}

/// Pick the model selector: CLI override, then config default.
pub(crate) fn resolve_model(config: &Config, override_model: Option<&str>) -> Result<String> {
    let model = override_model.unwrap_or(&config.service.model);
    if !MODELS.contains(&model) {
        return Err(ConfigError::InvalidValue {
            field: "model",
            reason: format!("'{model}' is not one of: {}", MODELS.join(", ")),
        }
        .into());
    }
    Ok(model.to_string())
}

/// Gather SMILES from positional args and the optional input file,
/// trimming and skipping blank lines.
fn collect_smiles(args: &PredictArgs) -> Result<Vec<String>> {
    let mut list: Vec<String> = args
        .smiles
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect();

    if let Some(path) = &args.input {
        let content = std::fs::read_to_string(path)?;
        list.extend(
            content
                .lines()
                .map(str::trim)
                .filter(|l| !l.is_empty())
                .map(String::from),
        );
    }

    Ok(list)
}
