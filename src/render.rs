//! Terminal rendering of prediction results and history cards.
//!
//! Views are built as strings so re-rendering the same records yields the
//! same output; the CLI handlers print them verbatim.

use owo_colors::OwoColorize;

use crate::domain::{PredictionRecord, ResultEntry, SolubilityBucket};

const RULE_WIDTH: usize = 56;

/// Indicator shown instead of a card list when the store is empty.
pub const EMPTY_HISTORY: &str = "History is empty.";

/// Render the persistent history as one card per record, in store order.
pub fn history_view(records: &[PredictionRecord]) -> String {
    if records.is_empty() {
        return format!("  {}\n", EMPTY_HISTORY.dimmed());
    }

    let mut out = String::new();
    for (index, record) in records.iter().enumerate() {
        out.push_str(&record_card(record, Some(index)));
        out.push_str(&format!("{}\n", "─".repeat(RULE_WIDTH).dimmed()));
    }
    out.push_str(&format!(
        "  {}\n",
        format!(
            "{} record(s). `solq history repeat <index>` re-runs one, `solq history export` saves CSV.",
            records.len()
        )
        .dimmed()
    ));
    out
}

/// Render a batch response: the ephemeral current-results view.
///
/// Unlike history, this shows every entry, including per-item failures.
pub fn results_view(entries: &[ResultEntry]) -> String {
    let mut out = String::new();
    for entry in entries {
        match &entry.error {
            Some(message) => {
                let smiles = if entry.smiles.is_empty() {
                    "N/A"
                } else {
                    entry.smiles.as_str()
                };
                out.push_str(&format!(
                    "  {} {}: {}\n",
                    "×".red(),
                    smiles,
                    message.red()
                ));
            }
            None => {
                let record = PredictionRecord {
                    smiles: entry.smiles.clone(),
                    prediction: entry.prediction,
                    solubility: entry.solubility.clone(),
                    solubility_class: entry.solubility_class.clone(),
                    image: entry.image.clone(),
                };
                out.push_str(&record_card(&record, None));
            }
        }
    }
    out
}

fn record_card(record: &PredictionRecord, index: Option<usize>) -> String {
    let mut card = String::new();

    match index {
        Some(i) => card.push_str(&format!(
            "  {} {}\n",
            format!("[{i}]").dimmed(),
            record.smiles.bold()
        )),
        None => card.push_str(&format!("  {}\n", record.smiles.bold())),
    }

    let prediction = record
        .prediction
        .map(|p| format!("{p:.2}"))
        .unwrap_or_else(|| "N/A".to_string());
    card.push_str(&format!("      {:<12} {}\n", "logS".dimmed(), prediction));

    card.push_str(&format!(
        "      {:<12} {}\n",
        "solubility".dimmed(),
        record.solubility.as_deref().unwrap_or("N/A")
    ));

    card.push_str(&format!(
        "      {:<12} {}\n",
        "class".dimmed(),
        styled_class(record)
    ));

    if let Some(image) = &record.image {
        card.push_str(&format!(
            "      {:<12} {}\n",
            "depiction".dimmed(),
            describe_image(image).dimmed()
        ));
    }

    card
}

fn styled_class(record: &PredictionRecord) -> String {
    let label = record.solubility_class.as_deref().unwrap_or("N/A");
    match record.bucket() {
        SolubilityBucket::High => label.green().to_string(),
        SolubilityBucket::Medium => label.yellow().to_string(),
        SolubilityBucket::Low => label.red().to_string(),
        SolubilityBucket::Neutral => label.to_string(),
    }
}

/// Summarize an image URI instead of dumping base64 into the terminal.
fn describe_image(uri: &str) -> String {
    match uri.split_once(',') {
        Some((header, payload)) if header.starts_with("data:") => {
            let mime = header
                .trim_start_matches("data:")
                .split(';')
                .next()
                .unwrap_or("unknown");
            format!("{mime} ({} bytes encoded)", payload.len())
        }
        _ => uri.to_string(),
    }
}
