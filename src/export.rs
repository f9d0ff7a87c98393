//! CSV export of the prediction history.

use crate::domain::PredictionRecord;
use crate::error::ExportError;

/// Fixed header row shared by full and single-record exports.
const HEADER: &str = "SMILES,prediction,solubility,solubility_class";

/// Default filename for a full history export.
pub const EXPORT_ALL_FILENAME: &str = "history.csv";

/// Default filename for a single-record export at `index`.
pub fn export_one_filename(index: usize) -> String {
    format!("history_item_{index}.csv")
}

/// Encode the full history: header plus one row per record, in store order.
pub fn encode_all(records: &[PredictionRecord]) -> String {
    let mut csv = String::from(HEADER);
    csv.push('\n');
    for record in records {
        csv.push_str(&encode_row(record));
        csv.push('\n');
    }
    csv
}

/// Encode a single record addressed by its position in the sequence.
///
/// The index is positional, not an identity: it is only meaningful against
/// the current store order.
pub fn encode_one(
    records: &[PredictionRecord],
    index: usize,
) -> Result<String, ExportError> {
    let record = records.get(index).ok_or(ExportError::RecordNotFound {
        index,
        len: records.len(),
    })?;
    let mut csv = String::from(HEADER);
    csv.push('\n');
    csv.push_str(&encode_row(record));
    csv.push('\n');
    Ok(csv)
}

fn encode_row(record: &PredictionRecord) -> String {
    let prediction = record
        .prediction
        .map(|p| format!("{p:.2}"))
        .unwrap_or_default();
    [
        field(&record.smiles),
        prediction,
        field(record.solubility.as_deref().unwrap_or_default()),
        field(record.solubility_class.as_deref().unwrap_or_default()),
    ]
    .join(",")
}

/// Quote a field per RFC 4180 when it embeds a delimiter, quote, or
/// newline; pass it through verbatim otherwise.
fn field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
