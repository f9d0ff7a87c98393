use thiserror::Error;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

/// History store errors. Reads fail closed to an empty history and never
/// surface here; writes do.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("failed to encode history: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("failed to write history slot '{slot}': {source}")]
    Write {
        slot: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to clear history slot '{slot}': {source}")]
    Clear {
        slot: String,
        #[source]
        source: std::io::Error,
    },
}

/// Export errors surfaced to the user instead of producing a file.
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("record {index} not found: history has {len} record(s)")]
    RecordNotFound { index: usize, len: usize },

    #[error("history is empty: nothing to export")]
    EmptyHistory,
}

/// Errors from the prediction service and PubChem boundaries.
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("no SMILES input provided")]
    EmptyBatch,

    #[error("search query is empty")]
    EmptyQuery,

    #[error("prediction service returned {status}: {message}")]
    Rejected { status: u16, message: String },

    #[error("no compound found in PubChem for '{query}'")]
    CompoundNotFound { query: String },

    #[error("unexpected response from {endpoint}: {reason}")]
    MalformedResponse {
        endpoint: &'static str,
        reason: String,
    },
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Export(#[from] ExportError),

    #[error(transparent)]
    Service(#[from] ServiceError),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("URL parse error: {0}")]
    Url(#[from] url::ParseError),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<dialoguer::Error> for Error {
    fn from(err: dialoguer::Error) -> Self {
        // dialoguer::Error wraps an IO error
        Error::Io(std::io::Error::other(err.to_string()))
    }
}
