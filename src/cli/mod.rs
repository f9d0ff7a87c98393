//! Command-line interface definitions.

pub mod check;
pub mod config;
pub mod history;
pub mod output;
pub mod paths;
pub mod predict;
pub mod search;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Solq - command-line front end for solubility prediction services.
#[derive(Parser, Debug)]
#[command(name = "solq")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Predict log-solubility for SMILES input and record the results
    Predict(PredictArgs),

    /// Look up a compound's SMILES on PubChem by name or CID
    Search(SearchArgs),

    /// Inspect, replay, export, or clear the prediction history
    #[command(subcommand)]
    History(HistoryCommand),

    /// Manage configuration
    #[command(subcommand)]
    Config(ConfigCommand),

    /// Run diagnostic checks
    #[command(subcommand)]
    Check(CheckCommand),
}

/// Subcommands for `solq history`
#[derive(Subcommand, Debug)]
pub enum HistoryCommand {
    /// Show all recorded predictions as cards
    Show(HistoryArgs),
    /// Re-run the prediction for a recorded entry
    Repeat(RepeatArgs),
    /// Export the history (or a single record) to CSV
    Export(ExportArgs),
    /// Delete all recorded predictions
    Clear(ClearArgs),
}

/// Subcommands for `solq config`
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Generate a configuration file from the built-in template
    Init(ConfigInitArgs),
    /// Display the effective configuration with defaults applied
    Show(ConfigPathArg),
    /// Validate a configuration file
    Validate(ConfigPathArg),
}

/// Subcommands for `solq check`
#[derive(Subcommand, Debug)]
pub enum CheckCommand {
    /// Validate the configuration file
    Config(ConfigPathArg),
    /// Probe the prediction service endpoint
    Service(ConfigPathArg),
}

/// Shared argument for commands that only need a config path.
#[derive(Parser, Debug)]
pub struct ConfigPathArg {
    /// Path to configuration file
    #[arg(short, long, default_value_os_t = paths::default_config())]
    pub config: PathBuf,
}

/// Arguments for the `predict` subcommand.
#[derive(Parser, Debug)]
pub struct PredictArgs {
    /// SMILES strings to predict
    pub smiles: Vec<String>,

    /// Read additional newline-separated SMILES from a file
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Convert a MOL file via the service and include the result
    #[arg(long)]
    pub mol: Option<PathBuf>,

    /// Override the configured model selector (old, new)
    #[arg(short, long)]
    pub model: Option<String>,

    /// Path to configuration file
    #[arg(short, long, default_value_os_t = paths::default_config())]
    pub config: PathBuf,

    /// Directory holding the history slot
    #[arg(long, default_value_os_t = paths::home_dir())]
    pub data_dir: PathBuf,
}

/// Arguments for the `search` subcommand.
#[derive(Parser, Debug)]
pub struct SearchArgs {
    /// Compound name or numeric PubChem CID
    pub query: String,

    /// Predict the resolved SMILES immediately
    #[arg(short, long)]
    pub predict: bool,

    /// Override the configured model selector (old, new)
    #[arg(short, long)]
    pub model: Option<String>,

    /// Path to configuration file
    #[arg(short, long, default_value_os_t = paths::default_config())]
    pub config: PathBuf,

    /// Directory holding the history slot
    #[arg(long, default_value_os_t = paths::home_dir())]
    pub data_dir: PathBuf,
}

/// Arguments for `history show`.
#[derive(Parser, Debug)]
pub struct HistoryArgs {
    /// Directory holding the history slot
    #[arg(long, default_value_os_t = paths::home_dir())]
    pub data_dir: PathBuf,
}

/// Arguments for `history repeat`.
#[derive(Parser, Debug)]
pub struct RepeatArgs {
    /// Position of the record to re-run (as shown by `history show`)
    pub index: usize,

    /// Override the configured model selector (old, new)
    #[arg(short, long)]
    pub model: Option<String>,

    /// Path to configuration file
    #[arg(short, long, default_value_os_t = paths::default_config())]
    pub config: PathBuf,

    /// Directory holding the history slot
    #[arg(long, default_value_os_t = paths::home_dir())]
    pub data_dir: PathBuf,
}

/// Arguments for `history export`.
#[derive(Parser, Debug)]
pub struct ExportArgs {
    /// Export only the record at this position
    #[arg(long)]
    pub index: Option<usize>,

    /// Output file path (defaults to history.csv / history_item_<n>.csv)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Directory holding the history slot
    #[arg(long, default_value_os_t = paths::home_dir())]
    pub data_dir: PathBuf,
}

/// Arguments for `history clear`.
#[derive(Parser, Debug)]
pub struct ClearArgs {
    /// Skip the confirmation prompt
    #[arg(long)]
    pub yes: bool,

    /// Directory holding the history slot
    #[arg(long, default_value_os_t = paths::home_dir())]
    pub data_dir: PathBuf,
}

/// Arguments for `config init`.
#[derive(Parser, Debug)]
pub struct ConfigInitArgs {
    /// Output path for the generated configuration file
    #[arg(default_value_os_t = paths::default_config())]
    pub path: PathBuf,

    /// Overwrite the file if it already exists
    #[arg(long)]
    pub force: bool,
}
