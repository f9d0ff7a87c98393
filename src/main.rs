use clap::Parser;

use solq::cli::{self, output, CheckCommand, Cli, Commands, ConfigCommand, HistoryCommand};
use solq::config::Config;
use solq::error::Result;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    // Logging reads the default config location; a broken file falls back
    // to defaults so `config validate` can still run against it.
    Config::load_or_default(cli::paths::default_config())
        .unwrap_or_default()
        .init_logging();

    if let Err(e) = run(cli).await {
        output::error(&e.to_string());
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Predict(args) => cli::predict::execute(args).await,
        Commands::Search(args) => cli::search::execute(args).await,
        Commands::History(cmd) => match cmd {
            HistoryCommand::Show(args) => cli::history::execute_show(args),
            HistoryCommand::Repeat(args) => cli::history::execute_repeat(args).await,
            HistoryCommand::Export(args) => cli::history::execute_export(args),
            HistoryCommand::Clear(args) => cli::history::execute_clear(args),
        },
        Commands::Config(cmd) => match cmd {
            ConfigCommand::Init(args) => cli::config::execute_init(args),
            ConfigCommand::Show(args) => cli::config::execute_show(args),
            ConfigCommand::Validate(args) => cli::config::execute_validate(args),
        },
        Commands::Check(cmd) => match cmd {
            CheckCommand::Config(args) => cli::check::execute_config(args),
            CheckCommand::Service(args) => cli::check::execute_service(args).await,
        },
    }
}
