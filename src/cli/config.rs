//! Handlers for the `config` command group.

use std::fs;

use super::{output, ConfigInitArgs, ConfigPathArg};
use crate::config::Config;
use crate::error::{ConfigError, Result};

/// Default config template written by `config init`.
const CONFIG_TEMPLATE: &str = include_str!("../../config.toml.example");

/// Execute `config init`.
pub fn execute_init(args: ConfigInitArgs) -> Result<()> {
    if args.path.exists() && !args.force {
        return Err(ConfigError::InvalidValue {
            field: "path",
            reason: format!(
                "{} already exists (use --force to overwrite)",
                args.path.display()
            ),
        }
        .into());
    }

    if let Some(parent) = args.path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&args.path, CONFIG_TEMPLATE)?;
    output::success(&format!("Wrote {}", args.path.display()));
    output::note("Edit service.base_url to point at your prediction service.");
    Ok(())
}

/// Execute `config show`.
pub fn execute_show(args: ConfigPathArg) -> Result<()> {
    let config = Config::load_or_default(&args.config)?;

    output::section("Service");
    output::field("base_url", &config.service.base_url);
    output::field("model", &config.service.model);

    output::section("PubChem");
    output::field("base_url", &config.pubchem.base_url);

    output::section("Logging");
    output::field("level", &config.logging.level);
    output::field("format", &config.logging.format);
    Ok(())
}

/// Execute `config validate`.
pub fn execute_validate(args: ConfigPathArg) -> Result<()> {
    Config::load(&args.config)?;
    output::success(&format!("{} is valid", args.config.display()));
    Ok(())
}
