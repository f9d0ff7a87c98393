use serde::Deserialize;
use std::path::Path;
use tracing_subscriber::EnvFilter;
use url::Url;

use crate::error::{ConfigError, Result};

/// Model selectors understood by the prediction service.
pub const MODELS: &[&str] = &["old", "new"];

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    pub service: ServiceConfig,
    pub pubchem: PubchemConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Base URL of the solubility prediction service.
    pub base_url: String,
    /// Default model selector sent with predictions.
    pub model: String,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct PubchemConfig {
    /// PubChem PUG REST base URL.
    pub base_url: String,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        let config: Config = toml::from_str(&content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Load the config file, falling back to defaults when it is absent.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        if path.as_ref().exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.service.base_url.is_empty() {
            return Err(ConfigError::MissingField {
                field: "service.base_url",
            }
            .into());
        }
        Url::parse(&self.service.base_url).map_err(|e| ConfigError::InvalidValue {
            field: "service.base_url",
            reason: e.to_string(),
        })?;

        if self.pubchem.base_url.is_empty() {
            return Err(ConfigError::MissingField {
                field: "pubchem.base_url",
            }
            .into());
        }
        Url::parse(&self.pubchem.base_url).map_err(|e| ConfigError::InvalidValue {
            field: "pubchem.base_url",
            reason: e.to_string(),
        })?;

        if !MODELS.contains(&self.service.model.as_str()) {
            return Err(ConfigError::InvalidValue {
                field: "service.model",
                reason: format!(
                    "'{}' is not one of: {}",
                    self.service.model,
                    MODELS.join(", ")
                ),
            }
            .into());
        }

        Ok(())
    }

    /// Install the global tracing subscriber from the `[logging]` section.
    ///
    /// `RUST_LOG` takes precedence over the configured level.
    pub fn init_logging(&self) {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(self.logging.level.clone()));

        if self.logging.format == "json" {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .json()
                .init();
        } else {
            tracing_subscriber::fmt().with_env_filter(filter).init();
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            service: ServiceConfig::default(),
            pubchem: PubchemConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:5000".into(),
            model: "old".into(),
        }
    }
}

impl Default for PubchemConfig {
    fn default() -> Self {
        Self {
            base_url: "https://pubchem.ncbi.nlm.nih.gov/rest/pug".into(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: "pretty".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_validates() {
        Config::default().validate().unwrap();
    }

    #[test]
    fn bundled_template_parses_and_validates() {
        let config: Config = toml::from_str(include_str!("../config.toml.example")).unwrap();
        config.validate().unwrap();
    }

    #[test]
    fn partial_config_falls_back_to_section_defaults() {
        let config: Config = toml::from_str(
            "[service]\nbase_url = \"http://predict.internal:8080\"\nmodel = \"new\"\n",
        )
        .unwrap();
        assert_eq!(config.service.base_url, "http://predict.internal:8080");
        assert_eq!(config.service.model, "new");
        assert_eq!(config.logging.level, "info");
        config.validate().unwrap();
    }

    #[test]
    fn unknown_model_is_rejected() {
        let config: Config =
            toml::from_str("[service]\nmodel = \"quantum\"\n").unwrap();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("service.model"));
    }

    #[test]
    fn empty_base_url_is_rejected() {
        let config: Config = toml::from_str("[service]\nbase_url = \"\"\n").unwrap();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("service.base_url"));
    }

    #[test]
    fn unparseable_base_url_is_rejected() {
        let config: Config =
            toml::from_str("[pubchem]\nbase_url = \"not a url\"\n").unwrap();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("pubchem.base_url"));
    }

    #[test]
    fn load_or_default_on_missing_file_uses_defaults() {
        let config = Config::load_or_default("/nonexistent/solq-config.toml").unwrap();
        assert_eq!(config.service.model, "old");
    }
}
