//! Handlers for the `check` command group.

use super::{output, ConfigPathArg};
use crate::client::PredictionClient;
use crate::config::Config;
use crate::error::Result;

/// Execute `check config`.
pub fn execute_config(args: ConfigPathArg) -> Result<()> {
    let config = Config::load(&args.config)?;
    output::success(&format!("{} is valid", args.config.display()));
    output::field("service", &config.service.base_url);
    output::field("model", &config.service.model);
    Ok(())
}

/// Execute `check service`: probe the prediction service endpoint.
pub async fn execute_service(args: ConfigPathArg) -> Result<()> {
    let config = Config::load_or_default(&args.config)?;
    let client = PredictionClient::new(config.service.base_url.clone());

    let pb = output::spinner(&format!("Probing {}...", config.service.base_url));
    match client.ping().await {
        Ok(status) if (200..400).contains(&status) => {
            output::spinner_success(&pb, &format!("service reachable (HTTP {status})"));
            Ok(())
        }
        Ok(status) => {
            output::spinner_fail(&pb, &format!("service responded with HTTP {status}"));
            output::note("The service is reachable but unhealthy.");
            Ok(())
        }
        Err(e) => {
            output::spinner_fail(&pb, "service unreachable");
            Err(e)
        }
    }
}
