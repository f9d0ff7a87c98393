//! Handler for the `search` command.

use super::{output, predict, SearchArgs};
use crate::client::{PredictionClient, PubchemClient};
use crate::config::Config;
use crate::error::Result;

/// Execute `search`: resolve a name or CID to SMILES, optionally predict.
pub async fn execute(args: SearchArgs) -> Result<()> {
    let config = Config::load_or_default(&args.config)?;
    let pubchem = PubchemClient::new(config.pubchem.base_url.clone());

    let pb = output::spinner(&format!("Searching PubChem for '{}'...", args.query));
    let smiles = match pubchem.canonical_smiles(&args.query).await {
        Ok(smiles) => {
            output::spinner_success(&pb, &format!("found {}", args.query));
            smiles
        }
        Err(e) => {
            output::spinner_fail(&pb, "PubChem search failed");
            return Err(e);
        }
    };

    output::field("SMILES", &smiles);

    if args.predict {
        let model = predict::resolve_model(&config, args.model.as_deref())?;
        let client = PredictionClient::new(config.service.base_url.clone());
        predict::run_batch(&client, &model, &[smiles], &args.data_dir).await
    } else {
        output::note(&format!("run `solq predict '{smiles}'` to predict it"));
        Ok(())
    }
}
