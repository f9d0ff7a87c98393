//! HTTP boundary with the prediction service.
//!
//! The service is an opaque collaborator: one `POST /predict` per batch,
//! `POST /upload_mol` for MOL conversion. Response entries come back in
//! input order, each either a prediction or a per-item error.

mod pubchem;

pub use pubchem::PubchemClient;

use std::path::Path;

use reqwest::Client;
use serde::Serialize;
use tracing::{debug, info};

use crate::domain::ResultEntry;
use crate::error::{Result, ServiceError};

/// Client for the solubility prediction service.
pub struct PredictionClient {
    client: Client,
    base_url: String,
}

#[derive(Serialize)]
struct PredictRequest<'a> {
    smiles: &'a [String],
    model: &'a str,
}

#[derive(serde::Deserialize)]
struct ErrorBody {
    error: String,
}

#[derive(serde::Deserialize)]
struct MolResponse {
    #[serde(default)]
    smiles: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

impl PredictionClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Predict log-solubility for a batch of SMILES strings.
    ///
    /// An empty batch is rejected before any request is issued. A non-2xx
    /// response aborts the whole batch; per-item failures come back as
    /// error entries inside a 2xx response and are the caller's to
    /// partition.
    pub async fn predict(&self, smiles: &[String], model: &str) -> Result<Vec<ResultEntry>> {
        if smiles.is_empty() {
            return Err(ServiceError::EmptyBatch.into());
        }

        let url = format!("{}/predict", self.base_url);
        info!(url = %url, batch = smiles.len(), model, "requesting predictions");

        let response = self
            .client
            .post(&url)
            .json(&PredictRequest { smiles, model })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<ErrorBody>()
                .await
                .map(|b| b.error)
                .unwrap_or_else(|_| status.to_string());
            return Err(ServiceError::Rejected {
                status: status.as_u16(),
                message,
            }
            .into());
        }

        let entries: Vec<ResultEntry> = response.json().await?;
        debug!(count = entries.len(), "received prediction entries");
        Ok(entries)
    }

    /// Upload a MOL file and get back the SMILES the service extracted.
    pub async fn convert_mol(&self, path: &Path) -> Result<String> {
        let bytes = tokio::fs::read(path).await?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "structure.mol".to_string());

        let part = reqwest::multipart::Part::bytes(bytes).file_name(file_name);
        let form = reqwest::multipart::Form::new().part("file", part);

        let url = format!("{}/upload_mol", self.base_url);
        info!(url = %url, "uploading MOL file");

        let response = self.client.post(&url).multipart(form).send().await?;
        let status = response.status();
        let body: MolResponse = response.json().await?;

        if let Some(message) = body.error {
            return Err(ServiceError::Rejected {
                status: status.as_u16(),
                message,
            }
            .into());
        }
        body.smiles.ok_or_else(|| {
            ServiceError::MalformedResponse {
                endpoint: "/upload_mol",
                reason: "response carries neither smiles nor error".to_string(),
            }
            .into()
        })
    }

    /// Probe the service root, returning the HTTP status code.
    pub async fn ping(&self) -> Result<u16> {
        let response = self.client.get(&self.base_url).send().await?;
        Ok(response.status().as_u16())
    }
}
