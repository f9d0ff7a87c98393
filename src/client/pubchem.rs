//! PubChem PUG REST lookup of canonical SMILES by name or CID.

use reqwest::Client;
use serde::Deserialize;
use tracing::info;
use url::Url;

use crate::error::{Result, ServiceError};

/// Client for the PubChem compound property endpoint.
pub struct PubchemClient {
    client: Client,
    base_url: String,
}

#[derive(Deserialize)]
struct PropertyResponse {
    #[serde(rename = "PropertyTable", default)]
    property_table: Option<PropertyTable>,
}

#[derive(Deserialize)]
struct PropertyTable {
    #[serde(rename = "Properties", default)]
    properties: Vec<Property>,
}

#[derive(Deserialize)]
struct Property {
    #[serde(rename = "CanonicalSMILES", default)]
    canonical_smiles: Option<String>,
}

impl PubchemClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Resolve a compound name or numeric CID to its canonical SMILES.
    pub async fn canonical_smiles(&self, query: &str) -> Result<String> {
        let query = query.trim();
        if query.is_empty() {
            return Err(ServiceError::EmptyQuery.into());
        }

        let url = property_url(&self.base_url, query)?;
        info!(url = %url, "querying PubChem");

        let response = self.client.get(url).send().await?;
        if !response.status().is_success() {
            return Err(ServiceError::CompoundNotFound {
                query: query.to_string(),
            }
            .into());
        }

        let body: PropertyResponse = response.json().await?;
        let smiles = body
            .property_table
            .and_then(|t| t.properties.into_iter().next())
            .and_then(|p| p.canonical_smiles);

        smiles.ok_or_else(|| {
            ServiceError::MalformedResponse {
                endpoint: "compound property",
                reason: "no CanonicalSMILES in PropertyTable".to_string(),
            }
            .into()
        })
    }
}

/// Build the property URL: all-digit queries address a CID, anything else
/// a compound name.
fn property_url(base_url: &str, query: &str) -> Result<Url> {
    let namespace = if !query.is_empty() && query.chars().all(|c| c.is_ascii_digit()) {
        "cid"
    } else {
        "name"
    };
    let url = format!("{base_url}/compound/{namespace}/{query}/property/CanonicalSMILES/JSON");
    Ok(Url::parse(&url)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://pubchem.ncbi.nlm.nih.gov/rest/pug";

    #[test]
    fn numeric_query_addresses_a_cid() {
        let url = property_url(BASE, "702").unwrap();
        assert!(url.as_str().contains("/compound/cid/702/"));
    }

    #[test]
    fn name_query_addresses_a_compound_name() {
        let url = property_url(BASE, "aspirin").unwrap();
        assert!(url.as_str().contains("/compound/name/aspirin/"));
    }

    #[test]
    fn mixed_query_is_treated_as_a_name() {
        let url = property_url(BASE, "2-propanol").unwrap();
        assert!(url.as_str().contains("/compound/name/2-propanol/"));
    }

    #[test]
    fn names_with_spaces_are_percent_encoded() {
        let url = property_url(BASE, "acetic acid").unwrap();
        assert!(url.as_str().contains("acetic%20acid"));
    }

    #[test]
    fn property_response_deserializes() {
        let json = r#"{
            "PropertyTable": {
                "Properties": [
                    {"CID": 702, "CanonicalSMILES": "CCO"}
                ]
            }
        }"#;
        let body: PropertyResponse = serde_json::from_str(json).unwrap();
        let smiles = body
            .property_table
            .and_then(|t| t.properties.into_iter().next())
            .and_then(|p| p.canonical_smiles);
        assert_eq!(smiles.as_deref(), Some("CCO"));
    }

    #[test]
    fn response_without_property_table_yields_none() {
        let body: PropertyResponse = serde_json::from_str(r#"{"Fault": {}}"#).unwrap();
        assert!(body.property_table.is_none());
    }

    #[tokio::test]
    async fn empty_query_is_rejected_before_any_request() {
        let client = PubchemClient::new(BASE);
        let err = client.canonical_smiles("   ").await.unwrap_err();
        assert!(err.to_string().contains("query is empty"));
    }
}
