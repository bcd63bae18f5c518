use anyhow::{anyhow, Context, Result};
use reqwest::blocking::Client;
use serde::Deserialize;
use serde_json::json;

use super::{ObjectLookup, TicMatch};

const MAST_INVOKE_URL: &str = "https://mast.stsci.edu/api/v0/invoke";

#[derive(Debug, Deserialize)]
struct ResolvedCoordinate {
    ra: f64,
    decl: f64,
}

#[derive(Debug, Deserialize)]
struct NameLookupResponse {
    #[serde(rename = "resolvedCoordinate", default)]
    resolved: Vec<ResolvedCoordinate>,
}

#[derive(Debug, Deserialize)]
struct ConeRow {
    #[serde(rename = "ID")]
    id: Option<u64>,
    #[serde(rename = "Vmag")]
    vmag: Option<f64>,
    #[serde(rename = "Kmag")]
    kmag: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct ConeResponse {
    #[serde(default)]
    data: Vec<ConeRow>,
}

/// Client for the MAST invoke API. Resolves the object name to a
/// position, then cone-searches the requested catalog around it.
pub struct MastClient {
    client: Client,
    url: String,
}

impl MastClient {
    pub fn new() -> Result<Self> {
        Self::with_url(MAST_INVOKE_URL)
    }

    pub fn with_url(url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .user_agent("toi-starlist")
            .build()
            .context("Failed to create HTTP client")?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }

    fn invoke(&self, request: serde_json::Value) -> Result<String> {
        let response = self
            .client
            .post(&self.url)
            .form(&[("request", request.to_string())])
            .send()
            .context("Failed to query MAST")?;

        response.text().context("Failed to read MAST response")
    }

    fn resolve_name(&self, name: &str) -> Result<ResolvedCoordinate> {
        let request = json!({
            "service": "Mast.Name.Lookup",
            "params": { "input": name, "format": "json" },
        });

        let text = self.invoke(request)?;
        let parsed: NameLookupResponse =
            serde_json::from_str(&text).context("Failed to parse MAST name lookup response")?;

        parsed
            .resolved
            .into_iter()
            .next()
            .ok_or_else(|| anyhow!("MAST could not resolve object '{}'", name))
    }
}

impl ObjectLookup for MastClient {
    fn query_object(&self, name: &str, radius_deg: f64, catalog: &str) -> Result<Vec<TicMatch>> {
        let position = self.resolve_name(name)?;

        let request = json!({
            "service": format!("Mast.Catalogs.{}.Cone", service_case(catalog)),
            "params": {
                "ra": position.ra,
                "dec": position.decl,
                "radius": radius_deg,
            },
            "format": "json",
        });

        let text = self.invoke(request)?;
        let parsed: ConeResponse =
            serde_json::from_str(&text).context("Failed to parse MAST cone search response")?;

        Ok(parsed
            .data
            .into_iter()
            .map(|row| TicMatch {
                id: row.id,
                vmag: row.vmag,
                kmag: row.kmag,
            })
            .collect())
    }
}

/// "TIC" -> "Tic", matching MAST service naming.
fn service_case(catalog: &str) -> String {
    let mut chars = catalog.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}
