use anyhow::{Context, Result};
use reqwest::blocking::Client;

use super::toi::ToiCatalog;

const TOI_CSV_URL: &str =
    "https://exofop.ipac.caltech.edu/tess/download_toi.php?sort=toi&output=csv";

/// HTTP client for the ExoFOP TOI table download endpoint.
pub struct ExofopClient {
    client: Client,
    url: String,
}

impl ExofopClient {
    pub fn new() -> Result<Self> {
        Self::with_url(TOI_CSV_URL)
    }

    /// Create a client against a non-default endpoint (used by tests).
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

    /// Download and parse the full TOI table. One shot, no retry: the
    /// tool cannot do anything useful without the reference catalog.
    pub fn fetch_toi_catalog(&self) -> Result<ToiCatalog> {
        println!("Loading TOI catalog...");

        let response = self
            .client
            .get(&self.url)
            .send()
            .context("Failed to fetch TOI catalog")?;

        let text = response.text().context("Failed to read TOI catalog response")?;
        let catalog = ToiCatalog::from_csv(text.as_bytes())
            .context("Failed to parse TOI catalog CSV")?;

        println!("Complete.");
        Ok(catalog)
    }
}
