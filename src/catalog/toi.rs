use anyhow::{Context, Result};
use serde::Deserialize;
use std::io::Read;

/// One row of the ExoFOP TOI table.
///
/// Only the columns this tool consumes are kept; the download carries
/// dozens more, which the CSV reader skips. Numeric vetting fields can
/// be blank for fresh TOIs, hence the `Option`s.
#[derive(Debug, Clone, Deserialize)]
pub struct ToiRow {
    #[serde(rename = "TIC ID")]
    pub tic: u64,

    #[serde(rename = "TOI")]
    pub toi: Option<f64>,

    #[serde(rename = "RA")]
    pub ra: String,

    #[serde(rename = "Dec")]
    pub dec: String,

    #[serde(rename = "SG3", default)]
    pub sg3: Option<f64>,

    #[serde(rename = "Planet Radius (R_Earth)", default)]
    pub planet_radius: Option<f64>,

    #[serde(rename = "Stellar Eff Temp (K)", default)]
    pub stellar_teff: Option<f64>,
}

/// The loaded TOI reference table. Immutable for the process lifetime.
pub struct ToiCatalog {
    rows: Vec<ToiRow>,
}

impl ToiCatalog {
    /// Parse a comma-delimited TOI table with a header row.
    pub fn from_csv(reader: impl Read) -> Result<Self> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let mut rows = Vec::new();
        for record in csv_reader.deserialize() {
            let row: ToiRow = record.context("Failed to parse TOI catalog row")?;
            rows.push(row);
        }

        Ok(Self { rows })
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Find the catalog row for a TOI number (e.g. 101.01).
    pub fn find_by_toi(&self, toi: f64) -> Option<&ToiRow> {
        self.rows.iter().find(|r| r.toi == Some(toi))
    }

    /// Find the first catalog row for a TIC ID. Multi-planet systems have
    /// one row per TOI sharing the TIC; the first carries the host fields.
    pub fn find_by_tic(&self, tic: u64) -> Option<&ToiRow> {
        self.rows.iter().find(|r| r.tic == tic)
    }
}
