//! The in-memory target table and its edit operations.
//!
//! Rows are keyed by TOI when one exists, otherwise by TIC; duplicates
//! are allowed to accumulate. Manually added targets store their name
//! in the TOI slot, so removal and commenting key on it like any TOI.

use anyhow::{anyhow, bail, Context, Result};

use crate::catalog::ToiCatalog;
use crate::lookup::ObjectLookup;
use crate::prompt::Prompt;

/// Angular search radius (degrees) for TIC cone searches. Tight enough
/// to isolate the named star from its neighbours.
pub const TIC_SEARCH_RADIUS_DEG: f64 = 0.00013;

/// One observation target in the user's list.
#[derive(Debug, Clone, PartialEq)]
pub struct Target {
    /// TOI number as a decimal string (e.g. "101.01"), or the name of a
    /// manually added target. `None` for TIC-only targets.
    pub toi: Option<String>,
    /// TIC ID as a string, or the manual target's name.
    pub tic: Option<String>,
    pub ra: String,
    pub dec: String,
    /// Magnitudes are kept as entered; manual input is not validated.
    pub vmag: String,
    pub kmag: String,
    pub sg3: Option<f64>,
    pub planet_radius: Option<f64>,
    pub teff: Option<f64>,
    /// Free text, never absent; defaults to "".
    pub comment: String,
}

/// Ordered table of targets. One per process; owned exclusively.
#[derive(Debug, Default)]
pub struct Starlist {
    targets: Vec<Target>,
}

impl Starlist {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a list from pre-built rows. Comments are reset to empty:
    /// seeded rows come from catalog searches and carry no user notes.
    pub fn from_targets(targets: Vec<Target>) -> Self {
        let targets = targets
            .into_iter()
            .map(|mut t| {
                t.comment = String::new();
                t
            })
            .collect();
        Self { targets }
    }

    pub fn targets(&self) -> &[Target] {
        &self.targets
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    /// Add a target by hand (e.g. not a TOI). All fields are collected
    /// interactively; no catalog or network lookup. SG3 and planet
    /// radius default to 0.
    pub fn add_manual(&mut self, prompt: &mut dyn Prompt) -> Result<()> {
        let name = prompt.ask("Name of target (no spaces)")?;
        let ra = prompt.ask("RA (colon separated)")?;
        let dec = prompt.ask("Dec (colon separated)")?;
        let vmag = prompt.ask(&format!("V mag of {}", name))?;
        let kmag = prompt.ask(&format!("K mag of {}", name))?;
        let teff = prompt.ask(&format!("Effective Temperature of {}", name))?;
        let comment = prompt.ask("Provide additional comments")?;

        let teff: f64 = teff
            .trim()
            .parse()
            .with_context(|| format!("Effective temperature '{}' is not numeric", teff))?;

        self.targets.push(Target {
            toi: Some(name.clone()),
            tic: Some(name),
            ra,
            dec,
            vmag,
            kmag,
            sg3: Some(0.0),
            planet_radius: Some(0.0),
            teff: Some(teff),
            comment,
        });

        Ok(())
    }

    /// Add a target from the loaded TOI catalog, filling in V and K
    /// magnitudes from a TIC cone search. Exactly one of `toi`/`tic`
    /// must be given.
    pub fn add_from_catalog(
        &mut self,
        catalog: &ToiCatalog,
        lookup: &dyn ObjectLookup,
        toi: Option<f64>,
        tic: Option<u64>,
        comment: Option<String>,
    ) -> Result<()> {
        let row = match (toi, tic) {
            (Some(_), Some(_)) | (None, None) => bail!("Provide either TOI or TIC."),
            (Some(toi), None) => catalog
                .find_by_toi(toi)
                .ok_or_else(|| anyhow!("TOI {} not found in TOI catalog", toi))?,
            (None, Some(tic)) => catalog
                .find_by_tic(tic)
                .ok_or_else(|| anyhow!("TIC {} not found in TOI catalog", tic))?,
        };

        let query_name = format!("TIC {}", row.tic);
        let matches = lookup.query_object(&query_name, TIC_SEARCH_RADIUS_DEG, "TIC")?;
        let best = matches
            .into_iter()
            .next()
            .ok_or_else(|| anyhow!("no TIC match for '{}'", query_name))?;

        self.targets.push(Target {
            toi: row.toi.map(|t| t.to_string()),
            tic: Some(row.tic.to_string()),
            ra: row.ra.clone(),
            dec: row.dec.clone(),
            vmag: format_mag(best.vmag),
            kmag: format_mag(best.kmag),
            sg3: row.sg3,
            planet_radius: row.planet_radius,
            teff: row.stellar_teff,
            comment: comment.unwrap_or_default(),
        });

        Ok(())
    }

    /// Remove every row whose TOI key equals `toi`. Removing a key with
    /// no matches leaves the table unchanged.
    pub fn remove(&mut self, toi: &str) {
        self.targets.retain(|t| t.toi.as_deref() != Some(toi));
    }

    /// Overwrite the comment on every row whose TOI key equals `toi`.
    /// Silent no-op when nothing matches.
    pub fn add_comment(&mut self, toi: &str, prompt: &mut dyn Prompt) -> Result<()> {
        let comment = prompt.ask(&format!("Provide comment for {}", toi))?;

        for target in self
            .targets
            .iter_mut()
            .filter(|t| t.toi.as_deref() == Some(toi))
        {
            target.comment = comment.clone();
        }

        Ok(())
    }
}

/// Pandas-parity stringification: a missing magnitude renders "nan".
fn format_mag(mag: Option<f64>) -> String {
    match mag {
        Some(v) => v.to_string(),
        None => "nan".to_string(),
    }
}
