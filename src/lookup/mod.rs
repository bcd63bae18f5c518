pub mod mast;

pub use mast::*;

use anyhow::Result;

/// One match from an object-catalog cone search. Only the photometry
/// the starlist needs, plus the ID for messages.
#[derive(Debug, Clone, Default)]
pub struct TicMatch {
    pub id: Option<u64>,
    pub vmag: Option<f64>,
    pub kmag: Option<f64>,
}

/// External object-catalog query service. The real implementation talks
/// to MAST; tests substitute fixture data.
pub trait ObjectLookup {
    /// Cone search around a named object. `radius_deg` is the angular
    /// search radius in degrees; `catalog` names the catalog to search
    /// (this tool only ever passes "TIC").
    fn query_object(&self, name: &str, radius_deg: f64, catalog: &str) -> Result<Vec<TicMatch>>;
}
