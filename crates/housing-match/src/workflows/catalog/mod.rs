//! Agency catalog loading. Catalog data quality problems degrade to defaults;
//! only unreadable or structurally invalid files are errors.

mod bedrooms;
mod normalizer;
mod parser;
mod record;

pub use bedrooms::{parse_bedroom_range, BedroomOffer, BedroomRange, OPEN_BEDROOM_RANGE};
pub use record::{AgencyRecord, MAX_RENT_SENTINEL};

use std::io::Read;
use std::path::Path;
use tracing::{debug, warn};

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read agency catalog: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid agency catalog JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid agency catalog CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("unsupported catalog format '{0}' (expected .json or .csv)")]
    UnsupportedFormat(String),
}

/// Ordered, read-only collection of agency records.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AgencyCatalog {
    agencies: Vec<AgencyRecord>,
}

impl AgencyCatalog {
    pub fn new(agencies: Vec<AgencyRecord>) -> Self {
        Self { agencies }
    }

    pub fn agencies(&self) -> &[AgencyRecord] {
        &self.agencies
    }

    pub fn len(&self) -> usize {
        self.agencies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.agencies.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, AgencyRecord> {
        self.agencies.iter()
    }
}

impl From<Vec<AgencyRecord>> for AgencyCatalog {
    fn from(agencies: Vec<AgencyRecord>) -> Self {
        Self::new(agencies)
    }
}

impl<'a> IntoIterator for &'a AgencyCatalog {
    type Item = &'a AgencyRecord;
    type IntoIter = std::slice::Iter<'a, AgencyRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.agencies.iter()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFormat {
    Json,
    Csv,
}

impl CatalogFormat {
    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();

        match extension.as_str() {
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            _ => Err(CatalogError::UnsupportedFormat(extension)),
        }
    }
}

pub struct CatalogLoader;

impl CatalogLoader {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<AgencyCatalog, CatalogError> {
        let path = path.as_ref();
        let format = CatalogFormat::from_path(path)?;
        let file = std::fs::File::open(path)?;
        let catalog = Self::from_reader(file, format)?;
        debug!(path = %path.display(), agencies = catalog.len(), "agency catalog loaded");
        Ok(catalog)
    }

    pub fn from_reader<R: Read>(
        reader: R,
        format: CatalogFormat,
    ) -> Result<AgencyCatalog, CatalogError> {
        let agencies = match format {
            CatalogFormat::Json => parser::parse_json(reader)?,
            CatalogFormat::Csv => parser::parse_csv(reader)?,
        };

        for agency in &agencies {
            if let Some(offer) = &agency.bedrooms {
                if offer.resolve().is_none() {
                    warn!(
                        organization = agency.display_name(),
                        bedrooms = %offer,
                        "unreadable bedroom offer, treating as 0-10"
                    );
                }
            }
        }

        Ok(AgencyCatalog::new(agencies))
    }
}
