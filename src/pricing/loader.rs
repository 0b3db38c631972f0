use crate::error::PricingError;
use crate::pricing::models::PlanCatalog;
use sha2::{Digest, Sha256};
use std::path::Path;
use tracing::{debug, info};

/// Encoding of a catalog file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFormat {
    Json,
    Toml,
}

impl CatalogFormat {
    /// Infer the format from a file extension, defaulting to JSON
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Self::Toml,
            _ => Self::Json,
        }
    }
}

/// Parse catalog content
pub fn parse_catalog(content: &str, format: CatalogFormat) -> Result<PlanCatalog, PricingError> {
    let catalog: PlanCatalog = match format {
        CatalogFormat::Json => serde_json::from_str(content)?,
        CatalogFormat::Toml => toml::from_str(content)?,
    };

    debug!("Parsed {} plans from {:?} catalog", catalog.len(), format);
    Ok(catalog)
}

/// Read a catalog file, returning the catalog and the hash of its content
pub fn load_catalog_file(path: &Path) -> Result<(PlanCatalog, String), PricingError> {
    info!("Loading pricing catalog from: {}", path.display());

    let content = std::fs::read_to_string(path)?;
    let catalog = parse_catalog(&content, CatalogFormat::from_path(path))?;

    Ok((catalog, calculate_hash(&content)))
}

/// Calculate SHA256 hash of content
pub fn calculate_hash(content: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    format!("{:x}", hasher.finalize())
}
