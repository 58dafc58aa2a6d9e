//! Errors raised while ingesting reference data.
//!
//! Shopper actions never fail with these: filters that match nothing, ignored
//! quantity updates, and unknown regions are ordinary states. `StorefrontError`
//! covers the one real fault path, loading a catalog or region table that is
//! unreadable or inconsistent.

use std::path::PathBuf;

use crocco_core::{ProductId, RegionId, SubRegionId};
use thiserror::Error;

/// Error type for catalog and region-table ingestion.
#[derive(Debug, Error)]
pub enum StorefrontError {
    /// Reading a data file failed.
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON data could not be parsed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML data could not be parsed.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// The file extension is neither JSON nor YAML.
    #[error("Unsupported data format: {}", .0.display())]
    UnsupportedFormat(PathBuf),

    /// Two products share an id.
    #[error("Duplicate product id: {0}")]
    DuplicateProduct(ProductId),

    /// Two regions share an id.
    #[error("Duplicate region id: {0}")]
    DuplicateRegion(RegionId),

    /// A sub-region id appears twice in the table.
    #[error("Duplicate sub-region id: {0}")]
    DuplicateSubRegion(SubRegionId),

    /// A sub-region names a parent region that does not exist.
    #[error("Sub-region {subregion} references unknown region {region}")]
    OrphanSubRegion {
        subregion: SubRegionId,
        region: RegionId,
    },
}

/// Result type alias for `StorefrontError`.
pub type Result<T> = std::result::Result<T, StorefrontError>;

/// Supported on-disk formats for reference data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DataFormat {
    Json,
    Yaml,
}

impl DataFormat {
    /// Pick a format from a file extension.
    pub(crate) fn from_path(path: &std::path::Path) -> Result<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(Self::Json),
            Some("yaml" | "yml") => Ok(Self::Yaml),
            _ => Err(StorefrontError::UnsupportedFormat(path.to_path_buf())),
        }
    }

    /// Read and deserialize a data file.
    pub(crate) fn read<T: serde::de::DeserializeOwned>(path: &std::path::Path) -> Result<T> {
        let format = Self::from_path(path)?;
        let content = std::fs::read_to_string(path).map_err(|source| StorefrontError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), ?format, "Loaded data file");
        match format {
            Self::Json => Ok(serde_json::from_str(&content)?),
            Self::Yaml => Ok(serde_yaml::from_str(&content)?),
        }
    }
}
