//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `CROCCO_SHIPPING_FEE` - Fixed shipping fee added to every cart (default: 10.00)
//! - `CROCCO_CATALOG_PATH` - Product list as JSON or YAML (default: built-in sample catalog)
//! - `CROCCO_REGIONS_PATH` - Region table as JSON or YAML (default: built-in wilaya table)

use std::path::PathBuf;

use crocco_core::Price;
use thiserror::Error;

use crate::address::RegionTable;
use crate::cart::DEFAULT_SHIPPING_FEE_CENTS;
use crate::catalog::Catalog;
use crate::data;
use crate::error::Result;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorefrontConfig {
    /// Shipping fee charged on every order
    pub shipping_fee: Price,
    /// Catalog file; `None` uses the built-in sample
    pub catalog_path: Option<PathBuf>,
    /// Region table file; `None` uses the built-in table
    pub regions_path: Option<PathBuf>,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            shipping_fee: Price::from_cents(DEFAULT_SHIPPING_FEE_CENTS),
            catalog_path: None,
            regions_path: None,
        }
    }
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set but cannot be parsed.
    pub fn from_env() -> std::result::Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(get_optional_env)
    }

    /// Build configuration from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidEnvVar` if the shipping fee is not a
    /// non-negative decimal.
    pub fn from_lookup(
        lookup: impl Fn(&str) -> Option<String>,
    ) -> std::result::Result<Self, ConfigError> {
        let shipping_fee = match lookup("CROCCO_SHIPPING_FEE") {
            Some(raw) => Price::parse(&raw).map_err(|e| {
                ConfigError::InvalidEnvVar("CROCCO_SHIPPING_FEE".to_string(), e.to_string())
            })?,
            None => Price::from_cents(DEFAULT_SHIPPING_FEE_CENTS),
        };

        Ok(Self {
            shipping_fee,
            catalog_path: lookup("CROCCO_CATALOG_PATH").map(PathBuf::from),
            regions_path: lookup("CROCCO_REGIONS_PATH").map(PathBuf::from),
        })
    }

    /// The configured catalog, or the built-in sample.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured file cannot be loaded.
    pub fn load_catalog(&self) -> Result<Catalog> {
        self.catalog_path
            .as_deref()
            .map_or_else(|| Ok(data::sample_catalog()), Catalog::load)
    }

    /// The configured region table, or the built-in one.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured file cannot be loaded.
    pub fn load_regions(&self) -> Result<RegionTable> {
        self.regions_path
            .as_deref()
            .map_or_else(|| Ok(data::sample_regions()), RegionTable::load)
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an optional, non-empty environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}
