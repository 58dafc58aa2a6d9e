//! CLI subcommands.

pub mod browse;
pub mod cart;
pub mod checkout;
pub mod regions;

use std::str::FromStr;
use std::sync::Arc;

use crocco_core::ProductId;
use crocco_storefront::{
    Catalog, ConfigError, FieldErrors, FilterError, RegionTable, StorefrontConfig,
    StorefrontError,
};
use thiserror::Error;

/// Errors that can occur while running a command.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Storefront(#[from] StorefrontError),

    #[error(transparent)]
    Filter(#[from] FilterError),

    #[error("Unknown product: {0}")]
    UnknownProduct(ProductId),

    #[error("Product {product} is not offered in {value}")]
    UnknownVariant { product: ProductId, value: String },

    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid checkout file: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Checkout(#[from] FieldErrors),
}

/// Configuration plus the shared reference data every command reads.
pub struct Context {
    pub config: StorefrontConfig,
    pub catalog: Arc<Catalog>,
    pub regions: Arc<RegionTable>,
}

impl Context {
    /// Load configuration from the environment and the data it points at.
    pub fn load() -> Result<Self, CommandError> {
        let config = StorefrontConfig::from_env()?;
        let catalog = Arc::new(config.load_catalog()?);
        let regions = Arc::new(config.load_regions()?);
        tracing::debug!(
            products = catalog.len(),
            regions = regions.regions().len(),
            shipping_fee = %config.shipping_fee,
            "Storefront data ready"
        );
        Ok(Self {
            config,
            catalog,
            regions,
        })
    }
}

/// A cart line given on the command line as `ID[:QTY[:SIZE[:COLOR]]]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineSpec {
    pub product: ProductId,
    pub quantity: u32,
    pub size: Option<String>,
    pub color: Option<String>,
}

impl FromStr for LineSpec {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split(':');
        let product = parts
            .next()
            .unwrap_or_default()
            .parse::<ProductId>()
            .map_err(|e| format!("invalid product id in '{s}': {e}"))?;
        let quantity = match parts.next() {
            Some(q) if !q.is_empty() => q
                .parse::<u32>()
                .map_err(|e| format!("invalid quantity in '{s}': {e}"))?,
            _ => 1,
        };
        let size = parts.next().filter(|v| !v.is_empty()).map(str::to_owned);
        let color = parts.next().filter(|v| !v.is_empty()).map(str::to_owned);
        if parts.next().is_some() {
            return Err(format!("too many fields in '{s}', expected ID[:QTY[:SIZE[:COLOR]]]"));
        }
        Ok(Self {
            product,
            quantity,
            size,
            color,
        })
    }
}
