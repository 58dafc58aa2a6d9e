//! Immutable product catalog snapshot.
//!
//! A [`Catalog`] is loaded once (built-in sample, JSON, or YAML) and then
//! shared read-only between catalog views via `Arc`. Nothing mutates it after
//! construction, so filtering stays a pure function of its inputs.

use std::collections::HashSet;
use std::path::Path;

use crocco_core::{Price, ProductId};
use serde::{Deserialize, Serialize};

use crate::error::{DataFormat, Result, StorefrontError};

/// A product as listed in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique product id.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Current unit price.
    pub price: Price,
    /// Image URL for cards and the detail page.
    #[serde(default)]
    pub image: Option<String>,
    /// Category slug (e.g. `tshirts`).
    pub category: String,
    /// Sub-category slug (e.g. `classic`).
    pub subcategory: String,
    /// Colors on offer, in display order.
    #[serde(default)]
    pub colors: Vec<String>,
    /// Sizes on offer, in display order.
    #[serde(default)]
    pub sizes: Vec<String>,
    /// Shown with a "New" badge.
    #[serde(default)]
    pub is_new: bool,
    /// Shown with a "Sale" badge.
    #[serde(default)]
    pub is_sale: bool,
}

impl Product {
    /// Whether the product is offered in `color`.
    #[must_use]
    pub fn has_color(&self, color: &str) -> bool {
        self.colors.iter().any(|c| c == color)
    }

    /// Whether the product is offered in `size`.
    #[must_use]
    pub fn has_size(&self, size: &str) -> bool {
        self.sizes.iter().any(|s| s == size)
    }
}

/// An ordered, immutable list of products with unique ids.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog, keeping the given order.
    ///
    /// # Errors
    ///
    /// Returns [`StorefrontError::DuplicateProduct`] if two products share an id.
    pub fn new(products: Vec<Product>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(products.len());
        for product in &products {
            if !seen.insert(product.id) {
                return Err(StorefrontError::DuplicateProduct(product.id));
            }
        }
        Ok(Self { products })
    }

    /// Wrap products already known to have unique ids.
    pub(crate) const fn from_trusted(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// Parse a catalog from a JSON array of products.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or ids repeat.
    pub fn from_json(json: &str) -> Result<Self> {
        Self::new(serde_json::from_str(json)?)
    }

    /// Load a catalog from a `.json`, `.yaml`, or `.yml` file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or ids repeat.
    pub fn load(path: &Path) -> Result<Self> {
        let catalog = Self::new(DataFormat::read(path)?)?;
        tracing::info!(path = %path.display(), products = catalog.len(), "Catalog loaded");
        Ok(catalog)
    }

    /// All products in catalog order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Look up a product by id.
    #[must_use]
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Distinct category slugs in first-seen order.
    #[must_use]
    pub fn categories(&self) -> Vec<&str> {
        let mut categories: Vec<&str> = Vec::new();
        for product in &self.products {
            if !categories.contains(&product.category.as_str()) {
                categories.push(&product.category);
            }
        }
        categories
    }

    /// Number of products.
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the catalog has no products.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
