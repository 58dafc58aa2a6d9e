//! Integration tests for the Crocco storefront.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p crocco-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `catalog_filters` - Category scope, facet filters, reset law
//! - `cart_ledger` - Quantity bounds, merging, totals
//! - `address_cascade` - Region / sub-region dependency
//! - `checkout_flow` - Field validation and end-to-end sessions
//! - `data_files` - Loading catalogs and region tables from disk
//!
//! The helpers below build sessions over the built-in sample data.

use std::sync::Arc;

use crocco_storefront::{
    Catalog, CheckoutFields, OrderSubmitter, RegionTable, StorefrontConfig, StorefrontSession,
    data,
};

/// Shared sample catalog.
#[must_use]
pub fn catalog() -> Arc<Catalog> {
    Arc::new(data::sample_catalog())
}

/// Shared sample region table.
#[must_use]
pub fn regions() -> Arc<RegionTable> {
    Arc::new(data::sample_regions())
}

/// A fresh session with default configuration.
#[must_use]
pub fn session() -> StorefrontSession {
    StorefrontSession::new(&StorefrontConfig::default(), catalog(), regions())
}

/// Checkout fields that pass validation for office delivery.
#[must_use]
pub fn valid_fields() -> CheckoutFields {
    CheckoutFields {
        first_name: "Amina".to_string(),
        last_name: "Benali".to_string(),
        phone_number: "0555123456".to_string(),
        region: Some(crocco_core::RegionId::new(16)),
        subregion: Some(crocco_core::SubRegionId::new(1601)),
        delivery_method: Some(crocco_core::DeliveryMethod::Office),
        address: String::new(),
        notes: None,
    }
}

/// Submitter that records every accepted order.
#[derive(Debug, Default)]
pub struct RecordingSubmitter {
    pub orders: Vec<CheckoutFields>,
}

impl OrderSubmitter for RecordingSubmitter {
    type Receipt = usize;
    type Error = std::convert::Infallible;

    fn submit(&mut self, fields: &CheckoutFields) -> Result<usize, Self::Error> {
        self.orders.push(fields.clone());
        Ok(self.orders.len())
    }
}
