//! Crocco Storefront library.
//!
//! The logic core behind the storefront pages. Every component is plain,
//! synchronous state: the UI shell feeds user actions in and renders the
//! returned data, the components never render anything themselves.
//!
//! # Modules
//!
//! - [`catalog`] - Immutable product snapshot and category titles
//! - [`filters`] - Category scope and color/size/price filtering
//! - [`cart`] - Cart ledger with quantities and totals
//! - [`selection`] - Product-detail variant and quantity picker
//! - [`address`] - Region / sub-region cascade for delivery
//! - [`checkout`] - Checkout fields, validation, and submission
//! - [`session`] - One instance of each component per shopper
//! - [`data`] - Built-in sample catalog and region table
//! - [`config`] - Environment-driven configuration
//! - [`error`] - Ingestion errors

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod address;
pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod config;
pub mod data;
pub mod error;
pub mod filters;
pub mod selection;
pub mod session;

pub use address::{AddressCascade, Region, RegionTable, SelectionError, SubRegion};
pub use cart::{Cart, CartLineItem, CouponError, OrderSummary, Variant};
pub use catalog::{Catalog, Product};
pub use checkout::{
    CheckoutError, CheckoutField, CheckoutFields, CheckoutForm, CheckoutState, FieldError,
    FieldErrors, FieldsMut, OrderSubmitter, validate,
};
pub use config::{ConfigError, StorefrontConfig};
pub use error::{Result, StorefrontError};
pub use filters::{CatalogView, CategoryScope, FilterError, FilterState, PriceRange};
pub use selection::ProductSelection;
pub use session::StorefrontSession;
