//! Crocco Core - Shared domain types.
//!
//! This crate provides the value types used across all Crocco components:
//! - `storefront` - Catalog filtering, cart ledger, address cascade and checkout validation
//! - `cli` - Command-line shell driving the storefront components
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no logging, no state.
//! This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, prices, and delivery methods

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
