//! Core types for the Crocco storefront.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod delivery;
pub mod id;
pub mod price;

pub use delivery::{DeliveryMethod, DeliveryMethodError};
pub use id::*;
pub use price::{Price, PriceError};
