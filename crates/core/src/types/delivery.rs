//! Delivery method selector.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

/// Error returned when parsing an unknown delivery method.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown delivery method: {0}")]
pub struct DeliveryMethodError(pub String);

/// How an order reaches the customer.
///
/// Home delivery needs a street address; office pickup (the carrier's
/// branch, "bureau") does not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DeliveryMethod {
    /// Delivered to the customer's address.
    #[default]
    Home,
    /// Picked up at the carrier's office.
    #[serde(alias = "bureau")]
    Office,
}

impl DeliveryMethod {
    /// Whether this method needs a free-text street address.
    #[must_use]
    pub const fn requires_address(self) -> bool {
        matches!(self, Self::Home)
    }

    /// Wire name of the method.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Office => "office",
        }
    }
}

impl fmt::Display for DeliveryMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DeliveryMethod {
    type Err = DeliveryMethodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "home" => Ok(Self::Home),
            "office" | "bureau" => Ok(Self::Office),
            _ => Err(DeliveryMethodError(s.to_owned())),
        }
    }
}
