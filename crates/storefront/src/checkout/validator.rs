//! Checkout field rules.
//!
//! [`validate`] is a pure function of the whole field set: every field is
//! checked and every failure is reported together. Whether the address is
//! required is decided from the delivery method inside the same call, never by
//! registering extra rules at runtime.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;
use thiserror::Error;

use super::CheckoutFields;

/// Minimum length of first and last names.
pub const MIN_NAME_LENGTH: usize = 2;

/// Minimum length of a phone number.
pub const MIN_PHONE_LENGTH: usize = 9;

/// Checkout form fields, in form order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum CheckoutField {
    FirstName,
    LastName,
    PhoneNumber,
    Region,
    Subregion,
    DeliveryMethod,
    Address,
    Notes,
}

impl CheckoutField {
    /// Form field name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::PhoneNumber => "phoneNumber",
            Self::Region => "region",
            Self::Subregion => "subregion",
            Self::DeliveryMethod => "deliveryMethod",
            Self::Address => "address",
            Self::Notes => "notes",
        }
    }
}

impl fmt::Display for CheckoutField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why a single field failed. The display text is the message shown next to
/// the field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("{label} must be at least {min} characters.")]
    TooShort { label: &'static str, min: usize },

    #[error("Please enter a valid phone number.")]
    InvalidPhone,

    #[error("Please select a wilaya.")]
    RegionRequired,

    #[error("Please select a commune.")]
    SubregionRequired,

    #[error("Please select a delivery method.")]
    DeliveryMethodRequired,

    #[error("Address is required for home delivery.")]
    AddressRequired,
}

/// Every failing field with its error, in form order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Error)]
#[error("{} checkout field(s) need attention", .errors.len())]
pub struct FieldErrors {
    errors: BTreeMap<CheckoutField, FieldError>,
}

impl FieldErrors {
    fn insert(&mut self, field: CheckoutField, error: FieldError) {
        self.errors.insert(field, error);
    }

    /// Error for `field`, if it failed.
    #[must_use]
    pub fn get(&self, field: CheckoutField) -> Option<&FieldError> {
        self.errors.get(&field)
    }

    /// Whether `field` failed.
    #[must_use]
    pub fn contains(&self, field: CheckoutField) -> bool {
        self.errors.contains_key(&field)
    }

    /// Failing fields in form order.
    pub fn fields(&self) -> impl Iterator<Item = CheckoutField> + '_ {
        self.errors.keys().copied()
    }

    /// `(field, error)` pairs in form order.
    pub fn iter(&self) -> impl Iterator<Item = (CheckoutField, &FieldError)> {
        self.errors.iter().map(|(field, error)| (*field, error))
    }

    /// `(field name, message)` pairs for display.
    #[must_use]
    pub fn messages(&self) -> Vec<(&'static str, String)> {
        self.iter()
            .map(|(field, error)| (field.as_str(), error.to_string()))
            .collect()
    }

    /// Number of failing fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Whether no field failed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }
}

fn char_len(value: &str) -> usize {
    value.chars().count()
}

/// Check every field and collect all failures.
///
/// # Errors
///
/// Returns [`FieldErrors`] holding one entry per failing field.
pub fn validate(fields: &CheckoutFields) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::default();

    if char_len(&fields.first_name) < MIN_NAME_LENGTH {
        errors.insert(
            CheckoutField::FirstName,
            FieldError::TooShort {
                label: "First name",
                min: MIN_NAME_LENGTH,
            },
        );
    }
    if char_len(&fields.last_name) < MIN_NAME_LENGTH {
        errors.insert(
            CheckoutField::LastName,
            FieldError::TooShort {
                label: "Last name",
                min: MIN_NAME_LENGTH,
            },
        );
    }
    if char_len(&fields.phone_number) < MIN_PHONE_LENGTH {
        errors.insert(CheckoutField::PhoneNumber, FieldError::InvalidPhone);
    }
    if fields.region.is_none() {
        errors.insert(CheckoutField::Region, FieldError::RegionRequired);
    }
    if fields.subregion.is_none() {
        errors.insert(CheckoutField::Subregion, FieldError::SubregionRequired);
    }
    match fields.delivery_method {
        None => errors.insert(CheckoutField::DeliveryMethod, FieldError::DeliveryMethodRequired),
        Some(method) if method.requires_address() && fields.address.trim().is_empty() => {
            errors.insert(CheckoutField::Address, FieldError::AddressRequired);
        }
        Some(_) => {}
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
