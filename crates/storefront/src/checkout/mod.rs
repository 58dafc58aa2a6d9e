//! Checkout form: fields, validation, and hand-off to order submission.
//!
//! # State machine
//!
//! ```text
//! Idle --submit--> Validating --ok--> Accepted --(submitter ok)--> Accepted (fresh fields)
//!                      |                  |
//!                      |                  +--(submitter error)--> Idle (fields kept)
//!                      +--errors--> Rejected --> Idle (errors attached)
//! ```
//!
//! Order submission itself (network, confirmation page, order numbers) lives
//! behind the [`OrderSubmitter`] trait.

mod validator;

use std::ops::{Deref, DerefMut};

use crocco_core::{DeliveryMethod, RegionId, SubRegionId};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

pub use validator::{
    CheckoutField, FieldError, FieldErrors, MIN_NAME_LENGTH, MIN_PHONE_LENGTH, validate,
};

/// Everything the shopper enters at checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CheckoutFields {
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
    pub region: Option<RegionId>,
    pub subregion: Option<SubRegionId>,
    pub delivery_method: Option<DeliveryMethod>,
    /// Street address; required only for home delivery.
    pub address: String,
    pub notes: Option<String>,
}

impl Default for CheckoutFields {
    fn default() -> Self {
        Self {
            first_name: String::new(),
            last_name: String::new(),
            phone_number: String::new(),
            region: None,
            subregion: None,
            delivery_method: Some(DeliveryMethod::Home),
            address: String::new(),
            notes: None,
        }
    }
}

/// Write access to a form's fields.
///
/// Keeps the region and sub-region consistent: on drop, a region change that
/// left the previous sub-region in place clears it.
#[derive(Debug)]
pub struct FieldsMut<'a> {
    fields: &'a mut CheckoutFields,
    region: Option<RegionId>,
    subregion: Option<SubRegionId>,
}

impl Deref for FieldsMut<'_> {
    type Target = CheckoutFields;

    fn deref(&self) -> &CheckoutFields {
        &*self.fields
    }
}

impl DerefMut for FieldsMut<'_> {
    fn deref_mut(&mut self) -> &mut CheckoutFields {
        &mut *self.fields
    }
}

impl Drop for FieldsMut<'_> {
    fn drop(&mut self) {
        if self.fields.region != self.region
            && self.fields.subregion.is_some()
            && self.fields.subregion == self.subregion
        {
            debug!(
                region = ?self.fields.region,
                subregion = ?self.fields.subregion,
                "Region changed, clearing sub-region"
            );
            self.fields.subregion = None;
        }
    }
}

/// Where the checkout form is in its submit cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CheckoutState {
    #[default]
    Idle,
    Validating,
    Accepted,
    Rejected,
}

/// Receives validated orders. Implemented by whatever places the order.
pub trait OrderSubmitter {
    /// What a successful submission yields (e.g. an order number).
    type Receipt;
    /// Submission failure.
    type Error: std::error::Error + 'static;

    /// Place the order described by `fields`.
    ///
    /// # Errors
    ///
    /// Returns the submitter's error if the order could not be placed.
    fn submit(&mut self, fields: &CheckoutFields) -> Result<Self::Receipt, Self::Error>;
}

/// Why a submit attempt did not go through.
#[derive(Debug, Error)]
pub enum CheckoutError<E: std::error::Error + 'static> {
    /// One or more fields failed validation.
    #[error(transparent)]
    Invalid(#[from] FieldErrors),

    /// The fields were valid but the submitter failed.
    #[error("Order submission failed: {0}")]
    Submission(#[source] E),
}

/// A checkout session's form.
#[derive(Debug, Clone, Default)]
pub struct CheckoutForm {
    fields: CheckoutFields,
    state: CheckoutState,
    errors: FieldErrors,
}

impl CheckoutForm {
    /// A fresh form: empty fields, home delivery preselected.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current field values.
    #[must_use]
    pub const fn fields(&self) -> &CheckoutFields {
        &self.fields
    }

    /// Edit fields. Any edit puts the form back into `Idle`.
    ///
    /// If the edit moves the form to a different region without also
    /// choosing a sub-region, the old sub-region is cleared when the guard
    /// drops.
    pub fn fields_mut(&mut self) -> FieldsMut<'_> {
        self.state = CheckoutState::Idle;
        FieldsMut {
            region: self.fields.region,
            subregion: self.fields.subregion,
            fields: &mut self.fields,
        }
    }

    /// Select a region. A different region clears the sub-region.
    pub fn set_region(&mut self, region: Option<RegionId>) {
        self.fields_mut().region = region;
    }

    /// Select a sub-region of the current region.
    pub fn set_subregion(&mut self, subregion: Option<SubRegionId>) {
        self.fields_mut().subregion = subregion;
    }

    /// Choose the delivery method. A previously entered address is kept.
    pub fn set_delivery_method(&mut self, method: DeliveryMethod) {
        self.fields_mut().delivery_method = Some(method);
    }

    /// Mirror the address cascade's selection into the form.
    pub fn set_address_selection(&mut self, region: Option<RegionId>, subregion: Option<SubRegionId>) {
        self.state = CheckoutState::Idle;
        self.fields.region = region;
        self.fields.subregion = subregion;
    }

    /// Current state.
    #[must_use]
    pub const fn state(&self) -> CheckoutState {
        self.state
    }

    /// Errors from the last rejected submit (empty otherwise).
    #[must_use]
    pub const fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    fn transition(&mut self, to: CheckoutState) {
        debug!(from = ?self.state, ?to, "Checkout state transition");
        self.state = to;
    }

    /// Validate and, if valid, hand the fields to `submitter`.
    ///
    /// On success the form is reset for the next order and stays `Accepted`.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::Invalid`] with every failing field (the form
    /// returns to `Idle` with those errors attached), or
    /// [`CheckoutError::Submission`] if the submitter fails (fields kept,
    /// form back to `Idle`).
    pub fn submit<S: OrderSubmitter>(
        &mut self,
        submitter: &mut S,
    ) -> Result<S::Receipt, CheckoutError<S::Error>> {
        self.transition(CheckoutState::Validating);

        if let Err(errors) = validate(&self.fields) {
            self.transition(CheckoutState::Rejected);
            info!(invalid_fields = errors.len(), "Checkout rejected");
            self.errors = errors.clone();
            self.transition(CheckoutState::Idle);
            return Err(CheckoutError::Invalid(errors));
        }

        self.errors = FieldErrors::default();
        self.transition(CheckoutState::Accepted);

        match submitter.submit(&self.fields) {
            Ok(receipt) => {
                info!(
                    delivery_method = ?self.fields.delivery_method,
                    region = ?self.fields.region,
                    "Order submitted"
                );
                self.fields = CheckoutFields::default();
                Ok(receipt)
            }
            Err(e) => {
                tracing::error!(error = %e, "Order submission failed");
                self.transition(CheckoutState::Idle);
                Err(CheckoutError::Submission(e))
            }
        }
    }
}
