//! Cart ledger: line items, quantities, and totals.
//!
//! Lines keep insertion order. Every line holds between [`MIN_QUANTITY`] and
//! [`MAX_QUANTITY`] units; a quantity update outside that range is ignored
//! rather than clamped, so the stepper buttons simply stop at the bounds.
//! Totals are derived on every read and never cached.

use crocco_core::{LineId, Price, ProductId};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::catalog::Product;

/// Fewest units a line may hold.
pub const MIN_QUANTITY: u32 = 1;

/// Most units a line may hold.
pub const MAX_QUANTITY: u32 = 10;

/// Shipping fee applied when no configuration overrides it.
pub const DEFAULT_SHIPPING_FEE_CENTS: u32 = 1000;

/// Coupon codes are accepted at the cart but no discount engine exists.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CouponError {
    /// Nothing was entered.
    #[error("Enter a coupon code")]
    Empty,

    /// The code is not recognised.
    #[error("Coupon \"{0}\" is not valid.")]
    Invalid(String),
}

/// Size and color chosen for a line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Variant {
    pub size: Option<String>,
    pub color: Option<String>,
}

impl Variant {
    /// A variant with both tags set.
    #[must_use]
    pub fn new(size: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            size: Some(size.into()),
            color: Some(color.into()),
        }
    }
}

/// One product + variant + quantity entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLineItem {
    pub id: LineId,
    pub product_id: ProductId,
    /// Product name at add time, for display.
    pub name: String,
    /// Unit price at add time. Later catalog changes do not affect it.
    pub unit_price: Price,
    pub quantity: u32,
    pub variant: Variant,
}

impl CartLineItem {
    /// `unit_price × quantity`.
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.unit_price.times(self.quantity)
    }
}

/// Snapshot of a cart for the checkout order summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderSummary {
    pub lines: Vec<CartLineItem>,
    pub subtotal: Price,
    pub shipping: Price,
    pub total: Price,
}

/// The shopper's cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cart {
    lines: Vec<CartLineItem>,
    next_line_id: i32,
    shipping_fee: Price,
}

impl Default for Cart {
    fn default() -> Self {
        Self::new(Price::from_cents(DEFAULT_SHIPPING_FEE_CENTS))
    }
}

const fn in_range(quantity: u32) -> bool {
    quantity >= MIN_QUANTITY && quantity <= MAX_QUANTITY
}

impl Cart {
    /// An empty cart with a fixed shipping fee.
    #[must_use]
    pub const fn new(shipping_fee: Price) -> Self {
        Self {
            lines: Vec::new(),
            next_line_id: 1,
            shipping_fee,
        }
    }

    /// Add `quantity` units of a product variant.
    ///
    /// A line with the same product and variant absorbs the units, capped at
    /// [`MAX_QUANTITY`]; otherwise a new line is appended with the product's
    /// current price. Returns the line id, or `None` if `quantity` is outside
    /// `1..=10` or no line id is left for a new line.
    pub fn add(&mut self, product: &Product, variant: Variant, quantity: u32) -> Option<LineId> {
        if !in_range(quantity) {
            debug!(product_id = %product.id, quantity, "Ignored add with out-of-range quantity");
            return None;
        }

        if let Some(line) = self
            .lines
            .iter_mut()
            .find(|l| l.product_id == product.id && l.variant == variant)
        {
            line.quantity = (line.quantity + quantity).min(MAX_QUANTITY);
            debug!(line_id = %line.id, quantity = line.quantity, "Merged into existing line");
            return Some(line.id);
        }

        let Some(next) = self.next_line_id.checked_add(1) else {
            warn!(product_id = %product.id, "Line ids exhausted, add ignored");
            return None;
        };
        let id = LineId::new(self.next_line_id);
        self.next_line_id = next;
        self.lines.push(CartLineItem {
            id,
            product_id: product.id,
            name: product.name.clone(),
            unit_price: product.price,
            quantity,
            variant,
        });
        info!(line_id = %id, product_id = %product.id, quantity, "Line added to cart");
        Some(id)
    }

    /// Set a line's quantity. Values outside `1..=10` and unknown lines are
    /// ignored. Returns whether the quantity was applied.
    pub fn update_quantity(&mut self, line: LineId, quantity: u32) -> bool {
        if !in_range(quantity) {
            debug!(line_id = %line, quantity, "Ignored out-of-range quantity");
            return false;
        }
        match self.lines.iter_mut().find(|l| l.id == line) {
            Some(item) => {
                item.quantity = quantity;
                debug!(line_id = %line, quantity, "Quantity updated");
                true
            }
            None => false,
        }
    }

    /// One more unit; no-op at [`MAX_QUANTITY`].
    pub fn increment(&mut self, line: LineId) -> bool {
        self.quantity_of(line)
            .is_some_and(|q| self.update_quantity(line, q + 1))
    }

    /// One fewer unit; no-op at [`MIN_QUANTITY`] (use [`Cart::remove_item`]).
    pub fn decrement(&mut self, line: LineId) -> bool {
        self.quantity_of(line)
            .is_some_and(|q| self.update_quantity(line, q.saturating_sub(1)))
    }

    /// Delete a line. Returns whether a line was removed.
    pub fn remove_item(&mut self, line: LineId) -> bool {
        let before = self.lines.len();
        self.lines.retain(|l| l.id != line);
        let removed = self.lines.len() != before;
        if removed {
            info!(line_id = %line, "Line removed from cart");
        }
        removed
    }

    /// Lines in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[CartLineItem] {
        &self.lines
    }

    /// Look up a line.
    #[must_use]
    pub fn line(&self, line: LineId) -> Option<&CartLineItem> {
        self.lines.iter().find(|l| l.id == line)
    }

    fn quantity_of(&self, line: LineId) -> Option<u32> {
        self.line(line).map(|l| l.quantity)
    }

    /// Sum of line totals.
    #[must_use]
    pub fn subtotal(&self) -> Price {
        self.lines.iter().map(CartLineItem::line_total).sum()
    }

    /// The fixed shipping fee.
    #[must_use]
    pub const fn shipping_fee(&self) -> Price {
        self.shipping_fee
    }

    /// `subtotal + shipping_fee`.
    #[must_use]
    pub fn total(&self) -> Price {
        self.subtotal() + self.shipping_fee
    }

    /// Number of distinct lines.
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.lines.len()
    }

    /// Units across all lines.
    #[must_use]
    pub fn total_quantity(&self) -> u32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Header line for the cart page.
    #[must_use]
    pub fn summary_label(&self) -> String {
        match self.item_count() {
            0 => "Your cart is currently empty".to_string(),
            1 => "You have 1 item in your cart".to_string(),
            n => format!("You have {n} items in your cart"),
        }
    }

    /// Try a coupon code.
    ///
    /// # Errors
    ///
    /// Always fails: [`CouponError::Empty`] for a blank code, otherwise
    /// [`CouponError::Invalid`].
    pub fn apply_coupon(&self, code: &str) -> Result<(), CouponError> {
        let code = code.trim();
        if code.is_empty() {
            return Err(CouponError::Empty);
        }
        info!(code, "Rejected coupon code");
        Err(CouponError::Invalid(code.to_owned()))
    }

    /// Snapshot for the checkout page.
    #[must_use]
    pub fn summary(&self) -> OrderSummary {
        OrderSummary {
            lines: self.lines.clone(),
            subtotal: self.subtotal(),
            shipping: self.shipping_fee,
            total: self.total(),
        }
    }

    /// Remove every line.
    pub fn clear(&mut self) {
        self.lines.clear();
    }
}
