//! Product-detail picker: size, color, and quantity before adding to cart.
//!
//! Unlike the cart ledger, the quantity stepper here clamps to `[1, 10]`.

use crocco_core::LineId;

use crate::cart::{Cart, MAX_QUANTITY, MIN_QUANTITY, Variant};
use crate::catalog::Product;

/// The variant and quantity chosen on a product page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductSelection<'a> {
    product: &'a Product,
    size: Option<String>,
    color: Option<String>,
    quantity: u32,
}

impl<'a> ProductSelection<'a> {
    /// Start with the first listed size and color and one unit.
    #[must_use]
    pub fn new(product: &'a Product) -> Self {
        Self {
            product,
            size: product.sizes.first().cloned(),
            color: product.colors.first().cloned(),
            quantity: MIN_QUANTITY,
        }
    }

    /// Choose a size the product offers. Returns whether it was accepted.
    pub fn select_size(&mut self, size: &str) -> bool {
        if !self.product.has_size(size) {
            return false;
        }
        self.size = Some(size.to_owned());
        true
    }

    /// Choose a color the product offers. Returns whether it was accepted.
    pub fn select_color(&mut self, color: &str) -> bool {
        if !self.product.has_color(color) {
            return false;
        }
        self.color = Some(color.to_owned());
        true
    }

    /// One more unit, up to the maximum.
    pub fn increase(&mut self) {
        self.quantity = (self.quantity + 1).min(MAX_QUANTITY);
    }

    /// One fewer unit, down to the minimum.
    pub fn decrease(&mut self) {
        self.quantity = self.quantity.saturating_sub(1).max(MIN_QUANTITY);
    }

    /// Selected size.
    #[must_use]
    pub fn size(&self) -> Option<&str> {
        self.size.as_deref()
    }

    /// Selected color.
    #[must_use]
    pub fn color(&self) -> Option<&str> {
        self.color.as_deref()
    }

    /// Selected quantity.
    #[must_use]
    pub const fn quantity(&self) -> u32 {
        self.quantity
    }

    /// The chosen size and color as a cart variant.
    #[must_use]
    pub fn variant(&self) -> Variant {
        Variant {
            size: self.size.clone(),
            color: self.color.clone(),
        }
    }

    /// Add the selection to `cart`, returning the line id and the
    /// confirmation message shown to the shopper.
    pub fn add_to_cart(&self, cart: &mut Cart) -> Option<(LineId, String)> {
        let line = cart.add(self.product, self.variant(), self.quantity)?;
        let message = format!(
            "{} ({}, {}) x{} added to your cart.",
            self.product.name,
            self.color.as_deref().unwrap_or("-"),
            self.size.as_deref().unwrap_or("-"),
            self.quantity
        );
        Some((line, message))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use crocco_core::ProductId;

    use super::*;
    use crate::data;

    #[test]
    fn test_defaults_to_first_options() {
        let catalog = data::sample_catalog();
        let tee = catalog.get(ProductId::new(1)).unwrap();
        let selection = ProductSelection::new(tee);
        assert_eq!(selection.size(), Some("S"));
        assert_eq!(selection.color(), Some("green"));
        assert_eq!(selection.quantity(), 1);
    }

    #[test]
    fn test_quantity_clamps() {
        let catalog = data::sample_catalog();
        let mut selection = ProductSelection::new(catalog.get(ProductId::new(2)).unwrap());
        selection.decrease();
        assert_eq!(selection.quantity(), 1);
        for _ in 0..15 {
            selection.increase();
        }
        assert_eq!(selection.quantity(), 10);
    }

    #[test]
    fn test_rejects_unoffered_options() {
        let catalog = data::sample_catalog();
        let mut selection = ProductSelection::new(catalog.get(ProductId::new(3)).unwrap());
        assert!(!selection.select_size("S"));
        assert!(selection.select_size("XL"));
        assert!(!selection.select_color("pink"));
        assert_eq!(selection.size(), Some("XL"));
        assert_eq!(selection.color(), Some("gray"));
    }

    #[test]
    fn test_add_to_cart_message() {
        let catalog = data::sample_catalog();
        let mut selection = ProductSelection::new(catalog.get(ProductId::new(1)).unwrap());
        selection.select_size("M");
        selection.increase();

        let mut cart = Cart::default();
        let (line, message) = selection.add_to_cart(&mut cart).unwrap();
        assert_eq!(message, "Classic Green T-Shirt (green, M) x2 added to your cart.");
        assert_eq!(cart.line(line).unwrap().quantity, 2);
        assert_eq!(cart.line(line).unwrap().variant, Variant::new("M", "green"));
    }
}
