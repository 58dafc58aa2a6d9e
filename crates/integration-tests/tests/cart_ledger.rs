//! Integration tests for the cart ledger.

#![allow(clippy::unwrap_used)]

use crocco_core::{Price, ProductId};
use crocco_integration_tests::{catalog, session};
use crocco_storefront::{Cart, Variant};

fn price(s: &str) -> Price {
    Price::parse(s).unwrap()
}

// =============================================================================
// Quantity Bounds
// =============================================================================

#[test]
fn test_update_quantity_boundaries() {
    let catalog = catalog();
    let mut cart = Cart::default();
    let line = cart
        .add(catalog.get(ProductId::new(1)).unwrap(), Variant::new("M", "green"), 3)
        .unwrap();

    assert!(!cart.update_quantity(line, 0));
    assert_eq!(cart.line(line).unwrap().quantity, 3);
    assert!(!cart.update_quantity(line, 11));
    assert_eq!(cart.line(line).unwrap().quantity, 3);

    for quantity in 1..=10 {
        assert!(cart.update_quantity(line, quantity));
        assert_eq!(cart.line(line).unwrap().quantity, quantity);
    }
}

#[test]
fn test_stepper_stops_at_bounds() {
    let catalog = catalog();
    let mut cart = Cart::default();
    let line = cart
        .add(catalog.get(ProductId::new(2)).unwrap(), Variant::default(), 1)
        .unwrap();

    assert!(!cart.decrement(line));
    assert_eq!(cart.line(line).unwrap().quantity, 1);
    cart.update_quantity(line, 10);
    assert!(!cart.increment(line));
    assert_eq!(cart.line(line).unwrap().quantity, 10);
}

#[test]
fn test_same_variant_merges_and_caps() {
    let catalog = catalog();
    let tee = catalog.get(ProductId::new(1)).unwrap();
    let mut cart = Cart::default();

    let a = cart.add(tee, Variant::new("M", "green"), 6).unwrap();
    let b = cart.add(tee, Variant::new("M", "green"), 6).unwrap();
    let c = cart.add(tee, Variant::new("L", "green"), 1).unwrap();

    assert_eq!(a, b);
    assert_ne!(a, c);
    assert_eq!(cart.line(a).unwrap().quantity, 10);
    assert_eq!(cart.item_count(), 2);
}

// =============================================================================
// Totals
// =============================================================================

#[test]
fn test_subtotal_and_total() {
    let catalog = catalog();
    let mut cart = Cart::new(price("10.00"));
    cart.add(catalog.get(ProductId::new(1)).unwrap(), Variant::new("S", "green"), 1);
    cart.add(catalog.get(ProductId::new(3)).unwrap(), Variant::new("M", "gray"), 2);

    assert_eq!(cart.subtotal(), price("129.97"));
    assert_eq!(cart.total(), price("139.97"));
    assert_eq!(cart.total_quantity(), 3);

    let summary = cart.summary();
    assert_eq!(summary.subtotal, price("129.97"));
    assert_eq!(summary.shipping, price("10.00"));
    assert_eq!(summary.total, price("139.97"));
    assert_eq!(summary.lines.len(), 2);
}

#[test]
fn test_removing_last_line_leaves_shipping_only() {
    let catalog = catalog();
    let mut cart = Cart::default();
    let line = cart
        .add(catalog.get(ProductId::new(4)).unwrap(), Variant::new("S", "white"), 1)
        .unwrap();
    assert!(cart.remove_item(line));
    assert!(cart.is_empty());
    assert_eq!(cart.subtotal(), Price::ZERO);
    assert_eq!(cart.total(), price("10.00"));
    assert!(!cart.remove_item(line));
}

#[test]
fn test_line_keeps_price_at_time_of_add() {
    let catalog = catalog();
    let mut cart = Cart::default();
    let line = cart
        .add(catalog.get(ProductId::new(7)).unwrap(), Variant::default(), 2)
        .unwrap();
    assert_eq!(cart.line(line).unwrap().unit_price, price("59.99"));
    assert_eq!(cart.line(line).unwrap().line_total(), price("119.98"));
}

#[test]
fn test_coupon_always_rejected() {
    let cart = Cart::default();
    assert!(cart.apply_coupon("").is_err());
    let err = cart.apply_coupon("WELCOME10").unwrap_err();
    assert_eq!(err.to_string(), "Coupon \"WELCOME10\" is not valid.");
}

#[test]
fn test_session_quick_add_uses_first_variant() {
    let mut session = session();
    let message = session.quick_add(ProductId::new(8), 2).unwrap();
    assert_eq!(message, "Zip-Up Hoodie (black, S) x2 added to your cart.");
    assert_eq!(session.order_summary().total, price("119.98"));
}
