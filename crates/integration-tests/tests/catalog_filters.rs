//! Integration tests for catalog scoping and facet filters.

#![allow(clippy::unwrap_used)]

use std::collections::BTreeSet;

use crocco_core::ProductId;
use crocco_integration_tests::catalog;
use crocco_storefront::filters::{self, toggle};
use crocco_storefront::{CatalogView, CategoryScope, FilterState, PriceRange};
use proptest::prelude::*;

fn ids(products: &[&crocco_storefront::Product]) -> Vec<i32> {
    products.iter().map(|p| p.id.as_i32()).collect()
}

// =============================================================================
// Category Scope
// =============================================================================

#[test]
fn test_all_scope_lists_whole_catalog_in_order() {
    let catalog = catalog();
    let visible = filters::apply(&catalog, &CategoryScope::All, &FilterState::default());
    assert_eq!(ids(&visible), vec![1, 2, 3, 4, 5, 6, 7, 8]);
}

#[test]
fn test_category_scope_and_title() {
    let mut view = CatalogView::new(catalog());
    view.select_category(CategoryScope::from("hoodies"));
    assert_eq!(ids(&view.visible()), vec![3, 8]);
    assert_eq!(view.title(), "Hoodies");
    assert_eq!(view.results_label(), "2 products found");
}

#[test]
fn test_unknown_category_is_empty() {
    let mut view = CatalogView::new(catalog());
    view.select_category(CategoryScope::from("shoes"));
    assert_eq!(view.result_count(), 0);
    assert_eq!(view.title(), "shoes");
}

// =============================================================================
// Facets
// =============================================================================

#[test]
fn test_dimensions_and_values_combine() {
    let catalog = catalog();
    let mut state = FilterState::default();
    toggle(&mut state.colors, "green");
    toggle(&mut state.colors, "black");
    // Green or black, and size M.
    toggle(&mut state.sizes, "M");

    let visible = filters::apply(&catalog, &CategoryScope::All, &state);
    assert_eq!(ids(&visible), vec![1, 8]);
}

#[test]
fn test_price_range_is_inclusive() {
    let catalog = catalog();
    let state = FilterState {
        price_range: PriceRange::new(20, 30).unwrap(),
        ..FilterState::default()
    };
    let visible = filters::apply(&catalog, &CategoryScope::All, &state);
    assert_eq!(ids(&visible), vec![1, 5]);
}

#[test]
fn test_inverted_price_range_rejected() {
    assert!(PriceRange::new(60, 10).is_err());
    let mut view = CatalogView::new(catalog());
    assert!(view.set_price_range(60, 10).is_err());
    assert!(view.filters().is_default());
}

#[test]
fn test_pending_filters_apply_on_demand() {
    let mut view = CatalogView::new(catalog());
    view.toggle_color("green");
    assert_eq!(view.result_count(), 8);
    view.apply_filters();
    assert_eq!(ids(&view.visible()), vec![1, 7]);
    assert_eq!(view.filters().active_count(), 1);
}

// =============================================================================
// Reset Law
// =============================================================================

#[test]
fn test_reset_restores_category_subset() {
    let mut view = CatalogView::new(catalog());
    view.select_category(CategoryScope::from("tshirts"));
    view.toggle_size("XL");
    view.set_price_range(0, 25).unwrap();
    view.apply_filters();
    assert_eq!(ids(&view.visible()), vec![5]);

    view.reset();
    assert!(view.filters().is_default());
    assert_eq!(ids(&view.visible()), vec![1, 4, 5]);
    assert_eq!(view.scope(), &CategoryScope::from("tshirts"));
}

#[test]
fn test_catalog_view_does_not_touch_catalog() {
    let shared = catalog();
    let mut view = CatalogView::new(std::sync::Arc::clone(&shared));
    view.toggle_color("brown");
    view.apply_filters();
    assert_eq!(shared.len(), 8);
    assert!(shared.get(ProductId::new(6)).is_some());
}

proptest! {
    #[test]
    fn prop_reset_then_apply_matches_scope(
        category in prop::sample::select(vec!["all", "tshirts", "hoodies", "accessories"]),
        colors in prop::collection::vec(prop::sample::select(filters::AVAILABLE_COLORS.to_vec()), 0..4),
        min in 0u32..50,
    ) {
        let catalog = catalog();
        let scope = CategoryScope::from(category);
        let mut view = CatalogView::new(std::sync::Arc::clone(&catalog));
        view.select_category(scope.clone());
        for color in &colors {
            view.toggle_color(color);
        }
        view.set_price_range(min, PriceRange::CEILING).unwrap();
        view.apply_filters();
        view.reset();

        let expected: Vec<i32> = catalog
            .products()
            .iter()
            .filter(|p| scope.contains(p))
            .map(|p| p.id.as_i32())
            .collect();
        prop_assert_eq!(ids(&view.visible()), expected);
    }

    #[test]
    fn prop_toggle_is_an_involution(
        start in prop::collection::btree_set("[a-z]{1,6}", 0..5),
        value in "[a-z]{1,6}",
    ) {
        let mut set: BTreeSet<String> = start.clone();
        toggle(&mut set, &value);
        toggle(&mut set, &value);
        prop_assert_eq!(set, start);
    }
}
