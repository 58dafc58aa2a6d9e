//! Catalog filtering by category scope, color, size, and price.
//!
//! Dimensions combine with AND; values inside a dimension combine with OR.
//! An empty color or size selection does not narrow anything.
//!
//! [`apply`] is the pure core. [`CatalogView`] is the per-page state around
//! it: pending filter edits, the "Apply" action, resets, and category
//! navigation (which always resets so stale filters never leak across
//! categories).

use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

use rust_decimal::Decimal;
use thiserror::Error;
use tracing::debug;

use crate::catalog::{Catalog, Product};

/// Colors offered by the filter sidebar.
pub const AVAILABLE_COLORS: &[&str] = &["black", "white", "green", "blue", "gray", "brown"];

/// Sizes offered by the filter sidebar.
pub const AVAILABLE_SIZES: &[&str] = &["S", "M", "L", "XL", "one-size"];

/// Display titles for known category slugs.
const CATEGORY_TITLES: &[(&str, &str)] = &[
    ("tshirts", "T-Shirts"),
    ("accessories", "Accessories"),
    ("hoodies", "Hoodies"),
    ("caps", "Caps"),
];

/// Errors from filter edits.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilterError {
    /// The requested range is inverted or outside the slider bounds.
    #[error("Invalid price range [{min}, {max}]: expected 0 <= min <= max <= {}", PriceRange::CEILING)]
    InvalidPriceRange { min: u32, max: u32 },
}

/// Which slice of the catalog a view shows.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum CategoryScope {
    /// Every product.
    #[default]
    All,
    /// Products whose category slug equals this one.
    Category(String),
}

impl CategoryScope {
    /// Whether `product` falls inside this scope.
    #[must_use]
    pub fn contains(&self, product: &Product) -> bool {
        match self {
            Self::All => true,
            Self::Category(slug) => product.category == *slug,
        }
    }

    /// Page title: a known category title, the raw slug, or "Products".
    #[must_use]
    pub fn title(&self) -> &str {
        match self {
            Self::All => "Products",
            Self::Category(slug) => CATEGORY_TITLES
                .iter()
                .find(|&&(known, _)| known == slug.as_str())
                .map_or(slug.as_str(), |&(_, title)| title),
        }
    }
}

impl From<&str> for CategoryScope {
    fn from(slug: &str) -> Self {
        match slug.trim() {
            "" | "all" => Self::All,
            slug => Self::Category(slug.to_owned()),
        }
    }
}

impl fmt::Display for CategoryScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("all"),
            Self::Category(slug) => f.write_str(slug),
        }
    }
}

/// Inclusive price bounds, in whole currency units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PriceRange {
    min: u32,
    max: u32,
}

impl PriceRange {
    /// Upper bound of the price slider.
    pub const CEILING: u32 = 100;

    /// The full slider range, `[0, 100]`.
    pub const FULL: Self = Self {
        min: 0,
        max: Self::CEILING,
    };

    /// Create a range.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::InvalidPriceRange`] unless `min <= max <= 100`.
    pub const fn new(min: u32, max: u32) -> Result<Self, FilterError> {
        if min > max || max > Self::CEILING {
            return Err(FilterError::InvalidPriceRange { min, max });
        }
        Ok(Self { min, max })
    }

    /// Lower bound.
    #[must_use]
    pub const fn min(&self) -> u32 {
        self.min
    }

    /// Upper bound.
    #[must_use]
    pub const fn max(&self) -> u32 {
        self.max
    }

    /// Whether `price` lies within the bounds, both ends inclusive.
    #[must_use]
    pub fn contains(&self, price: Decimal) -> bool {
        price >= Decimal::from(self.min) && price <= Decimal::from(self.max)
    }
}

impl Default for PriceRange {
    fn default() -> Self {
        Self::FULL
    }
}

/// Selected filter values for one catalog view.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterState {
    /// Selected colors; empty means any color.
    pub colors: BTreeSet<String>,
    /// Selected sizes; empty means any size.
    pub sizes: BTreeSet<String>,
    /// Price bounds.
    pub price_range: PriceRange,
}

impl FilterState {
    /// Whether `product` passes the color, size, and price dimensions.
    #[must_use]
    pub fn matches(&self, product: &Product) -> bool {
        (self.colors.is_empty() || self.colors.iter().any(|c| product.has_color(c)))
            && (self.sizes.is_empty() || self.sizes.iter().any(|s| product.has_size(s)))
            && self.price_range.contains(product.price.amount())
    }

    /// Number of active filters, for the sidebar badge.
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.colors.len() + self.sizes.len() + usize::from(self.price_range != PriceRange::FULL)
    }

    /// Whether nothing narrows the view beyond its category.
    #[must_use]
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}

/// Remove `value` from `set` if present, otherwise insert it.
///
/// Returns `true` if the value is selected afterwards.
pub fn toggle(set: &mut BTreeSet<String>, value: &str) -> bool {
    if set.remove(value) {
        false
    } else {
        set.insert(value.to_owned());
        true
    }
}

/// Products in `scope` that pass every filter dimension, in catalog order.
#[must_use]
pub fn apply<'a>(catalog: &'a Catalog, scope: &CategoryScope, state: &FilterState) -> Vec<&'a Product> {
    catalog
        .products()
        .iter()
        .filter(|product| scope.contains(product) && state.matches(product))
        .collect()
}

/// Catalog page state: scope, pending filters, and the last applied result.
#[derive(Debug, Clone)]
pub struct CatalogView {
    catalog: Arc<Catalog>,
    scope: CategoryScope,
    filters: FilterState,
    visible: Vec<usize>,
}

impl CatalogView {
    /// A view over the whole catalog with default filters.
    #[must_use]
    pub fn new(catalog: Arc<Catalog>) -> Self {
        let mut view = Self {
            catalog,
            scope: CategoryScope::All,
            filters: FilterState::default(),
            visible: Vec::new(),
        };
        view.recompute();
        view
    }

    /// Navigate to a category. Filters are reset before recomputing.
    pub fn select_category(&mut self, scope: CategoryScope) {
        debug!(from = %self.scope, to = %scope, "Category selected");
        self.scope = scope;
        self.reset();
    }

    /// Toggle a color in the pending filters.
    pub fn toggle_color(&mut self, color: &str) -> bool {
        toggle(&mut self.filters.colors, color)
    }

    /// Toggle a size in the pending filters.
    pub fn toggle_size(&mut self, size: &str) -> bool {
        toggle(&mut self.filters.sizes, size)
    }

    /// Set the pending price bounds.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::InvalidPriceRange`] and leaves the current
    /// bounds untouched if the range is invalid.
    pub fn set_price_range(&mut self, min: u32, max: u32) -> Result<(), FilterError> {
        self.filters.price_range = PriceRange::new(min, max)?;
        Ok(())
    }

    /// Recompute the visible products from the pending filters.
    pub fn apply_filters(&mut self) {
        self.recompute();
    }

    /// Clear all filters and recompute for the current scope.
    pub fn reset(&mut self) {
        self.filters = FilterState::default();
        self.recompute();
    }

    /// Current category scope.
    #[must_use]
    pub const fn scope(&self) -> &CategoryScope {
        &self.scope
    }

    /// Current (possibly not yet applied) filters.
    #[must_use]
    pub const fn filters(&self) -> &FilterState {
        &self.filters
    }

    /// Products from the last recompute, in catalog order.
    #[must_use]
    pub fn visible(&self) -> Vec<&Product> {
        let products = self.catalog.products();
        self.visible.iter().filter_map(|&i| products.get(i)).collect()
    }

    /// Number of visible products.
    #[must_use]
    pub fn result_count(&self) -> usize {
        self.visible.len()
    }

    /// Result count line shown above the grid.
    #[must_use]
    pub fn results_label(&self) -> String {
        format!("{} products found", self.result_count())
    }

    /// Page title for the current scope.
    #[must_use]
    pub fn title(&self) -> &str {
        self.scope.title()
    }

    fn recompute(&mut self) {
        self.visible = self
            .catalog
            .products()
            .iter()
            .enumerate()
            .filter(|(_, product)| self.scope.contains(product) && self.filters.matches(product))
            .map(|(i, _)| i)
            .collect();
        debug!(
            scope = %self.scope,
            active_filters = self.filters.active_count(),
            matches = self.visible.len(),
            "Filters applied"
        );
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::data;

    fn ids(products: &[&Product]) -> Vec<i32> {
        products.iter().map(|p| p.id.as_i32()).collect()
    }

    #[test]
    fn test_scope_from_str() {
        assert_eq!(CategoryScope::from("all"), CategoryScope::All);
        assert_eq!(CategoryScope::from(""), CategoryScope::All);
        assert_eq!(
            CategoryScope::from("hoodies"),
            CategoryScope::Category("hoodies".to_string())
        );
    }

    #[test]
    fn test_scope_titles() {
        assert_eq!(CategoryScope::All.title(), "Products");
        assert_eq!(CategoryScope::from("tshirts").title(), "T-Shirts");
        assert_eq!(CategoryScope::from("socks").title(), "socks");
    }

    #[test]
    fn test_price_range_bounds() {
        assert!(PriceRange::new(0, 100).is_ok());
        assert!(PriceRange::new(40, 40).is_ok());
        assert_eq!(
            PriceRange::new(60, 20),
            Err(FilterError::InvalidPriceRange { min: 60, max: 20 })
        );
        assert!(PriceRange::new(0, 101).is_err());
    }

    #[test]
    fn test_price_range_inclusive() {
        let range = PriceRange::new(20, 50).unwrap();
        assert!(range.contains(Decimal::from(20)));
        assert!(range.contains(Decimal::from(50)));
        assert!(!range.contains(Decimal::new(5001, 2)));
        assert!(!range.contains(Decimal::new(1999, 2)));
    }

    #[test]
    fn test_colors_or_within_dimension() {
        let catalog = data::sample_catalog();
        let mut state = FilterState::default();
        toggle(&mut state.colors, "green");
        toggle(&mut state.colors, "black");
        assert_eq!(ids(&apply(&catalog, &CategoryScope::All, &state)), vec![1, 2, 7, 8]);
    }

    #[test]
    fn test_dimensions_and_together() {
        let catalog = data::sample_catalog();
        let mut state = FilterState::default();
        toggle(&mut state.colors, "green");
        toggle(&mut state.sizes, "XL");
        // Classic Green T-Shirt is green and XL; the backpack is green but one-size.
        assert_eq!(ids(&apply(&catalog, &CategoryScope::All, &state)), vec![1]);
    }

    #[test]
    fn test_price_filter() {
        let catalog = data::sample_catalog();
        let state = FilterState {
            price_range: PriceRange::new(30, 50).unwrap(),
            ..FilterState::default()
        };
        assert_eq!(ids(&apply(&catalog, &CategoryScope::All, &state)), vec![3, 4, 6]);
    }

    #[test]
    fn test_no_match_is_empty() {
        let catalog = data::sample_catalog();
        let mut state = FilterState::default();
        toggle(&mut state.colors, "white");
        assert!(apply(&catalog, &CategoryScope::from("hoodies"), &state).is_empty());
    }

    #[test]
    fn test_active_count() {
        let mut state = FilterState::default();
        assert_eq!(state.active_count(), 0);
        assert!(state.is_default());
        toggle(&mut state.colors, "blue");
        toggle(&mut state.sizes, "M");
        state.price_range = PriceRange::new(0, 60).unwrap();
        assert_eq!(state.active_count(), 3);
    }

    #[test]
    fn test_view_edits_are_pending_until_applied() {
        let mut view = CatalogView::new(Arc::new(data::sample_catalog()));
        assert_eq!(view.result_count(), 8);

        view.toggle_color("brown");
        assert_eq!(view.result_count(), 8);

        view.apply_filters();
        assert_eq!(ids(&view.visible()), vec![6]);
        assert_eq!(view.results_label(), "1 products found");
    }

    #[test]
    fn test_view_category_change_resets_filters() {
        let mut view = CatalogView::new(Arc::new(data::sample_catalog()));
        view.toggle_size("S");
        view.set_price_range(0, 30).unwrap();
        view.apply_filters();

        view.select_category(CategoryScope::from("hoodies"));
        assert!(view.filters().is_default());
        assert_eq!(ids(&view.visible()), vec![3, 8]);
        assert_eq!(view.title(), "Hoodies");
    }

    #[test]
    fn test_view_invalid_range_keeps_previous() {
        let mut view = CatalogView::new(Arc::new(data::sample_catalog()));
        view.set_price_range(10, 40).unwrap();
        assert!(view.set_price_range(50, 10).is_err());
        assert_eq!(view.filters().price_range, PriceRange::new(10, 40).unwrap());
    }

    #[test]
    fn test_view_reset_restores_scope_subset() {
        let mut view = CatalogView::new(Arc::new(data::sample_catalog()));
        view.select_category(CategoryScope::from("accessories"));
        view.toggle_color("black");
        view.apply_filters();
        assert_eq!(ids(&view.visible()), vec![2]);

        view.reset();
        assert_eq!(ids(&view.visible()), vec![2, 6, 7]);
    }

    proptest! {
        #[test]
        fn prop_toggle_twice_is_identity(
            initial in proptest::collection::btree_set("[a-z]{1,6}", 0..6),
            value in "[a-z]{1,6}",
        ) {
            let mut set = initial.clone();
            toggle(&mut set, &value);
            toggle(&mut set, &value);
            prop_assert_eq!(set, initial);
        }

        #[test]
        fn prop_apply_is_deterministic_and_ordered(
            colors in proptest::collection::btree_set(proptest::sample::select(AVAILABLE_COLORS), 0..4),
            sizes in proptest::collection::btree_set(proptest::sample::select(AVAILABLE_SIZES), 0..3),
            (min, max) in (0u32..=100).prop_flat_map(|min| (Just(min), min..=100)),
        ) {
            let catalog = data::sample_catalog();
            let state = FilterState {
                colors: colors.into_iter().map(str::to_owned).collect(),
                sizes: sizes.into_iter().map(str::to_owned).collect(),
                price_range: PriceRange::new(min, max).unwrap(),
            };
            let first = ids(&apply(&catalog, &CategoryScope::All, &state));
            let second = ids(&apply(&catalog, &CategoryScope::All, &state));
            prop_assert_eq!(&first, &second);
            prop_assert!(first.windows(2).all(|w| w[0] < w[1]));
        }
    }
}
