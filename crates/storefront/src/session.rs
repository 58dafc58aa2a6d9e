//! One shopper's storefront state.
//!
//! A session owns exactly one catalog view, cart, address cascade, and
//! checkout form. The catalog and region table are shared, immutable
//! snapshots; everything else is private to the session.

use std::sync::Arc;

use crocco_core::{DeliveryMethod, ProductId, RegionId, SubRegionId};
use tracing::instrument;

use crate::address::{AddressCascade, RegionTable, SelectionError};
use crate::cart::{Cart, OrderSummary};
use crate::catalog::{Catalog, Product};
use crate::checkout::{CheckoutError, CheckoutForm, OrderSubmitter};
use crate::config::StorefrontConfig;
use crate::filters::CatalogView;
use crate::selection::ProductSelection;

/// Per-shopper aggregate of the storefront components.
#[derive(Debug, Clone)]
pub struct StorefrontSession {
    catalog: Arc<Catalog>,
    /// Catalog page state.
    pub view: CatalogView,
    /// The cart ledger.
    pub cart: Cart,
    address: AddressCascade,
    checkout: CheckoutForm,
}

impl StorefrontSession {
    /// Start a session over shared reference data.
    #[must_use]
    pub fn new(config: &StorefrontConfig, catalog: Arc<Catalog>, regions: Arc<RegionTable>) -> Self {
        Self {
            view: CatalogView::new(Arc::clone(&catalog)),
            cart: Cart::new(config.shipping_fee),
            address: AddressCascade::new(regions),
            checkout: CheckoutForm::new(),
            catalog,
        }
    }

    /// The shared catalog snapshot.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Open a product page.
    #[must_use]
    pub fn select_product(&self, id: ProductId) -> Option<ProductSelection<'_>> {
        self.catalog.get(id).map(ProductSelection::new)
    }

    /// Add a product straight from the grid with its first size and color.
    #[instrument(skip(self))]
    pub fn quick_add(&mut self, id: ProductId, quantity: u32) -> Option<String> {
        let product: &Product = self.catalog.get(id)?;
        let mut selection = ProductSelection::new(product);
        for _ in 1..quantity {
            selection.increase();
        }
        selection.add_to_cart(&mut self.cart).map(|(_, message)| message)
    }

    /// Address selectors.
    #[must_use]
    pub const fn address(&self) -> &AddressCascade {
        &self.address
    }

    /// Checkout form.
    #[must_use]
    pub const fn checkout(&self) -> &CheckoutForm {
        &self.checkout
    }

    /// Mutable checkout form, for text fields.
    pub fn checkout_mut(&mut self) -> &mut CheckoutForm {
        &mut self.checkout
    }

    /// Pick a region: clears the sub-region in both the cascade and the form.
    #[instrument(skip(self))]
    pub fn choose_region(&mut self, region: RegionId) {
        self.address.on_region_change(region);
        self.sync_address();
    }

    /// Pick a sub-region of the selected region.
    ///
    /// # Errors
    ///
    /// Returns [`SelectionError`] if no region is selected or the sub-region
    /// belongs elsewhere; nothing changes in that case.
    #[instrument(skip(self))]
    pub fn choose_subregion(&mut self, subregion: SubRegionId) -> Result<(), SelectionError> {
        self.address.select_subregion(subregion)?;
        self.sync_address();
        Ok(())
    }

    /// Pick the delivery method.
    pub fn choose_delivery(&mut self, method: DeliveryMethod) {
        self.checkout.set_delivery_method(method);
    }

    fn sync_address(&mut self) {
        self.checkout
            .set_address_selection(self.address.selected_region(), self.address.selected_subregion());
    }

    /// Order summary shown beside the checkout form.
    #[must_use]
    pub fn order_summary(&self) -> OrderSummary {
        self.cart.summary()
    }

    /// Submit the checkout form. On success the cart and address are cleared.
    ///
    /// # Errors
    ///
    /// See [`CheckoutForm::submit`].
    #[instrument(skip(self, submitter))]
    pub fn place_order<S: OrderSubmitter>(
        &mut self,
        submitter: &mut S,
    ) -> Result<S::Receipt, CheckoutError<S::Error>> {
        let receipt = self.checkout.submit(submitter)?;
        self.cart.clear();
        self.address.clear();
        Ok(receipt)
    }
}
