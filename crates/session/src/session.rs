use storefront_cart::Cart;
use storefront_catalog::{pipeline, Catalog, FilterCriteria, Product};
use storefront_core::{DomainError, DomainResult, ProductId};

/// State owned by one UI session: catalog, criteria, cart and the derived
/// product view.
///
/// Criteria are replaced wholesale per interaction, never patched in place.
/// All operations run to completion synchronously; there is no concurrent
/// access to any of this state.
#[derive(Debug, Clone)]
pub struct StorefrontSession {
    catalog: Catalog,
    criteria: FilterCriteria,
    cart: Cart,
    view: Vec<Product>,
}

impl StorefrontSession {
    /// Start a session: empty criteria, empty cart, view = full catalog.
    pub fn new(catalog: Catalog) -> Self {
        let criteria = FilterCriteria::default();
        let view = pipeline::apply(&catalog, &criteria);
        Self {
            catalog,
            criteria,
            cart: Cart::default(),
            view,
        }
    }

    /// Resume a session with a previously saved cart.
    pub fn with_cart(catalog: Catalog, cart: Cart) -> Self {
        let mut session = Self::new(catalog);
        session.cart = cart;
        session
    }

    /// Replace the criteria and recompute the view.
    pub fn set_criteria(&mut self, criteria: FilterCriteria) {
        tracing::debug!(active_filters = criteria.active_filter_count(), "criteria replaced");
        self.criteria = criteria;
        self.recompute();
    }

    /// The Clear All action: back to default criteria.
    pub fn clear_criteria(&mut self) {
        self.set_criteria(FilterCriteria::default());
    }

    /// Swap in a new catalog (e.g. refreshed data) and recompute the view
    /// against the current criteria.
    pub fn replace_catalog(&mut self, catalog: Catalog) {
        tracing::debug!(products = catalog.len(), "catalog replaced");
        self.catalog = catalog;
        self.recompute();
    }

    fn recompute(&mut self) {
        self.view = pipeline::apply(&self.catalog, &self.criteria);
    }

    /// The current filtered, ordered products.
    pub fn view(&self) -> &[Product] {
        &self.view
    }

    /// Products currently shown ("Showing N of M").
    pub fn visible_count(&self) -> usize {
        self.view.len()
    }

    /// Total products in the catalog ("Showing N of M").
    pub fn total_count(&self) -> usize {
        self.catalog.len()
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Unique categories for the filter sidebar.
    pub fn categories(&self) -> Vec<&str> {
        self.catalog.categories()
    }

    /// Add to cart by catalog id. Unknown ids are `NotFound`; the quantity
    /// rules are the cart's.
    pub fn add_to_cart(&mut self, id: &ProductId, quantity: i64) -> DomainResult<()> {
        let product = self.catalog.get(id).ok_or(DomainError::NotFound)?.clone();
        self.cart.add_item(product, quantity)?;
        tracing::debug!(product = %id, quantity, badge = self.cart.item_count(), "added to cart");
        Ok(())
    }

    pub fn remove_from_cart(&mut self, id: &ProductId) {
        self.cart.remove_item(id);
    }

    pub fn set_cart_quantity(&mut self, id: &ProductId, quantity: i64) {
        self.cart.update_quantity(id, quantity);
    }

    /// The navigation badge number.
    pub fn badge_count(&self) -> i64 {
        self.cart.item_count()
    }

    /// Cart subtotal in the smallest currency unit.
    pub fn cart_subtotal(&self) -> u64 {
        self.cart.subtotal()
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }
}
