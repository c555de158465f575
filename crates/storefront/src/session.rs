//! Shop session: the state one visit to the storefront holds.
//!
//! A session owns the catalog handle, the cart, the active category tab and
//! the option a visitor picked in each product's selector before pressing
//! "add to cart". The presentation layer keeps a `ShopSession`, calls these
//! methods on user actions, and re-renders when a [`CartChange`] reports a
//! modification.

use std::collections::HashMap;

use girlsshop_core::{CategoryFilter, Product, ProductId, VariantLabel};
use url::Url;

use crate::cart::{Cart, CartChange, CartError, LineKey};
use crate::catalog::Catalog;
use crate::order::{Checkout, Handoff, HandoffError};

/// Session-level errors.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("Unknown product {0}")]
    UnknownProduct(ProductId),
    #[error("{name} does not offer option {label}")]
    VariantNotOffered {
        product_id: ProductId,
        name: String,
        label: VariantLabel,
    },
    #[error("{name} is out of stock")]
    OutOfStock { product_id: ProductId, name: String },
    #[error(transparent)]
    Cart(#[from] CartError),
    #[error("The cart is empty")]
    EmptyCart,
    #[error(transparent)]
    Handoff(#[from] HandoffError),
}

/// Per-visit storefront state.
#[derive(Debug, Clone)]
pub struct ShopSession {
    catalog: Catalog,
    checkout: Checkout,
    cart: Cart,
    category: CategoryFilter,
    selections: HashMap<ProductId, VariantLabel>,
}

impl ShopSession {
    /// Start a session with an empty cart and every category shown.
    #[must_use]
    pub fn new(catalog: Catalog, checkout: Checkout) -> Self {
        Self {
            catalog,
            checkout,
            cart: Cart::new(),
            category: CategoryFilter::All,
            selections: HashMap::new(),
        }
    }

    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub const fn cart(&self) -> &Cart {
        &self.cart
    }

    #[must_use]
    pub const fn checkout_settings(&self) -> &Checkout {
        &self.checkout
    }

    #[must_use]
    pub const fn category(&self) -> CategoryFilter {
        self.category
    }

    /// Switch the category tab.
    pub fn select_category(&mut self, filter: CategoryFilter) {
        tracing::debug!(category = %filter, "Category selected");
        self.category = filter;
    }

    /// Products on the active tab, in catalog order.
    #[must_use]
    pub fn visible_products(&self) -> Vec<&Product> {
        self.catalog.filter(self.category)
    }

    /// Remember `label` as the chosen option for product `id`.
    ///
    /// # Errors
    ///
    /// Returns `UnknownProduct` if the id is not orderable, or
    /// `VariantNotOffered` if the product does not list `label`.
    pub fn select_variant(&mut self, id: ProductId, label: VariantLabel) -> Result<(), SessionError> {
        let product = self.product(id)?;
        if !product.offers(&label) {
            return Err(SessionError::VariantNotOffered {
                product_id: id,
                name: product.name.clone(),
                label,
            });
        }
        tracing::debug!(product_id = %id, variant = %label, "Variant selected");
        self.selections.insert(id, label);
        Ok(())
    }

    /// The option currently chosen for product `id`.
    #[must_use]
    pub fn selected_variant(&self, id: ProductId) -> Option<&VariantLabel> {
        self.selections.get(&id)
    }

    /// Add one unit of product `id` with its chosen option.
    ///
    /// # Errors
    ///
    /// Returns `UnknownProduct`, `OutOfStock`, or `Cart(VariantRequired)` when
    /// the product has options and none is selected. The cart is unchanged
    /// on every error.
    pub fn add_to_cart(&mut self, id: ProductId) -> Result<CartChange, SessionError> {
        let product = self
            .catalog
            .get(id)
            .ok_or(SessionError::UnknownProduct(id))?;
        if !product.in_stock {
            return Err(SessionError::OutOfStock {
                product_id: id,
                name: product.name.clone(),
            });
        }
        Ok(self.cart.add(product, self.selections.get(&id))?)
    }

    /// Raise the quantity of a line by one.
    pub fn increment(&mut self, key: &LineKey) -> CartChange {
        self.cart.update_quantity(key, 1)
    }

    /// Lower the quantity of a line by one, removing it at zero.
    pub fn decrement(&mut self, key: &LineKey) -> CartChange {
        self.cart.update_quantity(key, -1)
    }

    /// Drop a line regardless of quantity.
    pub fn remove(&mut self, key: &LineKey) -> CartChange {
        self.cart.remove(key)
    }

    /// The order message for the current cart.
    #[must_use]
    pub fn order_message(&self) -> String {
        self.checkout.message(&self.cart)
    }

    /// Hand-off link for the current cart.
    ///
    /// # Errors
    ///
    /// Returns `EmptyCart` when there is nothing to order.
    pub fn checkout_url(&self) -> Result<Url, SessionError> {
        if self.cart.is_empty() {
            return Err(SessionError::EmptyCart);
        }
        Ok(self.checkout.url(&self.cart))
    }

    /// Hand the order to `handoff` and start over with an empty cart.
    ///
    /// The cart is kept if the hand-off fails.
    ///
    /// # Errors
    ///
    /// Returns `EmptyCart`, or `Handoff` if the collaborator failed.
    pub fn checkout(&mut self, handoff: &impl Handoff) -> Result<Url, SessionError> {
        let url = self.checkout_url()?;
        handoff.open(&url)?;
        tracing::info!(
            store = self.catalog.store_name(),
            lines = self.cart.len(),
            items = self.cart.item_count(),
            total = %self.cart.total(),
            "Order handed off"
        );
        self.cart.clear();
        Ok(url)
    }

    fn product(&self, id: ProductId) -> Result<&Product, SessionError> {
        self.catalog.get(id).ok_or(SessionError::UnknownProduct(id))
    }
}
