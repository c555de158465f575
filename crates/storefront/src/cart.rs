//! In-memory shopping cart.
//!
//! The cart is an ordered list of lines, each identified by a [`LineKey`]:
//! the product id plus the chosen variant, if the product has variants. The
//! same product in two flavors is two lines, and every quantity change or
//! removal targets exactly one of them.
//!
//! Invariants held by every operation:
//! - a line present in the cart has quantity >= 1
//! - no two lines share a key
//! - a product that declares options is only present with one of them
//! - [`Cart::total`] is the sum of `unit_price * quantity` over all lines
//!
//! Every mutation returns a [`CartChange`] so the caller can tell whether
//! anything needs re-rendering.

use std::fmt;

use girlsshop_core::{Price, Product, ProductId, VariantLabel};
use serde::Serialize;

/// Cart operation errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CartError {
    /// The product declares variant options and none of them was chosen.
    #[error("choose an option for {name} before adding it to the cart")]
    VariantRequired {
        /// Product the caller tried to add.
        product_id: ProductId,
        /// Product display name.
        name: String,
        /// Options the caller may choose from.
        options: Vec<VariantLabel>,
    },
}

/// Identity of a cart line.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct LineKey {
    pub product_id: ProductId,
    pub variant: Option<VariantLabel>,
}

impl LineKey {
    /// Key for a product without variants.
    #[must_use]
    pub const fn product(product_id: ProductId) -> Self {
        Self {
            product_id,
            variant: None,
        }
    }

    /// Key for one variant of a product.
    #[must_use]
    pub const fn with_variant(product_id: ProductId, variant: VariantLabel) -> Self {
        Self {
            product_id,
            variant: Some(variant),
        }
    }
}

impl fmt::Display for LineKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.variant {
            Some(variant) => write!(f, "{}:{variant}", self.product_id),
            None => write!(f, "{}", self.product_id),
        }
    }
}

/// One entry in the cart.
///
/// Holds a snapshot of the product's name and unit price so the cart can be
/// rendered and formatted without going back to the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartLine {
    product_id: ProductId,
    name: String,
    unit_price: Price,
    variant: Option<VariantLabel>,
    quantity: u32,
}

impl CartLine {
    fn new(product: &Product, variant: Option<VariantLabel>) -> Self {
        Self {
            product_id: product.id,
            name: product.name.clone(),
            unit_price: product.price,
            variant,
            quantity: 1,
        }
    }

    #[must_use]
    pub const fn product_id(&self) -> ProductId {
        self.product_id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn unit_price(&self) -> Price {
        self.unit_price
    }

    #[must_use]
    pub const fn variant(&self) -> Option<&VariantLabel> {
        self.variant.as_ref()
    }

    /// Always at least 1.
    #[must_use]
    pub const fn quantity(&self) -> u32 {
        self.quantity
    }

    /// `unit_price * quantity`.
    #[must_use]
    pub const fn subtotal(&self) -> Price {
        self.unit_price.times(self.quantity)
    }

    /// This line's identity.
    #[must_use]
    pub fn key(&self) -> LineKey {
        LineKey {
            product_id: self.product_id,
            variant: self.variant.clone(),
        }
    }

    fn matches(&self, key: &LineKey) -> bool {
        self.product_id == key.product_id && self.variant == key.variant
    }
}

/// What a cart operation did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartChange {
    /// A new line was appended with quantity 1.
    Added,
    /// An existing line's quantity was raised by one.
    Incremented { quantity: u32 },
    /// An existing line's quantity was replaced.
    Updated { quantity: u32 },
    /// One or more lines were removed.
    Removed,
    /// Nothing matched; the cart is as it was.
    Unchanged,
}

impl CartChange {
    /// Returns true if the cart was modified.
    #[must_use]
    pub const fn is_changed(&self) -> bool {
        !matches!(self, Self::Unchanged)
    }
}

/// Ordered collection of cart lines.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// An empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Add one unit of `product`, merging with an existing line of the same
    /// key.
    ///
    /// For a product without options any supplied variant is ignored. The
    /// cart is untouched when this returns an error.
    ///
    /// # Errors
    ///
    /// Returns `CartError::VariantRequired` if the product declares options
    /// and `variant` is missing or not one of them.
    pub fn add(
        &mut self,
        product: &Product,
        variant: Option<&VariantLabel>,
    ) -> Result<CartChange, CartError> {
        let variant = if product.requires_variant() {
            match variant {
                Some(label) if product.offers(label) => Some(label.clone()),
                _ => {
                    tracing::warn!(
                        product_id = %product.id,
                        variant = ?variant.map(VariantLabel::as_str),
                        "Rejected add: variant required"
                    );
                    return Err(CartError::VariantRequired {
                        product_id: product.id,
                        name: product.name.clone(),
                        options: product.options().to_vec(),
                    });
                }
            }
        } else {
            None
        };

        let key = LineKey {
            product_id: product.id,
            variant,
        };

        if let Some(line) = self.lines.iter_mut().find(|line| line.matches(&key)) {
            line.quantity = line.quantity.saturating_add(1);
            tracing::debug!(%key, quantity = line.quantity, "Incremented cart line");
            return Ok(CartChange::Incremented {
                quantity: line.quantity,
            });
        }

        tracing::debug!(%key, "Added cart line");
        self.lines.push(CartLine::new(product, key.variant));
        Ok(CartChange::Added)
    }

    /// Add `delta` to the quantity of the line with `key`.
    ///
    /// A resulting quantity of zero or less removes the line. A missing key
    /// is a no-op.
    pub fn update_quantity(&mut self, key: &LineKey, delta: i64) -> CartChange {
        let Some(index) = self.lines.iter().position(|line| line.matches(key)) else {
            tracing::debug!(%key, delta, "Quantity update for missing line ignored");
            return CartChange::Unchanged;
        };

        let current = self.lines.get(index).map_or(0, |line| i64::from(line.quantity));
        let next = current.saturating_add(delta);

        if next <= 0 {
            self.lines.remove(index);
            tracing::debug!(%key, "Removed cart line (quantity reached zero)");
            return CartChange::Removed;
        }

        let quantity = u32::try_from(next).unwrap_or(u32::MAX);
        if let Some(line) = self.lines.get_mut(index) {
            line.quantity = quantity;
        }
        tracing::debug!(%key, quantity, "Updated cart line quantity");
        CartChange::Updated { quantity }
    }

    /// Remove every line matching `key`. A missing key is a no-op.
    pub fn remove(&mut self, key: &LineKey) -> CartChange {
        let before = self.lines.len();
        self.lines.retain(|line| !line.matches(key));
        if self.lines.len() == before {
            CartChange::Unchanged
        } else {
            tracing::debug!(%key, "Removed cart line");
            CartChange::Removed
        }
    }

    /// Empty the cart.
    pub fn clear(&mut self) -> CartChange {
        if self.lines.is_empty() {
            return CartChange::Unchanged;
        }
        self.lines.clear();
        CartChange::Removed
    }

    /// Sum of `unit_price * quantity` over all lines.
    #[must_use]
    pub fn total(&self) -> Price {
        self.lines.iter().map(CartLine::subtotal).sum()
    }

    /// Sum of quantities over all lines (the badge count).
    #[must_use]
    pub fn item_count(&self) -> u64 {
        self.lines.iter().map(|line| u64::from(line.quantity)).sum()
    }

    /// Lines in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Line with `key`, if present.
    #[must_use]
    pub fn get(&self, key: &LineKey) -> Option<&CartLine> {
        self.lines.iter().find(|line| line.matches(key))
    }

    /// Number of distinct lines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use girlsshop_core::Category;

    use super::*;

    fn lip_matte() -> Product {
        Product {
            id: ProductId::new(1),
            name: "Lip Matte Miss Bettylip".to_string(),
            price: Price::new(4500),
            image: String::new(),
            in_stock: true,
            category: Category::Maquillaje,
            options: None,
        }
    }

    fn balsamo() -> Product {
        Product {
            id: ProductId::new(37),
            name: "Bálsamo Hidratante".to_string(),
            price: Price::new(4000),
            image: String::new(),
            in_stock: true,
            category: Category::Maquillaje,
            options: Some(
                ["Uva", "Arándanos"]
                    .into_iter()
                    .map(|s| VariantLabel::parse(s).unwrap())
                    .collect(),
            ),
        }
    }

    fn label(s: &str) -> VariantLabel {
        VariantLabel::parse(s).unwrap()
    }

    #[test]
    fn test_new_cart_is_empty() {
        let cart = Cart::new();
        assert!(cart.is_empty());
        assert_eq!(cart.total(), Price::ZERO);
        assert_eq!(cart.item_count(), 0);
    }

    #[test]
    fn test_add_merge_update_scenario() {
        let product = lip_matte();
        let key = LineKey::product(product.id);
        let mut cart = Cart::new();

        assert_eq!(cart.add(&product, None).unwrap(), CartChange::Added);
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.get(&key).unwrap().quantity(), 1);
        assert_eq!(cart.total(), Price::new(4500));

        assert_eq!(
            cart.add(&product, None).unwrap(),
            CartChange::Incremented { quantity: 2 }
        );
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.total(), Price::new(9000));

        assert_eq!(
            cart.update_quantity(&key, -1),
            CartChange::Updated { quantity: 1 }
        );
        assert_eq!(cart.total(), Price::new(4500));

        assert_eq!(cart.update_quantity(&key, -1), CartChange::Removed);
        assert!(cart.is_empty());
        assert_eq!(cart.total(), Price::ZERO);
    }

    #[test]
    fn test_variant_required_leaves_cart_untouched() {
        let mut cart = Cart::new();
        cart.add(&lip_matte(), None).unwrap();
        let before = cart.clone();

        let err = cart.add(&balsamo(), None).unwrap_err();
        let CartError::VariantRequired {
            product_id,
            options,
            ..
        } = err;
        assert_eq!(product_id, ProductId::new(37));
        assert_eq!(options.len(), 2);
        assert_eq!(cart, before);
    }

    #[test]
    fn test_variant_not_offered_is_rejected() {
        let mut cart = Cart::new();
        let result = cart.add(&balsamo(), Some(&label("Menta")));
        assert!(matches!(result, Err(CartError::VariantRequired { .. })));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_add_with_variant() {
        let mut cart = Cart::new();
        cart.add(&balsamo(), Some(&label("Uva"))).unwrap();
        assert_eq!(cart.len(), 1);
        let line = &cart.lines()[0];
        assert_eq!(line.variant().map(VariantLabel::as_str), Some("Uva"));
        assert_eq!(line.quantity(), 1);
    }

    #[test]
    fn test_variant_ignored_for_plain_product() {
        let mut cart = Cart::new();
        cart.add(&lip_matte(), Some(&label("Rojo"))).unwrap();
        cart.add(&lip_matte(), None).unwrap();
        assert_eq!(cart.len(), 1);
        assert!(cart.lines()[0].variant().is_none());
        assert_eq!(cart.lines()[0].quantity(), 2);
    }

    #[test]
    fn test_variants_are_distinct_lines() {
        let product = balsamo();
        let uva = LineKey::with_variant(product.id, label("Uva"));
        let arandanos = LineKey::with_variant(product.id, label("Arándanos"));
        let mut cart = Cart::new();

        cart.add(&product, uva.variant.as_ref()).unwrap();
        cart.add(&product, arandanos.variant.as_ref()).unwrap();
        cart.add(&product, uva.variant.as_ref()).unwrap();
        assert_eq!(cart.len(), 2);
        assert_eq!(cart.item_count(), 3);

        // Only the keyed variant changes.
        assert_eq!(cart.update_quantity(&uva, -5), CartChange::Removed);
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.get(&arandanos).unwrap().quantity(), 1);

        assert_eq!(cart.remove(&arandanos), CartChange::Removed);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_insertion_order_is_preserved() {
        let mut cart = Cart::new();
        cart.add(&balsamo(), Some(&label("Uva"))).unwrap();
        cart.add(&lip_matte(), None).unwrap();
        cart.add(&balsamo(), Some(&label("Uva"))).unwrap();

        let ids: Vec<i32> = cart.lines().iter().map(|l| l.product_id().as_i32()).collect();
        assert_eq!(ids, [37, 1]);
    }

    #[test]
    fn test_update_missing_line_is_noop() {
        let mut cart = Cart::new();
        cart.add(&lip_matte(), None).unwrap();
        let before = cart.clone();

        assert_eq!(
            cart.update_quantity(&LineKey::product(ProductId::new(99)), 3),
            CartChange::Unchanged
        );
        // Same id, different variant: not the same line.
        assert_eq!(
            cart.update_quantity(&LineKey::with_variant(ProductId::new(1), label("X")), -1),
            CartChange::Unchanged
        );
        assert_eq!(cart, before);
    }

    #[test]
    fn test_update_positive_delta() {
        let product = lip_matte();
        let key = LineKey::product(product.id);
        let mut cart = Cart::new();
        cart.add(&product, None).unwrap();

        assert_eq!(
            cart.update_quantity(&key, 4),
            CartChange::Updated { quantity: 5 }
        );
        assert_eq!(cart.item_count(), 5);
        assert_eq!(cart.total(), Price::new(22500));
    }

    #[test]
    fn test_update_by_negative_quantity_removes() {
        let product = lip_matte();
        let key = LineKey::product(product.id);
        let mut cart = Cart::new();
        for _ in 0..3 {
            cart.add(&product, None).unwrap();
        }
        assert_eq!(cart.update_quantity(&key, -3), CartChange::Removed);
        assert!(cart.get(&key).is_none());
    }

    #[test]
    fn test_remove_missing_is_noop() {
        let mut cart = Cart::new();
        assert_eq!(
            cart.remove(&LineKey::product(ProductId::new(1))),
            CartChange::Unchanged
        );
    }

    #[test]
    fn test_clear() {
        let mut cart = Cart::new();
        assert_eq!(cart.clear(), CartChange::Unchanged);
        cart.add(&lip_matte(), None).unwrap();
        assert_eq!(cart.clear(), CartChange::Removed);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_item_count_sums_quantities() {
        let mut cart = Cart::new();
        cart.add(&lip_matte(), None).unwrap();
        cart.add(&lip_matte(), None).unwrap();
        cart.add(&balsamo(), Some(&label("Uva"))).unwrap();
        assert_eq!(cart.len(), 2);
        assert_eq!(cart.item_count(), 3);
        assert_eq!(cart.total(), Price::new(4500 * 2 + 4000));
    }

    #[test]
    fn test_line_key_display() {
        assert_eq!(LineKey::product(ProductId::new(1)).to_string(), "1");
        assert_eq!(
            LineKey::with_variant(ProductId::new(37), label("Uva")).to_string(),
            "37:Uva"
        );
    }
}
