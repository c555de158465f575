//! Catalog product record.

use serde::{Deserialize, Serialize};

use super::{Category, Price, ProductId, VariantLabel};

/// An immutable catalog entry.
///
/// Products are static configuration data; they are loaded once with the
/// catalog and never created or destroyed while a session runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Unit price in minor units.
    pub price: Price,
    /// Image reference (a path under the site's public assets).
    #[serde(default)]
    pub image: String,
    /// Whether the product is currently in stock.
    #[serde(default = "default_in_stock")]
    pub in_stock: bool,
    /// Catalog category.
    pub category: Category,
    /// Selectable variant labels (e.g. flavors). When present and non-empty,
    /// a variant must be chosen before the product can go into a cart.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<VariantLabel>>,
}

const fn default_in_stock() -> bool {
    true
}

impl Product {
    /// The variant labels this product offers, empty if none.
    #[must_use]
    pub fn options(&self) -> &[VariantLabel] {
        self.options.as_deref().unwrap_or_default()
    }

    /// Returns true if a variant must be chosen to order this product.
    #[must_use]
    pub fn requires_variant(&self) -> bool {
        !self.options().is_empty()
    }

    /// Returns true if `label` is one of this product's variant options.
    #[must_use]
    pub fn offers(&self, label: &VariantLabel) -> bool {
        self.options().contains(label)
    }
}
