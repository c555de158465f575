//! Integration tests for the girlsshop storefront.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p girlsshop-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `cart_properties` - Cart invariants under long random operation sequences
//! - `catalog_filter` - Category filtering and catalog files on disk
//! - `checkout_flow` - Session scenarios end to end, down to the decoded link
//!
//! This library holds the fixtures those tests share.

#![cfg_attr(not(test), forbid(unsafe_code))]
#![allow(clippy::unwrap_used, clippy::missing_panics_doc)]

use std::cell::RefCell;

use girlsshop_core::{Category, Price, Product, ProductId, RecipientNumber, VariantLabel};
use girlsshop_storefront::{Catalog, Checkout, Handoff, HandoffError, ShopSession};
use url::Url;

/// The shop's real WhatsApp number, as shipped in the default config.
pub const SHOP_NUMBER: &str = "542975147537";

/// Build a product, with options when `options` is non-empty.
#[must_use]
pub fn product(id: i32, name: &str, price: u64, category: Category, options: &[&str]) -> Product {
    Product {
        id: ProductId::new(id),
        name: name.to_string(),
        price: Price::new(price),
        image: format!("/{name}/photo.jpeg"),
        in_stock: true,
        category,
        options: if options.is_empty() {
            None
        } else {
            Some(options.iter().map(|s| label(s)).collect())
        },
    }
}

/// Parse a variant label.
#[must_use]
pub fn label(s: &str) -> VariantLabel {
    VariantLabel::parse(s).unwrap()
}

/// Checkout settings pointing at the shop's number.
#[must_use]
pub fn checkout() -> Checkout {
    Checkout::new(RecipientNumber::parse(SHOP_NUMBER).unwrap())
}

/// A session over the built-in catalog.
#[must_use]
pub fn builtin_session() -> ShopSession {
    ShopSession::new(Catalog::builtin().unwrap(), checkout())
}

/// Decode the `text` query parameter of a hand-off link.
#[must_use]
pub fn decoded_text(url: &Url) -> String {
    let encoded = url.query().unwrap().strip_prefix("text=").unwrap();
    urlencoding::decode(encoded).unwrap().into_owned()
}

/// A [`Handoff`] that remembers every link it was given.
#[derive(Debug, Default)]
pub struct RecordingHandoff {
    pub opened: RefCell<Vec<Url>>,
}

impl Handoff for RecordingHandoff {
    fn open(&self, url: &Url) -> Result<(), HandoffError> {
        self.opened.borrow_mut().push(url.clone());
        Ok(())
    }
}
