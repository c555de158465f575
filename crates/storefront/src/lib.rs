//! girlsshop Storefront library.
//!
//! Everything a single-page storefront needs besides its markup: the product
//! catalog with category filtering, the in-memory cart, and the checkout that
//! turns a cart into a WhatsApp order message.
//!
//! # Architecture
//!
//! - [`catalog`] - Validated product list, embedded or loaded from JSON/YAML
//! - [`cart`] - Cart state machine (add/merge, quantity updates, totals)
//! - [`order`] - Order message formatting and the messaging deep link
//! - [`session`] - Per-visit state tying catalog, cart and checkout together
//! - [`config`] - Environment-driven configuration
//! - [`error`] - Unified error type
//!
//! There is no I/O beyond reading an optional catalog file; opening the
//! order link is delegated to an [`order::Handoff`] implementation.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod config;
pub mod error;
pub mod order;
pub mod session;

pub use cart::{Cart, CartChange, CartError, CartLine, LineKey};
pub use catalog::{Catalog, CatalogError};
pub use config::{ConfigError, StorefrontConfig};
pub use error::{Result, StorefrontError};
pub use order::{Checkout, Handoff, HandoffError, MessagingEndpoint, OrderTemplate, format_order};
pub use session::{ShopSession, SessionError};
