//! girlsshop Core - Shared types library.
//!
//! This crate provides common types used across all storefront components:
//! - `storefront` - Catalog, cart engine, order formatting and shop sessions
//! - `cli` - Command-line tools for catalog checks and order links
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no configuration, no
//! logging. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for product IDs, prices, categories,
//!   variant labels and messaging recipients, plus the [`Product`] record

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
