//! Core types for the storefront.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod category;
pub mod id;
pub mod price;
pub mod product;
pub mod recipient;
pub mod variant;

pub use category::{Category, CategoryFilter, CategoryParseError};
pub use id::*;
pub use price::{Price, PriceError};
pub use product::Product;
pub use recipient::{RecipientError, RecipientNumber};
pub use variant::{VariantLabel, VariantLabelError};
