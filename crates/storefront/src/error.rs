//! Unified error handling.
//!
//! Each module has its own error enum; `StorefrontError` wraps them so a host
//! (the CLI, a UI shell) can work with a single `Result` type.

use thiserror::Error;

use crate::cart::CartError;
use crate::catalog::CatalogError;
use crate::config::ConfigError;
use crate::order::HandoffError;
use crate::session::SessionError;

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum StorefrontError {
    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Catalog could not be loaded or failed validation.
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// A cart operation was rejected.
    #[error("Cart error: {0}")]
    Cart(#[from] CartError),

    /// A session action was rejected.
    #[error("Session error: {0}")]
    Session(#[from] SessionError),

    /// The hand-off collaborator failed.
    #[error("{0}")]
    Handoff(#[from] HandoffError),
}

impl StorefrontError {
    /// Returns true for errors the visitor can fix by changing their input
    /// (choosing an option, adding something to an empty cart), as opposed
    /// to configuration or data problems.
    #[must_use]
    pub const fn is_user_error(&self) -> bool {
        match self {
            Self::Cart(_) => true,
            Self::Session(err) => !matches!(err, SessionError::Handoff(_)),
            Self::Config(_) | Self::Catalog(_) | Self::Handoff(_) => false,
        }
    }
}

/// Result type alias for `StorefrontError`.
pub type Result<T> = std::result::Result<T, StorefrontError>;
