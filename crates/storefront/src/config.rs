//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional:
//! - `STOREFRONT_NAME` - Store name override (default: catalog's name)
//! - `STOREFRONT_WHATSAPP_NUMBER` - Order recipient (default: 542975147537)
//! - `STOREFRONT_MESSAGING_URL` - Deep-link base (default: <https://wa.me>)
//! - `STOREFRONT_CATALOG_PATH` - JSON/YAML catalog replacing the built-in one
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name

use std::path::PathBuf;

use girlsshop_core::{RecipientError, RecipientNumber};
use thiserror::Error;

use crate::catalog::{Catalog, CatalogError};
use crate::order::{Checkout, DEFAULT_MESSAGING_URL, EndpointError, MessagingEndpoint, OrderTemplate};

/// The shop's WhatsApp number.
pub const DEFAULT_WHATSAPP_NUMBER: &str = "542975147537";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable STOREFRONT_WHATSAPP_NUMBER: {0}")]
    InvalidRecipient(#[from] RecipientError),
    #[error("Invalid environment variable STOREFRONT_MESSAGING_URL: {0}")]
    InvalidMessagingUrl(#[from] EndpointError),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// Store name override
    pub store_name: Option<String>,
    /// Order recipient
    pub recipient: RecipientNumber,
    /// Messaging deep-link base
    pub messaging: MessagingEndpoint,
    /// Catalog file replacing the built-in catalog
    pub catalog_path: Option<PathBuf>,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment name
    pub sentry_environment: Option<String>,
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    ///
    /// Blank values count as unset.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a value is invalid.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let recipient = RecipientNumber::parse(
            &get("STOREFRONT_WHATSAPP_NUMBER").unwrap_or_else(|| DEFAULT_WHATSAPP_NUMBER.to_string()),
        )?;
        let messaging = MessagingEndpoint::parse(
            &get("STOREFRONT_MESSAGING_URL").unwrap_or_else(|| DEFAULT_MESSAGING_URL.to_string()),
        )?;

        let catalog_path = get("STOREFRONT_CATALOG_PATH").map(PathBuf::from);
        if let Some(path) = &catalog_path {
            if path.is_dir() {
                return Err(ConfigError::InvalidEnvVar(
                    "STOREFRONT_CATALOG_PATH".to_string(),
                    format!("{} is a directory", path.display()),
                ));
            }
        }

        Ok(Self {
            store_name: get("STOREFRONT_NAME").map(|name| name.trim().to_string()),
            recipient,
            messaging,
            catalog_path,
            sentry_dsn: get("SENTRY_DSN"),
            sentry_environment: get("SENTRY_ENVIRONMENT"),
        })
    }

    /// Checkout settings for this storefront.
    #[must_use]
    pub fn checkout(&self) -> Checkout {
        Checkout {
            endpoint: self.messaging.clone(),
            recipient: self.recipient.clone(),
            template: OrderTemplate::default(),
        }
    }

    /// Load the configured catalog, or the built-in one.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the catalog cannot be loaded.
    pub fn load_catalog(&self) -> Result<Catalog, CatalogError> {
        let catalog = match &self.catalog_path {
            Some(path) => Catalog::load(path)?,
            None => Catalog::builtin()?,
        };
        match &self.store_name {
            Some(name) => Catalog::new(
                name.clone(),
                catalog.products().to_vec(),
                catalog.upcoming().to_vec(),
            ),
            None => Ok(catalog),
        }
    }
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            store_name: None,
            recipient: RecipientNumber::parse(DEFAULT_WHATSAPP_NUMBER)
                .expect("default recipient number is valid"),
            messaging: MessagingEndpoint::default(),
            catalog_path: None,
            sentry_dsn: None,
            sentry_environment: None,
        }
    }
}
