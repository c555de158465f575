//! Order composition command.

use std::io::Write;
use std::path::Path;
use std::str::FromStr;

use girlsshop_core::{ProductId, VariantLabel, VariantLabelError};
use girlsshop_storefront::{Handoff, HandoffError, ShopSession, StorefrontConfig};
use tracing::info;
use url::Url;

/// Errors parsing an `--item` argument.
#[derive(Debug, thiserror::Error)]
pub enum ItemSpecError {
    #[error("invalid product id {0:?}")]
    InvalidId(String),
    #[error("invalid option: {0}")]
    InvalidVariant(#[from] VariantLabelError),
}

/// One `--item` argument: `ID` or `ID:OPTION`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemSpec {
    pub product_id: ProductId,
    pub variant: Option<VariantLabel>,
}

impl FromStr for ItemSpec {
    type Err = ItemSpecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (id, variant) = match s.split_once(':') {
            Some((id, variant)) => (id, Some(VariantLabel::parse(variant)?)),
            None => (s, None),
        };
        let product_id = id
            .parse::<ProductId>()
            .map_err(|_| ItemSpecError::InvalidId(id.to_string()))?;
        Ok(Self {
            product_id,
            variant,
        })
    }
}

/// Hands the order link to the terminal by printing it.
struct TerminalHandoff;

impl Handoff for TerminalHandoff {
    fn open(&self, url: &Url) -> Result<(), HandoffError> {
        writeln!(std::io::stdout().lock(), "{url}").map_err(|e| HandoffError(e.to_string()))
    }
}

/// Add every item to a fresh session, print the order message and link.
///
/// # Errors
///
/// Returns an error if the catalog cannot be loaded, an item is unknown or
/// lacks a required option, or stdout is closed.
pub fn compose(
    config: &StorefrontConfig,
    catalog_path: Option<&Path>,
    items: &[ItemSpec],
) -> Result<(), Box<dyn std::error::Error>> {
    let catalog = super::resolve_catalog(config, catalog_path)?;
    let mut session = ShopSession::new(catalog, config.checkout());

    for item in items {
        if let Some(variant) = &item.variant {
            session.select_variant(item.product_id, variant.clone())?;
        }
        session.add_to_cart(item.product_id)?;
    }

    info!(
        lines = session.cart().len(),
        items = session.cart().item_count(),
        total = %session.cart().total(),
        "Order composed"
    );

    writeln!(std::io::stdout().lock(), "{}\n", session.order_message())?;
    session.checkout(&TerminalHandoff)?;
    Ok(())
}
