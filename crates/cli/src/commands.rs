//! CLI subcommands.

use std::path::Path;

use girlsshop_storefront::{Catalog, CatalogError, StorefrontConfig};

pub mod catalog;
pub mod order;

/// Catalog from `--catalog` if given, else from configuration.
fn resolve_catalog(
    config: &StorefrontConfig,
    override_path: Option<&Path>,
) -> Result<Catalog, CatalogError> {
    match override_path {
        Some(path) => Catalog::load(path),
        None => config.load_catalog(),
    }
}
