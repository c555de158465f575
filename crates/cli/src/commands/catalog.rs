//! Catalog inspection commands.

use std::io::Write;
use std::path::Path;

use girlsshop_core::{CategoryFilter, Product, VariantLabel};
use girlsshop_storefront::{Catalog, StorefrontConfig};
use tracing::info;

/// Print the products passing `filter`, one per line.
///
/// # Errors
///
/// Returns an error if the catalog cannot be loaded or stdout is closed.
pub fn list(
    config: &StorefrontConfig,
    catalog_path: Option<&Path>,
    filter: CategoryFilter,
) -> Result<(), Box<dyn std::error::Error>> {
    let catalog = super::resolve_catalog(config, catalog_path)?;
    let products = catalog.filter(filter);

    info!(
        store = catalog.store_name(),
        category = %filter,
        shown = products.len(),
        total = catalog.len(),
        "Listing catalog"
    );

    let mut out = std::io::stdout().lock();
    for product in products {
        writeln!(out, "{}", product_row(product))?;
    }
    if !catalog.upcoming().is_empty() {
        writeln!(out, "\nPróximamente:")?;
        for product in catalog.upcoming() {
            writeln!(out, "{}", product_row(product))?;
        }
    }
    Ok(())
}

/// Load and validate a catalog file, reporting a per-category summary.
///
/// # Errors
///
/// Returns an error if the file cannot be read, parsed or validated.
pub fn validate(path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let catalog = Catalog::load(path)?;

    info!(path = %path.display(), "Catalog is valid");

    let mut out = std::io::stdout().lock();
    writeln!(
        out,
        "{}: {} products, {} upcoming",
        catalog.store_name(),
        catalog.len(),
        catalog.upcoming().len()
    )?;
    for category in girlsshop_core::Category::ALL {
        writeln!(
            out,
            "  {:<18} {}",
            category.label(),
            catalog.filter(category.into()).len()
        )?;
    }
    Ok(())
}

/// `  37  Bálsamo Hidratante  $4000  [Uva, Arándanos]`
fn product_row(product: &Product) -> String {
    let mut row = format!(
        "{:>4}  {}  {}",
        product.id.as_i32(),
        product.name,
        product.price
    );
    if product.requires_variant() {
        let options: Vec<&str> = product.options().iter().map(VariantLabel::as_str).collect();
        row.push_str(&format!("  [{}]", options.join(", ")));
    }
    if !product.in_stock {
        row.push_str("  (sin stock)");
    }
    row
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use girlsshop_core::ProductId;

    use super::*;

    #[test]
    fn test_product_row_with_options() {
        let catalog = Catalog::builtin().unwrap();
        let row = product_row(catalog.get(ProductId::new(37)).unwrap());
        assert_eq!(
            row,
            "  37  Bálsamo Hidratante  $4000  [Uva, Arándanos, Limón, Cereza]"
        );
    }

    #[test]
    fn test_product_row_plain() {
        let catalog = Catalog::builtin().unwrap();
        let row = product_row(catalog.get(ProductId::new(1)).unwrap());
        assert_eq!(row, "   1  Lip Matte Miss Bettylip  $4500");
    }
}
