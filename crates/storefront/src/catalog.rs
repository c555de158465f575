//! Static product catalog and category filtering.
//!
//! The shop's product list is configuration data. The default catalog is
//! embedded from `catalog/products.json` at compile time; another storefront
//! (or a seasonal variant of this one) can supply its own JSON or YAML file
//! instead of forking code.
//!
//! ```json
//! {
//!   "store_name": "girlsshop.pm",
//!   "products": [
//!     { "id": 37, "name": "Bálsamo Hidratante", "price": 4000,
//!       "category": "maquillaje", "options": ["Uva", "Cereza"] }
//!   ],
//!   "upcoming": []
//! }
//! ```

use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;

use girlsshop_core::{CategoryFilter, Product, ProductId, VariantLabel};
use serde::Deserialize;

/// Embedded default catalog.
const BUILTIN_CATALOG: &str = include_str!("../catalog/products.json");

/// Store name used when a catalog file does not name one.
pub const DEFAULT_STORE_NAME: &str = "girlsshop.pm";

/// Errors raised while loading or validating a catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    Io(String),
    #[error("Parse error: {0}")]
    Parse(String),
    #[error("Unsupported catalog format: {0} (expected .json, .yaml or .yml)")]
    UnsupportedFormat(String),
    #[error("Duplicate product id {0}")]
    DuplicateId(ProductId),
    #[error("Product {0} has an empty name")]
    EmptyName(ProductId),
    #[error("Product {0} must have a positive price")]
    ZeroPrice(ProductId),
    #[error("Product {0} declares an empty option list")]
    EmptyOptions(ProductId),
    #[error("Product {id} lists option {label} more than once")]
    DuplicateOption { id: ProductId, label: VariantLabel },
}

/// On-disk catalog layout.
#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    store_name: Option<String>,
    products: Vec<Product>,
    #[serde(default)]
    upcoming: Vec<Product>,
}

/// Validated, immutable product catalog.
///
/// Product lists are behind `Arc` so sessions can clone the catalog freely.
#[derive(Debug, Clone)]
pub struct Catalog {
    store_name: String,
    products: Arc<Vec<Product>>,
    upcoming: Arc<Vec<Product>>,
}

impl Catalog {
    /// Build a catalog, validating every product.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if ids repeat (across both lists), a name is
    /// blank, a price is zero, or an option list is empty or repeats a label.
    pub fn new(
        store_name: impl Into<String>,
        products: Vec<Product>,
        upcoming: Vec<Product>,
    ) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for product in products.iter().chain(&upcoming) {
            if !seen.insert(product.id) {
                return Err(CatalogError::DuplicateId(product.id));
            }
            validate_product(product)?;
        }

        Ok(Self {
            store_name: store_name.into(),
            products: Arc::new(products),
            upcoming: Arc::new(upcoming),
        })
    }

    /// The catalog shipped with the storefront.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the embedded data fails to parse or validate.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json(BUILTIN_CATALOG)
    }

    /// Parse a catalog from JSON.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Parse` on malformed input, or a validation error.
    pub fn from_json(input: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile =
            serde_json::from_str(input).map_err(|e| CatalogError::Parse(e.to_string()))?;
        Self::from_file(file)
    }

    /// Parse a catalog from YAML.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Parse` on malformed input, or a validation error.
    pub fn from_yaml(input: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile =
            serde_yaml::from_str(input).map_err(|e| CatalogError::Parse(e.to_string()))?;
        Self::from_file(file)
    }

    /// Load a catalog file, picking the format from its extension.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the file cannot be read, has an unknown
    /// extension, or fails to parse or validate.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        let parse: fn(&str) -> Result<Self, CatalogError> = match extension.as_deref() {
            Some("json") => Self::from_json,
            Some("yaml" | "yml") => Self::from_yaml,
            _ => return Err(CatalogError::UnsupportedFormat(path.display().to_string())),
        };

        let content = std::fs::read_to_string(path).map_err(|e| CatalogError::Io(e.to_string()))?;
        let catalog = parse(&content)?;

        tracing::info!(
            path = %path.display(),
            products = catalog.len(),
            upcoming = catalog.upcoming.len(),
            "Loaded catalog"
        );
        Ok(catalog)
    }

    fn from_file(file: CatalogFile) -> Result<Self, CatalogError> {
        let store_name = file
            .store_name
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_STORE_NAME.to_string());
        Self::new(store_name, file.products, file.upcoming)
    }

    /// Store name shown in the header and used in logs.
    #[must_use]
    pub fn store_name(&self) -> &str {
        &self.store_name
    }

    /// Orderable products, in catalog order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// "Coming soon" products. These are displayed but never orderable.
    #[must_use]
    pub fn upcoming(&self) -> &[Product] {
        &self.upcoming
    }

    /// Number of orderable products.
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Returns true if there are no orderable products.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Look up an orderable product by id.
    #[must_use]
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|product| product.id == id)
    }

    /// Products passing `filter`, preserving catalog order.
    #[must_use]
    pub fn filter(&self, filter: CategoryFilter) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|product| filter.matches(product.category))
            .collect()
    }
}

fn validate_product(product: &Product) -> Result<(), CatalogError> {
    if product.name.trim().is_empty() {
        return Err(CatalogError::EmptyName(product.id));
    }
    if product.price.is_zero() {
        return Err(CatalogError::ZeroPrice(product.id));
    }
    if let Some(options) = &product.options {
        if options.is_empty() {
            return Err(CatalogError::EmptyOptions(product.id));
        }
        let mut labels = HashSet::new();
        for label in options {
            if !labels.insert(label) {
                return Err(CatalogError::DuplicateOption {
                    id: product.id,
                    label: label.clone(),
                });
            }
        }
    }
    Ok(())
}
