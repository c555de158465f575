//! Product categories and the catalog filter selection.

use serde::{Deserialize, Serialize};

/// Error returned when a category name is not recognised.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid category: {0}")]
pub struct CategoryParseError(pub String);

/// Fixed classification tag on a product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    /// Makeup.
    Maquillaje,
    /// Accessories (brushes, combs, clips).
    Accesorios,
    /// Personal care (skin care, patches, fragrances).
    CuidadoPersonal,
}

impl Category {
    /// Every category, in display order.
    pub const ALL: [Self; 3] = [Self::Maquillaje, Self::Accesorios, Self::CuidadoPersonal];

    /// Wire name, as used in catalog files and on the command line.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Maquillaje => "maquillaje",
            Self::Accesorios => "accesorios",
            Self::CuidadoPersonal => "cuidado-personal",
        }
    }

    /// Human-readable label shown on the category tabs.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Maquillaje => "Maquillaje",
            Self::Accesorios => "Accesorios",
            Self::CuidadoPersonal => "Cuidado Personal",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = CategoryParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "maquillaje" => Ok(Self::Maquillaje),
            "accesorios" => Ok(Self::Accesorios),
            "cuidado-personal" => Ok(Self::CuidadoPersonal),
            other => Err(CategoryParseError(other.to_owned())),
        }
    }
}

/// The active catalog tab: every product, or one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CategoryFilter {
    /// No filtering.
    #[default]
    All,
    /// Only products in this category.
    Only(Category),
}

impl CategoryFilter {
    /// Wire name of the "all" sentinel.
    pub const ALL_SENTINEL: &'static str = "all";

    /// Returns true if a product in `category` passes this filter.
    #[must_use]
    pub fn matches(&self, category: Category) -> bool {
        match self {
            Self::All => true,
            Self::Only(selected) => *selected == category,
        }
    }
}

impl From<Category> for CategoryFilter {
    fn from(category: Category) -> Self {
        Self::Only(category)
    }
}

impl std::fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::All => f.write_str(Self::ALL_SENTINEL),
            Self::Only(category) => category.fmt(f),
        }
    }
}

impl std::str::FromStr for CategoryFilter {
    type Err = CategoryParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim() == Self::ALL_SENTINEL {
            return Ok(Self::All);
        }
        s.parse().map(Self::Only)
    }
}
