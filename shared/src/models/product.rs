//! Product Model

use serde::{Deserialize, Serialize};
use std::fmt;

/// Fixed product category set
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    Electronics,
    Fashion,
    Beauty,
    Home,
    Sports,
}

impl Category {
    /// All categories, in display order
    pub const ALL: [Category; 5] = [
        Category::Electronics,
        Category::Fashion,
        Category::Beauty,
        Category::Home,
        Category::Sports,
    ];

    /// Stable lowercase identifier (matches the serde representation)
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Electronics => "electronics",
            Category::Fashion => "fashion",
            Category::Beauty => "beauty",
            Category::Home => "home",
            Category::Sports => "sports",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Catalog listing filter
///
/// `All` is the sentinel meaning no category filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryFilter {
    All,
    Only(Category),
}

impl CategoryFilter {
    /// Whether a product with the given category passes this filter
    pub fn matches(&self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(c) => *c == category,
        }
    }
}

/// Stock availability state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StockStatus {
    #[default]
    InStock,
    OutOfStock,
    Preorder,
}

/// Product entity
///
/// Identity is `id`; an admin edit replaces the full record (last write
/// wins). Image fields carry embeddable payloads (data URIs) or URLs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub title: String,
    /// Primary image payload; required for a product to be saved
    pub thumbnail: String,
    #[serde(default)]
    pub gallery_images: Vec<String>,
    /// Price in currency unit (MAD)
    pub price: f64,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: Category,
    #[serde(default)]
    pub stock_status: StockStatus,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub reviews_count: u32,
    #[serde(default)]
    pub shipping_time: String,
}
