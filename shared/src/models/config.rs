//! Static store configuration
//!
//! `StoreConfig` is the application's static configuration source: the seed
//! catalog, the analytics configuration and the fixed reference data. The
//! engine loads it on first boot and the snapshot exporter regenerates it
//! from live state so the operator can save it back over the original.

use serde::{Deserialize, Serialize};

use super::analytics::AnalyticsConfig;
use super::product::{Category, Product, StockStatus};

/// Fixed delivery city list, in display order
pub const CITIES: [&str; 10] = [
    "Casablanca",
    "Rabat",
    "Marrakech",
    "Fès",
    "Tanger",
    "Agadir",
    "Meknès",
    "Oujda",
    "Kenitra",
    "Tétouan",
];

/// Full static configuration of the store
///
/// Field order is the snapshot's block order: configuration, reference data,
/// product array. Serialization is deterministic for a given state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreConfig {
    pub analytics: AnalyticsConfig,
    pub cities: Vec<String>,
    pub categories: Vec<Category>,
    pub products: Vec<Product>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            analytics: AnalyticsConfig::default(),
            cities: CITIES.iter().map(|c| c.to_string()).collect(),
            categories: Category::ALL.to_vec(),
            products: seed_products(),
        }
    }
}

/// Built-in catalog used when the products namespace is empty
fn seed_products() -> Vec<Product> {
    vec![
        Product {
            id: "1".to_string(),
            title: "Montre connectée".to_string(),
            thumbnail: "/images/montre-connectee.jpg".to_string(),
            gallery_images: vec![
                "/images/montre-connectee.jpg".to_string(),
                "/images/montre-connectee-2.jpg".to_string(),
            ],
            price: 299.0,
            description: "Montre connectée étanche avec suivi d'activité.".to_string(),
            category: Category::Electronics,
            stock_status: StockStatus::InStock,
            rating: 4.6,
            reviews_count: 128,
            shipping_time: "24h - 48h".to_string(),
        },
        Product {
            id: "2".to_string(),
            title: "Sac à main en cuir".to_string(),
            thumbnail: "/images/sac-cuir.jpg".to_string(),
            gallery_images: vec!["/images/sac-cuir.jpg".to_string()],
            price: 450.0,
            description: "Sac à main artisanal en cuir véritable.".to_string(),
            category: Category::Fashion,
            stock_status: StockStatus::InStock,
            rating: 4.8,
            reviews_count: 76,
            shipping_time: "24h - 48h".to_string(),
        },
        Product {
            id: "3".to_string(),
            title: "Coffret huile d'argan".to_string(),
            thumbnail: "/images/argan.jpg".to_string(),
            gallery_images: vec!["/images/argan.jpg".to_string()],
            price: 180.0,
            description: "Huile d'argan cosmétique pressée à froid, 100ml.".to_string(),
            category: Category::Beauty,
            stock_status: StockStatus::InStock,
            rating: 4.9,
            reviews_count: 203,
            shipping_time: "48h - 72h".to_string(),
        },
    ]
}
