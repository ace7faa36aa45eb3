//! Domain models for the Souk storefront

pub mod analytics;
pub mod config;
pub mod order;
pub mod product;

pub use analytics::AnalyticsConfig;
pub use config::{CITIES, StoreConfig};
pub use order::{CustomerInfo, Order, OrderStatus};
pub use product::{Category, CategoryFilter, Product, StockStatus};
