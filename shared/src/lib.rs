//! Shared types for the Souk storefront
//!
//! Domain models, reference data, and the unified error type used by the
//! state engine and its UI hosts. This crate does no I/O.

pub mod error;
pub mod models;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use error::{AppError, AppResult, ErrorCode};
pub use models::{
    AnalyticsConfig, Category, CategoryFilter, CustomerInfo, Order, OrderStatus, Product,
    StockStatus, StoreConfig,
};
