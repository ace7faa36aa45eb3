//! Order Model

use serde::{Deserialize, Serialize};

/// Order status
///
/// Orders are append-only: the only state assigned today is `Pending`.
/// No transition set is defined yet, so the enum stays non-exhaustive and
/// the engine exposes no status mutation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum OrderStatus {
    #[default]
    Pending,
}

/// Customer details captured at checkout
///
/// Transient input state until captured into an [`Order`]. `full_name`,
/// `phone_number` and `city` must be non-empty before an order is created;
/// `address` may be blank.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CustomerInfo {
    pub full_name: String,
    pub phone_number: String,
    /// One of the fixed city list (`CITIES`)
    pub city: String,
    #[serde(default)]
    pub address: String,
}

/// Order entity
///
/// Carries a denormalized copy of the product title and price so the order
/// stays displayable after the referenced product is edited or deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub order_id: String,
    pub product_id: String,
    pub product_title: String,
    /// Price at order time, in currency unit (MAD)
    pub product_price: f64,
    pub customer: CustomerInfo,
    /// Locale-formatted display timestamp
    pub order_date: String,
    #[serde(default)]
    pub status: OrderStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_status_serde() {
        let json = serde_json::to_string(&OrderStatus::Pending).unwrap();
        assert_eq!(json, "\"pending\"");
    }

    #[test]
    fn test_order_deserialize_without_status() {
        let json = r#"{
            "order_id": "ORD-AB12CD34E",
            "product_id": "2",
            "product_title": "Sac en cuir",
            "product_price": 200.0,
            "customer": {
                "full_name": "Yassine",
                "phone_number": "0612345678",
                "city": "Casablanca",
                "address": ""
            },
            "order_date": "25/08/2026 10:30"
        }"#;
        let order: Order = serde_json::from_str(json).unwrap();
        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.customer.city, "Casablanca");
    }
}
