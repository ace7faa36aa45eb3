//! Order Ledger - append-only order collection
//!
//! Orders are created once at checkout confirmation and never mutated
//! afterwards except deletion. The ledger is kept most-recent-first and the
//! full collection is persisted on every successful mutation.

use parking_lot::RwLock;
use rand::Rng;
use std::sync::Arc;

use shared::{AppError, AppResult, CustomerInfo, Order, OrderStatus, Product};

use crate::storage::{ORDERS_KEY, Store};

const ORDER_ID_PREFIX: &str = "ORD-";
const ORDER_TOKEN_LEN: usize = 9;
const ORDER_TOKEN_CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Generate an order identifier: `ORD-` + 9 uppercase alphanumerics.
///
/// 36^9 values make collisions negligible for a single-tenant ledger.
pub fn generate_order_id() -> String {
    let mut rng = rand::thread_rng();
    let token: String = (0..ORDER_TOKEN_LEN)
        .map(|_| ORDER_TOKEN_CHARSET[rng.gen_range(0..ORDER_TOKEN_CHARSET.len())] as char)
        .collect();
    format!("{ORDER_ID_PREFIX}{token}")
}

pub struct OrderLedger {
    orders: RwLock<Vec<Order>>,
    store: Arc<Store>,
}

impl OrderLedger {
    /// Load the ledger from the orders namespace
    pub fn load(store: Arc<Store>) -> Self {
        let orders: Vec<Order> = store.load(ORDERS_KEY, Vec::new());
        tracing::debug!(count = orders.len(), "order ledger loaded");
        Self {
            orders: RwLock::new(orders),
            store,
        }
    }

    /// All orders, most-recent-first
    pub fn list_all(&self) -> Vec<Order> {
        self.orders.read().clone()
    }

    pub fn len(&self) -> usize {
        self.orders.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.read().is_empty()
    }

    /// Create an order for `product` from a checkout submission
    ///
    /// `full_name`, `phone_number` and `city` must be non-empty. The order
    /// carries a denormalized copy of the product title and price and is
    /// prepended to the ledger.
    pub fn create(&self, product: &Product, customer: &CustomerInfo) -> AppResult<Order> {
        validate_customer(customer)?;

        let order = Order {
            order_id: generate_order_id(),
            product_id: product.id.clone(),
            product_title: product.title.clone(),
            product_price: product.price,
            customer: customer.clone(),
            order_date: shared::util::display_now(),
            status: OrderStatus::Pending,
        };

        let mut orders = self.orders.write();
        let mut next = Vec::with_capacity(orders.len() + 1);
        next.push(order.clone());
        next.extend(orders.iter().cloned());

        self.store.save(ORDERS_KEY, &next)?;
        *orders = next;
        tracing::info!(order_id = %order.order_id, product_id = %order.product_id, "order created");
        Ok(order)
    }

    /// Delete by order id; persists the resulting ledger
    pub fn remove(&self, order_id: &str) -> AppResult<()> {
        let mut orders = self.orders.write();
        if !orders.iter().any(|o| o.order_id == order_id) {
            return Ok(());
        }
        let next: Vec<Order> = orders.iter().filter(|o| o.order_id != order_id).cloned().collect();
        self.store.save(ORDERS_KEY, &next)?;
        *orders = next;
        tracing::info!(order_id, "order removed");
        Ok(())
    }
}

fn validate_customer(customer: &CustomerInfo) -> AppResult<()> {
    if customer.full_name.trim().is_empty() {
        return Err(AppError::required_field("full name"));
    }
    if customer.phone_number.trim().is_empty() {
        return Err(AppError::required_field("phone number"));
    }
    if customer.city.trim().is_empty() {
        return Err(AppError::required_field("city"));
    }
    Ok(())
}
