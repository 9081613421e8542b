//! In-memory order records.
//!
//! The store is built once at startup from fixed sample data and never
//! mutated afterwards. Clones share the same backing slice, so handlers can
//! read it concurrently without locking.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// A sample purchase record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    pub product: String,
    pub quantity: i64,
    /// Unit price
    pub price: f64,
}

impl Order {
    fn new(id: &str, product: &str, quantity: i64, price: f64) -> Self {
        Self {
            id: id.to_string(),
            product: product.to_string(),
            quantity,
            price,
        }
    }
}

/// Immutable collection of orders, in insertion order.
#[derive(Debug, Clone)]
pub struct OrderStore {
    orders: Arc<[Order]>,
}

impl OrderStore {
    /// Creates the store populated with the fixed sample orders.
    pub fn seeded() -> Self {
        Self {
            orders: Arc::new([
                Order::new("1", "Widget A", 2, 9.99),
                Order::new("2", "Widget B", 1, 24.99),
            ]),
        }
    }

    /// Returns every order in insertion order.
    pub fn all(&self) -> &[Order] {
        &self.orders
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}
