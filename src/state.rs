//! Shared application state for request handlers.

use crate::store::OrderStore;

/// Shared application state, cloned into each handler.
#[derive(Clone)]
pub struct AppState {
    pub orders: OrderStore,
}

impl AppState {
    pub fn new(orders: OrderStore) -> Self {
        Self { orders }
    }
}
