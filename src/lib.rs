//! orders-api: a read-only JSON API over a fixed set of sample orders.
//!
//! Exposes `/health` and `/orders`; everything else is a 404.

pub mod config;
pub mod error;
pub mod http;
pub mod middleware;
pub mod routes;
pub mod state;
pub mod store;

pub use error::AppError;
pub use routes::create_router;
pub use state::AppState;
pub use store::{Order, OrderStore};
