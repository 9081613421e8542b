//! HTTP server module.
//!
//! The server includes:
//! - Listener binding on the fixed address
//! - Graceful shutdown on SIGTERM/SIGINT

mod server;
mod shutdown;

pub use server::{bind, serve, start_server, ServerError};
