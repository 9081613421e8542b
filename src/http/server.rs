//! HTTP server startup logic.

use axum::Router;
use tokio::net::TcpListener;

use crate::config::listen_address;

use super::shutdown;

/// Server startup error
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Server error: {0}")]
    Server(#[from] std::io::Error),
}

/// Bind a listening socket on `addr`.
pub async fn bind(addr: &str) -> Result<TcpListener, ServerError> {
    TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind {
            addr: addr.to_string(),
            source,
        })
}

/// Serve `app` on an already bound listener until a shutdown signal arrives.
pub async fn serve(listener: TcpListener, app: Router) -> Result<(), ServerError> {
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown::shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Start the HTTP server on the fixed listening address.
///
/// This function blocks until the server shuts down.
pub async fn start_server(app: Router) -> Result<(), ServerError> {
    let listener = bind(&listen_address()).await?;
    let addr = listener.local_addr()?;
    tracing::info!(%addr, "orders-api listening");

    serve(listener, app).await
}
