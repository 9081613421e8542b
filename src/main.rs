//! orders-api: serves the sample order records over HTTP.
//!
//! This is the application entry point. It initializes tracing, loads the
//! optional logging configuration, builds the order store, sets up the Axum
//! router and starts the HTTP server on the fixed listening address.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use orders_api::config::{AppConfig, DEFAULT_LOG_FILTER};
use orders_api::http::start_server;
use orders_api::{create_router, AppState, OrderStore};

/// orders-api: A read-only JSON API over sample orders
#[derive(Parser, Debug)]
#[command(name = "orders-api", version, about)]
struct Args {
    /// Path to an optional logging configuration file
    #[arg(short, long)]
    config: Option<String>,

    /// Log level filter (e.g., "orders_api=debug,tower_http=info")
    #[arg(short, long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let loaded = AppConfig::load_or_default(args.config.as_deref());
    let json_logs = loaded
        .as_ref()
        .map(|config| config.logging.is_json())
        .unwrap_or(false);

    // Initialize tracing with priority: CLI > env > default
    let log_filter = args
        .log_level
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

    let registry =
        tracing_subscriber::registry().with(tracing_subscriber::EnvFilter::new(&log_filter));
    if json_logs {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }

    if let Err(e) = loaded {
        tracing::error!(error = %e, "Failed to load configuration");
        return Err(e.into());
    }

    match &args.config {
        Some(path) => tracing::info!(path = %path, "Loaded configuration"),
        None => tracing::info!("Using built-in configuration"),
    }

    let orders = OrderStore::seeded();
    tracing::info!(count = orders.len(), "Initialized order store");

    let app = create_router(AppState::new(orders));

    if let Err(e) = start_server(app).await {
        tracing::error!(error = %e, "Server failed");
        std::process::exit(1);
    }

    Ok(())
}
