//! Stocks HTTP API server.
//!
//! This binary serves static stock quotes from an in-memory table over a
//! small JSON API. It wires together two building blocks:
//!
//! - `model::store::QuoteStore` — an immutable symbol-to-quote mapping seeded
//!   once at startup with one record per known ticker.
//! - `routes` — the axum `Router` exposing `/health`, `/stocks` and
//!   `/stocks/{symbol}` as read-only views over the store.
//!
//! Concurrency and shutdown:
//! - The store is never mutated after seeding, so handlers share it behind an
//!   `Arc` with no locking. Every request is independent.
//! - The server runs until Ctrl+C, which resolves the graceful-shutdown
//!   future passed to `axum::serve`.
//!
//! The listen port is fixed (see `stocks_common::net::SERVER_PORT`); clients
//! point at `http://localhost:3000` by default.
#![warn(missing_docs)]
mod model;
mod routes;

use std::sync::Arc;

use log::{error, info};
use stocks_common::net::{SERVER_PORT, addr};
use stocks_common::{QuoteError, Result};
use tokio::net::TcpListener;

use crate::model::store::QuoteStore;
use crate::routes::router;

#[tokio::main]
async fn main() -> Result<(), QuoteError> {
    init_logger();

    let store = Arc::new(QuoteStore::seeded());
    info!("Quote store seeded with {} symbols", store.len());

    let app = router(store);
    let bind_address = addr("0.0.0.0", SERVER_PORT);
    let listener = TcpListener::bind(&bind_address).await?;

    info!("Stock API server running at http://localhost:{}", SERVER_PORT);
    info!("  - Health check: GET /health");
    info!("  - Get stocks:   GET /stocks?symbols=AAPL,GOOGL,MSFT");
    info!("  - Get one:      GET /stocks/AAPL");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped.");
    Ok(())
}

/// Resolves once Ctrl+C is received, letting in-flight requests finish.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
        return;
    }
    info!("Ctrl+C received. Shutting down server...");
}

fn init_logger() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();
}
