//! receipt-points-server - Receipt submission and loyalty point scoring service

use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod api;
mod error;
mod receipt;
mod scoring;
mod store;

use crate::api::{create_router, AppState};
use crate::store::ReceiptStore;

#[derive(Parser, Debug)]
#[command(name = "receipt-points-server")]
#[command(about = "Receipt submission and loyalty point scoring service")]
struct Args {
    /// Host to bind to
    #[arg(long, env = "RECEIPT_SERVER_HOST", default_value = "0.0.0.0")]
    host: String,

    /// Port to bind to
    #[arg(long, env = "RECEIPT_SERVER_PORT", default_value = "5000")]
    port: u16,

    /// Log level
    #[arg(long, env = "RECEIPT_SERVER_LOG_LEVEL", default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse CLI args
    let args = Args::parse();

    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&args.log_level))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        "Starting receipt-points-server v{}",
        env!("CARGO_PKG_VERSION")
    );

    let state = Arc::new(AppState {
        store: ReceiptStore::new(),
    });
    let router = create_router(state);

    let addr = format!("{}:{}", args.host, args.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, router).await?;

    Ok(())
}
