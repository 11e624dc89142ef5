//! Router setup and configuration

use std::sync::Arc;

use axum::{middleware, routing::get, routing::post, Router};

use crate::api::handlers;
use crate::api::middleware::log_requests;
use crate::api::state::AppState;

/// Create the API router
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/receipts/process", post(handlers::process_receipt))
        .route("/receipt/:id/points", get(handlers::receipt_points))
        .layer(middleware::from_fn(log_requests))
        .with_state(state)
}
