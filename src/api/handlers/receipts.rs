//! Receipt endpoint handlers

use std::sync::Arc;

use axum::{
    body::Body,
    extract::{Path, State},
    Json,
};

use crate::api::dto::{PointsResponse, ProcessReceiptResponse};
use crate::api::state::AppState;
use crate::error::ServerError;
use crate::receipt::Receipt;
use crate::scoring;

/// POST /receipts/process - Store a submitted receipt
///
/// Returns the generated identifier; the receipt itself is only read
/// back at scoring time.
pub async fn process_receipt(
    State(state): State<Arc<AppState>>,
    body: Body,
) -> Result<Json<ProcessReceiptResponse>, ServerError> {
    use axum::body::to_bytes;

    // Read body (limit 1MB)
    let bytes = to_bytes(body, 1024 * 1024)
        .await
        .map_err(|e| ServerError::MalformedInput(format!("failed to read body: {}", e)))?;

    // Parse JSON; the serde error text becomes the 400 response body
    let receipt: Receipt = serde_json::from_slice(&bytes)?;

    let id = state.store.insert(receipt);
    tracing::debug!(%id, "stored receipt");

    Ok(Json(ProcessReceiptResponse { id }))
}

/// GET /receipt/:id/points - Score a previously stored receipt
pub async fn receipt_points(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<PointsResponse>, ServerError> {
    let receipt = state.store.lookup(&id).ok_or(ServerError::ReceiptNotFound)?;

    let points = scoring::points(&receipt);
    tracing::debug!(%id, points, "scored receipt");

    Ok(Json(PointsResponse { points }))
}
