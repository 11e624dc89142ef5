//! Test fixtures and app setup utilities

use std::sync::Arc;

use axum::Router;
use receipt_points_server::api::{create_router, AppState};
use receipt_points_server::ReceiptStore;
use serde_json::Value;

/// Create a test app with a fresh, empty in-memory store
pub fn test_app() -> Router {
    let state = Arc::new(AppState {
        store: ReceiptStore::new(),
    });

    create_router(state)
}

/// A valid receipt body (single item, scores 12 points)
pub fn target_receipt() -> Value {
    serde_json::json!({
        "retailer": "Target",
        "purchaseDate": "2022-01-01",
        "purchaseTime": "13:01",
        "items": [
            {"shortDescription": "Mountain Dew 12PK", "price": "6.49"}
        ],
        "total": "35.35"
    })
}

/// A valid receipt body exercising the round-dollar and quarter rules
pub fn corner_market_receipt() -> Value {
    serde_json::json!({
        "retailer": "M&M Corner Market",
        "purchaseDate": "2022-03-20",
        "purchaseTime": "14:33",
        "items": [
            {"shortDescription": "Gatorade", "price": "2.25"},
            {"shortDescription": "Gatorade", "price": "2.25"},
            {"shortDescription": "Gatorade", "price": "2.25"},
            {"shortDescription": "Gatorade", "price": "2.25"}
        ],
        "total": "9.00"
    })
}
