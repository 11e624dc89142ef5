//! Response DTOs

use serde::Serialize;

/// Response body for POST /receipts/process
#[derive(Debug, Serialize)]
pub struct ProcessReceiptResponse {
    /// Generated receipt identifier
    pub id: String,
}

/// Response body for GET /receipt/:id/points
#[derive(Debug, Serialize)]
pub struct PointsResponse {
    /// Computed point total
    pub points: i64,
}

/// Error response body
///
/// Exactly one field; the message is either the deserialization error
/// text (400) or the fixed "Receipt not found" (404).
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Human-readable error message
    pub error: String,
}
