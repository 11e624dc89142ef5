//! Custom assertions for API responses

use axum::response::Response;
use serde_json::Value;

/// Read a response body as JSON
pub async fn body_json(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("failed to read response body");
    serde_json::from_slice(&bytes).expect("response body is not valid JSON")
}

/// Assert the body is an error object with exactly one "error" field
pub fn assert_error_body(json: &Value) {
    let obj = json.as_object().expect("error body is not a JSON object");
    assert_eq!(obj.len(), 1, "error body has extra fields: {json}");
    assert!(json["error"].is_string(), "error field is not a string");
}
