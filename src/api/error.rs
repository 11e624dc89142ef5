//! API error response types

use axum::{
    response::{IntoResponse, Response},
    Json,
};

use crate::api::dto::ErrorResponse;
use crate::error::ServerError;

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let body = ErrorResponse {
            error: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}
