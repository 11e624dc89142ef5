//! Data Transfer Objects (DTOs)

mod response;

pub use response::{ErrorResponse, PointsResponse, ProcessReceiptResponse};
