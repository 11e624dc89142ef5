//! receipt-points-server library exports (for testing)

pub mod api;
pub mod error;
pub mod receipt;
pub mod scoring;
pub mod store;

// Re-exports
pub use error::{ServerError, ServerResult};
pub use receipt::{Item, Receipt};
pub use store::ReceiptStore;
