//! Application state shared across HTTP handlers

use crate::store::ReceiptStore;

/// Application state shared across handlers
///
/// Owns the receipt store for the life of the process; handlers receive
/// it through axum's `State` extractor rather than a global.
pub struct AppState {
    /// In-memory receipt store
    pub store: ReceiptStore,
}
