//! In-memory receipt store

use std::collections::HashMap;
use std::sync::RwLock;

use uuid::Uuid;

use crate::receipt::Receipt;

/// In-memory receipt store, keyed by server-generated identifier
///
/// Entries are only ever added; there is no update, delete, or eviction,
/// and the map grows for the life of the process. Lives inside the shared
/// application state, guarded for concurrent handler access.
#[derive(Debug, Default)]
pub struct ReceiptStore {
    receipts: RwLock<HashMap<String, Receipt>>,
}

impl ReceiptStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a receipt under a fresh random identifier
    ///
    /// Identifiers are UUID v4 in canonical form; collisions are treated
    /// as impossible.
    pub fn insert(&self, receipt: Receipt) -> String {
        let id = Uuid::new_v4().to_string();
        self.receipts
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .insert(id.clone(), receipt);
        id
    }

    /// Look up a stored receipt by identifier
    pub fn lookup(&self, id: &str) -> Option<Receipt> {
        self.receipts
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .get(id)
            .cloned()
    }
}
