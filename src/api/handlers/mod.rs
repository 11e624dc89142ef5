//! HTTP request handlers

mod receipts;

pub use receipts::{process_receipt, receipt_points};
