//! Receipt wire and domain types

use serde::{Deserialize, Serialize};

/// A single line item on a receipt
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Short product description, e.g. "Mountain Dew 12PK"
    #[serde(rename = "shortDescription")]
    pub short_description: String,

    /// Price as a decimal string, e.g. "6.49"
    ///
    /// Kept as text; parsed at scoring time with a zero fallback.
    pub price: String,
}

/// A submitted purchase receipt
///
/// This is both the wire shape of POST /receipts/process and the record
/// held in the store. Immutable once stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Receipt {
    /// Retailer name
    pub retailer: String,

    /// Purchase date, YYYY-MM-DD
    #[serde(rename = "purchaseDate")]
    pub purchase_date: String,

    /// Purchase time, HH:MM (24-hour)
    #[serde(rename = "purchaseTime")]
    pub purchase_time: String,

    /// Line items, in submission order (order only matters as a count)
    pub items: Vec<Item>,

    /// Grand total as a decimal string, e.g. "35.35"
    pub total: String,
}
