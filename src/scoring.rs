//! Points calculation for stored receipts
//!
//! Eight independent rules summed over the full receipt. The function is
//! pure: no clock, no store access, same receipt in, same total out.
//!
//! Numeric, date, and time fields are extracted with parse-or-default
//! helpers: a failed parse contributes the zero value for that field and
//! scoring continues. The float comparisons in the round-dollar and
//! quarter-multiple rules are exact (no epsilon) and keep the original
//! arithmetic order; both are part of the compatibility contract.

use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};

use crate::receipt::Receipt;

/// Compute the point total for a receipt
pub fn points(receipt: &Receipt) -> i64 {
    let mut points: i64 = 0;

    // One point per alphanumeric character in the retailer name.
    points += receipt
        .retailer
        .chars()
        .filter(|c| c.is_alphanumeric())
        .count() as i64;

    let total = parse_decimal_or_zero(&receipt.total);

    // 50 points if the total has no cents.
    if (total * 100.0) % 10.0 == 0.0 {
        points += 50;
    }

    // 25 points if the total is a multiple of 0.25.
    if total % 0.25 == 0.0 {
        points += 25;
    }

    // 5 points for every two items.
    points += (receipt.items.len() / 2) as i64 * 5;

    // ceil(price * 0.2) points per item whose trimmed description length
    // is a multiple of 3 (zero length included).
    for item in &receipt.items {
        if item.short_description.trim_matches(' ').len() % 3 == 0 {
            let price = parse_decimal_or_zero(&item.price);
            points += (price * 0.2).ceil() as i64;
        }
    }

    // 6 points if the day of the purchase date is odd.
    if parse_day_or_zero(&receipt.purchase_date) % 2 == 1 {
        points += 6;
    }

    // 10 points for purchases strictly after 14:00 and before 16:00.
    let (hour, minute) = parse_time_or_midnight(&receipt.purchase_time);
    if (14..16).contains(&hour) && minute > 0 {
        points += 10;
    }

    points
}

/// Parse a decimal string, falling back to 0.0
fn parse_decimal_or_zero(s: &str) -> f64 {
    s.parse::<f64>().unwrap_or(0.0)
}

/// Parse a YYYY-MM-DD date and return its day of month, falling back to 0
fn parse_day_or_zero(s: &str) -> u32 {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map(|d| d.day())
        .unwrap_or(0)
}

/// Parse an HH:MM time into (hour, minute), falling back to midnight
fn parse_time_or_midnight(s: &str) -> (u32, u32) {
    NaiveTime::parse_from_str(s, "%H:%M")
        .map(|t| (t.hour(), t.minute()))
        .unwrap_or((0, 0))
}
