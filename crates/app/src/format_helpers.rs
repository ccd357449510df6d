//! Shared formatting utilities for the UI layer.

use chrono::{DateTime, Utc};

/// Format a timestamp as "Jan 20, 2026" (date-only, human-readable).
pub fn format_date_human(ts: &DateTime<Utc>) -> String {
    ts.format("%b %-d, %Y").to_string()
}

/// Format a timestamp as "Jan 20, 2026 9:35 PM" (with 12-hour time).
pub fn format_datetime_human(ts: &DateTime<Utc>) -> String {
    ts.format("%b %-d, %Y %-I:%M %p").to_string()
}

/// Format a monetary amount as "$19,850.00".
pub fn format_amount(amount: f64) -> String {
    // Round once in cent units so fractions carry into the dollar part.
    let total_cents = (amount.abs() * 100.0).round() as i64;
    let whole = total_cents / 100;
    let cents = total_cents % 100;

    let digits = whole.to_string();
    let mut grouped = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    let sign = if amount < 0.0 { "-" } else { "" };
    format!("{sign}${grouped}.{cents:02}")
}
