//! Transaction display formatting
//!
//! Formats transactions for terminal output: currency-prefixed amounts and
//! friendly dates, falling back to the raw timestamp string when it does
//! not parse.

use chrono::NaiveDateTime;

use crate::config::Settings;
use crate::models::{Money, TIMESTAMP_FORMAT};
use crate::repo::StoredTransaction;

/// Format an amount with the configured currency prefix
pub fn format_amount(amount: Money, settings: &Settings) -> String {
    format!("{}{}", settings.currency_symbol, amount)
}

/// Re-format a stored timestamp as "Apr 02, 2025 at 07:30 PM"
///
/// Returns the input unchanged when it is not a valid timestamp.
pub fn format_timestamp_long(timestamp: &str) -> String {
    match NaiveDateTime::parse_from_str(timestamp, TIMESTAMP_FORMAT) {
        Ok(dt) => dt.format("%b %d, %Y at %I:%M %p").to_string(),
        Err(_) => timestamp.to_string(),
    }
}

/// Re-format a stored timestamp as "Apr 02, 2025"
pub fn format_timestamp_short(timestamp: &str) -> String {
    match NaiveDateTime::parse_from_str(timestamp, TIMESTAMP_FORMAT) {
        Ok(dt) => dt.format("%b %d, %Y").to_string(),
        Err(_) => timestamp.to_string(),
    }
}

/// Format a single transaction for display (register row)
pub fn format_transaction_row(stored: &StoredTransaction, settings: &Settings) -> String {
    format!(
        "{} {:7} {:24} {:12} {:>12}",
        stored.id.short(),
        stored.txn.kind.to_string(),
        truncate(&stored.txn.description, 24),
        format_timestamp_short(&stored.txn.timestamp),
        format_amount(stored.txn.amount, settings),
    )
}

/// Format a list of transactions as a register
pub fn format_transaction_register(
    transactions: &[StoredTransaction],
    settings: &Settings,
) -> String {
    if transactions.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:8} {:7} {:24} {:12} {:>12}\n",
        "Id", "Kind", "Description", "Date", "Amount"
    ));
    output.push_str(&"-".repeat(68));
    output.push('\n');

    for stored in transactions {
        output.push_str(&format_transaction_row(stored, settings));
        output.push('\n');
    }

    output
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let head: String = s.chars().take(max.saturating_sub(1)).collect();
        format!("{}…", head)
    }
}
