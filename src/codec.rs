//! Transaction record codec
//!
//! Encodes a transaction as a single delimited string in the fixed field
//! order `kind|description|timestamp|amount|category`. Delimiters and
//! backslashes inside free-text fields are escaped (`\|`, `\\`) so any text
//! is safe to store; records whose fields contain neither character encode
//! to the plain legacy layout. Legacy records decode unchanged: only `\|`
//! and `\\` are treated as escapes, any other backslash is literal.

use crate::error::{TrackError, TrackResult};
use crate::models::{Kind, Money, Transaction};

/// Number of fields in an encoded record
const FIELD_COUNT: usize = 5;

/// Encode a transaction into its delimited record form
pub fn encode(txn: &Transaction) -> String {
    let amount = txn.amount.to_string();
    let fields = [
        txn.kind.as_str(),
        txn.description.as_str(),
        txn.timestamp.as_str(),
        amount.as_str(),
        txn.category.as_str(),
    ];
    fields.map(escape).join("|")
}

/// Decode a delimited record back into a transaction
///
/// Fails with [`TrackError::MalformedRecord`] when the field count is wrong,
/// the kind word is unknown, or the amount is not a non-negative decimal.
/// The timestamp is carried through as-is; callers that render dates fall
/// back to the raw string when it does not parse.
pub fn decode(raw: &str) -> TrackResult<Transaction> {
    let fields = split_fields(raw);
    if fields.len() != FIELD_COUNT {
        return Err(TrackError::malformed(
            raw,
            format!("expected {} fields, found {}", FIELD_COUNT, fields.len()),
        ));
    }

    let kind: Kind = fields[0]
        .parse()
        .map_err(|_| TrackError::malformed(raw, format!("unknown kind '{}'", fields[0])))?;

    let amount = Money::parse(&fields[3])
        .map_err(|_| TrackError::malformed(raw, format!("unparseable amount '{}'", fields[3])))?;
    if amount.is_negative() {
        return Err(TrackError::malformed(raw, "negative amount"));
    }

    Ok(Transaction {
        kind,
        description: fields[1].clone(),
        timestamp: fields[2].clone(),
        amount,
        category: fields[4].clone(),
    })
}

fn escape(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    for c in field.chars() {
        if c == '\\' || c == '|' {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

/// Split a record on unescaped delimiters, resolving escapes as it goes
fn split_fields(raw: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut chars = raw.chars();

    while let Some(c) = chars.next() {
        match c {
            '\\' => match chars.next() {
                Some(escaped @ ('|' | '\\')) => current.push(escaped),
                // a backslash before anything else is literal, so legacy
                // text like "C:\dir" survives
                Some(other) => {
                    current.push('\\');
                    current.push(other);
                }
                None => current.push('\\'),
            },
            '|' => fields.push(std::mem::take(&mut current)),
            _ => current.push(c),
        }
    }
    fields.push(current);
    fields
}
