//! Transaction model
//!
//! An income or expense entry with a free-text description and category and
//! a fixed-format timestamp.

use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::TrackError;

use super::money::Money;

/// Timestamp layout used everywhere a transaction date is persisted
///
/// The format sorts lexicographically in chronological order, which the
/// repository relies on when ordering listings.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Income/Expense discriminator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Kind {
    Income,
    Expense,
}

impl Kind {
    /// Wire word used in encoded records
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "Income",
            Self::Expense => "Expense",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Kind {
    type Err = TrackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Income" => Ok(Self::Income),
            "Expense" => Ok(Self::Expense),
            other => Err(TrackError::Validation(format!(
                "Unknown transaction kind: {}",
                other
            ))),
        }
    }
}

/// A single income or expense entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Income or Expense
    pub kind: Kind,

    /// Free-text description
    pub description: String,

    /// Timestamp in [`TIMESTAMP_FORMAT`]
    pub timestamp: String,

    /// Non-negative amount
    pub amount: Money,

    /// Free-text category label
    pub category: String,
}

impl Transaction {
    /// Create a transaction, validating the amount and timestamp
    pub fn new(
        kind: Kind,
        description: impl Into<String>,
        timestamp: impl Into<String>,
        amount: Money,
        category: impl Into<String>,
    ) -> Result<Self, TrackError> {
        let timestamp = timestamp.into();

        if amount.is_negative() {
            return Err(TrackError::Validation(
                "Amount cannot be negative".to_string(),
            ));
        }
        NaiveDateTime::parse_from_str(&timestamp, TIMESTAMP_FORMAT).map_err(|_| {
            TrackError::Validation(format!(
                "Invalid timestamp '{}', expected yyyy-MM-dd HH:mm:ss",
                timestamp
            ))
        })?;

        Ok(Self {
            kind,
            description: description.into(),
            timestamp,
            amount,
            category: category.into(),
        })
    }

    /// Create a transaction stamped with the current local time
    pub fn now(
        kind: Kind,
        description: impl Into<String>,
        amount: Money,
        category: impl Into<String>,
    ) -> Result<Self, TrackError> {
        Self::new(
            kind,
            description,
            Local::now().format(TIMESTAMP_FORMAT).to_string(),
            amount,
            category,
        )
    }

    /// The amount with the sign implied by the kind (income positive,
    /// expense negative)
    pub fn signed_amount(&self) -> Money {
        match self.kind {
            Kind::Income => self.amount,
            Kind::Expense => -self.amount,
        }
    }
}
