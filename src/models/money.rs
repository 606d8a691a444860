//! Money type for representing currency amounts
//!
//! Internally stores amounts in cents (i64) to avoid floating-point precision
//! issues. Provides safe arithmetic operations and formatting.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

use thiserror::Error;

/// Error returned when a money string cannot be parsed
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid amount: {0}")]
pub struct MoneyParseError(pub String);

/// Represents a monetary amount stored as cents (hundredths of the currency unit)
///
/// Transaction amounts are always non-negative; the running budget may go
/// negative, so the type itself stays signed.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from cents
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in cents
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Check if the amount is negative
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Get the absolute value
    pub const fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// Parse a money amount from a decimal string
    ///
    /// Accepts formats: "1500", "1500.5", "-1500.50"
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(MoneyParseError(s.to_string()));
        }

        let (negative, digits) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };

        let (whole, frac) = match digits.split_once('.') {
            Some((w, f)) => (w, f),
            None => (digits, ""),
        };

        if whole.is_empty() && frac.is_empty() {
            return Err(MoneyParseError(s.to_string()));
        }
        if frac.len() > 2 {
            return Err(MoneyParseError(s.to_string()));
        }
        // i64::parse would accept an inner sign ("1.-5"); digits only
        if !whole.chars().all(|c| c.is_ascii_digit()) || !frac.chars().all(|c| c.is_ascii_digit())
        {
            return Err(MoneyParseError(s.to_string()));
        }

        let whole_cents = if whole.is_empty() {
            0
        } else {
            whole
                .parse::<i64>()
                .map_err(|_| MoneyParseError(s.to_string()))?
                .checked_mul(100)
                .ok_or_else(|| MoneyParseError(s.to_string()))?
        };

        let frac_cents = if frac.is_empty() {
            0
        } else {
            // "5" means 50 cents, "05" means 5 cents
            let parsed = frac
                .parse::<i64>()
                .map_err(|_| MoneyParseError(s.to_string()))?;
            if frac.len() == 1 {
                parsed * 10
            } else {
                parsed
            }
        };

        let cents = whole_cents + frac_cents;
        Ok(Self(if negative { -cents } else { cents }))
    }

    /// Convert from a float amount in whole currency units
    ///
    /// Used only at the preference-store boundary, which persists the base
    /// budget as a float.
    pub fn from_units_f64(units: f64) -> Self {
        Self((units * 100.0).round() as i64)
    }

    /// Convert to a float amount in whole currency units
    pub fn to_units_f64(&self) -> f64 {
        self.0 as f64 / 100.0
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.abs();
        write!(f, "{}{}.{:02}", sign, abs / 100, abs % 100)
    }
}

impl Add for Money {
    type Output = Money;
    fn add(self, rhs: Money) -> Money {
        Money(self.0 + rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Money) {
        self.0 += rhs.0;
    }
}

impl Sub for Money {
    type Output = Money;
    fn sub(self, rhs: Money) -> Money {
        Money(self.0 - rhs.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, rhs: Money) {
        self.0 -= rhs.0;
    }
}

impl Neg for Money {
    type Output = Money;
    fn neg(self) -> Money {
        Money(-self.0)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::zero(), Add::add)
    }
}
