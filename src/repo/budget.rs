//! Budget repository
//!
//! Holds only the user-set base amount. The running figure shown on the
//! dashboard is derived from the transaction log by the aggregator, so the
//! two can never drift apart.

use crate::error::{TrackError, TrackResult};
use crate::models::Money;
use crate::store::{keys, PrefStore};

/// Repository for the user-set monthly budget
pub struct BudgetRepository<'a> {
    store: &'a PrefStore,
}

impl<'a> BudgetRepository<'a> {
    /// Create a repository over the given store
    pub fn new(store: &'a PrefStore) -> Self {
        Self { store }
    }

    /// The user-set base budget, zero when never set
    ///
    /// The store persists this as a float in whole currency units.
    pub fn base(&self) -> TrackResult<Money> {
        Ok(Money::from_units_f64(
            self.store.get_f64(keys::MONTHLY_BUDGET)?,
        ))
    }

    /// Overwrite the base budget
    pub fn set_base(&self, amount: Money) -> TrackResult<()> {
        if amount.is_negative() {
            return Err(TrackError::Validation(
                "Budget cannot be negative".to_string(),
            ));
        }
        self.store
            .put_f64(keys::MONTHLY_BUDGET, amount.to_units_f64())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_base_defaults_to_zero() {
        let temp_dir = TempDir::new().unwrap();
        let store = PrefStore::open(temp_dir.path().join("prefs.json")).unwrap();
        let repo = BudgetRepository::new(&store);

        assert_eq!(repo.base().unwrap(), Money::zero());
    }

    #[test]
    fn test_set_and_read_back() {
        let temp_dir = TempDir::new().unwrap();
        let store = PrefStore::open(temp_dir.path().join("prefs.json")).unwrap();
        let repo = BudgetRepository::new(&store);

        repo.set_base(Money::from_cents(250050)).unwrap();
        assert_eq!(repo.base().unwrap(), Money::from_cents(250050));
    }

    #[test]
    fn test_rejects_negative_base() {
        let temp_dir = TempDir::new().unwrap();
        let store = PrefStore::open(temp_dir.path().join("prefs.json")).unwrap();
        let repo = BudgetRepository::new(&store);

        let err = repo.set_base(Money::from_cents(-1)).unwrap_err();
        assert!(matches!(err, TrackError::Validation(_)));
    }
}
