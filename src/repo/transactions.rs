//! Transaction repository
//!
//! CRUD and query operations over the encoded record list in the preference
//! store. Listings are ordered newest-first; the fixed timestamp format
//! makes plain string comparison chronological.

use crate::codec;
use crate::error::{TrackError, TrackResult};
use crate::models::{Kind, Transaction, TransactionId};
use crate::store::{PrefStore, TransactionEntry};

/// A decoded transaction together with its stored identity
///
/// `raw` is kept so callers can still show something when a record predates
/// the current format or fails to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredTransaction {
    pub id: TransactionId,
    pub raw: String,
    pub txn: Transaction,
}

/// Repository for transaction persistence
pub struct TransactionRepository<'a> {
    store: &'a PrefStore,
}

impl<'a> TransactionRepository<'a> {
    /// Create a repository over the given store
    pub fn new(store: &'a PrefStore) -> Self {
        Self { store }
    }

    /// Persist a transaction under a freshly generated id
    pub fn add(&self, txn: &Transaction) -> TrackResult<TransactionId> {
        if txn.amount.is_negative() {
            return Err(TrackError::Validation(
                "Amount cannot be negative".to_string(),
            ));
        }

        let id = TransactionId::new();
        let mut entries = self.store.entries()?;
        entries.push(TransactionEntry {
            id,
            record: codec::encode(txn),
        });
        self.store.put_entries(&entries)?;
        Ok(id)
    }

    /// Look up a single transaction by id
    pub fn get(&self, id: TransactionId) -> TrackResult<Option<StoredTransaction>> {
        let entries = self.store.entries()?;
        for entry in entries {
            if entry.id == id {
                let txn = codec::decode(&entry.record)?;
                return Ok(Some(StoredTransaction {
                    id: entry.id,
                    raw: entry.record,
                    txn,
                }));
            }
        }
        Ok(None)
    }

    /// Remove a transaction by id
    pub fn remove(&self, id: TransactionId) -> TrackResult<()> {
        let mut entries = self.store.entries()?;
        let before = entries.len();
        entries.retain(|entry| entry.id != id);
        if entries.len() == before {
            return Err(TrackError::transaction_not_found(id.to_string()));
        }
        self.store.put_entries(&entries)
    }

    /// Remove the first entry whose encoded record matches exactly
    ///
    /// No-op when no entry matches.
    pub fn remove_raw(&self, raw: &str) -> TrackResult<()> {
        let mut entries = self.store.entries()?;
        if let Some(pos) = entries.iter().position(|entry| entry.record == raw) {
            entries.remove(pos);
            self.store.put_entries(&entries)?;
        }
        Ok(())
    }

    /// Replace the transaction stored under `id`
    pub fn update(&self, id: TransactionId, txn: &Transaction) -> TrackResult<()> {
        if txn.amount.is_negative() {
            return Err(TrackError::Validation(
                "Amount cannot be negative".to_string(),
            ));
        }

        let mut entries = self.store.entries()?;
        let entry = entries
            .iter_mut()
            .find(|entry| entry.id == id)
            .ok_or_else(|| TrackError::transaction_not_found(id.to_string()))?;
        entry.record = codec::encode(txn);
        self.store.put_entries(&entries)
    }

    /// List transactions, optionally restricted to one kind, newest first
    ///
    /// Entries that fail to decode are skipped rather than failing the whole
    /// listing. Equal timestamps keep their insertion order.
    pub fn list(&self, filter: Option<Kind>) -> TrackResult<Vec<StoredTransaction>> {
        let entries = self.store.entries()?;
        let mut items: Vec<StoredTransaction> = entries
            .into_iter()
            .filter_map(|entry| {
                let txn = codec::decode(&entry.record).ok()?;
                Some(StoredTransaction {
                    id: entry.id,
                    raw: entry.record,
                    txn,
                })
            })
            .filter(|stored| filter.map_or(true, |kind| stored.txn.kind == kind))
            .collect();

        items.sort_by(|a, b| b.txn.timestamp.cmp(&a.txn.timestamp));
        Ok(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use tempfile::TempDir;

    fn open_store(dir: &TempDir) -> PrefStore {
        PrefStore::open(dir.path().join("prefs.json")).unwrap()
    }

    fn txn(kind: Kind, description: &str, timestamp: &str, cents: i64, category: &str) -> Transaction {
        Transaction::new(kind, description, timestamp, Money::from_cents(cents), category)
            .unwrap()
    }

    #[test]
    fn test_add_and_get() {
        let temp_dir = TempDir::new().unwrap();
        let store = open_store(&temp_dir);
        let repo = TransactionRepository::new(&store);

        let salary = txn(Kind::Income, "Salary", "2025-04-01 00:00:00", 500000, "Job");
        let id = repo.add(&salary).unwrap();

        let stored = repo.get(id).unwrap().unwrap();
        assert_eq!(stored.txn, salary);
        assert_eq!(stored.raw, crate::codec::encode(&salary));
    }

    #[test]
    fn test_identical_transactions_stay_distinct() {
        let temp_dir = TempDir::new().unwrap();
        let store = open_store(&temp_dir);
        let repo = TransactionRepository::new(&store);

        let coffee = txn(Kind::Expense, "Coffee", "2025-04-01 09:00:00", 350, "Food");
        let first = repo.add(&coffee).unwrap();
        let second = repo.add(&coffee).unwrap();

        assert_ne!(first, second);
        assert_eq!(repo.list(None).unwrap().len(), 2);

        repo.remove(first).unwrap();
        let remaining = repo.list(None).unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id, second);
    }

    #[test]
    fn test_remove_missing_id_is_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let store = open_store(&temp_dir);
        let repo = TransactionRepository::new(&store);

        let err = repo.remove(TransactionId::new()).unwrap_err();
        assert!(matches!(err, TrackError::NotFound { .. }));
    }

    #[test]
    fn test_remove_raw_is_noop_when_absent() {
        let temp_dir = TempDir::new().unwrap();
        let store = open_store(&temp_dir);
        let repo = TransactionRepository::new(&store);

        repo.remove_raw("Income|Salary|2025-04-01 00:00:00|5000.00|Job")
            .unwrap();

        let salary = txn(Kind::Income, "Salary", "2025-04-01 00:00:00", 500000, "Job");
        repo.add(&salary).unwrap();
        repo.remove_raw(&crate::codec::encode(&salary)).unwrap();
        assert!(repo.list(None).unwrap().is_empty());
    }

    #[test]
    fn test_update_replaces_record() {
        let temp_dir = TempDir::new().unwrap();
        let store = open_store(&temp_dir);
        let repo = TransactionRepository::new(&store);

        let rent = txn(Kind::Expense, "Rent", "2025-04-02 00:00:00", 150000, "Housing");
        let id = repo.add(&rent).unwrap();

        let corrected = txn(Kind::Expense, "Rent", "2025-04-02 00:00:00", 160000, "Housing");
        repo.update(id, &corrected).unwrap();

        assert_eq!(repo.get(id).unwrap().unwrap().txn, corrected);
        assert_eq!(repo.list(None).unwrap().len(), 1);
    }

    #[test]
    fn test_list_sorts_newest_first_and_filters() {
        let temp_dir = TempDir::new().unwrap();
        let store = open_store(&temp_dir);
        let repo = TransactionRepository::new(&store);

        repo.add(&txn(Kind::Income, "Salary", "2025-04-01 00:00:00", 500000, "Job"))
            .unwrap();
        repo.add(&txn(Kind::Expense, "Rent", "2025-04-02 00:00:00", 150000, "Housing"))
            .unwrap();
        repo.add(&txn(Kind::Expense, "Groceries", "2025-04-03 10:00:00", 8000, "Food"))
            .unwrap();

        let all = repo.list(None).unwrap();
        let timestamps: Vec<&str> = all.iter().map(|s| s.txn.timestamp.as_str()).collect();
        assert_eq!(
            timestamps,
            vec![
                "2025-04-03 10:00:00",
                "2025-04-02 00:00:00",
                "2025-04-01 00:00:00"
            ]
        );

        let expenses = repo.list(Some(Kind::Expense)).unwrap();
        assert_eq!(expenses.len(), 2);
        assert!(expenses.iter().all(|s| s.txn.kind == Kind::Expense));
    }

    #[test]
    fn test_list_keeps_insertion_order_on_timestamp_ties() {
        let temp_dir = TempDir::new().unwrap();
        let store = open_store(&temp_dir);
        let repo = TransactionRepository::new(&store);

        let first = repo
            .add(&txn(Kind::Expense, "Lunch", "2025-04-01 12:00:00", 1200, "Food"))
            .unwrap();
        let second = repo
            .add(&txn(Kind::Expense, "Dessert", "2025-04-01 12:00:00", 400, "Food"))
            .unwrap();

        let listed = repo.list(None).unwrap();
        assert_eq!(listed[0].id, first);
        assert_eq!(listed[1].id, second);
    }

    #[test]
    fn test_list_skips_undecodable_entries() {
        let temp_dir = TempDir::new().unwrap();
        let store = open_store(&temp_dir);
        let repo = TransactionRepository::new(&store);

        repo.add(&txn(Kind::Income, "Salary", "2025-04-01 00:00:00", 500000, "Job"))
            .unwrap();

        let mut entries = store.entries().unwrap();
        entries.push(TransactionEntry {
            id: TransactionId::new(),
            record: "Income|truncated".to_string(),
        });
        store.put_entries(&entries).unwrap();

        assert_eq!(repo.list(None).unwrap().len(), 1);
    }
}
