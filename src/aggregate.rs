//! Dashboard aggregation
//!
//! Derives the figures the dashboard and analysis screens show from the
//! transaction log: recent entries, per-category sums, and the current
//! budget.

use std::collections::BTreeMap;

use crate::error::TrackResult;
use crate::models::{Kind, Money};
use crate::repo::{BudgetRepository, StoredTransaction, TransactionRepository};
use crate::store::PrefStore;

/// Read-only aggregate queries over the transaction log
pub struct Aggregator<'a> {
    transactions: TransactionRepository<'a>,
    budget: BudgetRepository<'a>,
}

impl<'a> Aggregator<'a> {
    /// Create an aggregator over the given store
    pub fn new(store: &'a PrefStore) -> Self {
        Self {
            transactions: TransactionRepository::new(store),
            budget: BudgetRepository::new(store),
        }
    }

    /// The `n` most recent transactions, newest first
    pub fn recent(&self, n: usize) -> TrackResult<Vec<StoredTransaction>> {
        let mut all = self.transactions.list(None)?;
        all.truncate(n);
        Ok(all)
    }

    /// Total amount per category for one kind
    ///
    /// Empty input yields an empty map. Iteration order of the map is the
    /// grouping key order; presentation order is the caller's concern.
    pub fn sum_by_category(&self, kind: Kind) -> TrackResult<BTreeMap<String, Money>> {
        let mut sums: BTreeMap<String, Money> = BTreeMap::new();
        for stored in self.transactions.list(Some(kind))? {
            let amount = stored.txn.amount;
            *sums.entry(stored.txn.category).or_insert_with(Money::zero) += amount;
        }
        Ok(sums)
    }

    /// Overall income and expense totals
    pub fn totals(&self) -> TrackResult<(Money, Money)> {
        let mut income = Money::zero();
        let mut expense = Money::zero();
        for stored in self.transactions.list(None)? {
            match stored.txn.kind {
                Kind::Income => income += stored.txn.amount,
                Kind::Expense => expense += stored.txn.amount,
            }
        }
        Ok((income, expense))
    }

    /// Current budget: the user-set base plus the net of the whole log
    ///
    /// Adding income raises the figure by its amount and adding an expense
    /// lowers it; removal inverts automatically because the figure is
    /// recomputed from the log rather than stored.
    pub fn current_budget(&self) -> TrackResult<Money> {
        let net: Money = self
            .transactions
            .list(None)?
            .iter()
            .map(|stored| stored.txn.signed_amount())
            .sum();
        Ok(self.budget.base()? + net)
    }
}
