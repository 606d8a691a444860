//! Repository layer over the preference store

pub mod budget;
pub mod transactions;

pub use budget::BudgetRepository;
pub use transactions::{StoredTransaction, TransactionRepository};
