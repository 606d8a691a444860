//! Core data models

pub mod credential;
pub mod ids;
pub mod money;
pub mod transaction;

pub use credential::{Credential, Session};
pub use ids::TransactionId;
pub use money::{Money, MoneyParseError};
pub use transaction::{Kind, Transaction, TIMESTAMP_FORMAT};
