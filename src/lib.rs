//! trackfunds - Terminal-based personal finance tracker
//!
//! Core functionality for recording income and expense transactions into a
//! persistent preference store, deriving dashboard figures from the log, and
//! managing the single registered user's credentials and session.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (transactions, money, credentials)
//! - `codec`: Delimited-record encoding of transactions
//! - `store`: JSON-backed preference store with atomic writes
//! - `repo`: Transaction and budget repositories
//! - `aggregate`: Dashboard aggregation (recent, category sums, budget)
//! - `auth`: Credentials, sessions, and signup validation
//! - `display`: Terminal formatting
//! - `cli`: Command handlers for the binary

pub mod aggregate;
pub mod auth;
pub mod cli;
pub mod codec;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod repo;
pub mod store;

pub use error::{TrackError, TrackResult};
