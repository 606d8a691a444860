//! Storage layer
//!
//! A single JSON-backed preference store with atomic writes; every
//! repository reads and writes through it.

pub mod prefs;

pub use prefs::{keys, read_json, write_json_atomic, PrefStore, TransactionEntry};
