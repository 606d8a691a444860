//! Persistent preference store
//!
//! A flat, string-keyed store holding scalars and the transaction record
//! list, persisted as a single JSON object with atomic writes. Reads of
//! absent keys return the type's default; writes go straight through to
//! disk.

use std::collections::BTreeMap;
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;

use crate::error::{TrackError, TrackResult};
use crate::models::TransactionId;

/// Read JSON from a file, returning a default value if the file doesn't exist
pub fn read_json<T, P>(path: P) -> TrackResult<T>
where
    T: DeserializeOwned + Default,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    if !path.exists() {
        return Ok(T::default());
    }

    let bytes = fs::read(path)
        .map_err(|e| TrackError::Storage(format!("Failed to read {}: {}", path.display(), e)))?;
    serde_json::from_slice(&bytes)
        .map_err(|e| TrackError::Storage(format!("Failed to parse {}: {}", path.display(), e)))
}

/// Write JSON to a file atomically (write to temp, sync, then rename)
///
/// The file is either completely written or not modified at all, so a crash
/// mid-write cannot corrupt existing data.
pub fn write_json_atomic<T, P>(path: P, data: &T) -> TrackResult<()>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            TrackError::Storage(format!("Failed to create {}: {}", parent.display(), e))
        })?;
    }

    // The temp file must live in the same directory for the rename to be atomic
    let temp_path = path.with_extension("json.tmp");
    let write = |temp: &Path| -> TrackResult<()> {
        let file = File::create(temp)
            .map_err(|e| TrackError::Storage(format!("Failed to create temp file: {}", e)))?;
        serde_json::to_writer_pretty(&file, data)
            .map_err(|e| TrackError::Storage(format!("Failed to serialize data: {}", e)))?;
        file.sync_all()
            .map_err(|e| TrackError::Storage(format!("Failed to sync data: {}", e)))?;
        fs::rename(temp, path)
            .map_err(|e| TrackError::Storage(format!("Failed to rename temp file: {}", e)))
    };

    if let Err(e) = write(&temp_path) {
        let _ = fs::remove_file(&temp_path);
        return Err(e);
    }
    Ok(())
}

/// Well-known preference keys
pub mod keys {
    pub const TRANSACTIONS: &str = "transactions";
    pub const MONTHLY_BUDGET: &str = "monthlyBudget";
    pub const EMAIL: &str = "email";
    pub const USERNAME: &str = "username";
    pub const PASSWORD: &str = "password";
    pub const REGISTRATION_DATE: &str = "registrationDate";
    pub const LAST_LOGIN_DATE: &str = "lastLoginDate";
    pub const IS_LOGGED_IN: &str = "isLoggedIn";
}

/// One persisted transaction entry: a generated id plus the encoded record
///
/// The id keeps transactions with identical field values distinct.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionEntry {
    pub id: TransactionId,
    pub record: String,
}

/// String-keyed persistent store backing every repository in the crate
pub struct PrefStore {
    path: PathBuf,
    data: RwLock<BTreeMap<String, Value>>,
}

impl PrefStore {
    /// Create a store backed by the given file; nothing is read until
    /// [`load`](Self::load)
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(BTreeMap::new()),
        }
    }

    /// Create and load a store in one step
    pub fn open(path: PathBuf) -> TrackResult<Self> {
        let store = Self::new(path);
        store.load()?;
        Ok(store)
    }

    /// Load the store contents from disk, replacing anything in memory
    pub fn load(&self) -> TrackResult<()> {
        let file_data: BTreeMap<String, Value> = read_json(&self.path)?;
        let mut data = self
            .data
            .write()
            .map_err(|e| TrackError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        *data = file_data;
        Ok(())
    }

    /// Get a string value, `None` when absent or not a string
    pub fn get_string(&self, key: &str) -> TrackResult<Option<String>> {
        let data = self.read_guard()?;
        Ok(data
            .get(key)
            .and_then(Value::as_str)
            .map(str::to_string))
    }

    /// Get a boolean value, `false` when absent
    pub fn get_bool(&self, key: &str) -> TrackResult<bool> {
        let data = self.read_guard()?;
        Ok(data.get(key).and_then(Value::as_bool).unwrap_or(false))
    }

    /// Get a float value, `0.0` when absent
    pub fn get_f64(&self, key: &str) -> TrackResult<f64> {
        let data = self.read_guard()?;
        Ok(data.get(key).and_then(Value::as_f64).unwrap_or(0.0))
    }

    /// Get the transaction entry list, empty when absent
    pub fn entries(&self) -> TrackResult<Vec<TransactionEntry>> {
        let data = self.read_guard()?;
        match data.get(keys::TRANSACTIONS) {
            None => Ok(Vec::new()),
            Some(value) => serde_json::from_value(value.clone()).map_err(|e| {
                TrackError::Storage(format!("Corrupt transaction list: {}", e))
            }),
        }
    }

    pub fn put_string(&self, key: &str, value: impl Into<String>) -> TrackResult<()> {
        self.put(key, Value::String(value.into()))
    }

    pub fn put_bool(&self, key: &str, value: bool) -> TrackResult<()> {
        self.put(key, Value::Bool(value))
    }

    pub fn put_f64(&self, key: &str, value: f64) -> TrackResult<()> {
        let number = serde_json::Number::from_f64(value)
            .ok_or_else(|| TrackError::Storage(format!("Non-finite value for {}", key)))?;
        self.put(key, Value::Number(number))
    }

    /// Replace the transaction entry list
    pub fn put_entries(&self, entries: &[TransactionEntry]) -> TrackResult<()> {
        let value = serde_json::to_value(entries)
            .map_err(|e| TrackError::Storage(format!("Failed to serialize transactions: {}", e)))?;
        self.put(keys::TRANSACTIONS, value)
    }

    /// Remove a key; no-op when absent
    pub fn remove(&self, key: &str) -> TrackResult<()> {
        let mut data = self.write_guard()?;
        if data.remove(key).is_some() {
            write_json_atomic(&self.path, &*data)?;
        }
        Ok(())
    }

    fn put(&self, key: &str, value: Value) -> TrackResult<()> {
        let mut data = self.write_guard()?;
        data.insert(key.to_string(), value);
        write_json_atomic(&self.path, &*data)
    }

    fn read_guard(
        &self,
    ) -> TrackResult<std::sync::RwLockReadGuard<'_, BTreeMap<String, Value>>> {
        self.data
            .read()
            .map_err(|e| TrackError::Storage(format!("Failed to acquire read lock: {}", e)))
    }

    fn write_guard(
        &self,
    ) -> TrackResult<std::sync::RwLockWriteGuard<'_, BTreeMap<String, Value>>> {
        self.data
            .write()
            .map_err(|e| TrackError::Storage(format!("Failed to acquire write lock: {}", e)))
    }
}
