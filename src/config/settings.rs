//! User settings
//!
//! Display preferences persisted beside the preference store.

use serde::{Deserialize, Serialize};

use crate::error::TrackResult;
use crate::store::{read_json, write_json_atomic};

use super::paths::TrackPaths;

/// User settings for trackfunds
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency prefix shown before amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// How many transactions the dashboard shows
    #[serde(default = "default_recent_limit")]
    pub recent_limit: usize,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "Rs.".to_string()
}

fn default_recent_limit() -> usize {
    5
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            recent_limit: default_recent_limit(),
        }
    }
}

impl Settings {
    /// Load settings, writing the defaults out on first run
    pub fn load_or_create(paths: &TrackPaths) -> TrackResult<Self> {
        let path = paths.settings_file();
        if !path.exists() {
            let settings = Self::default();
            write_json_atomic(&path, &settings)?;
            return Ok(settings);
        }
        read_json(&path)
    }

    /// Save settings to disk
    pub fn save(&self, paths: &TrackPaths) -> TrackResult<()> {
        write_json_atomic(paths.settings_file(), self)
    }
}
