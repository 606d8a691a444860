//! Path management
//!
//! Resolves where the preference store and settings file live.
//!
//! ## Path Resolution Order
//!
//! 1. `TRACKFUNDS_DATA_DIR` environment variable (if set)
//! 2. The platform config directory (`~/.config/trackfunds` on Linux,
//!    the equivalent on macOS/Windows)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::TrackError;

/// Manages all paths used by trackfunds
#[derive(Debug, Clone)]
pub struct TrackPaths {
    base_dir: PathBuf,
}

impl TrackPaths {
    /// Create a new TrackPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, TrackError> {
        let base_dir = if let Ok(custom) = std::env::var("TRACKFUNDS_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            let dirs = ProjectDirs::from("", "", "trackfunds").ok_or_else(|| {
                TrackError::Io("Could not determine a config directory".to_string())
            })?;
            dirs.config_dir().to_path_buf()
        };

        Ok(Self { base_dir })
    }

    /// Create TrackPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the preference store file
    pub fn prefs_file(&self) -> PathBuf {
        self.base_dir.join("prefs.json")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), TrackError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| TrackError::Io(format!("Failed to create base directory: {}", e)))
    }
}
