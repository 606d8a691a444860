//! Credential and session models
//!
//! The application supports a single registered user; registering again
//! overwrites the stored credential. Passwords are stored as entered.

use serde::{Deserialize, Serialize};

/// The single registered user's credential
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credential {
    pub email: String,
    pub username: String,
    pub password: String,
    /// Timestamp in `yyyy-MM-dd HH:mm:ss` format
    pub registered_at: String,
}

/// An authenticated session, returned by login and passed to callers that
/// need proof of authentication
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub username: String,
    /// Timestamp in `yyyy-MM-dd HH:mm:ss` format
    pub logged_in_at: String,
}
