//! Credentials, sessions, and signup validation

pub mod credentials;
pub mod validate;

pub use credentials::CredentialStore;
pub use validate::{password_strength, strength_label};
