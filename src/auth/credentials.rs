//! Credential store and session management
//!
//! Holds the single registered user's credential in the preference store and
//! manages the persisted session flag. Registering again overwrites the
//! previous account.

use chrono::Local;

use crate::error::{TrackError, TrackResult};
use crate::models::{Credential, Session, TIMESTAMP_FORMAT};
use crate::store::{keys, PrefStore};

use super::validate;

/// Store for the single registered user and the active session
pub struct CredentialStore<'a> {
    store: &'a PrefStore,
}

impl<'a> CredentialStore<'a> {
    /// Create a credential store over the given store
    pub fn new(store: &'a PrefStore) -> Self {
        Self { store }
    }

    /// The registered credential, if any
    pub fn credential(&self) -> TrackResult<Option<Credential>> {
        let email = self.store.get_string(keys::EMAIL)?;
        let password = self.store.get_string(keys::PASSWORD)?;
        match (email, password) {
            (Some(email), Some(password)) => Ok(Some(Credential {
                email,
                username: self.store.get_string(keys::USERNAME)?.unwrap_or_default(),
                password,
                registered_at: self
                    .store
                    .get_string(keys::REGISTRATION_DATE)?
                    .unwrap_or_default(),
            })),
            _ => Ok(None),
        }
    }

    /// Register a user, overwriting any existing credential
    ///
    /// Runs the full signup validation first, including the re-registration
    /// checks against the stored email and username.
    pub fn register(
        &self,
        email: &str,
        username: &str,
        password: &str,
    ) -> TrackResult<Credential> {
        validate::validate_email(email)?;
        if self.store.get_string(keys::EMAIL)?.as_deref() == Some(email) {
            return Err(TrackError::Validation(
                "Email already registered".to_string(),
            ));
        }

        validate::validate_username(username)?;
        if self.store.get_string(keys::USERNAME)?.as_deref() == Some(username) {
            return Err(TrackError::Validation("Username already taken".to_string()));
        }

        validate::validate_password(password)?;

        let credential = Credential {
            email: email.to_string(),
            username: username.to_string(),
            password: password.to_string(),
            registered_at: now_timestamp(),
        };

        self.store.put_string(keys::EMAIL, &credential.email)?;
        self.store.put_string(keys::USERNAME, &credential.username)?;
        self.store.put_string(keys::PASSWORD, &credential.password)?;
        self.store
            .put_string(keys::REGISTRATION_DATE, &credential.registered_at)?;

        Ok(credential)
    }

    /// Check a login attempt against the stored credential
    ///
    /// Exact string equality; always false when no user is registered.
    pub fn authenticate(&self, email: &str, password: &str) -> TrackResult<bool> {
        let stored_email = self.store.get_string(keys::EMAIL)?;
        let stored_password = self.store.get_string(keys::PASSWORD)?;
        Ok(match (stored_email, stored_password) {
            (Some(stored_email), Some(stored_password)) => {
                email == stored_email && password == stored_password
            }
            _ => false,
        })
    }

    /// Authenticate and open a session
    pub fn login(&self, email: &str, password: &str) -> TrackResult<Session> {
        if !self.authenticate(email, password)? {
            return Err(TrackError::Auth("Invalid email or password".to_string()));
        }

        let session = Session {
            username: self.store.get_string(keys::USERNAME)?.unwrap_or_default(),
            logged_in_at: now_timestamp(),
        };
        self.store.put_bool(keys::IS_LOGGED_IN, true)?;
        self.store
            .put_string(keys::LAST_LOGIN_DATE, &session.logged_in_at)?;
        Ok(session)
    }

    /// Close the active session; no-op when logged out
    pub fn logout(&self) -> TrackResult<()> {
        self.store.put_bool(keys::IS_LOGGED_IN, false)
    }

    /// The persisted session, if a user is logged in
    pub fn session(&self) -> TrackResult<Option<Session>> {
        if !self.store.get_bool(keys::IS_LOGGED_IN)? {
            return Ok(None);
        }
        Ok(Some(Session {
            username: self.store.get_string(keys::USERNAME)?.unwrap_or_default(),
            logged_in_at: self
                .store
                .get_string(keys::LAST_LOGIN_DATE)?
                .unwrap_or_default(),
        }))
    }
}

fn now_timestamp() -> String {
    Local::now().format(TIMESTAMP_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn open_store(dir: &TempDir) -> PrefStore {
        PrefStore::open(dir.path().join("prefs.json")).unwrap()
    }

    #[test]
    fn test_authenticate_empty_store_is_false() {
        let temp_dir = TempDir::new().unwrap();
        let store = open_store(&temp_dir);
        let creds = CredentialStore::new(&store);

        assert!(!creds.authenticate("user@example.com", "Abc12345!").unwrap());
        assert!(creds.credential().unwrap().is_none());
    }

    #[test]
    fn test_register_then_authenticate() {
        let temp_dir = TempDir::new().unwrap();
        let store = open_store(&temp_dir);
        let creds = CredentialStore::new(&store);

        creds
            .register("user@example.com", "alex_r", "Abc12345!")
            .unwrap();

        assert!(creds.authenticate("user@example.com", "Abc12345!").unwrap());
        assert!(!creds.authenticate("user@example.com", "wrong").unwrap());
        assert!(!creds.authenticate("other@example.com", "Abc12345!").unwrap());
    }

    #[test]
    fn test_register_rejects_weak_password() {
        let temp_dir = TempDir::new().unwrap();
        let store = open_store(&temp_dir);
        let creds = CredentialStore::new(&store);

        let err = creds
            .register("user@example.com", "alex_r", "password")
            .unwrap_err();
        assert!(matches!(err, TrackError::Validation(_)));
    }

    #[test]
    fn test_register_rejects_same_email_again() {
        let temp_dir = TempDir::new().unwrap();
        let store = open_store(&temp_dir);
        let creds = CredentialStore::new(&store);

        creds
            .register("user@example.com", "alex_r", "Abc12345!")
            .unwrap();
        let err = creds
            .register("user@example.com", "someone_else", "Xyz98765?")
            .unwrap_err();
        assert!(matches!(err, TrackError::Validation(_)));
    }

    #[test]
    fn test_register_overwrites_previous_account() {
        let temp_dir = TempDir::new().unwrap();
        let store = open_store(&temp_dir);
        let creds = CredentialStore::new(&store);

        creds
            .register("first@example.com", "first_user", "Abc12345!")
            .unwrap();
        creds
            .register("second@example.com", "second_user", "Xyz98765?")
            .unwrap();

        assert!(!creds.authenticate("first@example.com", "Abc12345!").unwrap());
        assert!(creds.authenticate("second@example.com", "Xyz98765?").unwrap());
        assert_eq!(creds.credential().unwrap().unwrap().username, "second_user");
    }

    #[test]
    fn test_login_opens_session_and_logout_closes_it() {
        let temp_dir = TempDir::new().unwrap();
        let store = open_store(&temp_dir);
        let creds = CredentialStore::new(&store);

        creds
            .register("user@example.com", "alex_r", "Abc12345!")
            .unwrap();
        assert!(creds.session().unwrap().is_none());

        let session = creds.login("user@example.com", "Abc12345!").unwrap();
        assert_eq!(session.username, "alex_r");
        assert_eq!(creds.session().unwrap().unwrap().username, "alex_r");

        creds.logout().unwrap();
        assert!(creds.session().unwrap().is_none());
    }

    #[test]
    fn test_login_failure_leaves_session_closed() {
        let temp_dir = TempDir::new().unwrap();
        let store = open_store(&temp_dir);
        let creds = CredentialStore::new(&store);

        creds
            .register("user@example.com", "alex_r", "Abc12345!")
            .unwrap();
        let err = creds.login("user@example.com", "nope").unwrap_err();
        assert!(matches!(err, TrackError::Auth(_)));
        assert!(creds.session().unwrap().is_none());
    }
}
