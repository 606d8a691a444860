//! Signup and login form validation
//!
//! Field validators with the exact messages the app surfaces inline, plus
//! the advisory password strength score.

use std::sync::OnceLock;

use regex::Regex;

use crate::error::{TrackError, TrackResult};

/// Minimum password length accepted at signup and login
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Minimum username length accepted at signup
pub const MIN_USERNAME_LENGTH: usize = 3;

fn email_regex() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| {
        Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").expect("valid regex")
    })
}

fn username_regex() -> &'static Regex {
    static USERNAME: OnceLock<Regex> = OnceLock::new();
    USERNAME.get_or_init(|| Regex::new(r"^[a-zA-Z0-9_]+$").expect("valid regex"))
}

/// Validate an email address
pub fn validate_email(email: &str) -> TrackResult<()> {
    if email.is_empty() {
        return Err(TrackError::Validation("Email is required".to_string()));
    }
    if !email_regex().is_match(email) {
        return Err(TrackError::Validation("Invalid email format".to_string()));
    }
    Ok(())
}

/// Validate a username
pub fn validate_username(username: &str) -> TrackResult<()> {
    if username.is_empty() {
        return Err(TrackError::Validation("Username is required".to_string()));
    }
    if username.chars().count() < MIN_USERNAME_LENGTH {
        return Err(TrackError::Validation(format!(
            "Username must be at least {} characters",
            MIN_USERNAME_LENGTH
        )));
    }
    if !username_regex().is_match(username) {
        return Err(TrackError::Validation(
            "Username can only contain letters, numbers, and underscores".to_string(),
        ));
    }
    Ok(())
}

/// Validate a password against the signup character-class rules
pub fn validate_password(password: &str) -> TrackResult<()> {
    if password.is_empty() {
        return Err(TrackError::Validation("Password is required".to_string()));
    }
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(TrackError::Validation(format!(
            "Password must be at least {} characters",
            MIN_PASSWORD_LENGTH
        )));
    }
    if !password.chars().any(|c| c.is_uppercase()) {
        return Err(TrackError::Validation(
            "Password must contain at least one uppercase letter".to_string(),
        ));
    }
    if !password.chars().any(|c| c.is_lowercase()) {
        return Err(TrackError::Validation(
            "Password must contain at least one lowercase letter".to_string(),
        ));
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        return Err(TrackError::Validation(
            "Password must contain at least one number".to_string(),
        ));
    }
    if !password.chars().any(|c| !c.is_alphanumeric()) {
        return Err(TrackError::Validation(
            "Password must contain at least one special character".to_string(),
        ));
    }
    Ok(())
}

/// Validate the confirm-password field
pub fn validate_confirmation(password: &str, confirmation: &str) -> TrackResult<()> {
    if confirmation.is_empty() {
        return Err(TrackError::Validation(
            "Please confirm your password".to_string(),
        ));
    }
    if confirmation != password {
        return Err(TrackError::Validation(
            "Passwords do not match".to_string(),
        ));
    }
    Ok(())
}

/// Advisory 0-100 password strength score
///
/// 20 points each for: length >= 8, an uppercase letter, a lowercase letter,
/// a digit, and a non-alphanumeric character.
pub fn password_strength(password: &str) -> u8 {
    let mut score = 0;
    if password.chars().count() >= MIN_PASSWORD_LENGTH {
        score += 20;
    }
    if password.chars().any(|c| c.is_uppercase()) {
        score += 20;
    }
    if password.chars().any(|c| c.is_lowercase()) {
        score += 20;
    }
    if password.chars().any(|c| c.is_ascii_digit()) {
        score += 20;
    }
    if password.chars().any(|c| !c.is_alphanumeric()) {
        score += 20;
    }
    score
}

/// Human-readable label for a strength score
pub fn strength_label(score: u8) -> &'static str {
    match score {
        80..=100 => "Strong password",
        60..=79 => "Good password",
        40..=59 => "Moderate password",
        _ => "Weak password",
    }
}
