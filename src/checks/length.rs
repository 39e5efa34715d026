//! Length check - minimum password length.

use secrecy::{ExposeSecret, SecretString};

const MIN_LENGTH: usize = 8;

/// Checks if the password meets the minimum length requirement
/// (8 characters).
pub fn meets_minimum_length(password: &SecretString) -> bool {
    password.expose_secret().chars().count() >= MIN_LENGTH
}
