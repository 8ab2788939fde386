//! Password hashing, verification and strength validation.
//!
//! Hashes are bcrypt with [`DEFAULT_COST`] and a random salt per call.

use anyhow::anyhow;
use bcrypt::{DEFAULT_COST, hash, verify};
use q2bank_config::PasswordPolicy;

use crate::errors::AppError;

pub fn hash_password(password: &str) -> Result<String, AppError> {
    hash(password, DEFAULT_COST)
        .map_err(|e| AppError::internal(anyhow!("Failed to hash password: {}", e)))
}

/// Returns `false` on mismatch and on a malformed hash.
pub fn verify_password(password: &str, hash: &str) -> bool {
    verify(password, hash).unwrap_or(false)
}

/// Checks `password` against `policy`.
///
/// The error is a human-readable reason suitable for the client. Checks run
/// in a fixed order (length first, then character classes) and the first
/// failing rule is reported.
pub fn validate_password(password: &str, policy: &PasswordPolicy) -> Result<(), String> {
    if password.chars().count() < policy.min_length {
        return Err(format!(
            "password must be at least {} characters long",
            policy.min_length
        ));
    }

    if password.len() > policy.max_length {
        return Err(format!(
            "password must be at most {} bytes long",
            policy.max_length
        ));
    }

    if policy.require_uppercase && !password.chars().any(char::is_uppercase) {
        return Err("password must contain at least one uppercase letter".to_string());
    }

    if policy.require_lowercase && !password.chars().any(char::is_lowercase) {
        return Err("password must contain at least one lowercase letter".to_string());
    }

    if policy.require_digit && !password.chars().any(|c| c.is_ascii_digit()) {
        return Err("password must contain at least one digit".to_string());
    }

    if policy.require_special
        && !password
            .chars()
            .any(|c| !c.is_alphanumeric() && !c.is_whitespace())
    {
        return Err("password must contain at least one special character".to_string());
    }

    Ok(())
}
