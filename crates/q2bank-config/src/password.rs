//! Password strength policy.
//!
//! The defaults require 8 to 72 characters with at least one uppercase
//! letter, one lowercase letter, one digit and one special character. The
//! upper bound matches the bcrypt input limit: longer inputs would be
//! silently truncated by the hasher.
//!
//! # Environment Variables
//!
//! - `PASSWORD_MIN_LENGTH` (default: 8)
//! - `PASSWORD_MAX_LENGTH` (default: 72)
//! - `PASSWORD_REQUIRE_UPPERCASE` (default: true)
//! - `PASSWORD_REQUIRE_LOWERCASE` (default: true)
//! - `PASSWORD_REQUIRE_DIGIT` (default: true)
//! - `PASSWORD_REQUIRE_SPECIAL` (default: true)

use crate::env::{flag_or, parse_or};

pub const DEFAULT_MIN_LENGTH: usize = 8;
pub const BCRYPT_MAX_LENGTH: usize = 72;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PasswordPolicy {
    pub min_length: usize,
    pub max_length: usize,
    pub require_uppercase: bool,
    pub require_lowercase: bool,
    pub require_digit: bool,
    pub require_special: bool,
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self {
            min_length: DEFAULT_MIN_LENGTH,
            max_length: BCRYPT_MAX_LENGTH,
            require_uppercase: true,
            require_lowercase: true,
            require_digit: true,
            require_special: true,
        }
    }
}

impl PasswordPolicy {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            min_length: parse_or("PASSWORD_MIN_LENGTH", defaults.min_length),
            max_length: parse_or("PASSWORD_MAX_LENGTH", defaults.max_length)
                .min(BCRYPT_MAX_LENGTH),
            require_uppercase: flag_or("PASSWORD_REQUIRE_UPPERCASE", defaults.require_uppercase),
            require_lowercase: flag_or("PASSWORD_REQUIRE_LOWERCASE", defaults.require_lowercase),
            require_digit: flag_or("PASSWORD_REQUIRE_DIGIT", defaults.require_digit),
            require_special: flag_or("PASSWORD_REQUIRE_SPECIAL", defaults.require_special),
        }
    }
}
