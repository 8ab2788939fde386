use std::env;

use crate::env::parse_or;

/// Token signing settings.
///
/// `secret` is left empty when `JWT_SECRET` is unset; token issuance refuses
/// to sign with an empty secret instead of falling back to a built-in one.
#[derive(Clone)]
pub struct JwtConfig {
    pub secret: String,
    /// Access token lifetime in seconds.
    pub access_token_expiry: i64,
}

impl JwtConfig {
    pub fn from_env() -> Self {
        Self {
            secret: env::var("JWT_SECRET").unwrap_or_default(),
            access_token_expiry: parse_or("JWT_ACCESS_EXPIRY", 3600), // 1 hour
        }
    }
}

impl std::fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtConfig")
            .field("secret", &"[REDACTED]")
            .field("access_token_expiry", &self.access_token_expiry)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_redacts_secret() {
        let config = JwtConfig {
            secret: "super-secret-value".to_string(),
            access_token_expiry: 60,
        };
        let printed = format!("{:?}", config);
        assert!(!printed.contains("super-secret-value"));
        assert!(printed.contains("REDACTED"));
    }
}
