//! JWT issuance for logged-in accounts.
//!
//! Tokens are HS256-signed with the process-wide secret from [`JwtConfig`]
//! and carry the account id and user type. Nothing in this service verifies
//! them; consumers downstream do.

use anyhow::anyhow;
use chrono::Utc;
use jsonwebtoken::{EncodingKey, Header, encode};

use q2bank_config::JwtConfig;
use q2bank_core::AppError;

use crate::claims::Claims;

/// Creates a signed, time-bounded identity token.
///
/// # Arguments
///
/// * `user_id` - The account id assigned by storage
/// * `role` - The account's user type
/// * `jwt_config` - Secret and lifetime settings
///
/// # Errors
///
/// Returns an internal error when no secret is configured or encoding fails.
pub fn create_access_token(
    user_id: i32,
    role: &str,
    jwt_config: &JwtConfig,
) -> Result<String, AppError> {
    if jwt_config.secret.is_empty() {
        return Err(AppError::internal(anyhow!("JWT secret is not configured")));
    }

    let now = Utc::now().timestamp() as usize;
    let exp = now + jwt_config.access_token_expiry.max(0) as usize;

    let claims = Claims {
        sub: user_id.to_string(),
        role: role.to_string(),
        exp,
        iat: now,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(jwt_config.secret.as_bytes()),
    )
    .map_err(|e| AppError::internal(anyhow!("Failed to create token: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{DecodingKey, Validation, decode};
    use q2bank_core::ErrorKind;

    fn get_test_jwt_config() -> JwtConfig {
        JwtConfig {
            secret: "test-secret-key-at-least-32-characters-long".to_string(),
            access_token_expiry: 3600,
        }
    }

    fn decode_claims(token: &str, secret: &str) -> jsonwebtoken::errors::Result<Claims> {
        decode::<Claims>(
            token,
            &DecodingKey::from_secret(secret.as_bytes()),
            &Validation::default(),
        )
        .map(|data| data.claims)
    }

    #[test]
    fn test_create_access_token_success() {
        let config = get_test_jwt_config();
        let token = create_access_token(1, "person", &config).unwrap();
        assert!(!token.is_empty());
        assert_eq!(token.split('.').count(), 3);
    }

    #[test]
    fn test_token_carries_id_and_role() {
        let config = get_test_jwt_config();
        let token = create_access_token(42, "store", &config).unwrap();

        let claims = decode_claims(&token, &config.secret).unwrap();
        assert_eq!(claims.sub, "42");
        assert_eq!(claims.role, "store");
    }

    #[test]
    fn test_token_lifetime_follows_config() {
        let config = JwtConfig {
            access_token_expiry: 900,
            ..get_test_jwt_config()
        };
        let token = create_access_token(5, "person", &config).unwrap();

        let claims = decode_claims(&token, &config.secret).unwrap();
        assert_eq!(claims.exp - claims.iat, 900);
    }

    #[test]
    fn test_token_rejected_with_wrong_secret() {
        let config = get_test_jwt_config();
        let token = create_access_token(3, "person", &config).unwrap();

        assert!(decode_claims(&token, "different-secret-key-at-least-32-characters").is_err());
    }

    #[test]
    fn test_missing_secret_fails() {
        let config = JwtConfig {
            secret: String::new(),
            access_token_expiry: 3600,
        };
        let err = create_access_token(1, "person", &config).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Internal);
    }
}
