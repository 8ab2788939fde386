//! Account data models and DTOs.
//!
//! # Request DTOs
//!
//! - [`CreateAccountRequest`] - Register a new account
//! - [`LoginRequest`] - Exchange email and password for a token
//!
//! # Storage
//!
//! - [`NewAccount`] - Row written by registration (password already hashed)
//! - [`AccountCredentials`] - Row read back by login

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

/// Kind of account holder.
///
/// `Bank` exists so that stored or internally constructed values can be
/// represented, but it is never accepted by registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum UserType {
    Person,
    Store,
    Bank,
}

impl UserType {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserType::Person => "person",
            UserType::Store => "store",
            UserType::Bank => "bank",
        }
    }

    /// Whether accounts of this type may be created through registration.
    pub fn is_registrable(&self) -> bool {
        matches!(self, UserType::Person | UserType::Store)
    }
}

impl fmt::Display for UserType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "person" => Ok(UserType::Person),
            "store" => Ok(UserType::Store),
            "bank" => Ok(UserType::Bank),
            other => Err(format!("unknown user type: {}", other)),
        }
    }
}

/// Request fields in the order their validation failures are reported.
///
/// Only the first failing field is returned to the client.
pub trait FieldOrder {
    const FIELDS: &'static [&'static str];
}

/// Reads a missing or `null` string as empty so the blank check names the field.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("required"));
    }
    Ok(())
}

fn registrable_user_type(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("required").with_message("user_type is required".into()));
    }

    match value.parse::<UserType>() {
        Ok(user_type) if user_type.is_registrable() => Ok(()),
        _ => Err(ValidationError::new("user_type")
            .with_message("user_type must be either person or store".into())),
    }
}

/// Registration request.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateAccountRequest {
    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(custom(function = "not_blank", message = "email is required"))]
    #[schema(example = "a@x.com")]
    pub email: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(custom(function = "not_blank", message = "password is required"))]
    #[schema(example = "Valid123!")]
    pub password: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(custom(function = "not_blank", message = "cpf_cnpj is required"))]
    #[schema(example = "12345678900")]
    pub cpf_cnpj: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(custom(function = "not_blank", message = "name is required"))]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(custom(function = "registrable_user_type"))]
    #[schema(example = "person")]
    pub user_type: String,
}

impl FieldOrder for CreateAccountRequest {
    const FIELDS: &'static [&'static str] =
        &["email", "password", "cpf_cnpj", "name", "user_type"];
}

impl CreateAccountRequest {
    /// Parsed user type. Only meaningful after validation has passed.
    pub fn user_type(&self) -> Result<UserType, String> {
        self.user_type.parse()
    }
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(custom(function = "not_blank", message = "email is required"))]
    #[schema(example = "a@x.com")]
    pub email: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(custom(function = "not_blank", message = "password is required"))]
    #[schema(example = "Valid123!")]
    pub password: String,
}

impl FieldOrder for LoginRequest {
    const FIELDS: &'static [&'static str] = &["email", "password"];
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LoginResponse {
    pub message: String,
    pub token: String,
}

/// Account ready to be persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAccount {
    pub email: String,
    pub password_hash: String,
    pub cpf_cnpj: String,
    pub name: String,
    pub user_type: UserType,
}

/// Fields read back for a login attempt.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct AccountCredentials {
    pub id: i32,
    pub password: String,
    pub user_type: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> CreateAccountRequest {
        CreateAccountRequest {
            email: "a@x.com".to_string(),
            password: "Valid123!".to_string(),
            cpf_cnpj: "111".to_string(),
            name: "A".to_string(),
            user_type: "person".to_string(),
        }
    }

    fn messages(errors: &validator::ValidationErrors) -> Vec<String> {
        errors
            .field_errors()
            .values()
            .flat_map(|errs| errs.iter())
            .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
            .collect()
    }

    #[test]
    fn test_user_type_round_trips_through_str() {
        for user_type in [UserType::Person, UserType::Store, UserType::Bank] {
            assert_eq!(user_type.as_str().parse::<UserType>(), Ok(user_type));
        }
        assert!("admin".parse::<UserType>().is_err());
        assert!("Person".parse::<UserType>().is_err());
    }

    #[test]
    fn test_bank_is_not_registrable() {
        assert!(UserType::Person.is_registrable());
        assert!(UserType::Store.is_registrable());
        assert!(!UserType::Bank.is_registrable());
    }

    #[test]
    fn test_user_type_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&UserType::Store).unwrap(), r#""store""#);
    }

    #[test]
    fn test_valid_request_passes() {
        assert!(valid_request().validate().is_ok());
    }

    #[test]
    fn test_blank_fields_are_required() {
        let mut dto = valid_request();
        dto.cpf_cnpj = "   ".to_string();

        let errors = dto.validate().unwrap_err();
        assert_eq!(messages(&errors), vec!["cpf_cnpj is required".to_string()]);
    }

    #[test]
    fn test_blank_user_type_is_required() {
        let mut dto = valid_request();
        dto.user_type = String::new();

        let errors = dto.validate().unwrap_err();
        assert_eq!(messages(&errors), vec!["user_type is required".to_string()]);
    }

    #[test]
    fn test_bank_user_type_rejected() {
        let mut dto = valid_request();
        dto.user_type = "bank".to_string();

        let errors = dto.validate().unwrap_err();
        assert_eq!(
            messages(&errors),
            vec!["user_type must be either person or store".to_string()]
        );
    }

    #[test]
    fn test_null_and_missing_strings_read_as_empty() {
        let dto: CreateAccountRequest =
            serde_json::from_str(r#"{"email":null,"password":"Valid123!","name":"A"}"#).unwrap();

        assert_eq!(dto.email, "");
        assert_eq!(dto.cpf_cnpj, "");
        assert_eq!(dto.user_type, "");
        assert_eq!(dto.password, "Valid123!");
    }

    #[test]
    fn test_wrong_string_type_still_rejected() {
        let result = serde_json::from_str::<LoginRequest>(r#"{"email":5,"password":"x"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_login_request_requires_password() {
        let dto = LoginRequest {
            email: "a@x.com".to_string(),
            password: String::new(),
        };
        let errors = dto.validate().unwrap_err();
        assert_eq!(messages(&errors), vec!["password is required".to_string()]);
    }
}
