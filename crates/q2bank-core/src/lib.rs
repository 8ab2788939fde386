//! # q2bank Core
//!
//! Core types, errors, and utilities for the q2bank account API.
//!
//! - [`errors`]: the [`AppError`] type, its [`ErrorKind`] and the HTTP mapping
//! - [`password`]: password hashing, verification and strength validation
//!
//! # Example
//!
//! ```ignore
//! use q2bank_core::{AppError, hash_password, verify_password};
//!
//! let hash = hash_password("Valid123!")?;
//! assert!(verify_password("Valid123!", &hash));
//!
//! let error = AppError::conflict(anyhow::anyhow!("user already exists"));
//! assert_eq!(error.status(), axum::http::StatusCode::CONFLICT);
//! ```

pub mod errors;
pub mod password;

pub use errors::{AppError, ErrorKind};
pub use password::{hash_password, validate_password, verify_password};
