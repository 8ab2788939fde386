//! # q2bank Auth
//!
//! Identity token types and JWT utilities for the q2bank account API.
//!
//! - [`claims`]: the [`Claims`] embedded in every issued token
//! - [`jwt`]: token issuance
//!
//! # Example
//!
//! ```ignore
//! use q2bank_auth::create_access_token;
//! use q2bank_config::JwtConfig;
//!
//! let config = JwtConfig::from_env();
//! let token = create_access_token(42, "person", &config)?;
//! ```

pub mod claims;
pub mod jwt;

pub use claims::Claims;
pub use jwt::create_access_token;
