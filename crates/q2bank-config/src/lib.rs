//! # q2bank Config
//!
//! Configuration types for the q2bank account API.
//!
//! Every structure here is loaded from environment variables with sensible
//! defaults, so a `.env` file (read by `dotenvy` at startup) is enough to run
//! the service locally:
//!
//! - [`cors`]: allowed origins for browser clients
//! - [`database`]: PostgreSQL connection settings
//! - [`jwt`]: token signing secret and lifetime
//! - [`password`]: password strength policy
//! - [`server`]: listen address
//! - [`transaction_auth`]: external authorization endpoint
//!
//! # Example
//!
//! ```ignore
//! use q2bank_config::{JwtConfig, PasswordPolicy};
//!
//! let jwt_config = JwtConfig::from_env();
//! let policy = PasswordPolicy::from_env();
//! ```

pub mod cors;
pub mod database;
pub mod jwt;
pub mod password;
pub mod server;
pub mod transaction_auth;

mod env;

pub use cors::CorsConfig;
pub use database::DatabaseConfig;
pub use jwt::JwtConfig;
pub use password::PasswordPolicy;
pub use server::ServerConfig;
pub use transaction_auth::TransactionAuthConfig;
