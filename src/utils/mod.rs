//! Shared utilities.
//!
//! - [`transaction_auth`]: external transaction authorization lookup

pub mod transaction_auth;
