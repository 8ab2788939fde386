//! PostgreSQL connection settings.
//!
//! # Environment Variables
//!
//! - `DATABASE_URL`: connection string (required)
//! - `DATABASE_MAX_CONNECTIONS`: pool size (default: 5)
//! - `RUN_MIGRATIONS`: apply pending migrations at startup (default: true)

use std::env;

use crate::env::{flag_or, parse_or};

#[derive(Clone, Debug)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub run_migrations: bool,
}

impl DatabaseConfig {
    /// Loads the database settings, failing when `DATABASE_URL` is not set.
    pub fn from_env() -> Result<Self, env::VarError> {
        Ok(Self {
            url: env::var("DATABASE_URL")?,
            max_connections: parse_or("DATABASE_MAX_CONNECTIONS", 5),
            run_migrations: flag_or("RUN_MIGRATIONS", true),
        })
    }
}
