//! # q2bank DB
//!
//! Database pool and migrations for the q2bank account API.
//!
//! The schema lives in the workspace `migrations/` directory and is embedded
//! into the binary at compile time.
//!
//! # Example
//!
//! ```ignore
//! use q2bank_config::DatabaseConfig;
//! use q2bank_db::{init_db_pool, run_migrations};
//!
//! let config = DatabaseConfig::from_env()?;
//! let pool = init_db_pool(&config).await?;
//! run_migrations(&pool).await?;
//! ```

use q2bank_config::DatabaseConfig;
use sqlx::migrate::{MigrateError, Migrator};
use sqlx::postgres::PgPoolOptions;
use tracing::info;

pub static MIGRATOR: Migrator = sqlx::migrate!("../../migrations");

/// Creates a PostgreSQL connection pool.
///
/// The returned pool is cheaply cloneable and safe to share across
/// in-flight requests.
///
/// # Errors
///
/// Returns the sqlx error when the URL is invalid or the first connection
/// cannot be established.
pub async fn init_db_pool(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.url)
        .await?;

    info!(
        max_connections = config.max_connections,
        "Database pool initialized"
    );

    Ok(pool)
}

/// Applies pending migrations.
pub async fn run_migrations(pool: &PgPool) -> Result<(), MigrateError> {
    MIGRATOR.run(pool).await?;
    info!("Database migrations applied");
    Ok(())
}

// Re-export PgPool for convenience
pub use sqlx::PgPool;
