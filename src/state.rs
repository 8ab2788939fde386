use std::sync::Arc;

use anyhow::Context;
use q2bank_config::{CorsConfig, DatabaseConfig, JwtConfig, PasswordPolicy};
use q2bank_db::{init_db_pool, run_migrations};
use tracing::warn;

use crate::modules::accounts::repository::{AccountRepository, PgAccountRepository};

#[derive(Clone, Debug)]
pub struct AppState {
    pub accounts: Arc<dyn AccountRepository>,
    pub jwt_config: JwtConfig,
    pub password_policy: PasswordPolicy,
    pub cors_config: CorsConfig,
}

impl AppState {
    /// State with the given repository and configuration loaded from the environment.
    pub fn from_env(accounts: Arc<dyn AccountRepository>) -> Self {
        Self {
            accounts,
            jwt_config: JwtConfig::from_env(),
            password_policy: PasswordPolicy::from_env(),
            cors_config: CorsConfig::from_env(),
        }
    }
}

pub async fn init_app_state() -> anyhow::Result<AppState> {
    let db_config = DatabaseConfig::from_env().context("DATABASE_URL must be set")?;
    let db = init_db_pool(&db_config)
        .await
        .context("Failed to connect to database")?;

    if db_config.run_migrations {
        run_migrations(&db)
            .await
            .context("Failed to run database migrations")?;
    }

    let state = AppState::from_env(Arc::new(PgAccountRepository::new(db)));

    if state.jwt_config.secret.is_empty() {
        warn!("JWT_SECRET is not set; login requests will fail until it is configured");
    }

    Ok(state)
}
