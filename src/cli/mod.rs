//! Administrative commands run by `q2bank-cli`.

use q2bank_config::{PasswordPolicy, TransactionAuthConfig};
use q2bank_core::AppError;
use q2bank_db::{PgPool, run_migrations};
use q2bank_models::CreateAccountRequest;
use validator::Validate;

use crate::modules::accounts::repository::AccountRepository;
use crate::modules::accounts::service::AccountService;
use crate::utils::transaction_auth::TransactionAuthClient;
use crate::validator::validation_error;

/// Registers an account with the same rules as `POST /api/accounts`.
pub async fn create_account(
    repo: &dyn AccountRepository,
    policy: &PasswordPolicy,
    dto: CreateAccountRequest,
) -> Result<(), AppError> {
    dto.validate()
        .map_err(|errors| validation_error::<CreateAccountRequest>(&errors))?;
    AccountService::create_account(repo, policy, dto).await
}

pub async fn check_transaction_auth(config: &TransactionAuthConfig) -> Result<bool, AppError> {
    TransactionAuthClient::new(config)
        .get_transaction_auth()
        .await
}

pub async fn migrate(db: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    run_migrations(db).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::accounts::repository::InMemoryAccountRepository;
    use q2bank_core::ErrorKind;

    fn request(user_type: &str) -> CreateAccountRequest {
        CreateAccountRequest {
            email: "cli@x.com".to_string(),
            password: "Valid123!".to_string(),
            cpf_cnpj: "123".to_string(),
            name: "Cli".to_string(),
            user_type: user_type.to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_account_from_cli() {
        let repo = InMemoryAccountRepository::new();

        create_account(&repo, &PasswordPolicy::default(), request("store"))
            .await
            .unwrap();

        assert_eq!(repo.len().await, 1);
    }

    #[tokio::test]
    async fn test_create_account_runs_field_validation() {
        let repo = InMemoryAccountRepository::new();

        let err = create_account(&repo, &PasswordPolicy::default(), request("bank"))
            .await
            .unwrap_err();

        assert_eq!(err.kind, ErrorKind::Validation);
        assert_eq!(err.message(), "user_type must be either person or store");
        assert_eq!(repo.insert_calls(), 0);
    }
}
