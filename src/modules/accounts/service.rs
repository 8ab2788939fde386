use anyhow::{Context, anyhow};
use q2bank_auth::create_access_token;
use q2bank_config::{JwtConfig, PasswordPolicy};
use q2bank_core::{AppError, ErrorKind, hash_password, validate_password, verify_password};
use q2bank_models::{
    AccountCredentials, CreateAccountRequest, LoginRequest, NewAccount, UserType,
};
use tracing::{error, info, instrument, warn};

use super::repository::AccountRepository;

pub struct AccountService;

impl AccountService {
    /// Fails with a conflict when an account already uses `email` or `cpf_cnpj`.
    ///
    /// The check and the later insert are separate queries, so two concurrent
    /// registrations for the same identity can both pass.
    #[instrument(skip_all)]
    pub async fn validate_user_query(
        repo: &dyn AccountRepository,
        email: &str,
        cpf_cnpj: &str,
    ) -> Result<(), AppError> {
        let existing = repo
            .find_conflicting(email, cpf_cnpj)
            .await
            .context("Failed to check for existing user")
            .map_err(|e| {
                error!(error = %format!("{e:#}"), "Error checking if user exists");
                AppError::internal(e)
            })?;

        if existing.is_some() {
            return Err(AppError::conflict(anyhow!(
                "user with this email or cpf_cnpj already exists"
            )));
        }

        Ok(())
    }

    #[instrument(skip_all, fields(user_type = %account.user_type))]
    pub async fn insert_user_query(
        repo: &dyn AccountRepository,
        account: &NewAccount,
    ) -> Result<(), AppError> {
        if account.user_type == UserType::Bank {
            return Err(AppError::conflict(anyhow!("user type bank is not allowed")));
        }

        repo.insert(account)
            .await
            .context("Failed to insert user")
            .map_err(|e| {
                error!(error = %format!("{e:#}"), "Error inserting user");
                AppError::internal(e)
            })
    }

    #[instrument(skip_all)]
    pub async fn find_user_query(
        repo: &dyn AccountRepository,
        email: &str,
    ) -> Result<AccountCredentials, AppError> {
        repo.find_by_email(email)
            .await
            .context("Failed to fetch user by email")
            .map_err(|e| {
                error!(error = %format!("{e:#}"), "Error looking up user");
                AppError::internal(e)
            })?
            .ok_or_else(|| AppError::not_found(anyhow!("user not found")))
    }

    #[instrument(skip_all, fields(user_type = %dto.user_type))]
    pub async fn create_account(
        repo: &dyn AccountRepository,
        policy: &PasswordPolicy,
        dto: CreateAccountRequest,
    ) -> Result<(), AppError> {
        let user_type = dto.user_type().map_err(|e| AppError::validation(anyhow!(e)))?;

        validate_password(&dto.password, policy)
            .map_err(|reason| AppError::validation(anyhow!(reason)))?;

        let password_hash = hash_password(&dto.password)
            .inspect_err(|e| error!(error = %e, "Error hashing password"))?;

        Self::validate_user_query(repo, &dto.email, &dto.cpf_cnpj).await?;

        let account = NewAccount {
            email: dto.email,
            password_hash,
            cpf_cnpj: dto.cpf_cnpj,
            name: dto.name,
            user_type,
        };
        Self::insert_user_query(repo, &account).await?;

        info!("Account created");
        Ok(())
    }

    /// Returns a signed token for valid credentials.
    ///
    /// An unknown email is reported as an internal error, the same as a
    /// storage failure.
    #[instrument(skip_all)]
    pub async fn login(
        repo: &dyn AccountRepository,
        jwt_config: &JwtConfig,
        dto: LoginRequest,
    ) -> Result<String, AppError> {
        let credentials = Self::find_user_query(repo, &dto.email)
            .await
            .map_err(|e| match e.kind {
                ErrorKind::NotFound => {
                    warn!("Login attempted for unknown email");
                    AppError::internal(e.error)
                }
                _ => e,
            })?;

        if !verify_password(&dto.password, &credentials.password) {
            return Err(AppError::unauthorized(anyhow!("wrong password")));
        }

        let token = create_access_token(credentials.id, &credentials.user_type, jwt_config)
            .inspect_err(|e| error!(error = %e, "Error creating JWT"))?;

        info!(user_id = credentials.id, "Account logged in");
        Ok(token)
    }
}
