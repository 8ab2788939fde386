use axum::Json;
use axum::extract::State;
use q2bank_core::AppError;
use q2bank_models::{CreateAccountRequest, LoginRequest, LoginResponse, MessageResponse};
use tracing::instrument;

use super::service::AccountService;
use crate::state::AppState;
use crate::validator::ValidatedJson;

/// Register a new account
#[utoipa::path(
    post,
    path = "/api/accounts",
    request_body = CreateAccountRequest,
    responses(
        (status = 200, description = "Account created", body = MessageResponse),
        (status = 400, description = "Missing or invalid field, or weak password", body = MessageResponse),
        (status = 409, description = "Duplicate email/cpf_cnpj or disallowed user type", body = MessageResponse),
        (status = 500, description = "Internal server error", body = MessageResponse)
    ),
    tag = "Accounts"
)]
#[instrument(skip_all)]
pub async fn create_account(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CreateAccountRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    AccountService::create_account(state.accounts.as_ref(), &state.password_policy, dto).await?;
    Ok(Json(MessageResponse::new("created")))
}

/// Login and receive an identity token
#[utoipa::path(
    post,
    path = "/api/accounts/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = LoginResponse),
        (status = 400, description = "Missing field or wrong password", body = MessageResponse),
        (status = 500, description = "Lookup failure (including unknown email) or signing error", body = MessageResponse)
    ),
    tag = "Accounts"
)]
#[instrument(skip_all)]
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let token = AccountService::login(state.accounts.as_ref(), &state.jwt_config, dto).await?;
    Ok(Json(LoginResponse {
        message: "logged in".to_string(),
        token,
    }))
}
