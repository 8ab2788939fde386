#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use q2bank::modules::accounts::repository::InMemoryAccountRepository;
use q2bank::router::init_router;
use q2bank::state::AppState;
use q2bank_config::{CorsConfig, JwtConfig, PasswordPolicy};
use serde_json::{Value, json};
use tower::ServiceExt;
use uuid::Uuid;

pub const TEST_JWT_SECRET: &str = "test-secret-key-at-least-32-characters-long";
pub const STRONG_PASSWORD: &str = "Valid123!";

pub fn test_jwt_config() -> JwtConfig {
    JwtConfig {
        secret: TEST_JWT_SECRET.to_string(),
        access_token_expiry: 3600,
    }
}

/// Router backed by an in-memory repository the test can inspect.
pub fn setup_test_app() -> (Router, Arc<InMemoryAccountRepository>) {
    let repo = Arc::new(InMemoryAccountRepository::new());
    let state = AppState {
        accounts: repo.clone(),
        jwt_config: test_jwt_config(),
        password_policy: PasswordPolicy::default(),
        cors_config: CorsConfig::default(),
    };
    (init_router(state), repo)
}

pub fn generate_unique_email() -> String {
    format!("test-{}@example.com", Uuid::new_v4())
}

pub fn generate_unique_cpf_cnpj() -> String {
    Uuid::new_v4().simple().to_string()
}

pub fn account_body(email: &str, cpf_cnpj: &str, user_type: &str) -> Value {
    json!({
        "email": email,
        "password": STRONG_PASSWORD,
        "cpf_cnpj": cpf_cnpj,
        "name": "Test Account",
        "user_type": user_type
    })
}

pub async fn post_json(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body: Value = serde_json::from_slice(&body).unwrap();

    (status, body)
}
