use std::env;

/// Endpoint answering `{"authorization": bool}`.
pub const DEFAULT_TRANSACTION_AUTH_URL: &str =
    "https://run.mocky.io/v3/d02168c6-d88d-4ff2-aac6-9e9eb3425e31";

#[derive(Clone, Debug)]
pub struct TransactionAuthConfig {
    pub url: String,
}

impl TransactionAuthConfig {
    pub fn from_env() -> Self {
        Self {
            url: env::var("TRANSACTION_AUTH_URL")
                .unwrap_or_else(|_| DEFAULT_TRANSACTION_AUTH_URL.to_string()),
        }
    }
}
