//! Client for the external transaction authorization endpoint.
//!
//! The endpoint answers `GET` with `{"authorization": bool}`. Every call is a
//! fresh round trip: there is no caching, retry or timeout beyond the HTTP
//! client's defaults.

use anyhow::anyhow;
use q2bank_config::TransactionAuthConfig;
use q2bank_core::AppError;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, error, instrument};

const TRANSACTION_AUTH_ERROR: &str = "error getting transaction authorization";

#[derive(Debug, Deserialize)]
struct TransactionAuth {
    authorization: bool,
}

#[derive(Debug, Clone)]
pub struct TransactionAuthClient {
    client: Client,
    url: String,
}

impl TransactionAuthClient {
    pub fn new(config: &TransactionAuthConfig) -> Self {
        Self {
            client: Client::new(),
            url: config.url.clone(),
        }
    }

    /// Asks the endpoint whether transactions are currently authorized.
    ///
    /// The body is decoded regardless of the response status.
    ///
    /// # Errors
    ///
    /// Returns an internal error when the request fails or the body is not
    /// the expected JSON shape.
    #[instrument(skip(self), fields(url = %self.url))]
    pub async fn get_transaction_auth(&self) -> Result<bool, AppError> {
        let response = self.client.get(&self.url).send().await.map_err(|e| {
            error!(error = %e, "Transaction authorization request failed");
            AppError::internal(anyhow!(TRANSACTION_AUTH_ERROR))
        })?;

        let status = response.status();
        let body: TransactionAuth = response.json().await.map_err(|e| {
            error!(error = %e, status = %status, "Malformed transaction authorization response");
            AppError::internal(anyhow!(TRANSACTION_AUTH_ERROR))
        })?;

        debug!(
            status = %status,
            authorization = body.authorization,
            "Transaction authorization received"
        );

        Ok(body.authorization)
    }
}
