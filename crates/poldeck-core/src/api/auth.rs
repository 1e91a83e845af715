//! Authentication client.
//!
//! Issues one request: credentials in, token pair out.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Login request body. Built from form state at submit time, never persisted.
#[derive(Debug, Clone, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Token pair issued by the auth endpoint.
///
/// Only `access_token` is persisted. `refresh_token` and `expires_in` are
/// carried for forward compatibility; nothing reads them and no refresh
/// behavior exists.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    pub expires_in: u64,
}

/// Client for the `/api/auth` endpoints.
#[derive(Debug, Clone)]
pub struct AuthClient {
    http: reqwest::Client,
    base_url: String,
}

impl AuthClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Exchanges credentials for a token pair.
    ///
    /// Non-empty fields are the caller's responsibility. Any non-success
    /// status or transport error returns `Err`; there is no retry.
    pub async fn login(&self, credentials: &Credentials) -> Result<TokenResponse> {
        tracing::debug!(username = %credentials.username, "login request");

        let response = self
            .http
            .post(format!("{}/api/auth/login", self.base_url))
            .json(credentials)
            .send()
            .await
            .context("Failed to send login request")?;

        if !response.status().is_success() {
            let err = super::fail_status(response).await;
            tracing::debug!("login failed: {err:#}");
            return Err(err.context("Login rejected"));
        }

        let tokens: TokenResponse = response
            .json()
            .await
            .context("Failed to parse token response")?;

        tracing::debug!("login succeeded");
        Ok(tokens)
    }
}
