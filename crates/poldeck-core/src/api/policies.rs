//! Policy read client.
//!
//! Two GETs: the full policy list and a single policy by id. The server
//! owns ordering and content; results are passed through unmodified.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// An insurance policy record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Policy {
    pub id: i64,
    pub policy_number: String,
    pub status: String,
}

/// Client for the `/api/policies` endpoints.
///
/// Carries the session's bearer token when one is present; the backend
/// guards these endpoints with JWT auth.
#[derive(Debug, Clone)]
pub struct PolicyClient {
    http: reqwest::Client,
    base_url: String,
    bearer: Option<String>,
}

impl PolicyClient {
    pub fn new(base_url: impl Into<String>, bearer: Option<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            bearer: bearer.filter(|t| !t.is_empty()),
        }
    }

    /// Fetches all policies in server order.
    pub async fn list(&self) -> Result<Vec<Policy>> {
        tracing::debug!("listing policies");

        let mut request = self.http.get(format!("{}/api/policies", self.base_url));
        if let Some(token) = &self.bearer {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .context("Failed to send policy list request")?;

        if !response.status().is_success() {
            return Err(super::fail_status(response).await.context("Policy list rejected"));
        }

        response
            .json()
            .await
            .context("Failed to parse policy list response")
    }

    /// Fetches a single policy by id.
    pub async fn get(&self, id: i64) -> Result<Policy> {
        tracing::debug!(id, "fetching policy");

        let mut request = self
            .http
            .get(format!("{}/api/policies/{id}", self.base_url));
        if let Some(token) = &self.bearer {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .context("Failed to send policy request")?;

        if !response.status().is_success() {
            return Err(super::fail_status(response)
                .await
                .context(format!("Policy {id} fetch rejected")));
        }

        response
            .json()
            .await
            .context("Failed to parse policy response")
    }
}
