//! HTTP clients for the policy backend.
//!
//! Two thin clients over the REST surface: [`auth::AuthClient`] for the
//! token-issuing login endpoint and [`policies::PolicyClient`] for the
//! policy read API. No retries, no caching; every failure surfaces as an
//! error to the caller.

pub mod auth;
pub mod policies;

pub use auth::{AuthClient, Credentials, TokenResponse};
pub use policies::{Policy, PolicyClient};

/// Turns a non-success response into an error carrying status and body.
///
/// The body is included for log/debug purposes only; callers branch on
/// success vs. failure, not on the detail.
pub(crate) async fn fail_status(response: reqwest::Response) -> anyhow::Error {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    anyhow::anyhow!("Request failed (HTTP {status}): {body}")
}
