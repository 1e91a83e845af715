//! `poldeck login` / `poldeck logout`.

use anyhow::Result;
use poldeck_core::api::{AuthClient, Credentials};
use poldeck_core::config::Config;
use poldeck_core::session::SessionStore;

/// Logs in and persists the access token.
pub async fn run(config: &Config, username: String, password: String) -> Result<()> {
    // Same client-side guard as the login screen.
    if username.is_empty() || password.is_empty() {
        anyhow::bail!("Username and password must not be empty");
    }

    let client = AuthClient::new(config.api_url.clone());
    let tokens = client
        .login(&Credentials { username, password })
        .await?;

    let store = SessionStore::new();
    let mut session = store.load()?;
    session.set_token(tokens.access_token);
    store.save(&session)?;

    println!("Logged in.");
    Ok(())
}

/// Removes the stored session.
pub fn logout() -> Result<()> {
    SessionStore::new().clear()?;
    println!("Logged out.");
    Ok(())
}
