//! `poldeck policies list` / `poldeck policies show`.

use anyhow::Result;
use poldeck_core::api::PolicyClient;
use poldeck_core::config::Config;
use poldeck_core::session::SessionStore;

fn client(config: &Config) -> Result<PolicyClient> {
    let session = SessionStore::new().load()?;
    Ok(PolicyClient::new(
        config.api_url.clone(),
        session.token().map(str::to_string),
    ))
}

/// Prints all policies in server order.
pub async fn list(config: &Config) -> Result<()> {
    let policies = client(config)?.list().await?;

    if policies.is_empty() {
        println!("No policies found.");
        return Ok(());
    }

    for policy in policies {
        println!("{:<6} {:<16} {}", policy.id, policy.policy_number, policy.status);
    }
    Ok(())
}

/// Prints a single policy.
pub async fn show(config: &Config, id: i64) -> Result<()> {
    let policy = client(config)?.get(id).await?;

    println!("Id:     {}", policy.id);
    println!("Number: {}", policy.policy_number);
    println!("Status: {}", policy.status);
    Ok(())
}
