//! Full-screen TUI for browsing the policy backend.
//!
//! Elm-style split: `state` holds the data, `update` is the pure reducer,
//! `render` is the pure view, and `runtime` owns the terminal and executes
//! effects.

pub mod effects;
pub mod events;
pub mod features;
pub mod render;
pub mod runtime;
pub mod state;
pub mod terminal;
pub mod update;

use anyhow::Result;
use poldeck_core::config::Config;
use poldeck_core::session::SessionStore;
pub use runtime::TuiRuntime;

/// Runs the interactive policy browser.
///
/// Starts at the guarded root; the router redirects to the login screen
/// when no session token is stored.
pub async fn run(config: &Config) -> Result<()> {
    let store = SessionStore::new();
    let session = store.load()?;

    let mut runtime = TuiRuntime::new(config.clone(), session, store)?;
    runtime.run()
}
