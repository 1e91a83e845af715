//! UI effect types.
//!
//! Effects are commands returned by the reducer that the runtime executes.
//! They represent I/O only; the reducer never performs network or file
//! access itself.

use poldeck_core::api::Credentials;
use poldeck_core::session::Session;

/// Effects returned by the reducer for the runtime to execute.
#[derive(Debug)]
pub enum UiEffect {
    /// Quit the application.
    Quit,

    /// Spawn the login request with the submitted credentials.
    SubmitLogin { credentials: Credentials },

    /// Write the session to the on-disk store.
    PersistSession { session: Session },

    /// Spawn a policy list fetch.
    FetchPolicies { seq: u64 },

    /// Spawn a single-policy fetch.
    FetchPolicy { seq: u64, id: i64 },
}
