//! Login screen: two text fields backed by the auth client.

mod render;
mod state;
mod update;

pub use render::render_login;
pub use state::{LoginField, LoginPhase, LoginState, INVALID_CREDENTIALS};
pub use update::{handle_key, handle_login_result, LoginOutcome};
