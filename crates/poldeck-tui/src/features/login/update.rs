//! Login reducer.
//!
//! Handles form editing, the submit guard, and the login result.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use poldeck_core::api::{Credentials, TokenResponse};

use super::state::{LoginPhase, LoginState, INVALID_CREDENTIALS};

/// What the top-level reducer should do after a login result.
#[derive(Debug)]
pub enum LoginOutcome {
    /// Persist the token and navigate to the guarded root.
    Authenticated { access_token: String },
    /// Form is editable again with the fixed error shown.
    Failed,
    /// Result arrived while not submitting; nothing to do.
    Ignored,
}

/// Handles a key press on the login form.
///
/// Returns the credentials when a submit should fire. While a submit is
/// in flight the form ignores input.
pub fn handle_key(login: &mut LoginState, key: KeyEvent) -> Option<Credentials> {
    if login.is_submitting() {
        return None;
    }

    match key.code {
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
            login.toggle_focus();
            None
        }
        KeyCode::Backspace => {
            login.backspace();
            None
        }
        KeyCode::Enter => submit(login),
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            login.insert_char(c);
            None
        }
        _ => None,
    }
}

/// Submit guard: with an empty field no request is made and the form
/// stays idle.
fn submit(login: &mut LoginState) -> Option<Credentials> {
    if !login.can_submit() {
        return None;
    }

    login.error = None;
    login.phase = LoginPhase::Submitting;
    Some(Credentials {
        username: login.username.clone(),
        password: login.password.clone(),
    })
}

/// Handles the login result from the auth client.
pub fn handle_login_result(
    login: &mut LoginState,
    result: Result<TokenResponse, String>,
) -> LoginOutcome {
    if !login.is_submitting() {
        return LoginOutcome::Ignored;
    }

    login.phase = LoginPhase::Idle;
    match result {
        Ok(tokens) => {
            login.error = None;
            login.password.clear();
            LoginOutcome::Authenticated {
                access_token: tokens.access_token,
            }
        }
        Err(msg) => {
            tracing::debug!("login failed: {msg}");
            login.error = Some(INVALID_CREDENTIALS);
            LoginOutcome::Failed
        }
    }
}
