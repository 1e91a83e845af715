//! Pure view functions for the TUI.
//!
//! Functions here take `&AppState` by immutable reference and draw to a
//! ratatui Frame; they never mutate state or return effects.

use ratatui::Frame;

use crate::features::{login, policies};
use crate::state::{AppState, Route};

/// Renders the current route to the frame.
pub fn render(app: &AppState, frame: &mut Frame) {
    let area = frame.area();
    match app.route {
        Route::Login => login::render_login(frame, &app.login, area),
        Route::PolicyList => policies::render_list(frame, &app.policies, area),
        Route::PolicyDetail { .. } => policies::render_detail(frame, &app.detail, area),
    }
}
