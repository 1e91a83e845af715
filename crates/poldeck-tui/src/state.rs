//! Application state composition.
//!
//! ## State Hierarchy
//!
//! ```text
//! AppState
//! ├── route: Route                (current screen, guard applied on entry)
//! ├── session: Session            (token slot read by the guard)
//! ├── login: LoginState           (form fields, submit phase, error)
//! ├── policies: PolicyListState   (fetched rows, selection)
//! ├── detail: PolicyDetailState   (route id, fetched policy)
//! └── fetch_seq: u64              (sequence for discarding stale responses)
//! ```

use poldeck_core::config::Config;
use poldeck_core::session::Session;

use crate::features::login::LoginState;
use crate::features::policies::{PolicyDetailState, PolicyListState};

/// A navigable screen.
///
/// Mirrors the client-side route table: `Login` is public, everything
/// else sits behind the navigation guard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// Public login screen.
    Login,
    /// Guarded root: the policy list.
    PolicyList,
    /// Guarded detail screen. The id is the route's string parameter
    /// coerced to a number; `None` means the parameter was absent or
    /// not a positive integer.
    PolicyDetail { id: Option<i64> },
}

impl Route {
    /// Whether the navigation guard applies to this route.
    pub fn requires_auth(&self) -> bool {
        !matches!(self, Route::Login)
    }

    /// Builds the detail route from a raw route parameter.
    pub fn detail_from_param(param: Option<&str>) -> Route {
        let id = param
            .and_then(|raw| raw.parse::<i64>().ok())
            .filter(|id| *id > 0);
        Route::PolicyDetail { id }
    }
}

/// TUI application state.
pub struct AppState {
    /// Flag indicating the app should quit.
    pub should_quit: bool,
    /// Current screen.
    pub route: Route,
    /// Session token slot. Written once per successful login, read
    /// synchronously by the guard.
    pub session: Session,
    /// Login form state.
    pub login: LoginState,
    /// Policy list state.
    pub policies: PolicyListState,
    /// Policy detail state.
    pub detail: PolicyDetailState,
    /// Client configuration (api_url).
    pub config: Config,
    /// Monotonic fetch sequence. Each issued fetch takes the next value;
    /// responses carrying an older value are discarded.
    pub fetch_seq: u64,
}

impl AppState {
    pub fn new(config: Config, session: Session) -> Self {
        Self {
            should_quit: false,
            route: Route::Login,
            session,
            login: LoginState::default(),
            policies: PolicyListState::default(),
            detail: PolicyDetailState::default(),
            config,
            fetch_seq: 0,
        }
    }

    /// Takes the next fetch sequence number.
    pub fn next_fetch_seq(&mut self) -> u64 {
        self.fetch_seq += 1;
        self.fetch_seq
    }
}
