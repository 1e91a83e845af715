//! UI event types.
//!
//! Events are inputs to the reducer: terminal input, the frame tick, and
//! async results arriving through the runtime inbox. Async results carry
//! `String` errors; the views only branch on success vs. failure.

use poldeck_core::api::{Policy, TokenResponse};

/// Events processed by the reducer.
#[derive(Debug)]
pub enum UiEvent {
    /// Periodic tick (drives the submit spinner).
    Tick,
    /// Raw terminal input.
    Terminal(crossterm::event::Event),
    /// Login request finished.
    LoginCompleted { result: Result<TokenResponse, String> },
    /// Policy list fetch finished.
    PoliciesLoaded {
        seq: u64,
        result: Result<Vec<Policy>, String>,
    },
    /// Single policy fetch finished.
    PolicyLoaded {
        seq: u64,
        result: Result<Policy, String>,
    },
}
