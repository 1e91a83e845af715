//! Core library for poldeck: configuration, session storage, and the
//! HTTP clients for the policy backend.

pub mod api;
pub mod config;
pub mod logging;
pub mod session;
