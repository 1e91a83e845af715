//! Command implementations.

pub mod config;
pub mod login;
pub mod policies;
