//! Feature slices: one module per screen, split into state/update/render.

pub mod login;
pub mod policies;
