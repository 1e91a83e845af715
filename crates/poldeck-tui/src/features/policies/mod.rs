//! Policy screens: the guarded list and detail views.

mod render;
mod state;
mod update;

pub use render::{render_detail, render_list};
pub use state::{PolicyDetailState, PolicyListState};
pub use update::{apply_policies_loaded, apply_policy_loaded, handle_list_key, ListAction};
