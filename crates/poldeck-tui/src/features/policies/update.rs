//! Policy screens reducer.

use crossterm::event::{KeyCode, KeyEvent};
use poldeck_core::api::Policy;

use super::state::{PolicyDetailState, PolicyListState};

/// Navigation request produced by a list key press.
#[derive(Debug, PartialEq, Eq)]
pub enum ListAction {
    None,
    /// Open the detail route for this policy id.
    Open(i64),
}

/// Handles a key press on the policy list.
pub fn handle_list_key(list: &mut PolicyListState, key: KeyEvent) -> ListAction {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => {
            list.select_previous();
            ListAction::None
        }
        KeyCode::Down | KeyCode::Char('j') => {
            list.select_next();
            ListAction::None
        }
        KeyCode::Enter => list
            .selected_policy()
            .map_or(ListAction::None, |p| ListAction::Open(p.id)),
        _ => ListAction::None,
    }
}

/// Applies a finished list fetch.
///
/// Stale sequences are dropped so a response arriving after the view was
/// left never overwrites newer state. A failure keeps the prior (or
/// default empty) snapshot visible.
pub fn apply_policies_loaded(
    list: &mut PolicyListState,
    seq: u64,
    result: Result<Vec<Policy>, String>,
) {
    if list.pending_seq != Some(seq) {
        tracing::debug!(seq, "dropping stale policy list response");
        return;
    }
    list.pending_seq = None;

    match result {
        Ok(policies) => {
            list.policies = policies;
            list.selected = 0;
        }
        Err(msg) => {
            tracing::warn!("policy list fetch failed: {msg}");
        }
    }
}

/// Applies a finished single-policy fetch. Same staleness rule as the list.
pub fn apply_policy_loaded(
    detail: &mut PolicyDetailState,
    seq: u64,
    result: Result<Policy, String>,
) {
    if detail.pending_seq != Some(seq) {
        tracing::debug!(seq, "dropping stale policy response");
        return;
    }
    detail.pending_seq = None;

    match result {
        Ok(policy) => detail.policy = Some(policy),
        Err(msg) => {
            tracing::warn!("policy fetch failed: {msg}");
        }
    }
}
