//! Policy list and detail state.

use poldeck_core::api::Policy;

/// Policy list state.
///
/// Holds an in-memory snapshot of the server's list, replaced wholesale
/// on each activation. A fetch failure leaves the prior snapshot alone.
#[derive(Debug, Default)]
pub struct PolicyListState {
    pub policies: Vec<Policy>,
    pub selected: usize,
    /// Fetch sequence this view is waiting on; responses with any other
    /// value are stale and dropped.
    pub pending_seq: Option<u64>,
}

impl PolicyListState {
    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.policies.len() {
            self.selected += 1;
        }
    }

    pub fn selected_policy(&self) -> Option<&Policy> {
        self.policies.get(self.selected)
    }
}

/// Policy detail state.
#[derive(Debug, Default)]
pub struct PolicyDetailState {
    /// Id from the route parameter; `None` renders nothing and fetches
    /// nothing.
    pub id: Option<i64>,
    /// The fetched policy, absent until the call resolves.
    pub policy: Option<Policy>,
    /// Fetch sequence this view is waiting on.
    pub pending_seq: Option<u64>,
}
