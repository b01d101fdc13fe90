//! Stale-response guard for overlapping fetches.
//!
//! Every fetch takes a ticket before it starts; only the holder of the most
//! recent ticket may write its result into page state. Typing quickly in a
//! search box or paging fast therefore can't let an older, slower response
//! overwrite a newer one, and `cancel` (run from `on_cleanup`) makes every
//! outstanding response a no-op once the page unmounts.

#[cfg(test)]
#[path = "request_test.rs"]
mod request_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Clone, Debug, Default)]
pub struct RequestGuard {
    latest: Arc<AtomicU64>,
}

impl RequestGuard {
    /// Start a new request, superseding all earlier ones.
    pub fn issue(&self) -> u64 {
        self.latest.fetch_add(1, Ordering::SeqCst) + 1
    }

    #[must_use]
    pub fn is_current(&self, ticket: u64) -> bool {
        self.latest.load(Ordering::SeqCst) == ticket
    }

    /// Invalidate every outstanding ticket.
    pub fn cancel(&self) {
        self.latest.fetch_add(1, Ordering::SeqCst);
    }
}
