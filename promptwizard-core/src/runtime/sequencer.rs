//! Caller-side helper for ignoring superseded requests.
//!
//! The executor never cancels an abandoned call. A caller that lets users
//! fire a new request before the previous one resolves takes a ticket per
//! request and drops any outcome whose ticket is no longer current.

use std::sync::atomic::{AtomicU64, Ordering};

/// Identifies one issued request
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestTicket(u64);

impl RequestTicket {
    pub fn id(&self) -> u64 {
        self.0
    }
}

/// Hands out monotonically increasing tickets
#[derive(Debug, Default)]
pub struct RequestSequencer {
    latest: AtomicU64,
}

impl RequestSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new request, superseding all earlier tickets
    pub fn begin(&self) -> RequestTicket {
        RequestTicket(self.latest.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Whether `ticket` belongs to the most recent request
    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        self.latest.load(Ordering::SeqCst) == ticket.0
    }

    /// Return `outcome` only if `ticket` is still current
    pub fn deliver<T>(&self, ticket: RequestTicket, outcome: T) -> Option<T> {
        if self.is_current(ticket) {
            Some(outcome)
        } else {
            tracing::debug!("dropping outcome of superseded request {}", ticket.0);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_ticket_supersedes_old() {
        let sequencer = RequestSequencer::new();
        let first = sequencer.begin();
        assert!(sequencer.is_current(first));

        let second = sequencer.begin();
        assert!(second > first);
        assert!(!sequencer.is_current(first));
        assert!(sequencer.is_current(second));

        assert_eq!(sequencer.deliver(first, "stale"), None);
        assert_eq!(sequencer.deliver(second, "fresh"), Some("fresh"));
    }
}
