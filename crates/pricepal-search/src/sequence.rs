//! Request tickets for last-query-wins ordering.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

/// Position of a request in issue order. Later tickets compare greater.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct RequestTicket(u64);

impl RequestTicket {
    /// The raw sequence number, starting at 1.
    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for RequestTicket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Hands out strictly increasing tickets and knows which one is newest.
#[derive(Debug, Default)]
pub struct RequestSequencer {
    latest: AtomicU64,
}

impl RequestSequencer {
    /// Create a sequencer that has issued nothing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue the next ticket. It becomes the latest.
    pub fn issue(&self) -> RequestTicket {
        RequestTicket(self.latest.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Whether `ticket` is the most recently issued one.
    pub fn is_latest(&self, ticket: RequestTicket) -> bool {
        self.latest.load(Ordering::SeqCst) == ticket.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_tickets_increase() {
        let seq = RequestSequencer::new();
        let first = seq.issue();
        let second = seq.issue();
        assert!(second > first);
        assert_eq!(first.value(), 1);
        assert_eq!(second.value(), 2);
    }

    #[test]
    fn test_only_newest_is_latest() {
        let seq = RequestSequencer::new();
        let first = seq.issue();
        assert!(seq.is_latest(first));

        let second = seq.issue();
        assert!(!seq.is_latest(first));
        assert!(seq.is_latest(second));
    }

    #[test]
    fn test_unique_across_threads() {
        let seq = Arc::new(RequestSequencer::new());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let seq = Arc::clone(&seq);
                std::thread::spawn(move || (0..100).map(|_| seq.issue()).collect::<Vec<_>>())
            })
            .collect();

        let mut all: Vec<RequestTicket> = handles
            .into_iter()
            .flat_map(|h| h.join().unwrap())
            .collect();
        all.sort();
        all.dedup();
        assert_eq!(all.len(), 800);
        assert!(seq.is_latest(all[799]));
    }

    #[test]
    fn test_display() {
        let seq = RequestSequencer::new();
        assert_eq!(seq.issue().to_string(), "#1");
    }
}
