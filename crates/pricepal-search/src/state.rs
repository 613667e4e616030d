//! Request state snapshots handed to presentation.

use serde::Serialize;

use crate::sequence::RequestTicket;

/// Lifecycle of the request behind a view.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum RequestState {
    /// Nothing asked yet, or the query was cleared.
    #[default]
    Idle,
    /// Waiting on the product source.
    Pending,
    /// Items are current for the query.
    Succeeded,
    /// The lookup failed; no items.
    Failed { reason: String },
}

impl RequestState {
    /// Short lowercase label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Pending => "pending",
            Self::Succeeded => "succeeded",
            Self::Failed { .. } => "failed",
        }
    }

    /// The failure reason, when failed.
    pub fn failure_reason(&self) -> Option<&str> {
        match self {
            Self::Failed { reason } => Some(reason),
            _ => None,
        }
    }
}

/// What presentation renders for one request stream: the query, its state
/// and the items that belong to it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RequestView<T> {
    pub query: String,
    pub state: RequestState,
    pub items: Vec<T>,
    /// Ticket of the request this view tracks.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ticket: Option<RequestTicket>,
}

impl<T> Default for RequestView<T> {
    fn default() -> Self {
        Self {
            query: String::new(),
            state: RequestState::Idle,
            items: Vec::new(),
            ticket: None,
        }
    }
}

impl<T> RequestView<T> {
    /// Start tracking `ticket`. Ignored unless it is newer than the tracked one.
    pub fn begin(&mut self, ticket: RequestTicket, query: &str) -> bool {
        if !self.accepts(ticket) {
            return false;
        }
        self.ticket = Some(ticket);
        self.query = query.to_string();
        self.state = RequestState::Pending;
        self.items.clear();
        true
    }

    /// Apply an outcome. Ignored unless `ticket` is the tracked one.
    pub fn finish(&mut self, ticket: RequestTicket, outcome: Result<Vec<T>, String>) -> bool {
        if self.ticket != Some(ticket) {
            return false;
        }
        match outcome {
            Ok(items) => {
                self.items = items;
                self.state = RequestState::Succeeded;
            }
            Err(reason) => {
                self.items.clear();
                self.state = RequestState::Failed { reason };
            }
        }
        true
    }

    /// Return to idle under `ticket`, superseding anything in flight.
    pub fn reset(&mut self, ticket: RequestTicket) -> bool {
        if !self.accepts(ticket) {
            return false;
        }
        self.ticket = Some(ticket);
        self.query.clear();
        self.state = RequestState::Idle;
        self.items.clear();
        true
    }

    /// Whether a request is in flight.
    pub fn is_loading(&self) -> bool {
        self.state == RequestState::Pending
    }

    /// Whether the view settled successfully with nothing to show.
    pub fn is_empty_result(&self) -> bool {
        self.state == RequestState::Succeeded && self.items.is_empty()
    }

    fn accepts(&self, ticket: RequestTicket) -> bool {
        self.ticket.map_or(true, |current| ticket > current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sequence::RequestSequencer;

    #[test]
    fn test_default_is_idle() {
        let view: RequestView<u32> = RequestView::default();
        assert_eq!(view.state, RequestState::Idle);
        assert!(view.items.is_empty());
        assert!(!view.is_loading());
    }

    #[test]
    fn test_begin_then_finish() {
        let seq = RequestSequencer::new();
        let mut view = RequestView::default();
        let ticket = seq.issue();

        assert!(view.begin(ticket, "iphone"));
        assert!(view.is_loading());
        assert!(view.finish(ticket, Ok(vec![1, 2, 3])));
        assert_eq!(view.state, RequestState::Succeeded);
        assert_eq!(view.items, vec![1, 2, 3]);
        assert_eq!(view.query, "iphone");
    }

    #[test]
    fn test_stale_finish_ignored() {
        let seq = RequestSequencer::new();
        let mut view = RequestView::default();
        let old = seq.issue();
        let new = seq.issue();

        view.begin(old, "ip");
        view.begin(new, "iphone");
        assert!(!view.finish(old, Ok(vec![9])));
        assert!(view.is_loading());

        assert!(view.finish(new, Ok(vec![1])));
        assert_eq!(view.items, vec![1]);
    }

    #[test]
    fn test_older_begin_rejected() {
        let seq = RequestSequencer::new();
        let mut view: RequestView<u32> = RequestView::default();
        let old = seq.issue();
        let new = seq.issue();

        assert!(view.begin(new, "b"));
        assert!(!view.begin(old, "a"));
        assert_eq!(view.query, "b");
    }

    #[test]
    fn test_failure_clears_items() {
        let seq = RequestSequencer::new();
        let mut view: RequestView<u32> = RequestView::default();
        let ticket = seq.issue();
        view.begin(ticket, "x");
        view.finish(ticket, Err("HTTP 500: boom".to_string()));

        assert_eq!(view.state.failure_reason(), Some("HTTP 500: boom"));
        assert!(view.items.is_empty());
        assert_eq!(view.state.label(), "failed");
    }

    #[test]
    fn test_reset_supersedes_in_flight() {
        let seq = RequestSequencer::new();
        let mut view = RequestView::default();
        let pending = seq.issue();
        view.begin(pending, "lap");

        assert!(view.reset(seq.issue()));
        assert_eq!(view.state, RequestState::Idle);
        assert!(view.query.is_empty());
        assert!(!view.finish(pending, Ok(vec![1u32])));
    }

    #[test]
    fn test_empty_result() {
        let seq = RequestSequencer::new();
        let mut view: RequestView<u32> = RequestView::default();
        let ticket = seq.issue();
        view.begin(ticket, "nothing");
        view.finish(ticket, Ok(Vec::new()));
        assert!(view.is_empty_result());
    }

    #[test]
    fn test_state_serializes_tagged() {
        let json = serde_json::to_value(RequestState::Failed {
            reason: "timeout".to_string(),
        })
        .unwrap();
        assert_eq!(json, serde_json::json!({"status": "failed", "reason": "timeout"}));
    }
}
