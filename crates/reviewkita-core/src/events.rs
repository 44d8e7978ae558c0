//! Search event types and the event bus observers subscribe to.
//!
//! The original client exposed search state through an ambient provider
//! reachable from anywhere in the view tree. Here the state owner is
//! explicit and notifies observers over a single broadcast channel; view
//! layers, loggers, and tests subscribe independently. Slow receivers that
//! fall behind receive a `Lagged` error and miss events — freshness matters
//! more than completeness for UI notifications.

use serde::Serialize;
use tokio::sync::broadcast;

/// Notification emitted by the search service and the API client.
///
/// Serialized as JSON with a `type` tag field, e.g.
/// `{"type":"SearchStarted","query":"mitosis"}`.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type")]
pub enum SearchEvent {
    /// A search call began; the result panel became visible.
    SearchStarted { query: String },
    /// A search call finished and its results were applied.
    SearchCompleted {
        query: String,
        result_count: usize,
        /// True when the reviewer fetch failed and reviewer-derived
        /// categories were omitted.
        degraded: bool,
    },
    /// Search state was reset; the result panel hid.
    ResultsCleared,
    /// The user picked a result; the result panel hid.
    ResultSelected { path: String },
    /// The routing collaborator was asked to change screens.
    NavigationRequested {
        route: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        fragment: Option<String>,
    },
    /// A highlight target was located and marked.
    HighlightApplied { fragment: String },
    /// A previously applied highlight was removed.
    HighlightCleared { fragment: String },
    /// HTTP 401 observed: local credentials were cleared.
    SessionExpired { redirect_to: String },
}

impl SearchEvent {
    /// Event type name, used for filtering and assertions.
    pub fn event_type(&self) -> &'static str {
        match self {
            SearchEvent::SearchStarted { .. } => "SearchStarted",
            SearchEvent::SearchCompleted { .. } => "SearchCompleted",
            SearchEvent::ResultsCleared => "ResultsCleared",
            SearchEvent::ResultSelected { .. } => "ResultSelected",
            SearchEvent::NavigationRequested { .. } => "NavigationRequested",
            SearchEvent::HighlightApplied { .. } => "HighlightApplied",
            SearchEvent::HighlightCleared { .. } => "HighlightCleared",
            SearchEvent::SessionExpired { .. } => "SessionExpired",
        }
    }
}

/// Broadcast-based event bus distributing search events to subscribers.
#[derive(Clone)]
pub struct EventBus {
    tx: broadcast::Sender<SearchEvent>,
}

impl EventBus {
    /// Create a new event bus with the given buffer capacity.
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity);
        Self { tx }
    }

    /// Emit an event to all subscribers.
    ///
    /// If there are no active subscribers, the event is silently dropped.
    pub fn emit(&self, event: SearchEvent) {
        tracing::debug!(
            event_type = event.event_type(),
            subscriber_count = self.tx.receiver_count(),
            "event bus emit"
        );
        let _ = self.tx.send(event);
    }

    /// Subscribe to events. Each subscriber gets its own independent stream.
    pub fn subscribe(&self) -> broadcast::Receiver<SearchEvent> {
        self.tx.subscribe()
    }

    /// Returns the number of active subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(crate::defaults::EVENT_BUS_CAPACITY)
    }
}
