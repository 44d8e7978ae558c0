//! Search state owner: explicit service replacing the original's ambient
//! provider state.
//!
//! The service owns the query, result list, and visibility flags, and
//! notifies observers over the event bus. The UI visibility state machine
//! is deliberately simple:
//!
//! ```text
//! IDLE → (query entered) → SEARCHING → RESULTS_SHOWN → (clear/selection) → IDLE
//! ```
//!
//! There is no terminal failure state — fetch errors transition straight to
//! `ResultsShown` with a partial (possibly catalog-only) list.
//!
//! Concurrent searches are serialized by a monotonically increasing request
//! token: a finished search applies its results to visible state only when
//! its token is still the newest, so a stale slow response can never
//! overwrite a fresher one. Fetches themselves are not cancelled, not
//! retried, and carry no timeout of their own.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};
use std::time::Duration;

use serde::Serialize;
use tracing::debug;

use reviewkita_core::defaults::{HIGHLIGHT_DURATION_MS, NAVIGATION_RETRY_DELAY_MS};
use reviewkita_core::{EventBus, Navigator, ReviewerStore, SearchEvent, SearchResultItem};

use crate::indexer::SearchIndexer;

/// UI visibility phase of the search panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchPhase {
    Idle,
    Searching,
    ResultsShown,
}

/// Point-in-time copy of the service's state.
#[derive(Debug, Clone)]
pub struct SearchSnapshot {
    /// Query as last entered, untrimmed.
    pub query: String,
    /// Results currently applied to the panel.
    pub results: Vec<SearchResultItem>,
    pub phase: SearchPhase,
    /// Whether the result panel is visible. Set at the start of every
    /// search call, cleared by [`SearchService::clear`] or a selection.
    pub show_results: bool,
}

impl SearchSnapshot {
    /// True while a reviewer fetch is in flight.
    pub fn searching(&self) -> bool {
        self.phase == SearchPhase::Searching
    }
}

impl Default for SearchSnapshot {
    fn default() -> Self {
        Self {
            query: String::new(),
            results: Vec::new(),
            phase: SearchPhase::Idle,
            show_results: false,
        }
    }
}

/// Explicit owner of search state, with observer notifications.
pub struct SearchService {
    indexer: SearchIndexer,
    navigator: Arc<dyn Navigator>,
    bus: EventBus,
    state: RwLock<SearchSnapshot>,
    latest_token: AtomicU64,
}

impl SearchService {
    /// Create a service over the retrieval and navigation collaborators.
    pub fn new(store: Arc<dyn ReviewerStore>, navigator: Arc<dyn Navigator>) -> Self {
        Self::with_bus(store, navigator, EventBus::default())
    }

    /// Create a service sharing an existing event bus (so the API client's
    /// session events and search events reach the same subscribers).
    pub fn with_bus(
        store: Arc<dyn ReviewerStore>,
        navigator: Arc<dyn Navigator>,
        bus: EventBus,
    ) -> Self {
        Self {
            indexer: SearchIndexer::new(store),
            navigator,
            bus,
            state: RwLock::new(SearchSnapshot::default()),
            latest_token: AtomicU64::new(0),
        }
    }

    /// Subscribe to search events.
    pub fn subscribe(&self) -> tokio::sync::broadcast::Receiver<SearchEvent> {
        self.bus.subscribe()
    }

    /// Handle on the service's event bus, for wiring other emitters.
    pub fn bus(&self) -> EventBus {
        self.bus.clone()
    }

    /// Current state snapshot.
    pub fn state(&self) -> SearchSnapshot {
        self.state.read().unwrap().clone()
    }

    /// Run a search and apply its results to visible state.
    ///
    /// Always resolves with the computed items. When a newer search was
    /// issued while this one was suspended on the reviewer fetch, the items
    /// are still returned but visible state is left to the newer call.
    pub async fn search(&self, query: &str) -> Vec<SearchResultItem> {
        let token = self.latest_token.fetch_add(1, Ordering::SeqCst) + 1;
        {
            let mut state = self.state.write().unwrap();
            state.query = query.to_string();
            state.phase = SearchPhase::Searching;
            state.show_results = true;
        }
        self.bus.emit(SearchEvent::SearchStarted {
            query: query.to_string(),
        });

        let outcome = self.indexer.search(query).await;

        if self.latest_token.load(Ordering::SeqCst) != token {
            debug!(request_token = token, "discarding stale search response");
            return outcome.items;
        }

        {
            let mut state = self.state.write().unwrap();
            state.results = outcome.items.clone();
            state.phase = SearchPhase::ResultsShown;
        }
        self.bus.emit(SearchEvent::SearchCompleted {
            query: query.to_string(),
            result_count: outcome.items.len(),
            degraded: outcome.degraded,
        });
        outcome.items
    }

    /// Reset to idle and hide the result panel.
    pub fn clear(&self) {
        {
            let mut state = self.state.write().unwrap();
            state.query.clear();
            state.results.clear();
            state.phase = SearchPhase::Idle;
            state.show_results = false;
        }
        self.bus.emit(SearchEvent::ResultsCleared);
    }

    /// Navigate to a selected result and drive the highlight behavior.
    ///
    /// Hides the result panel. Without a fragment the path is a plain
    /// destination route. With a fragment on the current route, the target
    /// is located and highlighted immediately; on another route, navigation
    /// happens first and a single locate-and-highlight retry is scheduled
    /// after a short render delay — best-effort, no polling.
    ///
    /// Must run inside a Tokio runtime (the highlight timers are spawned).
    pub fn select_result(&self, path: &str) {
        {
            let mut state = self.state.write().unwrap();
            state.show_results = false;
            state.phase = SearchPhase::Idle;
        }
        self.bus.emit(SearchEvent::ResultSelected {
            path: path.to_string(),
        });

        let (route, fragment) = split_fragment(path);
        let Some(fragment) = fragment else {
            self.navigator.navigate(route);
            self.bus.emit(SearchEvent::NavigationRequested {
                route: route.to_string(),
                fragment: None,
            });
            return;
        };

        if self.navigator.current_route() == route {
            highlight_once(&self.navigator, &self.bus, fragment);
            return;
        }

        self.navigator.navigate(route);
        self.bus.emit(SearchEvent::NavigationRequested {
            route: route.to_string(),
            fragment: Some(fragment.to_string()),
        });

        // One scheduled retry after the destination page had time to
        // render. Not guaranteed: if the page is still not ready, the
        // highlight silently no-ops.
        let navigator = Arc::clone(&self.navigator);
        let bus = self.bus.clone();
        let fragment = fragment.to_string();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(NAVIGATION_RETRY_DELAY_MS)).await;
            highlight_once(&navigator, &bus, &fragment);
        });
    }
}

/// Split a navigation path into its route and optional fragment.
fn split_fragment(path: &str) -> (&str, Option<&str>) {
    match path.split_once('#') {
        Some((route, fragment)) if !fragment.is_empty() => (route, Some(fragment)),
        Some((route, _)) => (route, None),
        None => (path, None),
    }
}

/// Attempt one locate-and-highlight. On success the highlight auto-clears
/// after the fixed display window; a missing target is a silent no-op.
fn highlight_once(navigator: &Arc<dyn Navigator>, bus: &EventBus, fragment: &str) {
    if !navigator.highlight(fragment) {
        debug!(fragment, "no highlight target found");
        return;
    }
    bus.emit(SearchEvent::HighlightApplied {
        fragment: fragment.to_string(),
    });

    let navigator = Arc::clone(navigator);
    let bus = bus.clone();
    let fragment = fragment.to_string();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(HIGHLIGHT_DURATION_MS)).await;
        navigator.clear_highlight(&fragment);
        bus.emit(SearchEvent::HighlightCleared { fragment });
    });
}
