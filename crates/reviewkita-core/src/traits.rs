//! Collaborator traits for the ReviewKita client core.
//!
//! These traits define the interfaces the search core consumes, enabling
//! pluggable backends and testability. The core never constructs a concrete
//! store or navigator itself.

use async_trait::async_trait;

use crate::error::Result;
use crate::models::ReviewerDocument;

/// Document-retrieval collaborator: the remote reviewer list endpoint.
#[async_trait]
pub trait ReviewerStore: Send + Sync {
    /// Fetch up to `limit` reviewer documents, in backend retrieval order.
    ///
    /// Implementations may return more than `limit` items (older backends
    /// ignore the parameter); callers truncate defensively.
    async fn list_reviewers(&self, limit: usize) -> Result<Vec<ReviewerDocument>>;
}

/// Routing/view collaborator consuming navigation targets.
///
/// Methods are synchronous: routing and highlighting are event-loop work in
/// the embedding UI, with no suspension points.
pub trait Navigator: Send + Sync {
    /// The route currently displayed (no fragment).
    fn current_route(&self) -> String;

    /// Change the displayed screen to `route`.
    fn navigate(&self, route: &str);

    /// Locate the element tagged `data-search-section="<fragment>"` (falling
    /// back to element-id lookup), apply a transient highlight, and scroll it
    /// into view. Returns whether a target was found; a miss is a silent
    /// no-op for the caller.
    fn highlight(&self, fragment: &str) -> bool;

    /// Remove a previously applied highlight.
    fn clear_highlight(&self, fragment: &str);
}
