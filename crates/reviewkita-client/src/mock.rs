//! Mock reviewer store for deterministic testing.
//!
//! Provides a canned-data implementation of [`ReviewerStore`] with a call
//! counter, so tests can assert both results and fetch behavior (the
//! blank-query fast path performs zero fetches).
//!
//! ## Usage
//!
//! ```ignore
//! use reviewkita_client::mock::MockReviewerStore;
//!
//! let store = MockReviewerStore::new()
//!     .with_reviewer("rev-1", "Biology 101", Some("Cells and mitosis"))
//!     .with_latency_ms(5);
//! ```

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;

use reviewkita_core::{Error, Result, ReviewerDocument, ReviewerStore};

/// Mock document-retrieval collaborator.
#[derive(Clone, Default)]
pub struct MockReviewerStore {
    reviewers: Vec<ReviewerDocument>,
    fail: bool,
    latency_ms: u64,
    calls: Arc<AtomicUsize>,
}

impl MockReviewerStore {
    /// Create an empty mock store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the canned reviewer list.
    pub fn with_reviewers(mut self, reviewers: Vec<ReviewerDocument>) -> Self {
        self.reviewers = reviewers;
        self
    }

    /// Append one canned reviewer with just the fields search looks at.
    pub fn with_reviewer(mut self, id: &str, title: &str, description: Option<&str>) -> Self {
        self.reviewers.push(ReviewerDocument {
            id: id.to_string(),
            title: title.to_string(),
            description: description.map(String::from),
            original_content: None,
            enhanced_content: None,
            updated_at: None,
            created_at: None,
        });
        self
    }

    /// Make every fetch fail, for degraded-path tests.
    pub fn with_failure(mut self) -> Self {
        self.fail = true;
        self
    }

    /// Simulate fetch latency, for in-flight/race tests.
    pub fn with_latency_ms(mut self, latency_ms: u64) -> Self {
        self.latency_ms = latency_ms;
        self
    }

    /// Number of `list_reviewers` calls observed.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ReviewerStore for MockReviewerStore {
    async fn list_reviewers(&self, limit: usize) -> Result<Vec<ReviewerDocument>> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if self.latency_ms > 0 {
            tokio::time::sleep(std::time::Duration::from_millis(self.latency_ms)).await;
        }
        if self.fail {
            return Err(Error::Request("mock: simulated fetch failure".to_string()));
        }

        // Real backends may ignore the limit; the mock honors it to keep
        // fixtures small.
        Ok(self.reviewers.iter().take(limit).cloned().collect())
    }
}
