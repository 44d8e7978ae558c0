//! Reviewer retrieval endpoint.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use reviewkita_core::{Result, ReviewerDocument, ReviewerStore};

use crate::http::ApiClient;

/// The backend has shipped the reviewer list under three shapes over time:
/// a bare array, `{"data": [...]}`, and `{"reviewers": [...]}`. All three
/// must keep decoding.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ReviewerListResponse {
    Plain(Vec<ReviewerDocument>),
    Data { data: Vec<ReviewerDocument> },
    Wrapped { reviewers: Vec<ReviewerDocument> },
}

impl ReviewerListResponse {
    fn into_inner(self) -> Vec<ReviewerDocument> {
        match self {
            Self::Plain(reviewers)
            | Self::Data { data: reviewers }
            | Self::Wrapped { reviewers } => reviewers,
        }
    }
}

/// Remote implementation of [`ReviewerStore`] over the reviewer endpoints.
pub struct ReviewerApi {
    client: Arc<ApiClient>,
}

impl ReviewerApi {
    /// Create a new reviewer API over a shared client.
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// Fetch a single reviewer for the detail screen.
    pub async fn get_reviewer(&self, id: &str) -> Result<ReviewerDocument> {
        self.client.get(&format!("/reviewers/{id}")).await
    }
}

#[async_trait]
impl ReviewerStore for ReviewerApi {
    async fn list_reviewers(&self, limit: usize) -> Result<Vec<ReviewerDocument>> {
        let response: ReviewerListResponse =
            self.client.get(&format!("/reviewers?limit={limit}")).await?;
        let reviewers = response.into_inner();
        debug!(reviewer_count = reviewers.len(), "fetched reviewer list");
        Ok(reviewers)
    }
}
