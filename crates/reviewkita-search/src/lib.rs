//! # reviewkita-search
//!
//! Search indexing and search state service for the ReviewKita client.
//!
//! This crate provides:
//! - [`SearchIndexer`]: turns a free-text query into a prioritized,
//!   categorized list of navigable results, drawing from the static page
//!   and section catalogs plus remotely fetched reviewer documents.
//! - [`SearchService`]: the explicit owner of search state (query, results,
//!   visibility flags), notifying observers over an event bus and driving
//!   navigation/highlight behavior for selected results.
//!
//! ## Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use reviewkita_client::{ApiClient, ApiConfig, ReviewerApi};
//! use reviewkita_search::SearchService;
//!
//! let client = Arc::new(ApiClient::new(ApiConfig::from_env())?);
//! let store = Arc::new(ReviewerApi::new(client));
//! let service = SearchService::new(store, navigator);
//!
//! let results = service.search("mitosis").await;
//! service.select_result(&results[0].path);
//! ```

pub mod indexer;
pub mod matching;
pub mod service;
pub mod snippet;

pub use indexer::{SearchIndexer, SearchOutcome};
pub use matching::{contains_ci, find_ci, truncate_with_ellipsis};
pub use service::{SearchPhase, SearchService, SearchSnapshot};
pub use snippet::snippet;
