//! # reviewkita-client
//!
//! HTTP API client for the ReviewKita backend.
//!
//! This crate provides:
//! - A generic request helper with bearer-token auth and the single
//!   cross-cutting session policy: HTTP 401 clears local credentials and
//!   signals a redirect to the login route.
//! - The reviewer retrieval endpoint, tolerant of every response shape the
//!   backend has shipped.
//! - A mock reviewer store for deterministic tests.
//!
//! All backend endpoints are external collaborator contracts; this layer is
//! a thin pass-through and holds no domain logic.

pub mod config;
pub mod http;
pub mod reviewers;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

pub use config::ApiConfig;
pub use http::ApiClient;
pub use reviewers::ReviewerApi;

#[cfg(any(test, feature = "mock"))]
pub use mock::MockReviewerStore;
