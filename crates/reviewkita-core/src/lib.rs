//! # reviewkita-core
//!
//! Core types, traits, and abstractions for the ReviewKita client core.
//!
//! This crate provides the foundational data structures and trait definitions
//! that the other ReviewKita crates depend on: the shared error type, the
//! search/content data model, the static page and section catalogs, the
//! event bus used to notify observers of search state changes, and the
//! collaborator traits (reviewer retrieval, navigation).

pub mod catalog;
pub mod defaults;
pub mod error;
pub mod events;
pub mod logging;
pub mod models;
pub mod traits;

// Re-export commonly used types at crate root
pub use catalog::{PageEntry, SectionEntry, STATIC_PAGES, STATIC_SECTIONS};
pub use error::{Error, Result};
pub use events::{EventBus, SearchEvent};
pub use models::{
    ContentLine, ContentSection, ResultCategory, ResultKind, ReviewerDocument, SearchResultItem,
};
pub use traits::{Navigator, ReviewerStore};
