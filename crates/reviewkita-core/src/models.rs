//! Data model for the ReviewKita client core.
//!
//! Reviewer documents are external, read-only input: they are produced and
//! owned by the backend collaborator, and the client only reads them. The
//! search and content types here are ephemeral — rebuilt on every search or
//! parse call, never persisted.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// =============================================================================
// REVIEWER DOCUMENTS (EXTERNAL INPUT)
// =============================================================================

/// A user-owned study document: source material plus its AI-enhanced version.
///
/// The backend has shipped this shape under several historical field
/// spellings (`name` vs `title`, `summary` vs `description`,
/// `enhancedContentByAI` vs `enhancedContent`); the serde aliases accept all
/// of them so older payloads keep decoding.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewerDocument {
    /// Backend-owned opaque identifier.
    #[serde(alias = "_id")]
    pub id: String,

    /// Display title.
    #[serde(default, alias = "name")]
    pub title: String,

    /// Short summary, if the backend produced one.
    #[serde(default, alias = "summary", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Raw uploaded source material.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_content: Option<String>,

    /// AI-enhanced rendition of the source material.
    #[serde(
        default,
        alias = "enhancedContentByAI",
        skip_serializing_if = "Option::is_none"
    )]
    pub enhanced_content: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl ReviewerDocument {
    /// Concatenation of original and enhanced content, the haystack for
    /// content-level query matching. Absent parts are skipped.
    pub fn combined_content(&self) -> String {
        match (&self.original_content, &self.enhanced_content) {
            (Some(original), Some(enhanced)) => format!("{original}\n{enhanced}"),
            (Some(original), None) => original.clone(),
            (None, Some(enhanced)) => enhanced.clone(),
            (None, None) => String::new(),
        }
    }

    /// Timestamp shown on search results: last update, falling back to
    /// creation time when the backend never set `updatedAt`.
    pub fn result_date(&self) -> Option<DateTime<Utc>> {
        self.updated_at.or(self.created_at)
    }
}

// =============================================================================
// SEARCH RESULTS
// =============================================================================

/// Category header a search result is grouped under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResultCategory {
    Pages,
    Sections,
    Reviewers,
    #[serde(rename = "Reviewer Sections")]
    ReviewerSections,
    Suggestions,
}

impl std::fmt::Display for ResultCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pages => write!(f, "Pages"),
            Self::Sections => write!(f, "Sections"),
            Self::Reviewers => write!(f, "Reviewers"),
            Self::ReviewerSections => write!(f, "Reviewer Sections"),
            Self::Suggestions => write!(f, "Suggestions"),
        }
    }
}

/// Which source a result item came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResultKind {
    Page,
    Section,
    Reviewer,
    ReviewerSection,
}

/// One navigable search result.
///
/// `path` is the navigation target consumed by the routing collaborator and
/// may carry a `#fragment`. The fragment must match an element tagged with
/// the search-section attribute (or an element id) on the destination page
/// for highlight-and-scroll to work; when no such element exists, navigation
/// still succeeds and the highlight silently no-ops.
///
/// Result lists are insertion-ordered: static pages first, static sections
/// second, then reviewer matches and reviewer-section matches in retrieval
/// order. There is no dedup and no ranking score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResultItem {
    pub category: ResultCategory,
    #[serde(rename = "type")]
    pub kind: ResultKind,
    pub title: String,
    /// Snippet shown under the title, ~120 chars.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub path: String,
    /// Matched section label for reviewer-section results.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub section: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<DateTime<Utc>>,
}

// =============================================================================
// CONTENT SECTIONS
// =============================================================================

/// A delimited, labeled region extracted from an AI-generated content blob.
///
/// Transient: rebuilt on every parse call, never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentSection {
    /// Section identifier, conventionally UPPER_SNAKE_CASE. Not validated at
    /// parse time: any bracketed token is accepted.
    pub key: String,
    /// Human-readable heading.
    pub title: String,
    /// Trimmed body text.
    pub content: String,
}

/// One display line of a section body.
///
/// Bodies render line by line, not merged into paragraphs: consecutive
/// non-blank lines stay separate blocks, and each blank line is a break.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "text", rename_all = "snake_case")]
pub enum ContentLine {
    Break,
    Paragraph(String),
}

// =============================================================================
// TESTS
// =============================================================================
