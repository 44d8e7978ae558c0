//! Multi-source search over static catalogs and fetched reviewer documents.

use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, warn};

use reviewkita_core::catalog::{STATIC_PAGES, STATIC_SECTIONS};
use reviewkita_core::defaults::{REVIEWER_FETCH_LIMIT, SECTION_LABEL_MAX};
use reviewkita_core::{
    ResultCategory, ResultKind, ReviewerDocument, ReviewerStore, SearchResultItem,
};

use crate::matching::{contains_ci, truncate_with_ellipsis};
use crate::snippet::snippet;

/// Result of one search call.
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    /// Matched items in presentation order.
    pub items: Vec<SearchResultItem>,
    /// True when the reviewer fetch failed and reviewer-derived categories
    /// were omitted.
    pub degraded: bool,
}

/// Builds an ephemeral, categorized result list for a free-text query.
///
/// Emission order is fixed: static page matches, static section matches,
/// reviewer matches, then reviewer-section matches. Within each group,
/// declaration/retrieval order is preserved; there is no dedup and no
/// ranking score.
pub struct SearchIndexer {
    store: Arc<dyn ReviewerStore>,
}

impl SearchIndexer {
    /// Create an indexer over a document-retrieval collaborator.
    pub fn new(store: Arc<dyn ReviewerStore>) -> Self {
        Self { store }
    }

    /// Run one search. Never fails: a reviewer fetch error degrades the
    /// result set to catalog matches only.
    ///
    /// A blank query is the suggestion fast path — the static section
    /// catalog is returned directly and no fetch is performed.
    pub async fn search(&self, query: &str) -> SearchOutcome {
        let started = Instant::now();
        let trimmed = query.trim();
        if trimmed.is_empty() {
            return SearchOutcome {
                items: suggestion_items(),
                degraded: false,
            };
        }
        let needle = trimmed.to_lowercase();

        let mut items = Vec::new();
        collect_page_matches(&needle, &mut items);
        collect_section_matches(&needle, &mut items);

        let mut degraded = false;
        match self.store.list_reviewers(REVIEWER_FETCH_LIMIT).await {
            Ok(mut reviewers) => {
                // Ceiling on over-long responses; not a pagination contract.
                if reviewers.len() > REVIEWER_FETCH_LIMIT {
                    reviewers.truncate(REVIEWER_FETCH_LIMIT);
                }
                debug!(
                    query = %needle,
                    reviewer_count = reviewers.len(),
                    "matching fetched reviewers"
                );
                // Reviewer matches come before reviewer-section matches,
                // each group in retrieval order.
                let mut section_items = Vec::new();
                for reviewer in &reviewers {
                    match match_reviewer(reviewer, &needle) {
                        Some(item) if item.category == ResultCategory::Reviewers => {
                            items.push(item);
                        }
                        Some(item) => section_items.push(item),
                        None => {}
                    }
                }
                items.extend(section_items);
            }
            Err(e) => {
                // Degrade gracefully: search must not fail because the
                // retrieval collaborator is down.
                warn!(query = %needle, error = %e, "reviewer fetch failed; omitting reviewer results");
                degraded = true;
            }
        }

        debug!(
            query = %needle,
            result_count = items.len(),
            degraded,
            duration_ms = started.elapsed().as_millis() as u64,
            "search finished"
        );
        SearchOutcome { items, degraded }
    }
}

/// Suggestion mode: the full static section catalog, in declaration order.
fn suggestion_items() -> Vec<SearchResultItem> {
    STATIC_SECTIONS
        .iter()
        .map(|section| SearchResultItem {
            category: ResultCategory::Suggestions,
            kind: ResultKind::Section,
            title: section.title.to_string(),
            description: None,
            path: section.path.to_string(),
            section: Some(section.key.to_string()),
            date: None,
        })
        .collect()
}

fn collect_page_matches(needle: &str, items: &mut Vec<SearchResultItem>) {
    for page in STATIC_PAGES {
        if contains_ci(page.title, needle) || contains_ci(page.description, needle) {
            items.push(SearchResultItem {
                category: ResultCategory::Pages,
                kind: ResultKind::Page,
                title: page.title.to_string(),
                description: Some(page.description.to_string()),
                path: page.path.to_string(),
                section: None,
                date: None,
            });
        }
    }
}

fn collect_section_matches(needle: &str, items: &mut Vec<SearchResultItem>) {
    for section in STATIC_SECTIONS {
        if contains_ci(section.key, needle) || contains_ci(section.title, needle) {
            items.push(SearchResultItem {
                category: ResultCategory::Sections,
                kind: ResultKind::Section,
                title: section.title.to_string(),
                description: None,
                path: section.path.to_string(),
                section: Some(section.key.to_string()),
                date: None,
            });
        }
    }
}

/// Match one reviewer. Title/description matches win over content matches,
/// and a content match emits at most one reviewer-section item: the first
/// matching line becomes its label, remaining lines are not inspected.
fn match_reviewer(reviewer: &ReviewerDocument, needle: &str) -> Option<SearchResultItem> {
    let title_hit = contains_ci(&reviewer.title, needle)
        || reviewer
            .description
            .as_deref()
            .is_some_and(|d| contains_ci(d, needle));

    if title_hit {
        let source = reviewer
            .description
            .clone()
            .unwrap_or_else(|| reviewer.combined_content());
        return Some(SearchResultItem {
            category: ResultCategory::Reviewers,
            kind: ResultKind::Reviewer,
            title: reviewer.title.clone(),
            description: Some(snippet(&source, needle)),
            path: format!("/reviewers/{}", reviewer.id),
            section: None,
            date: reviewer.result_date(),
        });
    }

    let content = reviewer.combined_content();
    if !contains_ci(&content, needle) {
        return None;
    }

    let section = first_matching_line(&content, needle)
        .map(|line| truncate_with_ellipsis(&line, SECTION_LABEL_MAX));
    Some(SearchResultItem {
        category: ResultCategory::ReviewerSections,
        kind: ResultKind::ReviewerSection,
        title: reviewer.title.clone(),
        description: Some(snippet(&content, needle)),
        path: format!("/reviewers/{}", reviewer.id),
        section,
        date: reviewer.result_date(),
    })
}

/// First non-empty trimmed line containing the query.
fn first_matching_line(content: &str, needle: &str) -> Option<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .find(|line| contains_ci(line, needle))
        .map(String::from)
}
