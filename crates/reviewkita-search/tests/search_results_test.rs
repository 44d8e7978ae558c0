//! Search contract tests: the suggestion fast path, catalog matching,
//! reviewer matching, emission order, the defensive fetch ceiling, and
//! graceful degradation when the retrieval collaborator is down.

use std::sync::Arc;

use async_trait::async_trait;

use reviewkita_client::MockReviewerStore;
use reviewkita_core::catalog::STATIC_SECTIONS;
use reviewkita_core::defaults::REVIEWER_FETCH_LIMIT;
use reviewkita_core::{ResultCategory, Result, ReviewerDocument, ReviewerStore};
use reviewkita_search::SearchIndexer;

fn reviewer(
    id: &str,
    title: &str,
    description: Option<&str>,
    content: Option<&str>,
) -> ReviewerDocument {
    ReviewerDocument {
        id: id.to_string(),
        title: title.to_string(),
        description: description.map(String::from),
        original_content: content.map(String::from),
        enhanced_content: None,
        updated_at: None,
        created_at: None,
    }
}

#[tokio::test]
async fn blank_query_returns_suggestions_without_fetching() {
    let store = Arc::new(MockReviewerStore::new().with_reviewer("a", "Algebra", None));
    let indexer = SearchIndexer::new(store.clone());

    for query in ["", "   ", "\t\n"] {
        let outcome = indexer.search(query).await;
        assert_eq!(outcome.items.len(), STATIC_SECTIONS.len());
        assert!(outcome
            .items
            .iter()
            .all(|item| item.category == ResultCategory::Suggestions));
        assert!(!outcome.degraded);
    }

    // The fast path never touched the store.
    assert_eq!(store.call_count(), 0);
}

#[tokio::test]
async fn page_match_includes_title_and_category() {
    let indexer = SearchIndexer::new(Arc::new(MockReviewerStore::new()));

    let outcome = indexer.search("dashboard").await;
    let page = outcome
        .items
        .iter()
        .find(|item| item.category == ResultCategory::Pages)
        .expect("expected a Pages item");
    assert_eq!(page.title, "Dashboard");
    assert_eq!(page.path, "/dashboard");
}

#[tokio::test]
async fn matching_is_case_insensitive() {
    let indexer = SearchIndexer::new(Arc::new(MockReviewerStore::new()));

    let upper = indexer.search("DASHBOARD").await;
    let lower = indexer.search("dashboard").await;
    assert_eq!(upper.items, lower.items);
}

#[tokio::test]
async fn emission_order_is_pages_sections_reviewers_reviewer_sections() {
    let store = MockReviewerStore::new().with_reviewers(vec![
        reviewer("r1", "Quiz Strategies", None, None),
        reviewer("r2", "Biology", None, Some("how to ace any quiz\nmore text")),
        reviewer("r3", "Quiz Banks", None, None),
    ]);
    let indexer = SearchIndexer::new(Arc::new(store));

    let outcome = indexer.search("quiz").await;
    let categories: Vec<ResultCategory> = outcome.items.iter().map(|i| i.category).collect();

    // Pages and sections precede all reviewer-derived items; reviewer
    // matches precede reviewer-section matches, each in retrieval order.
    let first_section = categories
        .iter()
        .position(|c| *c == ResultCategory::Sections)
        .expect("quiz matches a static section");
    let first_page = categories
        .iter()
        .position(|c| *c == ResultCategory::Pages)
        .expect("quiz matches a static page");
    assert!(first_page < first_section);

    let reviewer_positions: Vec<usize> = categories
        .iter()
        .enumerate()
        .filter(|(_, c)| **c == ResultCategory::Reviewers)
        .map(|(i, _)| i)
        .collect();
    let section_positions: Vec<usize> = categories
        .iter()
        .enumerate()
        .filter(|(_, c)| **c == ResultCategory::ReviewerSections)
        .map(|(i, _)| i)
        .collect();
    assert_eq!(reviewer_positions.len(), 2);
    assert_eq!(section_positions.len(), 1);
    assert!(reviewer_positions.iter().max() < section_positions.iter().min());

    // Retrieval order within the reviewer group.
    let titles: Vec<&str> = reviewer_positions
        .iter()
        .map(|&i| outcome.items[i].title.as_str())
        .collect();
    assert_eq!(titles, vec!["Quiz Strategies", "Quiz Banks"]);
}

#[tokio::test]
async fn content_only_match_emits_exactly_one_reviewer_section() {
    let content = "intro line\nphotosynthesis overview\nmore photosynthesis here\nphotosynthesis again";
    let store = MockReviewerStore::new().with_reviewers(vec![reviewer(
        "r1",
        "Plant Biology",
        Some("chloroplasts and light"),
        Some(content),
    )]);
    let indexer = SearchIndexer::new(Arc::new(store));

    let outcome = indexer.search("photosynthesis").await;
    let matches: Vec<_> = outcome
        .items
        .iter()
        .filter(|item| item.category == ResultCategory::ReviewerSections)
        .collect();

    // One item per reviewer, first matching line as its label.
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].section.as_deref(), Some("photosynthesis overview"));
    assert!(outcome
        .items
        .iter()
        .all(|item| item.category != ResultCategory::Reviewers));
}

#[tokio::test]
async fn fetch_failure_degrades_to_catalog_results() {
    let store = Arc::new(MockReviewerStore::new().with_failure());
    let indexer = SearchIndexer::new(store.clone());

    let outcome = indexer.search("dashboard").await;

    assert!(outcome.degraded);
    assert!(outcome
        .items
        .iter()
        .any(|item| item.category == ResultCategory::Pages));
    assert!(outcome.items.iter().all(|item| {
        item.category != ResultCategory::Reviewers
            && item.category != ResultCategory::ReviewerSections
    }));
    // The fetch was attempted exactly once, with no retry.
    assert_eq!(store.call_count(), 1);
}

/// Store that ignores the limit parameter, as older backends do.
struct OverflowStore;

#[async_trait]
impl ReviewerStore for OverflowStore {
    async fn list_reviewers(&self, _limit: usize) -> Result<Vec<ReviewerDocument>> {
        Ok((0..REVIEWER_FETCH_LIMIT + 100)
            .map(|i| reviewer(&format!("r{i}"), &format!("Kasaysayan {i}"), None, None))
            .collect())
    }
}

#[tokio::test]
async fn overlong_fetch_response_is_capped() {
    let indexer = SearchIndexer::new(Arc::new(OverflowStore));

    let outcome = indexer.search("kasaysayan").await;
    let reviewer_items = outcome
        .items
        .iter()
        .filter(|item| item.category == ResultCategory::Reviewers)
        .count();
    assert_eq!(reviewer_items, REVIEWER_FETCH_LIMIT);
}

#[tokio::test]
async fn reviewer_match_description_is_a_snippet() {
    let long_description = format!(
        "{} mitosis is the star of this description {}",
        "lead-in words ".repeat(10),
        "trailing words ".repeat(20)
    );
    let store = MockReviewerStore::new().with_reviewers(vec![reviewer(
        "r1",
        "Cell Division",
        Some(&long_description),
        None,
    )]);
    let indexer = SearchIndexer::new(Arc::new(store));

    let outcome = indexer.search("mitosis").await;
    let item = &outcome.items[0];
    assert_eq!(item.category, ResultCategory::Reviewers);
    let snippet = item.description.as_deref().unwrap();
    assert!(snippet.contains("mitosis"));
    // Windowed, not the full description.
    assert!(snippet.chars().count() < long_description.chars().count());
}
