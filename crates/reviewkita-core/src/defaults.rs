//! Centralized default constants for the ReviewKita client core.
//!
//! **This module is the single source of truth** for all shared default
//! values. The other crates reference these constants instead of defining
//! their own magic numbers.
//!
//! Organized by domain area. When adding new constants, place them in the
//! appropriate section and document the rationale for the chosen value.

// =============================================================================
// SEARCH
// =============================================================================

/// Maximum reviewer documents considered per search. A defensive ceiling on
/// the retrieval response, not a pagination contract: anything past the first
/// 500 is ignored.
pub const REVIEWER_FETCH_LIMIT: usize = 500;

/// Maximum characters for a matched reviewer-section label before truncation.
pub const SECTION_LABEL_MAX: usize = 60;

// =============================================================================
// SNIPPET
// =============================================================================

/// Context characters kept before the first query match in a snippet.
pub const SNIPPET_CONTEXT_BEFORE: usize = 30;

/// Context characters kept after the first query match in a snippet.
pub const SNIPPET_CONTEXT_AFTER: usize = 90;

/// Snippet length when the query is not found in the text.
pub const SNIPPET_FALLBACK_LEN: usize = 120;

/// Marker appended/prepended when a snippet or label window is clipped.
pub const ELLIPSIS: char = '…';

// =============================================================================
// NAVIGATION / HIGHLIGHT
// =============================================================================

/// How long a search-result highlight stays visible before auto-removal.
pub const HIGHLIGHT_DURATION_MS: u64 = 2500;

/// Delay before the single retry of a locate-and-highlight attempt after a
/// cross-page navigation, allowing the destination page to render.
pub const NAVIGATION_RETRY_DELAY_MS: u64 = 600;

/// Attribute the navigation layer uses to locate highlight targets.
/// Element-id lookup is the documented fallback.
pub const SEARCH_SECTION_ATTR: &str = "data-search-section";

/// Route the session-expired policy redirects to.
pub const LOGIN_ROUTE: &str = "/login";

// =============================================================================
// EVENTS
// =============================================================================

/// Event bus buffer capacity. 256 for production, tests use smaller buses.
pub const EVENT_BUS_CAPACITY: usize = 256;

// =============================================================================
// API CLIENT
// =============================================================================

/// Default base URL of the ReviewKita backend API.
pub const API_BASE_URL: &str = "http://localhost:5000/api";

/// Default request timeout in seconds.
pub const API_TIMEOUT_SECS: u64 = 30;
