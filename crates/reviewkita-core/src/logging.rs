//! Structured logging schema and field name constants for the ReviewKita
//! client core.
//!
//! All crates use these constants for consistent structured logging fields,
//! so log tooling can query by standardized field names across subsystems.
//!
//! ## Log Level Contract
//!
//! | Level | Usage |
//! |-------|-------|
//! | ERROR | Degraded service, requires operator attention |
//! | WARN  | Recoverable issue, automatic fallback applied |
//! | INFO  | Lifecycle events, operation completions |
//! | DEBUG | Decision points, intermediate values, config choices |
//! | TRACE | Per-item iteration, high-volume data (result items, lines) |

// ─── Identity fields ───────────────────────────────────────────────────────

/// Subsystem originating the log event.
/// Values: "search", "client", "content"
pub const SUBSYSTEM: &str = "subsystem";

/// Component within a subsystem.
/// Examples: "indexer", "service", "api_client", "section_parser"
pub const COMPONENT: &str = "component";

/// Logical operation name.
/// Examples: "search", "select_result", "list_reviewers", "parse"
pub const OPERATION: &str = "op";

// ─── Search fields ─────────────────────────────────────────────────────────

/// Search query text (normalized).
pub const QUERY: &str = "query";

/// Number of results returned by a search.
pub const RESULT_COUNT: &str = "result_count";

/// Number of reviewer documents considered for matching.
pub const REVIEWER_COUNT: &str = "reviewer_count";

/// Request token issued for a search call.
pub const REQUEST_TOKEN: &str = "request_token";

// ─── Navigation fields ─────────────────────────────────────────────────────

/// Destination route of a navigation request.
pub const ROUTE: &str = "route";

/// Fragment identifier of a highlight target.
pub const FRAGMENT: &str = "fragment";

// ─── Client fields ─────────────────────────────────────────────────────────

/// Request path relative to the API base URL.
pub const PATH: &str = "path";

/// HTTP status code of a response.
pub const STATUS: &str = "status";

// ─── Measurement fields ────────────────────────────────────────────────────

/// Wall-clock duration in milliseconds.
pub const DURATION_MS: &str = "duration_ms";

/// Number of sections extracted from a content blob.
pub const SECTION_COUNT: &str = "section_count";

// ─── Outcome fields ────────────────────────────────────────────────────────

/// Boolean success/failure indicator.
pub const SUCCESS: &str = "success";

/// Error message when an operation fails.
pub const ERROR_MSG: &str = "error";
