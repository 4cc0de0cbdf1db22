//! Structured logging schema and field name constants for textquery.
//!
//! All crates use these constants for consistent structured logging fields,
//! so log aggregation tools can query by standardized field names across
//! every subsystem.
//!
//! ## Log Level Contract
//!
//! | Level | Usage |
//! |-------|-------|
//! | ERROR | Degraded service, requires operator attention |
//! | WARN  | Recoverable issue, automatic fallback applied |
//! | INFO  | Lifecycle events, operation completions |
//! | DEBUG | Decision points, intermediate values, config choices |
//! | TRACE | Per-item iteration, high-volume data (words, clauses) |

// ─── Identity fields ───────────────────────────────────────────────────────

/// Subsystem originating the log event.
/// Values: "compiler", "scope"
pub const SUBSYSTEM: &str = "subsystem";

/// Component within a subsystem.
/// Examples: "text_query", "field_plan"
pub const COMPONENT: &str = "component";

/// Logical operation name.
/// Examples: "compile", "apply"
pub const OPERATION: &str = "op";

// ─── Compilation fields ────────────────────────────────────────────────────

/// Raw search query text.
pub const QUERY: &str = "query";

/// Single normalized word under expansion.
pub const WORD: &str = "word";

/// Number of words surviving normalization.
pub const WORD_COUNT: &str = "word_count";

/// Number of boolean clauses in the compiled structure.
pub const CLAUSE_COUNT: &str = "clause_count";

/// Strategy tag being applied ("term", "prefix", "infix", "fuzzy").
pub const STRATEGY: &str = "strategy";

// ─── Outcome fields ────────────────────────────────────────────────────────

/// Boolean success/failure indicator.
pub const SUCCESS: &str = "success";

/// Error message when an operation fails.
pub const ERROR_MSG: &str = "error";
