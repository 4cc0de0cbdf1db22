//! Core traits for textquery abstractions.
//!
//! These traits define the interfaces that concrete implementations
//! must satisfy, enabling pluggable backends and testability.

use serde_json::Value as JsonValue;

use crate::error::Result;

/// Execution scope for compiled queries.
///
/// The single seam between query compilation and the search backend. A scope
/// accepts the compiled boolean query structure and returns a successor
/// scope; the compiler never inspects the returned value beyond handing it
/// back to its own caller, and failures propagate unchanged.
pub trait QueryScope: Sized {
    /// Apply a compiled query structure, returning the successor scope.
    fn query(self, body: JsonValue) -> Result<Self>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    /// Scope that counts how many query bodies it has received.
    #[derive(Debug, Default, PartialEq)]
    struct CountingScope {
        applied: usize,
    }

    impl QueryScope for CountingScope {
        fn query(mut self, _body: JsonValue) -> Result<Self> {
            self.applied += 1;
            Ok(self)
        }
    }

    #[test]
    fn test_scope_returns_successor() {
        let scope = CountingScope::default();
        let scope = scope.query(json!({"bool": {"must": []}})).unwrap();
        assert_eq!(scope.applied, 1);
    }

    #[test]
    fn test_scope_failure_propagates() {
        #[derive(Debug)]
        struct FailingScope;

        impl QueryScope for FailingScope {
            fn query(self, _body: JsonValue) -> Result<Self> {
                Err(crate::Error::Backend("connection refused".to_string()))
            }
        }

        let err = FailingScope.query(json!({})).unwrap_err();
        assert!(err.to_string().contains("connection refused"));
    }
}
