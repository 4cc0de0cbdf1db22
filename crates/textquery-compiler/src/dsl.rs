//! Constructors for the backend-native boolean query structures.
//!
//! The backend accepts nested mappings: `bool.must` for AND combinations,
//! `bool.should` for OR combinations, and per-strategy leaf clauses keyed by
//! the strategy's query kind (`term`, `prefix`, `wildcard`, `fuzzy`).

use serde_json::{json, Map, Value};

/// AND combination: every sub-query must match.
pub fn must(parts: Vec<Value>) -> Value {
    json!({"bool": {"must": parts}})
}

/// OR combination over a word's expanded strategies.
pub fn should(parts: Vec<Value>) -> Value {
    json!({"bool": {"should": parts}})
}

/// OR combination over a strategy's field matches.
///
/// Always produced, even for a single field, and always carries
/// `minimum_should_match: 0`.
pub fn field_group(matches: Vec<Value>) -> Value {
    json!({"bool": {"should": matches, "minimum_should_match": 0}})
}

/// Exact term match clause.
pub fn term_match(field: &str, word: &str, boost: f64) -> Value {
    match_clause("term", field, word, boost, None)
}

/// Prefix match clause.
pub fn prefix_match(field: &str, word: &str, boost: f64) -> Value {
    match_clause("prefix", field, word, boost, None)
}

/// Infix (substring) match clause: a wildcard query with the word wrapped in
/// `*` markers on both sides.
pub fn infix_match(field: &str, word: &str, boost: f64) -> Value {
    let wildcard = format!("*{}*", word.to_lowercase());
    let mut body = Map::new();
    body.insert("value".to_string(), json!(wildcard));
    body.insert("boost".to_string(), json!(boost));
    wrap("wildcard", field, body)
}

/// Fuzzy match clause, carrying the edit-distance threshold.
pub fn fuzzy_match(field: &str, word: &str, boost: f64, fuzziness: u32) -> Value {
    match_clause("fuzzy", field, word, boost, Some(fuzziness))
}

fn match_clause(
    kind: &str,
    field: &str,
    word: &str,
    boost: f64,
    fuzziness: Option<u32>,
) -> Value {
    let mut body = Map::new();
    body.insert("value".to_string(), json!(word.to_lowercase()));
    body.insert("boost".to_string(), json!(boost));
    if let Some(fuzziness) = fuzziness {
        body.insert("fuzziness".to_string(), json!(fuzziness));
    }
    wrap(kind, field, body)
}

fn wrap(kind: &str, field: &str, body: Map<String, Value>) -> Value {
    let mut by_field = Map::new();
    by_field.insert(field.to_string(), Value::Object(body));
    let mut clause = Map::new();
    clause.insert(kind.to_string(), Value::Object(by_field));
    Value::Object(clause)
}
