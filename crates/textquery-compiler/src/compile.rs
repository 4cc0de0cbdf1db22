//! Free-text query compilation.
//!
//! [`TextQuery`] normalizes a raw query string into words, expands each word
//! into the configured match strategies across the eligible fields, and
//! composes one boolean structure: AND across words, OR across strategies and
//! fields. The compiled result is memoized write-once per instance.

use std::fmt;
use std::sync::Arc;

use once_cell::sync::OnceCell;
use serde_json::Value;
use tracing::{debug, trace};

use textquery_core::{QueryScope, Result, Strategy};

use crate::dsl;
use crate::fields::{FieldPlan, FieldSpec};
use crate::options::QueryOptions;

/// Per-word relevance weight function.
///
/// Called once per normalized word; the returned weight multiplies into every
/// boost computed for that word. A weight of exactly `0.0` excludes the word
/// from the compiled query. Negative weights are passed through unrejected.
pub type WordWeight = Arc<dyn Fn(&str) -> f64 + Send + Sync>;

/// Compiles a raw query string into a weighted boolean search request.
///
/// Construction follows the request-builder idiom: required inputs up front,
/// optional tunables chained.
///
/// # Example
/// ```
/// use textquery_compiler::{FieldSpec, QueryOptions, TextQuery};
///
/// let query = TextQuery::new("hello world", FieldSpec::names(["title"]))
///     .with_word_weight(|word| if word == "the" { 0.0 } else { 1.0 })
///     .with_options(QueryOptions::default());
///
/// assert!(query.compile().is_some());
/// ```
#[derive(Clone)]
pub struct TextQuery {
    query: String,
    fields: FieldSpec,
    word_weight: WordWeight,
    options: QueryOptions,
    compiled: OnceCell<Option<Value>>,
}

impl TextQuery {
    /// Create a compiler for a raw query over the given fields.
    ///
    /// The word weight defaults to a constant `1.0` for every word.
    pub fn new(query: impl Into<String>, fields: FieldSpec) -> Self {
        Self {
            query: query.into(),
            fields,
            word_weight: Arc::new(|_| 1.0),
            options: QueryOptions::default(),
            compiled: OnceCell::new(),
        }
    }

    /// Set the expansion tunables.
    pub fn with_options(mut self, options: QueryOptions) -> Self {
        self.options = options;
        self.compiled = OnceCell::new();
        self
    }

    /// Set the per-word relevance weight function.
    pub fn with_word_weight<F>(mut self, weight: F) -> Self
    where
        F: Fn(&str) -> f64 + Send + Sync + 'static,
    {
        self.word_weight = Arc::new(weight);
        self.compiled = OnceCell::new();
        self
    }

    /// The raw query string.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// The field specification.
    pub fn fields(&self) -> &FieldSpec {
        &self.fields
    }

    /// The expansion tunables.
    pub fn options(&self) -> &QueryOptions {
        &self.options
    }

    /// Compile the query, or `None` when no word survives normalization,
    /// weighting, and length gating.
    ///
    /// The result is computed at most once per instance; repeated calls
    /// return the memoized structure.
    pub fn compile(&self) -> Option<&Value> {
        self.compiled.get_or_init(|| self.build()).as_ref()
    }

    /// Hand the compiled query to an execution scope.
    ///
    /// An absent compiled query returns the scope unchanged without calling
    /// the collaborator; otherwise the scope's `query` operation is invoked
    /// and its result (or failure) is returned untouched.
    pub fn apply<S: QueryScope>(&self, scope: S) -> Result<S> {
        match self.compile() {
            Some(body) => scope.query(body.clone()),
            None => Ok(scope),
        }
    }

    fn build(&self) -> Option<Value> {
        let words = normalize(&self.query);
        let plan = FieldPlan::new(&self.fields);

        let mut parts = Vec::new();
        for word in &words {
            let weight = (self.word_weight)(word);
            if weight == 0.0 {
                debug!(word = %word, "word excluded by zero weight");
                continue;
            }
            if let Some(part) = expand_word(word, weight, &plan, &self.options) {
                parts.push(part);
            }
        }

        debug!(
            word_count = words.len(),
            clause_count = parts.len(),
            "query compilation complete"
        );

        match parts.len() {
            0 => None,
            1 => parts.pop(),
            // Multiple words must all match
            _ => Some(dsl::must(parts)),
        }
    }
}

impl fmt::Debug for TextQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextQuery")
            .field("query", &self.query)
            .field("fields", &self.fields)
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

/// Normalize a raw query into an ordered word list: trim, collapse whitespace
/// runs, lowercase, split.
fn normalize(query: &str) -> Vec<String> {
    let lowered = query.to_lowercase();
    lowered.split_whitespace().map(String::from).collect()
}

/// Expand one word into its OR combination of strategy/field sub-queries.
///
/// Strategies apply in fixed order (term, prefix, infix, fuzzy); within each
/// strategy, fields follow spec order. A strategy is skipped when the word is
/// shorter than its minimum length, and each strategy consults its own field
/// eligibility.
fn expand_word(word: &str, weight: f64, plan: &FieldPlan, options: &QueryOptions) -> Option<Value> {
    let length = word.chars().count();
    let mut parts = Vec::new();

    for strategy in Strategy::ALL {
        if length < options.minimum_length(strategy) {
            trace!(word = %word, strategy = strategy.tag(), "word below minimum length");
            continue;
        }
        for (field, field_boost) in plan.eligible(strategy) {
            let boost = options.boost(strategy) * weight * field_boost;
            let clause = match strategy {
                Strategy::Term => dsl::term_match(field, word, boost),
                Strategy::Prefix => dsl::prefix_match(field, word, boost),
                Strategy::Infix => dsl::infix_match(field, word, boost),
                Strategy::Fuzzy => dsl::fuzzy_match(field, word, boost, options.fuzziness),
            };
            parts.push(dsl::field_group(vec![clause]));
        }
    }

    if parts.is_empty() {
        None
    } else {
        Some(dsl::should(parts))
    }
}
