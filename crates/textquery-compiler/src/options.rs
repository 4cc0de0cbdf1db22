//! Tunable boosts and activation thresholds for query compilation.

use serde::{Deserialize, Serialize};
use textquery_core::Strategy;

/// Configuration for query expansion.
///
/// Each strategy carries a relevance boost and a minimum word length below
/// which it is skipped entirely. The fuzzy strategy additionally carries an
/// edit-distance threshold.
///
/// # Example
/// ```
/// use textquery_compiler::QueryOptions;
/// use textquery_core::Strategy;
///
/// let options = QueryOptions::default()
///     .with_boost(Strategy::Prefix, 0.5)
///     .with_fuzziness(2);
/// assert_eq!(options.boost(Strategy::Prefix), 0.5);
/// assert_eq!(options.fuzziness, 2);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryOptions {
    /// Boost for exact term matches
    pub term_boost: f64,
    /// Boost for prefix matches
    pub prefix_boost: f64,
    /// Boost for infix (wildcard) matches
    pub infix_boost: f64,
    /// Boost for fuzzy matches
    pub fuzzy_boost: f64,
    /// Minimum word length (in characters) to emit a term match
    pub minimum_term_length: usize,
    /// Minimum word length to emit a prefix match
    pub minimum_prefix_length: usize,
    /// Minimum word length to emit an infix match
    pub minimum_infix_length: usize,
    /// Minimum word length to emit a fuzzy match
    pub minimum_fuzzy_length: usize,
    /// Edit-distance threshold carried by fuzzy matches
    pub fuzziness: u32,
}

impl Default for QueryOptions {
    fn default() -> Self {
        Self {
            term_boost: 1.0,
            prefix_boost: 0.7,
            infix_boost: 0.4,
            fuzzy_boost: 0.2,
            minimum_term_length: 2,
            minimum_prefix_length: 3,
            minimum_infix_length: 3,
            minimum_fuzzy_length: 5,
            fuzziness: 4,
        }
    }
}

impl QueryOptions {
    /// Set the boost for one strategy.
    pub fn with_boost(mut self, strategy: Strategy, boost: f64) -> Self {
        match strategy {
            Strategy::Term => self.term_boost = boost,
            Strategy::Prefix => self.prefix_boost = boost,
            Strategy::Infix => self.infix_boost = boost,
            Strategy::Fuzzy => self.fuzzy_boost = boost,
        }
        self
    }

    /// Set the minimum word length for one strategy.
    pub fn with_minimum_length(mut self, strategy: Strategy, length: usize) -> Self {
        match strategy {
            Strategy::Term => self.minimum_term_length = length,
            Strategy::Prefix => self.minimum_prefix_length = length,
            Strategy::Infix => self.minimum_infix_length = length,
            Strategy::Fuzzy => self.minimum_fuzzy_length = length,
        }
        self
    }

    /// Set the fuzzy edit-distance threshold.
    pub fn with_fuzziness(mut self, fuzziness: u32) -> Self {
        self.fuzziness = fuzziness;
        self
    }

    /// Boost configured for a strategy.
    pub fn boost(&self, strategy: Strategy) -> f64 {
        match strategy {
            Strategy::Term => self.term_boost,
            Strategy::Prefix => self.prefix_boost,
            Strategy::Infix => self.infix_boost,
            Strategy::Fuzzy => self.fuzzy_boost,
        }
    }

    /// Minimum word length configured for a strategy.
    pub fn minimum_length(&self, strategy: Strategy) -> usize {
        match strategy {
            Strategy::Term => self.minimum_term_length,
            Strategy::Prefix => self.minimum_prefix_length,
            Strategy::Infix => self.minimum_infix_length,
            Strategy::Fuzzy => self.minimum_fuzzy_length,
        }
    }
}
