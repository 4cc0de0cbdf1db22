//! # textquery-compiler
//!
//! Compiles a free-text user query into a weighted boolean search request
//! understood by an external full-text search backend.
//!
//! Each normalized word is expanded into up to four match strategies (exact
//! term, prefix, infix/wildcard, fuzzy), scoped to a configurable set of
//! fields with per-field and per-strategy boosts, then composed into one
//! nested boolean structure: AND across words, OR across strategies and
//! fields.
//!
//! ## Example
//!
//! ```
//! use textquery_compiler::{FieldSpec, TextQuery};
//!
//! let query = TextQuery::new("hello world", FieldSpec::names(["title", "body"]));
//!
//! match query.compile() {
//!     Some(body) => println!("{}", body),
//!     None => println!("nothing to search for"),
//! }
//! ```

pub mod compile;
pub mod dsl;
pub mod fields;
pub mod options;

// Re-export core types
pub use textquery_core::*;

// Re-export compiler types
pub use compile::{TextQuery, WordWeight};
pub use fields::{FieldRule, FieldSpec};
pub use options::QueryOptions;
