//! # textquery-core
//!
//! Core types, traits, and abstractions for the textquery workspace.
//!
//! This crate provides the foundational definitions that other textquery
//! crates depend on: the shared error type, the match [`Strategy`] enum,
//! the [`QueryScope`] collaborator trait, and the structured logging schema.

pub mod error;
pub mod logging;
pub mod strategy;
pub mod traits;

// Re-export commonly used types at crate root
pub use error::{Error, Result};
pub use strategy::Strategy;
pub use traits::QueryScope;
