//! Snippet management module
//!
//! This module provides the `SnippetStore` for reading and mutating the
//! persisted snippet collection, and the `IdAllocator` that hands out
//! time-derived snippet ids.

mod ids;
mod store;

pub use ids::IdAllocator;
pub use store::{MergeReport, SnippetStore};
