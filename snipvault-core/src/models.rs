//! Core data models for `SnipVault`

mod snippet;

pub use snippet::Snippet;
