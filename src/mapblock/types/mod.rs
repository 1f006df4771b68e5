//! Foundational data structures, error types, and decoder configuration.

pub mod error;
pub mod models;
pub mod options;
