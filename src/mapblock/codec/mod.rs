//! Codec layer for pure data transformations.
//!
//! # Submodules
//!
//! - [`compression`][]: Bounded zstd decompression of block payloads
//! - [`position`][]: Packing block positions into store keys and back

pub mod compression;
pub mod position;
