//! Payload parsing layer for decompressed MapBlocks.
//!
//! This module provides the mid-level parsers that sit between the bounded
//! decompressor in [`codec`](crate::mapblock::codec) and the high-level
//! [`BlockDecoder`](crate::mapblock::BlockDecoder).
//!
//! # Module Organization
//!
//! - [`header`]: Flags, lighting mask and the disk-only timestamp
//! - [`mapping`]: The per-block content id → node name dictionary
//! - [`nodes`]: Content/params widths and the 4096-entry node grid
//!
//! # Architecture
//!
//! ```text
//! Decompressed payload:
//! ┌─────────────────┐
//! │  Header         │ ← header::parse()
//! ├─────────────────┤
//! │  Name-id        │ ← mapping::parse()
//! │  mapping        │
//! ├─────────────────┤
//! │  Node grid      │ ← nodes::parse()
//! ├─────────────────┤
//! │  Metadata,      │   (not parsed)
//! │  objects, ...   │
//! └─────────────────┘
//! ```
//!
//! Each parser advances a shared `&mut &[u8]` cursor, so the sections are read in
//! one linear pass.

pub mod header;
pub mod mapping;
pub mod nodes;
