//! # mapblock-codec
//!
//! A decoder for the compressed MapBlocks of a voxel-world map database.
//! Supports block format version 29 and newer (one version byte followed by a zstd frame).
//!
//! A block holds a 16×16×16 grid of nodes plus a per-block dictionary that maps the
//! grid's numeric content ids to node names. Decoding is a single strict pass that
//! stops at the first structural violation with a typed [`DecodeError`].
//!
//! **Note:** Node metadata and static objects after the grid are not parsed; their
//! size is reported as [`DecodedBlock::trailing_len`].
//!
//! ```
//! use mapblock_codec::{position, BlockKey, WorldPosition};
//!
//! let key = position::encode(-13, -8, 2);
//! assert_eq!(position::decode(key), (-13, -8, 2));
//! assert_eq!(key.position(), WorldPosition::new(-13, -8, 2));
//! assert_eq!(WorldPosition::new(0, 0, 0).key(), BlockKey(0x800_800_800));
//! ```
pub mod mapblock;

// Re-export the main types for convenience
pub use mapblock::{
    decode_block,
    position,
    BlockDecoder,
    BlockScanner,
    BlockStore,
    MemoryStore,
    ScanFailure,
    ScanReport,
    DecodeError,
    DecodeOptions,
    types::models::{
        BlockKey,
        ContentWidth,
        DecodedBlock,
        DecodedHeader,
        FormatMode,
        NameIdMapping,
        NamePolicy,
        Node,
        NodeGrid,
        WorldPosition,
    },
};
