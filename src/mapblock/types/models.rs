//! Core data structures for decoded MapBlocks.
//!
//! This module defines the fundamental types used throughout the library:
//! - Block positions and store keys
//! - The decoded header, name-id mapping and node grid
//! - Format mode and name decoding policy enumerations

use std::fmt;

use indexmap::IndexMap;

/// Oldest MapBlock version whose payload is a single zstd frame.
pub const MIN_SUPPORTED_VERSION: u8 = 29;

/// Number of nodes along each edge of a block.
pub const BLOCK_SIDE: usize = 16;

/// Number of nodes in a block (16³).
pub const NODE_COUNT: usize = BLOCK_SIDE * BLOCK_SIDE * BLOCK_SIDE;

/// Inclusive bounds of each block coordinate (12-bit signed field).
pub const POSITION_MIN: i16 = -2048;
pub const POSITION_MAX: i16 = 2047;

/// Location of a block in chunk-grid units.
///
/// Multiply by [`BLOCK_SIDE`] to get the world-unit origin; see [`WorldPosition::node_origin`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WorldPosition {
    pub x: i16,
    pub y: i16,
    pub z: i16,
}

impl WorldPosition {
    /// Creates a position, panicking if any coordinate is outside [-2048, 2047].
    pub fn new(x: i16, y: i16, z: i16) -> Self {
        Self::try_new(x, y, z).unwrap_or_else(|| {
            panic!(
                "block position ({}, {}, {}) outside [{}, {}]",
                x, y, z, POSITION_MIN, POSITION_MAX
            )
        })
    }

    /// Creates a position if every coordinate is within [-2048, 2047].
    pub fn try_new(x: i16, y: i16, z: i16) -> Option<Self> {
        let in_range = |v: i16| (POSITION_MIN..=POSITION_MAX).contains(&v);
        (in_range(x) && in_range(y) && in_range(z)).then_some(Self { x, y, z })
    }

    /// World-unit coordinates of the block's lowest corner node.
    pub fn node_origin(&self) -> (i32, i32, i32) {
        let side = BLOCK_SIDE as i32;
        (self.x as i32 * side, self.y as i32 * side, self.z as i32 * side)
    }
}

impl fmt::Display for WorldPosition {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

/// Signed 64-bit key under which a block is stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BlockKey(pub i64);

impl From<i64> for BlockKey {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<BlockKey> for i64 {
    fn from(key: BlockKey) -> Self {
        key.0
    }
}

impl fmt::Display for BlockKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Framing variant of the decompressed payload.
///
/// The payload does not describe itself; the caller knows where the block came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormatMode {
    /// Persisted blocks, which carry a u32 timestamp after the lighting mask.
    #[default]
    Disk,
    /// Wire blocks, which omit the timestamp.
    Network,
}

impl fmt::Display for FormatMode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            FormatMode::Disk => write!(f, "disk"),
            FormatMode::Network => write!(f, "network"),
        }
    }
}

/// How node names that are not valid UTF-8 are handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NamePolicy {
    /// Replace invalid sequences with U+FFFD.
    #[default]
    Lossy,
    /// Fail the decode with [`DecodeError::InvalidName`](super::error::DecodeError::InvalidName).
    Strict,
}

/// Wire width of each content id in the node grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentWidth {
    One,
    Two,
}

impl ContentWidth {
    /// Number of bytes per content id.
    pub fn bytes(&self) -> usize {
        match self {
            ContentWidth::One => 1,
            ContentWidth::Two => 2,
        }
    }
}

impl TryFrom<u8> for ContentWidth {
    type Error = u8;
    fn try_from(value: u8) -> std::result::Result<Self, u8> {
        match value {
            1 => Ok(Self::One),
            2 => Ok(Self::Two),
            other => Err(other),
        }
    }
}

/// Fixed-width block metadata at the start of the decompressed payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedHeader {
    /// The raw flags byte.
    pub flags: u8,
    pub underground: bool,
    pub day_night_differs: bool,
    pub lighting_complete: u16,
    /// Present only for [`FormatMode::Disk`] blocks.
    pub timestamp: Option<u32>,
}

/// Per-block dictionary from content id to node name.
///
/// Iterates in the order ids first appear in the stream. A repeated id replaces the
/// earlier name but keeps its position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameIdMapping {
    entries: IndexMap<u16, String>,
}

impl NameIdMapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a name, returning the one it replaced.
    pub fn insert(&mut self, content_id: u16, name: String) -> Option<String> {
        self.entries.insert(content_id, name)
    }

    pub fn get(&self, content_id: u16) -> Option<&str> {
        self.entries.get(&content_id).map(String::as_str)
    }

    pub fn contains(&self, content_id: u16) -> bool {
        self.entries.contains_key(&content_id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (u16, &str)> {
        self.entries.iter().map(|(id, name)| (*id, name.as_str()))
    }
}

/// A single node of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Node {
    pub content_id: u16,
    pub param1: u8,
    pub param2: u8,
}

/// The 16×16×16 node array of a block, indexed `z*256 + y*16 + x`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeGrid {
    nodes: Box<[Node]>,
}

impl NodeGrid {
    /// Wraps exactly [`NODE_COUNT`] nodes; returns `None` for any other length.
    pub fn from_nodes(nodes: Vec<Node>) -> Option<Self> {
        (nodes.len() == NODE_COUNT).then(|| Self {
            nodes: nodes.into_boxed_slice(),
        })
    }

    /// Flat index of a node inside the block. Panics if a coordinate is 16 or more.
    pub fn index(x: usize, y: usize, z: usize) -> usize {
        assert!(
            x < BLOCK_SIDE && y < BLOCK_SIDE && z < BLOCK_SIDE,
            "node coordinate ({}, {}, {}) outside the block",
            x,
            y,
            z
        );
        z * BLOCK_SIDE * BLOCK_SIDE + y * BLOCK_SIDE + x
    }

    /// Node at block-relative coordinates.
    pub fn get(&self, x: usize, y: usize, z: usize) -> Node {
        self.nodes[Self::index(x, y, z)]
    }

    /// Always [`NODE_COUNT`].
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Node> {
        self.nodes.iter()
    }

    /// Rows of one horizontal layer, one row of 16 nodes (x = 0..16) per z.
    pub fn layer(&self, y: usize) -> Vec<&[Node]> {
        (0..BLOCK_SIDE)
            .map(|z| {
                let start = Self::index(0, y, z);
                &self.nodes[start..start + BLOCK_SIDE]
            })
            .collect()
    }
}

/// A fully decoded block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedBlock {
    pub header: DecodedHeader,
    pub mapping: NameIdMapping,
    pub grid: NodeGrid,
    /// Bytes after the grid (node metadata, static objects) that were not parsed.
    pub trailing_len: usize,
}

impl DecodedBlock {
    /// Node at block-relative coordinates.
    pub fn node(&self, x: usize, y: usize, z: usize) -> Node {
        self.grid.get(x, y, z)
    }

    /// Name of a content id according to this block's mapping.
    pub fn name_of(&self, content_id: u16) -> Option<&str> {
        self.mapping.get(content_id)
    }

    /// Number of nodes per resolved name, most frequent first.
    ///
    /// Ties are ordered by name. Nodes whose id has no mapping are not counted.
    pub fn node_counts(&self) -> Vec<(&str, usize)> {
        let mut counts: IndexMap<&str, usize> = IndexMap::new();
        for node in self.grid.iter() {
            if let Some(name) = self.mapping.get(node.content_id) {
                *counts.entry(name).or_insert(0) += 1;
            }
        }
        let mut counts: Vec<(&str, usize)> = counts.into_iter().collect();
        counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        counts
    }

    /// Content ids used in the grid that the mapping does not name, ascending.
    pub fn unmapped_ids(&self) -> Vec<u16> {
        let mut ids: Vec<u16> = self
            .grid
            .iter()
            .map(|node| node.content_id)
            .filter(|id| !self.mapping.contains(*id))
            .collect();
        ids.sort_unstable();
        ids.dedup();
        ids
    }
}
