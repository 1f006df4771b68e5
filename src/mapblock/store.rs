//! Block storage seam.
//!
//! The decoder never touches storage. Whatever holds the raw blocks (a database
//! table keyed by position, a directory of dumps, a network fetch) implements
//! [`BlockStore`], and the [`scan`](super::scan) module reads through it.

use std::collections::BTreeMap;

use super::types::models::{BlockKey, WorldPosition};

/// Key-value access to raw, still-compressed blocks.
pub trait BlockStore: Sync {
    /// Raw bytes stored under `key`, if any.
    fn get(&self, key: BlockKey) -> Option<Vec<u8>>;

    /// Every key currently stored.
    fn keys(&self) -> Vec<BlockKey>;
}

/// An in-memory store ordered by key.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    blocks: BTreeMap<BlockKey, Vec<u8>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a block under `key`, returning the bytes it replaced.
    pub fn insert(&mut self, key: BlockKey, raw: Vec<u8>) -> Option<Vec<u8>> {
        self.blocks.insert(key, raw)
    }

    /// Stores a block under the key of `position`.
    pub fn insert_at(&mut self, position: WorldPosition, raw: Vec<u8>) -> Option<Vec<u8>> {
        self.insert(position.key(), raw)
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

impl BlockStore for MemoryStore {
    fn get(&self, key: BlockKey) -> Option<Vec<u8>> {
        self.blocks.get(&key).cloned()
    }

    fn keys(&self) -> Vec<BlockKey> {
        self.blocks.keys().copied().collect()
    }
}
