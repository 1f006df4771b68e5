//! Batch decoding over a [`BlockStore`].
//!
//! Blocks are fetched and decoded independently on the rayon pool. A bad block is
//! recorded with its key, position and error, and the scan moves on; whether that
//! should abort anything is the caller's decision.

use std::collections::HashMap;

use log::{info, warn};
use rayon::prelude::{IntoParallelIterator, ParallelIterator};

use super::decoder::BlockDecoder;
use super::store::BlockStore;
use super::types::error::DecodeError;
use super::types::models::{BlockKey, DecodedBlock, WorldPosition};
use super::types::options::DecodeOptions;

/// A block that could not be decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanFailure {
    pub key: BlockKey,
    pub position: WorldPosition,
    pub error: DecodeError,
}

/// Totals from one scan.
#[derive(Debug, Clone, Default)]
pub struct ScanReport {
    /// Number of blocks decoded successfully.
    pub decoded: usize,
    /// Requested keys the store had nothing for.
    pub missing: Vec<BlockKey>,
    /// Failures, ordered by key.
    pub failures: Vec<ScanFailure>,
    /// Nodes per resolved name across every decoded block.
    pub node_counts: HashMap<String, u64>,
}

impl ScanReport {
    /// Node names with their totals, most frequent first (ties by name).
    pub fn sorted_node_counts(&self) -> Vec<(&str, u64)> {
        let mut counts: Vec<(&str, u64)> = self
            .node_counts
            .iter()
            .map(|(name, count)| (name.as_str(), *count))
            .collect();
        counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        counts
    }

    /// Failure counts per error kind.
    pub fn failure_kinds(&self) -> HashMap<&'static str, usize> {
        let mut kinds = HashMap::new();
        for failure in &self.failures {
            *kinds.entry(failure.error.kind()).or_insert(0) += 1;
        }
        kinds
    }

    fn merge(mut self, other: ScanReport) -> ScanReport {
        self.decoded += other.decoded;
        self.missing.extend(other.missing);
        self.failures.extend(other.failures);
        for (name, count) in other.node_counts {
            *self.node_counts.entry(name).or_insert(0) += count;
        }
        self
    }

    fn from_block(block: &DecodedBlock) -> ScanReport {
        let node_counts = block
            .node_counts()
            .into_iter()
            .map(|(name, count)| (name.to_string(), count as u64))
            .collect();
        ScanReport {
            decoded: 1,
            node_counts,
            ..ScanReport::default()
        }
    }
}

/// Decodes many stored blocks in parallel.
#[derive(Debug, Clone, Copy, Default)]
pub struct BlockScanner {
    decoder: BlockDecoder,
}

impl BlockScanner {
    pub fn new(options: DecodeOptions) -> Self {
        Self {
            decoder: BlockDecoder::new(options),
        }
    }

    /// Decodes every block the store holds.
    pub fn scan<S: BlockStore>(&self, store: &S) -> ScanReport {
        self.scan_keys(store, store.keys())
    }

    /// Decodes the blocks under `keys`.
    pub fn scan_keys<S: BlockStore>(&self, store: &S, keys: Vec<BlockKey>) -> ScanReport {
        info!("Scanning {} blocks", keys.len());

        let mut report = keys
            .into_par_iter()
            .map(|key| self.scan_one(store, key))
            .reduce(ScanReport::default, ScanReport::merge);

        report.missing.sort_unstable();
        report.failures.sort_by_key(|failure| failure.key);

        info!(
            "Scan finished: {} decoded, {} failed, {} missing, {} node types",
            report.decoded,
            report.failures.len(),
            report.missing.len(),
            report.node_counts.len()
        );
        report
    }

    fn scan_one<S: BlockStore>(&self, store: &S, key: BlockKey) -> ScanReport {
        let Some(raw) = store.get(key) else {
            return ScanReport {
                missing: vec![key],
                ..ScanReport::default()
            };
        };

        match self.decoder.decode(&raw) {
            Ok(block) => ScanReport::from_block(&block),
            Err(error) => {
                let position = key.position();
                warn!("Block {} at {} failed to decode: {}", key, position, error);
                ScanReport {
                    failures: vec![ScanFailure {
                        key,
                        position,
                        error,
                    }],
                    ..ScanReport::default()
                }
            }
        }
    }
}
