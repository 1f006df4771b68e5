//! Decoder configuration.
//!
//! Everything that varies between callers (framing mode, memory bound, name
//! handling) is passed in here rather than held in process-wide state.

use super::models::{FormatMode, NamePolicy};

/// Default bound on the decompressed payload size (1 MiB).
///
/// A grid with two-byte content ids is 16 KiB; metadata rarely adds more than a few KiB.
pub const DEFAULT_MAX_OUTPUT_SIZE: usize = 1 << 20;

/// Settings for [`BlockDecoder`](crate::mapblock::BlockDecoder).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeOptions {
    /// Whether the payload carries a timestamp.
    pub mode: FormatMode,
    /// Largest decompressed payload accepted, in bytes.
    pub max_output_size: usize,
    /// Treatment of node names that are not valid UTF-8.
    pub name_policy: NamePolicy,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            mode: FormatMode::Disk,
            max_output_size: DEFAULT_MAX_OUTPUT_SIZE,
            name_policy: NamePolicy::Lossy,
        }
    }
}

impl DecodeOptions {
    pub fn with_mode(mut self, mode: FormatMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_max_output_size(mut self, max_output_size: usize) -> Self {
        self.max_output_size = max_output_size;
        self
    }

    pub fn with_name_policy(mut self, name_policy: NamePolicy) -> Self {
        self.name_policy = name_policy;
        self
    }
}
