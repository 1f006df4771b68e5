//! Custom error types for the mapblock-codec crate.

use thiserror::Error;

/// The error type for every decoding operation in this crate.
///
/// All variants are terminal for the block that produced them: the input is static,
/// so decoding it again gives the same result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The raw block is zero bytes long and has no version tag.
    #[error("Empty block: no version byte present")]
    EmptyBlock,

    /// The version tag is below the oldest supported layout.
    #[error("Unsupported MapBlock version: {version}. Only version {minimum} and newer are supported.")]
    UnsupportedVersion { version: u8, minimum: u8 },

    /// The compressed payload is not a valid zstd frame.
    #[error("Malformed compressed frame: {0}")]
    MalformedFrame(String),

    /// Decompressing the payload would produce more than the configured bound.
    #[error("Decompressed payload exceeds the {limit} byte limit")]
    DecompressionOverflow { limit: usize },

    /// Fewer bytes remain than the header needs for the selected format mode.
    #[error("Truncated header: need {needed} bytes, but only {available} remain")]
    TruncatedHeader { needed: usize, available: usize },

    /// The name-id mapping uses a serialization version other than 0.
    #[error("Unsupported name-id mapping version: {0}")]
    UnsupportedMappingVersion(u8),

    /// The declared mapping count cannot fit in any block.
    #[error("Invalid name-id mapping count {count}: at most {max} entries are possible ({remaining} bytes remain)")]
    InvalidMappingCount { count: u16, max: usize, remaining: usize },

    /// A mapping field or record runs past the end of the buffer.
    #[error("Truncated mapping record {index} ({context}): need {needed} bytes, but only {available} remain")]
    TruncatedRecord {
        index: usize,
        context: &'static str,
        needed: usize,
        available: usize,
    },

    /// A node name is not valid UTF-8 and the strict name policy is active.
    #[error("Mapping record {index} (content id {content_id}) has a name that is not valid UTF-8")]
    InvalidName { index: usize, content_id: u16 },

    /// The declared content or params width is not one the format defines.
    #[error("Invalid node widths: content_width={content_width} (expected 1 or 2), params_width={params_width} (expected 2)")]
    InvalidWidths { content_width: u8, params_width: u8 },

    /// Fewer bytes remain than the node grid needs.
    #[error("Truncated node grid: need {needed} bytes, but only {available} remain")]
    TruncatedGrid { needed: usize, available: usize },
}

impl DecodeError {
    /// Returns `true` if the error means declared data ran past the end of the buffer.
    pub fn is_truncation(&self) -> bool {
        matches!(
            self,
            DecodeError::TruncatedHeader { .. }
                | DecodeError::TruncatedRecord { .. }
                | DecodeError::TruncatedGrid { .. }
        )
    }

    /// A short, stable name for the error kind, suitable for grouping scan failures.
    pub fn kind(&self) -> &'static str {
        match self {
            DecodeError::EmptyBlock => "EmptyBlock",
            DecodeError::UnsupportedVersion { .. } => "UnsupportedVersion",
            DecodeError::MalformedFrame(_) => "MalformedFrame",
            DecodeError::DecompressionOverflow { .. } => "DecompressionOverflow",
            DecodeError::TruncatedHeader { .. } => "TruncatedHeader",
            DecodeError::UnsupportedMappingVersion(_) => "UnsupportedMappingVersion",
            DecodeError::InvalidMappingCount { .. } => "InvalidMappingCount",
            DecodeError::TruncatedRecord { .. } => "TruncatedRecord",
            DecodeError::InvalidName { .. } => "InvalidName",
            DecodeError::InvalidWidths { .. } => "InvalidWidths",
            DecodeError::TruncatedGrid { .. } => "TruncatedGrid",
        }
    }
}

/// A convenience `Result` type alias using the crate's `DecodeError` type.
pub type Result<T> = std::result::Result<T, DecodeError>;
