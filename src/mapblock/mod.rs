//! Core MapBlock decoding module

pub mod codec;
pub mod decoder;
pub mod format;
pub mod scan;
pub mod store;
pub mod types;
mod utils;

pub use codec::position;
pub use decoder::{decode_block, BlockDecoder};
pub use scan::{BlockScanner, ScanFailure, ScanReport};
pub use store::{BlockStore, MemoryStore};
pub use types::error::{DecodeError, Result};
pub use types::models::*;
pub use types::options::{DecodeOptions, DEFAULT_MAX_OUTPUT_SIZE};
