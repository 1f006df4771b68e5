//! Decompression of MapBlock payloads.
//!
//! From version 29 on, everything after the version byte is a single zstd frame.
//! The decompressed size is not trusted: output is capped by the caller's bound.

use std::io::Read;

use log::trace;
use zstd::stream::read::Decoder as ZstdDecoder;

use crate::mapblock::types::error::{DecodeError, Result};

/// Magic number that opens every zstd frame (0xFD2FB528, little-endian on the wire).
pub const ZSTD_MAGIC: [u8; 4] = [0x28, 0xB5, 0x2F, 0xFD];

/// Decompresses a zstd payload, refusing to produce more than `max_output_size` bytes.
///
/// # Validation
/// The payload must start with [`ZSTD_MAGIC`]. The stream must decode cleanly to its
/// end; trailing garbage or a cut-off frame is reported as malformed.
///
/// # Errors
/// - [`DecodeError::MalformedFrame`] for a bad magic or corrupt stream.
/// - [`DecodeError::DecompressionOverflow`] if the output would exceed the bound.
pub fn decompress_payload(payload: &[u8], max_output_size: usize) -> Result<Vec<u8>> {
    if payload.len() < ZSTD_MAGIC.len() {
        return Err(DecodeError::MalformedFrame(format!(
            "payload is {} bytes, too short for a frame header",
            payload.len()
        )));
    }
    if payload[..ZSTD_MAGIC.len()] != ZSTD_MAGIC {
        return Err(DecodeError::MalformedFrame(format!(
            "bad frame magic {}, expected {}",
            hex::encode(&payload[..ZSTD_MAGIC.len()]),
            hex::encode(ZSTD_MAGIC)
        )));
    }

    trace!(
        "Decompressing zstd payload: {} bytes (limit {} bytes)",
        payload.len(),
        max_output_size
    );

    let decoder = ZstdDecoder::with_buffer(payload).map_err(|e| {
        DecodeError::MalformedFrame(format!("failed to start zstd decoder: {}", e))
    })?;

    // One byte past the limit is enough to tell "exactly at the bound" from "over it".
    // `usize::MAX` means no bound and must not wrap.
    let read_limit = (max_output_size as u64).saturating_add(1);
    let mut output = Vec::new();
    decoder
        .take(read_limit)
        .read_to_end(&mut output)
        .map_err(|e| DecodeError::MalformedFrame(format!("zstd decompression failed: {}", e)))?;

    if output.len() > max_output_size {
        return Err(DecodeError::DecompressionOverflow {
            limit: max_output_size,
        });
    }

    trace!("Decompressed {} -> {} bytes", payload.len(), output.len());
    Ok(output)
}
