use log::{debug, trace};

use super::codec::compression;
use super::format::{header, mapping, nodes};
use super::types::error::{DecodeError, Result};
use super::types::models::*;
use super::types::options::DecodeOptions;

/// The main decoder for compressed MapBlocks.
///
/// Holds only its configuration; every call to [`decode`](Self::decode) works on the
/// given bytes alone, so one decoder can be shared freely across threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct BlockDecoder {
    options: DecodeOptions,
}

impl BlockDecoder {
    pub fn new(options: DecodeOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &DecodeOptions {
        &self.options
    }

    /// Decode a raw block as stored: one version byte followed by a zstd frame.
    ///
    /// # Errors
    /// Returns the first structural violation found:
    /// - Empty input or a version below 29 (checked before decompressing)
    /// - A malformed frame or one that decompresses past `max_output_size`
    /// - A truncated header, mapping or grid
    /// - An unsupported mapping version, impossible mapping count or invalid widths
    pub fn decode(&self, raw: &[u8]) -> Result<DecodedBlock> {
        let (&version, payload) = raw.split_first().ok_or(DecodeError::EmptyBlock)?;
        if version < MIN_SUPPORTED_VERSION {
            return Err(DecodeError::UnsupportedVersion {
                version,
                minimum: MIN_SUPPORTED_VERSION,
            });
        }
        trace!("Decoding version {} block: {} compressed bytes", version, payload.len());

        let decompressed = compression::decompress_payload(payload, self.options.max_output_size)?;
        self.decode_payload(&decompressed)
    }

    /// Decode an already decompressed payload.
    ///
    /// This is the part of [`decode`](Self::decode) after decompression, for callers
    /// that obtain payloads some other way.
    pub fn decode_payload(&self, payload: &[u8]) -> Result<DecodedBlock> {
        let mut reader = payload;

        let header = header::parse(&mut reader, self.options.mode)?;
        let mapping = mapping::parse(&mut reader, self.options.name_policy)?;
        let grid = nodes::parse(&mut reader)?;

        let trailing_len = reader.len();
        debug!(
            "Block decoded: {} mapping entries, {} trailing bytes unparsed",
            mapping.len(),
            trailing_len
        );

        Ok(DecodedBlock {
            header,
            mapping,
            grid,
            trailing_len,
        })
    }
}

/// Decodes one raw block with the given framing mode and output bound.
///
/// Shorthand for a [`BlockDecoder`] built from those options with the default
/// (lossy) name policy.
pub fn decode_block(raw: &[u8], mode: FormatMode, max_output_size: usize) -> Result<DecodedBlock> {
    let options = DecodeOptions::default()
        .with_mode(mode)
        .with_max_output_size(max_output_size);
    BlockDecoder::new(options).decode(raw)
}
