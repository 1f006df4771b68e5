//! Name-id mapping (per-block node dictionary) parsing.
//!
//! # Mapping Structure
//! ```text
//! [1 byte]  Serialization version (must be 0)
//! [2 bytes] Entry count (big-endian u16)
//! repeated count times:
//!   [2 bytes] Content id (big-endian u16)
//!   [2 bytes] Name length (big-endian u16)
//!   [N bytes] Name (UTF-8)
//! ```

use std::borrow::Cow;

use encoding_rs::UTF_8;
use log::{debug, trace};

use crate::mapblock::types::{
    error::{DecodeError, Result},
    models::{NameIdMapping, NamePolicy, NODE_COUNT},
};
use crate::mapblock::utils;

/// The only mapping serialization version in use.
pub const MAPPING_VERSION: u8 = 0;

/// Most entries a mapping can carry: one per distinct node in the block.
///
/// Only counts above this are [`DecodeError::InvalidMappingCount`]. A count within it
/// that needs more bytes than remain fails later as [`DecodeError::TruncatedRecord`].
pub const MAX_MAPPING_ENTRIES: usize = NODE_COUNT;

/// Parses the name-id mapping that follows the header and advances the cursor.
///
/// The count is checked against [`MAX_MAPPING_ENTRIES`] before any record is read.
/// A plausible count whose records run past the buffer fails at the first short
/// record with [`DecodeError::TruncatedRecord`].
pub fn parse(reader: &mut &[u8], policy: NamePolicy) -> Result<NameIdMapping> {
    let version = read_field(reader, 0, "mapping version", 1, utils::read_u8)?;
    if version != MAPPING_VERSION {
        return Err(DecodeError::UnsupportedMappingVersion(version));
    }

    let count = read_field(reader, 0, "mapping count", 2, utils::read_u16)?;
    if count as usize > MAX_MAPPING_ENTRIES {
        return Err(DecodeError::InvalidMappingCount {
            count,
            max: MAX_MAPPING_ENTRIES,
            remaining: reader.len(),
        });
    }
    trace!("Name-id mapping: {} entries", count);

    let mut mapping = NameIdMapping::new();
    for index in 0..count as usize {
        let content_id = read_field(reader, index, "content id", 2, utils::read_u16)?;
        let name_len = read_field(reader, index, "name length", 2, utils::read_u16)? as usize;
        let available = reader.len();
        let name_bytes = utils::take(reader, name_len).ok_or(DecodeError::TruncatedRecord {
            index,
            context: "name",
            needed: name_len,
            available,
        })?;

        let name = decode_name(name_bytes, policy, index, content_id)?;
        trace!("  {} -> {:?}", content_id, name);
        if let Some(previous) = mapping.insert(content_id, name) {
            debug!(
                "Content id {} mapped twice; replacing {:?} with the later name",
                content_id, previous
            );
        }
    }

    debug!("Name-id mapping parsed: {} distinct ids", mapping.len());
    Ok(mapping)
}

/// Reads one fixed-width field, reporting a shortfall as a truncated record.
fn read_field<T>(
    reader: &mut &[u8],
    index: usize,
    context: &'static str,
    width: usize,
    read: impl FnOnce(&mut &[u8]) -> Option<T>,
) -> Result<T> {
    let available = reader.len();
    read(reader).ok_or(DecodeError::TruncatedRecord {
        index,
        context,
        needed: width,
        available,
    })
}

fn decode_name(bytes: &[u8], policy: NamePolicy, index: usize, content_id: u16) -> Result<String> {
    match policy {
        NamePolicy::Lossy => {
            let (name, had_errors) = UTF_8.decode_without_bom_handling(bytes);
            if had_errors {
                debug!(
                    "Mapping record {} (content id {}) has invalid UTF-8; replaced",
                    index, content_id
                );
            }
            Ok(name.into_owned())
        }
        NamePolicy::Strict => UTF_8
            .decode_without_bom_handling_and_without_replacement(bytes)
            .map(Cow::into_owned)
            .ok_or(DecodeError::InvalidName { index, content_id }),
    }
}
