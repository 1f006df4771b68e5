//! MapBlock header parsing.
//!
//! # Header Structure
//! ```text
//! [1 byte]  Flags (bit 0: underground, bit 3 clear: day/night lighting differs)
//! [2 bytes] Lighting-complete mask (big-endian u16)
//! [4 bytes] Timestamp (big-endian u32), disk format only
//! ```

use log::trace;

use crate::mapblock::types::{
    error::{DecodeError, Result},
    models::{DecodedHeader, FormatMode},
};
use crate::mapblock::utils;

const FLAG_UNDERGROUND: u8 = 0x01;
const FLAG_DAY_NIGHT_SAME: u8 = 0x08;

/// Number of header bytes in the given format mode.
pub fn header_len(mode: FormatMode) -> usize {
    match mode {
        FormatMode::Disk => 7,
        FormatMode::Network => 3,
    }
}

/// Parses the header from the start of the decompressed payload and advances the cursor.
///
/// The timestamp is read only in [`FormatMode::Disk`]; in network mode those bytes
/// belong to the name-id mapping.
pub fn parse(reader: &mut &[u8], mode: FormatMode) -> Result<DecodedHeader> {
    let needed = header_len(mode);
    let available = reader.len();
    let truncated = || DecodeError::TruncatedHeader { needed, available };
    if available < needed {
        return Err(truncated());
    }

    let flags = utils::read_u8(reader).ok_or_else(truncated)?;
    let lighting_complete = utils::read_u16(reader).ok_or_else(truncated)?;
    let timestamp = match mode {
        FormatMode::Disk => Some(utils::read_u32(reader).ok_or_else(truncated)?),
        FormatMode::Network => None,
    };

    let header = DecodedHeader {
        flags,
        underground: flags & FLAG_UNDERGROUND != 0,
        day_night_differs: flags & FLAG_DAY_NIGHT_SAME == 0,
        lighting_complete,
        timestamp,
    };
    trace!(
        "Header: flags={:#04x}, lighting_complete={:#06x}, timestamp={:?} ({} mode)",
        flags,
        lighting_complete,
        timestamp,
        mode
    );
    Ok(header)
}
