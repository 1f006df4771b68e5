//! Node grid parsing.
//!
//! # Grid Structure
//! ```text
//! [1 byte] Content width (1 or 2)
//! [1 byte] Params width (always 2)
//! repeated 4096 times, index = z*256 + y*16 + x:
//!   [1|2 bytes] Content id (big-endian when 2 bytes)
//!   [1 byte]    param1
//!   [1 byte]    param2
//! ```
//!
//! Content ids are not resolved here; ids missing from the mapping are kept as-is.

use byteorder::{BigEndian, ByteOrder};
use log::debug;

use crate::mapblock::types::{
    error::{DecodeError, Result},
    models::{ContentWidth, Node, NodeGrid, NODE_COUNT},
};
use crate::mapblock::utils;

/// The only params width the format defines (param1 + param2).
pub const PARAMS_WIDTH: u8 = 2;

/// Parses the widths and the 4096 node entries, advancing the cursor past them.
///
/// Both widths are validated before any node byte is consumed.
pub fn parse(reader: &mut &[u8]) -> Result<NodeGrid> {
    let available = reader.len();
    let widths = utils::take(reader, 2).ok_or(DecodeError::TruncatedGrid {
        needed: 2,
        available,
    })?;
    let (content_width, params_width) = (widths[0], widths[1]);

    let width = match ContentWidth::try_from(content_width) {
        Ok(width) if params_width == PARAMS_WIDTH => width,
        _ => {
            return Err(DecodeError::InvalidWidths {
                content_width,
                params_width,
            });
        }
    };

    let entry_len = width.bytes() + PARAMS_WIDTH as usize;
    let needed = NODE_COUNT * entry_len;
    let available = reader.len();
    let data = utils::take(reader, needed)
        .ok_or(DecodeError::TruncatedGrid { needed, available })?;
    debug!(
        "Node grid: content_width={}, {} bytes of node data",
        content_width, needed
    );

    let nodes = data
        .chunks_exact(entry_len)
        .map(|entry| node_from_entry(entry, width))
        .collect();
    NodeGrid::from_nodes(nodes).ok_or(DecodeError::TruncatedGrid { needed, available })
}

/// Decodes one `entry_len`-byte grid entry.
fn node_from_entry(entry: &[u8], width: ContentWidth) -> Node {
    let content_id = match width {
        ContentWidth::One => u16::from(entry[0]),
        ContentWidth::Two => BigEndian::read_u16(entry),
    };
    let params = &entry[width.bytes()..];
    Node {
        content_id,
        param1: params[0],
        param2: params[1],
    }
}
