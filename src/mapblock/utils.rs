//! Low-level byte reading utilities
//!
//! Every reader takes a `&mut &[u8]` cursor and advances it past what it consumed.
//! They return `None` when the slice is too short so each parser can report the
//! shortfall with its own error variant.

use byteorder::{BigEndian, ReadBytesExt};

pub fn read_u8(reader: &mut &[u8]) -> Option<u8> {
    reader.read_u8().ok()
}

/// Read a big-endian u16.
pub fn read_u16(reader: &mut &[u8]) -> Option<u16> {
    reader.read_u16::<BigEndian>().ok()
}

/// Read a big-endian u32.
pub fn read_u32(reader: &mut &[u8]) -> Option<u32> {
    reader.read_u32::<BigEndian>().ok()
}

/// Split `len` bytes off the front of the cursor.
pub fn take<'a>(reader: &mut &'a [u8], len: usize) -> Option<&'a [u8]> {
    if reader.len() < len {
        return None;
    }
    let (head, tail) = reader.split_at(len);
    *reader = tail;
    Some(head)
}
