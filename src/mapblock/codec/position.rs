//! Block position ⇄ store key packing.
//!
//! Each coordinate is biased by +2048 into an unsigned 12-bit field:
//!
//! ```text
//! key = (z + 2048) << 24 | (y + 2048) << 12 | (x + 2048)
//! ```

use crate::mapblock::types::models::{BlockKey, WorldPosition, POSITION_MAX, POSITION_MIN};

const BIAS: i64 = 2048;
const FIELD_BITS: u32 = 12;
const FIELD_MASK: i64 = (1 << FIELD_BITS) - 1;

/// Packs block coordinates into a store key.
///
/// # Panics
/// If any coordinate is outside [-2048, 2047].
pub fn encode(x: i16, y: i16, z: i16) -> BlockKey {
    for (axis, value) in [("x", x), ("y", y), ("z", z)] {
        assert!(
            (POSITION_MIN..=POSITION_MAX).contains(&value),
            "{} coordinate {} outside [{}, {}]",
            axis,
            value,
            POSITION_MIN,
            POSITION_MAX
        );
    }
    let field = |v: i16| (v as i64 + BIAS) & FIELD_MASK;
    BlockKey(field(z) << (2 * FIELD_BITS) | field(y) << FIELD_BITS | field(x))
}

/// Unpacks a store key into block coordinates.
///
/// Only the low 36 bits are read; keys produced by [`encode`] round-trip exactly.
pub fn decode(key: BlockKey) -> (i16, i16, i16) {
    let field = |shift: u32| (((key.0 >> shift) & FIELD_MASK) - BIAS) as i16;
    (field(0), field(FIELD_BITS), field(2 * FIELD_BITS))
}

impl WorldPosition {
    /// Store key of this position.
    pub fn key(&self) -> BlockKey {
        encode(self.x, self.y, self.z)
    }
}

impl BlockKey {
    /// Position this key addresses.
    pub fn position(&self) -> WorldPosition {
        let (x, y, z) = decode(*self);
        WorldPosition { x, y, z }
    }
}

impl From<WorldPosition> for BlockKey {
    fn from(position: WorldPosition) -> Self {
        position.key()
    }
}
