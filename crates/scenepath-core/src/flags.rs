//! Per-tile movement blocking: [`CollisionFlags`].

use std::fmt;
use std::ops::{BitAnd, BitOr, BitOrAssign};

use crate::geom::Point;

/// Bitmask describing how movement through a single tile is blocked.
///
/// Directional bits block crossing the named edge of the tile, in either
/// direction. Any of the full-block bits makes the tile impassable.
/// Values match the client's collision data layout.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CollisionFlags(pub u32);

impl CollisionFlags {
    pub const OPEN: Self = Self(0);
    pub const BLOCK_NORTH: Self = Self(0x2);
    pub const BLOCK_EAST: Self = Self(0x8);
    pub const BLOCK_SOUTH: Self = Self(0x20);
    pub const BLOCK_WEST: Self = Self(0x80);
    pub const BLOCK_OBJECT: Self = Self(0x100);
    pub const BLOCK_FLOOR_DECORATION: Self = Self(0x40000);
    pub const BLOCK_FLOOR: Self = Self(0x200000);

    /// Union of every bit that makes a tile impassable.
    pub const FULL: Self =
        Self(Self::BLOCK_OBJECT.0 | Self::BLOCK_FLOOR_DECORATION.0 | Self::BLOCK_FLOOR.0);

    /// Whether this mask contains all the bits from `other`.
    #[inline]
    pub const fn contains(self, other: Self) -> bool {
        (self.0 & other.0) == other.0
    }

    /// Whether this mask shares at least one bit with `other`.
    #[inline]
    pub const fn intersects(self, other: Self) -> bool {
        (self.0 & other.0) != 0
    }

    /// Whether the mask is empty.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Whether nothing may enter this tile.
    #[inline]
    pub const fn is_impassable(self) -> bool {
        self.intersects(Self::FULL)
    }

    /// The edge-blocking bit for a cardinal unit step, or `None` for
    /// diagonals and the zero step.
    pub const fn edge(dir: Point) -> Option<Self> {
        match (dir.x, dir.y) {
            (0, 1) => Some(Self::BLOCK_NORTH),
            (1, 0) => Some(Self::BLOCK_EAST),
            (0, -1) => Some(Self::BLOCK_SOUTH),
            (-1, 0) => Some(Self::BLOCK_WEST),
            _ => None,
        }
    }

    /// Whether the edge of this tile facing cardinal `dir` is blocked.
    ///
    /// Non-cardinal directions are never reported as blocked.
    #[inline]
    pub fn blocks(self, dir: Point) -> bool {
        match Self::edge(dir) {
            Some(bit) => self.intersects(bit),
            None => false,
        }
    }
}

impl BitOr for CollisionFlags {
    type Output = Self;
    #[inline]
    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for CollisionFlags {
    #[inline]
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for CollisionFlags {
    type Output = Self;
    #[inline]
    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

impl fmt::Debug for CollisionFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CollisionFlags({:#x})", self.0)
    }
}
