//! Collision snapshots of the loaded scene.
//!
//! [`CollisionGrid`] holds the flags of one plane. A
//! [`CollisionDataProvider`] hands out the grid for a plane, or nothing when
//! no scene is loaded.

use std::fmt;
use std::sync::Arc;

use crate::flags::CollisionFlags;
use crate::geom::{Point, Range};

/// Edge length of a loaded scene, in tiles.
pub const SCENE_SIZE: i32 = 104;

/// Number of planes a scene can hold.
pub const MAX_PLANES: usize = 4;

// ---------------------------------------------------------------------------
// CollisionGrid
// ---------------------------------------------------------------------------

/// A square grid of [`CollisionFlags`], indexed by local scene coordinates.
///
/// Storage is row-major with row 0 at the south edge.
#[derive(Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawCollisionGrid"))]
pub struct CollisionGrid {
    size: i32,
    flags: Vec<CollisionFlags>,
}

/// Unchecked wire form of [`CollisionGrid`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawCollisionGrid {
    size: i32,
    flags: Vec<CollisionFlags>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawCollisionGrid> for CollisionGrid {
    type Error = MapError;

    fn try_from(raw: RawCollisionGrid) -> Result<Self, MapError> {
        let cells = usize::try_from(raw.size)
            .ok()
            .and_then(|n| n.checked_mul(n));
        if cells != Some(raw.flags.len()) {
            return Err(MapError::FlagCount {
                size: raw.size,
                len: raw.flags.len(),
            });
        }
        Ok(Self {
            size: raw.size,
            flags: raw.flags,
        })
    }
}

impl Default for CollisionGrid {
    fn default() -> Self {
        Self::new(SCENE_SIZE)
    }
}

impl CollisionGrid {
    /// Create an open grid with edge length `size`.
    pub fn new(size: i32) -> Self {
        let size = size.max(0);
        Self {
            size,
            flags: vec![CollisionFlags::OPEN; (size as usize) * (size as usize)],
        }
    }

    /// Edge length.
    #[inline]
    pub fn size(&self) -> i32 {
        self.size
    }

    /// The range of valid grid coordinates.
    #[inline]
    pub fn bounds(&self) -> Range {
        Range::square(self.size)
    }

    /// Whether `p` is a valid grid coordinate.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds().contains(p)
    }

    #[inline]
    fn index(&self, p: Point) -> Option<usize> {
        if !self.contains(p) {
            return None;
        }
        Some((p.y as usize) * (self.size as usize) + (p.x as usize))
    }

    /// Read the flags at `p`. Returns `None` if `p` is outside the grid.
    #[inline]
    pub fn at(&self, p: Point) -> Option<CollisionFlags> {
        self.index(p).map(|i| self.flags[i])
    }

    /// Replace the flags at `p`. No-op outside the grid.
    pub fn set(&mut self, p: Point, flags: CollisionFlags) {
        if let Some(i) = self.index(p) {
            self.flags[i] = flags;
        }
    }

    /// Add `flags` to the tile at `p`. No-op outside the grid.
    pub fn insert(&mut self, p: Point, flags: CollisionFlags) {
        if let Some(i) = self.index(p) {
            self.flags[i] |= flags;
        }
    }

    /// Make the tile at `p` impassable.
    pub fn block(&mut self, p: Point) {
        self.insert(p, CollisionFlags::BLOCK_OBJECT);
    }

    /// Place a wall on the `dir` edge of `p`.
    ///
    /// Both tiles sharing the edge get their facing bit, so the wall blocks
    /// in both directions. `dir` must be cardinal; other values are ignored.
    pub fn add_wall(&mut self, p: Point, dir: Point) {
        let (Some(out), Some(back)) = (
            CollisionFlags::edge(dir),
            CollisionFlags::edge(-dir),
        ) else {
            return;
        };
        self.insert(p, out);
        self.insert(p + dir, back);
    }

    /// Number of impassable tiles.
    pub fn blocked_count(&self) -> usize {
        self.flags.iter().filter(|f| f.is_impassable()).count()
    }

    // -----------------------------------------------------------------------
    // ASCII maps
    // -----------------------------------------------------------------------

    /// Parse a square ASCII map.
    ///
    /// `.` is an open tile and `#` an impassable one. The first line is the
    /// northern edge. Leading/trailing whitespace of the whole string is
    /// trimmed, but not of individual lines.
    pub fn from_ascii(s: &str) -> Result<Self, MapError> {
        let (width, height) = ascii_size(s)?;
        if width != height {
            return Err(MapError::NotSquare { width, height });
        }
        let mut grid = Self::new(width);
        grid.draw_ascii(Point::ZERO, s)?;
        Ok(grid)
    }

    /// Draw an ASCII pattern with its south-west corner at `at`.
    ///
    /// Uses the same characters as [`from_ascii`](Self::from_ascii). Open
    /// tiles in the pattern clear existing flags. The grid is left untouched
    /// on error.
    pub fn draw_ascii(&mut self, at: Point, s: &str) -> Result<(), MapError> {
        let (width, height) = ascii_size(s)?;
        let area = Range::new(0, 0, width, height).add(at);
        if area.intersect(self.bounds()) != area {
            return Err(MapError::OutOfBounds { area });
        }
        let mut tiles = Vec::with_capacity(area.len());
        for (row, line) in s.trim().lines().enumerate() {
            let y = height - 1 - row as i32;
            for (x, ch) in line.chars().enumerate() {
                let pos = Point::new(x as i32, y);
                let flags = match ch {
                    '.' => CollisionFlags::OPEN,
                    '#' => CollisionFlags::BLOCK_OBJECT,
                    _ => return Err(MapError::InvalidChar { ch, pos }),
                };
                tiles.push((at + pos, flags));
            }
        }
        for (p, flags) in tiles {
            self.set(p, flags);
        }
        Ok(())
    }
}

fn ascii_size(s: &str) -> Result<(i32, i32), MapError> {
    let s = s.trim();
    if s.is_empty() {
        return Err(MapError::Empty);
    }
    let mut width = None;
    let mut height = 0;
    for (row, line) in s.lines().enumerate() {
        let w = line.chars().count() as i32;
        match width {
            None => width = Some(w),
            Some(expected) if expected != w => {
                return Err(MapError::InconsistentWidth { line: row + 1 });
            }
            Some(_) => {}
        }
        height += 1;
    }
    Ok((width.unwrap_or(0), height))
}

impl fmt::Debug for CollisionGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CollisionGrid")
            .field("size", &self.size)
            .field("blocked", &self.blocked_count())
            .finish()
    }
}

/// Errors that can occur when parsing an ASCII map or loading grid data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MapError {
    /// The map contains no lines.
    Empty,
    /// A line is wider or narrower than the first one.
    InconsistentWidth { line: usize },
    /// A full map must be square.
    NotSquare { width: i32, height: i32 },
    /// A character other than `.` or `#`.
    InvalidChar { ch: char, pos: Point },
    /// The pattern does not fit inside the grid.
    OutOfBounds { area: Range },
    /// Stored grid data whose flag count is not `size * size`.
    FlagCount { size: i32, len: usize },
}

impl fmt::Display for MapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "map: empty"),
            Self::InconsistentWidth { line } => write!(f, "map: inconsistent width at line {line}"),
            Self::NotSquare { width, height } => {
                write!(f, "map: expected a square map, got {width}x{height}")
            }
            Self::InvalidChar { ch, pos } => {
                write!(f, "map contains invalid character \u{201c}{ch}\u{201d} at {pos}")
            }
            Self::OutOfBounds { area } => write!(f, "map: pattern {area} does not fit the grid"),
            Self::FlagCount { size, len } => {
                write!(f, "map: {len} flags do not fill a {size}x{size} grid")
            }
        }
    }
}

impl std::error::Error for MapError {}

// ---------------------------------------------------------------------------
// Providers
// ---------------------------------------------------------------------------

/// Source of collision snapshots for the loaded scene.
///
/// The returned grid must not change while a search borrows it.
pub trait CollisionDataProvider {
    /// The grid for `plane`, or `None` when no data is available.
    fn collision_grid(&self, plane: i32) -> Option<&CollisionGrid>;
}

impl<T: CollisionDataProvider + ?Sized> CollisionDataProvider for &T {
    fn collision_grid(&self, plane: i32) -> Option<&CollisionGrid> {
        (**self).collision_grid(plane)
    }
}

impl<T: CollisionDataProvider + ?Sized> CollisionDataProvider for Arc<T> {
    fn collision_grid(&self, plane: i32) -> Option<&CollisionGrid> {
        (**self).collision_grid(plane)
    }
}

/// In-memory collision data for every plane of one scene.
#[derive(Clone, Debug, Default)]
pub struct SceneCollision {
    planes: [Option<CollisionGrid>; MAX_PLANES],
}

impl SceneCollision {
    /// A scene with no planes loaded.
    pub fn new() -> Self {
        Self::default()
    }

    /// A scene with a single loaded plane.
    pub fn with_plane(plane: i32, grid: CollisionGrid) -> Self {
        let mut s = Self::new();
        s.set_plane(plane, grid);
        s
    }

    /// Load `grid` as the snapshot of `plane`. Planes outside
    /// `0..MAX_PLANES` are ignored.
    pub fn set_plane(&mut self, plane: i32, grid: CollisionGrid) {
        if let Some(slot) = Self::slot(plane).and_then(|i| self.planes.get_mut(i)) {
            *slot = Some(grid);
        }
    }

    /// Drop the snapshot of `plane`.
    pub fn clear_plane(&mut self, plane: i32) {
        if let Some(slot) = Self::slot(plane).and_then(|i| self.planes.get_mut(i)) {
            *slot = None;
        }
    }

    fn slot(plane: i32) -> Option<usize> {
        usize::try_from(plane).ok().filter(|&i| i < MAX_PLANES)
    }
}

impl CollisionDataProvider for SceneCollision {
    fn collision_grid(&self, plane: i32) -> Option<&CollisionGrid> {
        Self::slot(plane).and_then(|i| self.planes[i].as_ref())
    }
}
