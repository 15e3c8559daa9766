//! Immutable dungeon map snapshots.

use std::fmt;

use crate::geom::Point;
use crate::tile::{Tile, TileKind};

/// Largest accepted map side. Keeps flat indices well inside `i32` range.
const MAX_DIM: usize = 4096;

/// Error when ingesting a malformed map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// The map has no rows or no columns.
    Empty,
    /// A row's width differs from the first row's.
    Ragged {
        row: usize,
        len: usize,
        expected: usize,
    },
    /// A dimension exceeds the supported maximum.
    TooLarge { width: usize, height: usize },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "grid has no cells"),
            Self::Ragged { row, len, expected } => {
                write!(f, "grid row {row} has width {len}, expected {expected}")
            }
            Self::TooLarge { width, height } => {
                write!(f, "grid of {width}x{height} exceeds the supported size")
            }
        }
    }
}

impl std::error::Error for GridError {}

/// An immutable rectangular grid of tile codes.
///
/// A `Grid` is the snapshot of one dungeon level and never changes after
/// construction. State derived from it (distance caches, pathfinders) must
/// be discarded together with it when the level changes.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    cells: Vec<Tile>,
    width: i32,
    height: i32,
}

impl Grid {
    /// Build a grid from rows of raw tile codes.
    ///
    /// Rows must be non-empty and all of the same width; anything else is a
    /// [`GridError`].
    pub fn from_rows(rows: &[Vec<i32>]) -> Result<Self, GridError> {
        if rows.is_empty() || rows[0].is_empty() {
            return Err(GridError::Empty);
        }
        let expected = rows[0].len();
        for (row, r) in rows.iter().enumerate() {
            if r.len() != expected {
                return Err(GridError::Ragged {
                    row,
                    len: r.len(),
                    expected,
                });
            }
        }
        if expected > MAX_DIM || rows.len() > MAX_DIM {
            return Err(GridError::TooLarge {
                width: expected,
                height: rows.len(),
            });
        }
        let cells = rows
            .iter()
            .flat_map(|r| r.iter().map(|&c| Tile::new(c)))
            .collect();
        Ok(Self {
            cells,
            width: expected as i32,
            height: rows.len() as i32,
        })
    }

    /// Build a grid from newline-separated rows of display symbols.
    ///
    /// Surrounding blank lines and whitespace are trimmed; the remaining
    /// lines must all have the same width.
    pub fn from_lines(s: &str) -> Result<Self, GridError> {
        let rows: Vec<Vec<i32>> = s
            .trim()
            .lines()
            .map(|line| line.chars().map(|c| c as i32).collect())
            .collect();
        Self::from_rows(&rows)
    }

    /// Width of the grid in cells.
    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Height of the grid in cells.
    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Size as a point (width, height).
    #[inline]
    pub fn size(&self) -> Point {
        Point::new(self.width, self.height)
    }

    /// Whether `p` lies within the grid. Coordinate 0 is inside.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= 0 && p.y >= 0 && p.x < self.width && p.y < self.height
    }

    /// The tile at `p`, or `None` when out of bounds.
    #[inline]
    pub fn at(&self, p: Point) -> Option<Tile> {
        if !self.contains(p) {
            return None;
        }
        Some(self.cells[(p.y * self.width + p.x) as usize])
    }

    /// Row-major iterator over `(Point, Tile)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Point, Tile)> + '_ {
        let w = self.width;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &t)| (Point::new(i as i32 % w, i as i32 / w), t))
    }

    /// The first cell of the given kind in row-major order.
    pub fn find(&self, kind: TileKind) -> Option<Point> {
        self.iter().find(|&(_, t)| t.kind() == kind).map(|(p, _)| p)
    }

    /// Position of the player marker.
    ///
    /// The ingestion contract guarantees a player on every level; `None`
    /// here signals a violated precondition on the caller's side.
    pub fn player(&self) -> Option<Point> {
        self.find(TileKind::Player)
    }

    /// Position of the stairs, if the level has any.
    pub fn stairs(&self) -> Option<Point> {
        self.find(TileKind::Stairs)
    }
}
