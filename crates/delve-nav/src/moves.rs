//! Legal single-step move generation.

use delve_core::{Grid, Point, Tile};

use crate::traits::Pather;

/// Policy knobs for move generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveRules {
    /// Treat stairs tiles as obstacles.
    pub avoid_stairs: bool,
    /// Include the four diagonal moves.
    pub allow_diagonals: bool,
}

impl Default for MoveRules {
    fn default() -> Self {
        Self {
            avoid_stairs: false,
            allow_diagonals: true,
        }
    }
}

impl MoveRules {
    /// Default rules restricted to the four cardinal moves.
    pub fn cardinal() -> Self {
        Self {
            allow_diagonals: false,
            ..Self::default()
        }
    }
}

/// Cardinal step offsets in output order N, E, S, W.
const CARDINALS: [Point; 4] = [
    Point::new(0, -1),
    Point::new(1, 0),
    Point::new(0, 1),
    Point::new(-1, 0),
];

/// Diagonal step offsets in output order NE, NW, SE, SW, each paired with
/// the indices into [`CARDINALS`] of its two flanking cardinals.
const DIAGONALS: [(Point, usize, usize); 4] = [
    (Point::new(1, -1), 0, 1),
    (Point::new(-1, -1), 0, 3),
    (Point::new(1, 1), 2, 1),
    (Point::new(-1, 1), 2, 3),
];

/// Whether `p` may be stepped onto under `rules`. Out-of-bounds positions
/// are filtered here and never surfaced.
fn enterable(grid: &Grid, p: Point, rules: MoveRules) -> bool {
    match grid.at(p) {
        Some(t) => t.passable() && !(rules.avoid_stairs && t.is_stairs()),
        None => false,
    }
}

fn wall_at(grid: &Grid, p: Point) -> bool {
    grid.at(p).is_some_and(Tile::is_wall)
}

/// Append the legal single-step moves from `from` into `buf`.
///
/// Output order is fixed: N, E, S, W, then NE, NW, SE, SW when diagonals
/// are enabled; callers that need determinism may rely on it. Row 0 and
/// column 0 are legal destinations.
///
/// A diagonal move must not cut the corner between two walls: both flanking
/// cardinal tiles have to be non-wall. Stairs on a flank do not block the
/// diagonal; the stairs policy applies to destinations only.
pub fn push_moves(grid: &Grid, from: Point, rules: MoveRules, buf: &mut Vec<Point>) {
    for d in CARDINALS {
        let n = from + d;
        if enterable(grid, n, rules) {
            buf.push(n);
        }
    }
    if !rules.allow_diagonals {
        return;
    }
    for (d, c1, c2) in DIAGONALS {
        let n = from + d;
        if enterable(grid, n, rules)
            && !wall_at(grid, from + CARDINALS[c1])
            && !wall_at(grid, from + CARDINALS[c2])
        {
            buf.push(n);
        }
    }
}

/// Collect the legal single-step moves from `from`.
pub fn valid_moves(grid: &Grid, from: Point, rules: MoveRules) -> Vec<Point> {
    let mut buf = Vec::with_capacity(8);
    push_moves(grid, from, rules, &mut buf);
    buf
}

/// Move graph over a [`Grid`] under fixed [`MoveRules`].
pub struct GridMoves<'a> {
    grid: &'a Grid,
    rules: MoveRules,
}

impl<'a> GridMoves<'a> {
    /// Create a move graph for `grid` under `rules`.
    pub fn new(grid: &'a Grid, rules: MoveRules) -> Self {
        Self { grid, rules }
    }

    /// The rules this graph applies.
    pub fn rules(&self) -> MoveRules {
        self.rules
    }
}

impl Pather for GridMoves<'_> {
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        push_moves(self.grid, p, self.rules, buf);
    }
}
