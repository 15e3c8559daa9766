//! Breadth-first shortest paths with reusable scratch state.

use std::collections::VecDeque;

use delve_core::{Grid, Point};

use crate::traits::Pather;

/// Result of a shortest-distance query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SearchOutcome {
    /// Shortest hop count between the endpoints.
    Found(i32),
    /// No path exists. An expected outcome, not an error.
    Unreachable,
    /// The expansion budget ran out before the goal was seen.
    OutOfBudget,
}

impl SearchOutcome {
    /// The hop count, if a path was found.
    pub fn distance(self) -> Option<i32> {
        match self {
            Self::Found(d) => Some(d),
            _ => None,
        }
    }

    /// Whether a path was found.
    pub fn is_found(self) -> bool {
        matches!(self, Self::Found(_))
    }
}

#[derive(Clone)]
struct Node {
    dist: i32,
    parent: usize,
    generation: u32,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            dist: 0,
            parent: usize::MAX,
            generation: 0,
        }
    }
}

/// Breadth-first search engine for one grid extent.
///
/// Owns flat per-cell scratch state so repeated queries allocate nothing
/// after warm-up. Visited marks are generation-stamped: starting a query
/// bumps the counter instead of clearing the arrays.
///
/// A `Pathfinder` is sized to one grid; create a fresh one (together with
/// any [`DistanceCache`](crate::DistanceCache)) when the map changes.
pub struct Pathfinder {
    width: i32,
    height: i32,
    nodes: Vec<Node>,
    generation: u32,
    queue: VecDeque<usize>,
    nbuf: Vec<Point>,
    budget: Option<usize>,
    searches: u64,
}

impl Pathfinder {
    /// Create a searcher for a `width` x `height` extent.
    pub fn new(width: i32, height: i32) -> Self {
        let len = (width.max(0) as usize) * (height.max(0) as usize);
        Self {
            width,
            height,
            nodes: vec![Node::default(); len],
            generation: 0,
            queue: VecDeque::new(),
            nbuf: Vec::with_capacity(8),
            budget: None,
            searches: 0,
        }
    }

    /// Create a searcher sized to `grid`.
    pub fn for_grid(grid: &Grid) -> Self {
        Self::new(grid.width(), grid.height())
    }

    /// Cap the number of node expansions per query. `None` removes the cap.
    ///
    /// A capped query that runs out reports [`SearchOutcome::OutOfBudget`].
    pub fn set_budget(&mut self, budget: Option<usize>) {
        self.budget = budget;
    }

    /// How many searches have actually run (cache hits and the `from == to`
    /// shortcut don't count).
    pub fn searches(&self) -> u64 {
        self.searches
    }

    #[inline]
    fn idx(&self, p: Point) -> Option<usize> {
        if p.x < 0 || p.y < 0 || p.x >= self.width || p.y >= self.height {
            return None;
        }
        Some((p.y * self.width + p.x) as usize)
    }

    #[inline]
    fn point(&self, idx: usize) -> Point {
        Point::new(idx as i32 % self.width, idx as i32 / self.width)
    }

    /// Shortest hop count from `from` to `to` over the move graph.
    ///
    /// `from == to` is `Found(0)` without any search; endpoints outside the
    /// searcher's extent are `Unreachable`.
    pub fn distance<P: Pather>(&mut self, pather: &P, from: Point, to: Point) -> SearchOutcome {
        if from == to {
            return SearchOutcome::Found(0);
        }
        self.run(pather, from, to)
    }

    /// Shortest path from `from` to `to`, including both endpoints.
    ///
    /// `None` when no path exists or the expansion budget ran out.
    pub fn path<P: Pather>(&mut self, pather: &P, from: Point, to: Point) -> Option<Vec<Point>> {
        self.idx(from)?;
        let goal = self.idx(to)?;
        if from == to {
            return Some(vec![from]);
        }
        if !self.run(pather, from, to).is_found() {
            return None;
        }

        // Walk the parent chain back from the goal.
        let mut path = Vec::new();
        let mut ci = goal;
        while ci != usize::MAX {
            path.push(self.point(ci));
            ci = self.nodes[ci].parent;
        }
        path.reverse();
        Some(path)
    }

    /// FIFO breadth-first search with goal short-circuit. On `Found`, the
    /// goal node carries a valid parent chain for reconstruction.
    fn run<P: Pather>(&mut self, pather: &P, from: Point, to: Point) -> SearchOutcome {
        let Some(si) = self.idx(from) else {
            return SearchOutcome::Unreachable;
        };
        let Some(gi) = self.idx(to) else {
            return SearchOutcome::Unreachable;
        };
        self.searches += 1;

        // Bump generation to lazily invalidate all nodes.
        self.generation = self.generation.wrapping_add(1);
        let cur_gen = self.generation;

        self.nodes[si] = Node {
            dist: 0,
            parent: usize::MAX,
            generation: cur_gen,
        };
        self.queue.clear();
        self.queue.push_back(si);

        let mut expanded = 0usize;
        let mut nbuf = std::mem::take(&mut self.nbuf);

        let outcome = 'search: loop {
            let Some(ci) = self.queue.pop_front() else {
                break 'search SearchOutcome::Unreachable;
            };
            if let Some(limit) = self.budget {
                if expanded >= limit {
                    log::debug!("bfs budget of {limit} expansions exhausted before reaching {to}");
                    break 'search SearchOutcome::OutOfBudget;
                }
            }
            expanded += 1;

            let current_dist = self.nodes[ci].dist;
            let cp = self.point(ci);

            nbuf.clear();
            pather.neighbors(cp, &mut nbuf);

            for &np in nbuf.iter() {
                let Some(ni) = self.idx(np) else {
                    continue;
                };
                if self.nodes[ni].generation == cur_gen {
                    continue;
                }
                self.nodes[ni] = Node {
                    dist: current_dist + 1,
                    parent: ci,
                    generation: cur_gen,
                };
                if ni == gi {
                    // Goal sighted; a FIFO frontier makes this minimal.
                    break 'search SearchOutcome::Found(current_dist + 1);
                }
                self.queue.push_back(ni);
            }
        };

        self.nbuf = nbuf;
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::moves::{GridMoves, MoveRules};

    const OPEN: &str = "\
.....
.....
.....
.....
.....";

    const SPLIT: &str = "\
.....
-----
.....";

    const BENT: &str = "\
....|..
.--.|..
....|..
.|.....
.|..--.
.......";

    fn p(x: i32, y: i32) -> Point {
        Point::new(x, y)
    }

    #[test]
    fn identical_endpoints_are_distance_zero() {
        let g = Grid::from_lines(OPEN).unwrap();
        let gm = GridMoves::new(&g, MoveRules::default());
        let mut pf = Pathfinder::for_grid(&g);
        assert_eq!(pf.distance(&gm, p(2, 2), p(2, 2)), SearchOutcome::Found(0));
        // The shortcut runs no search at all.
        assert_eq!(pf.searches(), 0);
    }

    #[test]
    fn open_grid_diagonal_and_cardinal_distances() {
        let g = Grid::from_lines(OPEN).unwrap();
        let mut pf = Pathfinder::for_grid(&g);

        let diag = GridMoves::new(&g, MoveRules::default());
        assert_eq!(pf.distance(&diag, p(0, 0), p(4, 4)), SearchOutcome::Found(4));

        let card = GridMoves::new(&g, MoveRules::cardinal());
        assert_eq!(pf.distance(&card, p(0, 0), p(4, 4)), SearchOutcome::Found(8));
    }

    #[test]
    fn solid_wall_row_is_unreachable() {
        let g = Grid::from_lines(SPLIT).unwrap();
        let gm = GridMoves::new(&g, MoveRules::default());
        let mut pf = Pathfinder::for_grid(&g);
        assert_eq!(
            pf.distance(&gm, p(0, 0), p(0, 2)),
            SearchOutcome::Unreachable
        );
    }

    #[test]
    fn distance_is_symmetric() {
        let g = Grid::from_lines(BENT).unwrap();
        let gm = GridMoves::new(&g, MoveRules::default());
        let mut pf = Pathfinder::for_grid(&g);
        for (a, b) in [
            (p(0, 0), p(6, 5)),
            (p(3, 0), p(0, 5)),
            (p(2, 2), p(6, 0)),
        ] {
            let there = pf.distance(&gm, a, b);
            let back = pf.distance(&gm, b, a);
            assert!(there.is_found(), "{a} -> {b}");
            assert_eq!(there, back, "{a} <-> {b}");
        }
    }

    #[test]
    fn out_of_bounds_endpoints_are_unreachable() {
        let g = Grid::from_lines(OPEN).unwrap();
        let gm = GridMoves::new(&g, MoveRules::default());
        let mut pf = Pathfinder::for_grid(&g);
        assert_eq!(
            pf.distance(&gm, p(-1, 0), p(2, 2)),
            SearchOutcome::Unreachable
        );
        assert_eq!(
            pf.distance(&gm, p(2, 2), p(5, 5)),
            SearchOutcome::Unreachable
        );
    }

    #[test]
    fn budget_exhaustion_is_distinct_from_unreachable() {
        let g = Grid::from_lines(OPEN).unwrap();
        let gm = GridMoves::new(&g, MoveRules::default());
        let mut pf = Pathfinder::for_grid(&g);
        pf.set_budget(Some(2));
        assert_eq!(
            pf.distance(&gm, p(0, 0), p(4, 4)),
            SearchOutcome::OutOfBudget
        );
        pf.set_budget(None);
        assert_eq!(pf.distance(&gm, p(0, 0), p(4, 4)), SearchOutcome::Found(4));
    }

    #[test]
    fn path_endpoints_and_length() {
        let g = Grid::from_lines(OPEN).unwrap();
        let gm = GridMoves::new(&g, MoveRules::default());
        let mut pf = Pathfinder::for_grid(&g);

        let path = pf.path(&gm, p(0, 0), p(4, 4)).unwrap();
        assert_eq!(path.len(), 5); // distance 4, both endpoints included
        assert_eq!(path[0], p(0, 0));
        assert_eq!(path[4], p(4, 4));
        for pair in path.windows(2) {
            let d = pair[1] - pair[0];
            assert!(d.x.abs() <= 1 && d.y.abs() <= 1 && pair[1] != pair[0]);
        }
    }

    #[test]
    fn path_through_a_maze_is_shortest() {
        let g = Grid::from_lines(BENT).unwrap();
        let gm = GridMoves::new(&g, MoveRules::default());
        let mut pf = Pathfinder::for_grid(&g);
        let dist = pf.distance(&gm, p(0, 0), p(6, 5)).distance().unwrap();
        let path = pf.path(&gm, p(0, 0), p(6, 5)).unwrap();
        assert_eq!(path.len() as i32, dist + 1);
    }

    #[test]
    fn path_is_none_when_unreachable() {
        let g = Grid::from_lines(SPLIT).unwrap();
        let gm = GridMoves::new(&g, MoveRules::default());
        let mut pf = Pathfinder::for_grid(&g);
        assert_eq!(pf.path(&gm, p(0, 0), p(0, 2)), None);
    }

    #[test]
    fn trivial_path_is_the_single_position() {
        let g = Grid::from_lines(OPEN).unwrap();
        let gm = GridMoves::new(&g, MoveRules::default());
        let mut pf = Pathfinder::for_grid(&g);
        assert_eq!(pf.path(&gm, p(3, 1), p(3, 1)), Some(vec![p(3, 1)]));
    }

    #[test]
    fn scratch_state_survives_repeated_queries() {
        let g = Grid::from_lines(BENT).unwrap();
        let gm = GridMoves::new(&g, MoveRules::default());
        let mut pf = Pathfinder::for_grid(&g);
        let first = pf.distance(&gm, p(0, 0), p(6, 5));
        for _ in 0..10 {
            assert_eq!(pf.distance(&gm, p(0, 0), p(6, 5)), first);
        }
        assert_eq!(pf.searches(), 11);
    }
}
