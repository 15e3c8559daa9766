use delve_core::Point;

/// Move-graph interface for search algorithms.
pub trait Pather {
    /// Append the positions reachable in one step from `p` into `buf`.
    /// The caller clears `buf` before calling.
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>);
}
