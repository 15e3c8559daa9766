//! **delve-nav** — navigation algorithms for dungeon tile grids.
//!
//! This crate decides which adjacent cells are reachable from a position,
//! finds shortest-path distances and paths between cells, and translates a
//! geometric path into discrete compass actions:
//!
//! - **Move generation** with corner-cut prevention on diagonals
//!   ([`valid_moves`], [`GridMoves`])
//! - **Breadth-first search** for shortest distances and full paths
//!   ([`Pathfinder`])
//! - **Memoized distance queries** per grid snapshot ([`DistanceCache`])
//! - **Action translation** from paths to compass actions
//!   ([`actions_from_path`])
//! - **Distance metrics** for external planners ([`manhattan`],
//!   [`chebyshev`], [`euclidean`])
//!
//! All search runs through the [`Pather`] trait, so callers can substitute
//! their own move graph for the grid-backed [`GridMoves`].

mod action;
mod bfs;
mod cache;
mod distance;
mod moves;
mod traits;

pub use action::{Action, StepError, actions_from_path};
pub use bfs::{Pathfinder, SearchOutcome};
pub use cache::DistanceCache;
pub use distance::{chebyshev, euclidean, manhattan};
pub use moves::{GridMoves, MoveRules, push_moves, valid_moves};
pub use traits::Pather;
