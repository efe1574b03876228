//! # Sliding-tile puzzle search
//!
//! Solves the N×N sliding-tile puzzle by searching the graph of board
//! configurations, where two boards are adjacent when they differ by sliding one
//! tile into the blank.
//!
//! Three solvers share the same board model, Manhattan-distance heuristic and
//! parent-linked search nodes:
//! - breadth-first search, bounded by a wall-clock budget;
//! - A*, ordered by `g + h` with first-in first-out tie-breaking;
//! - IDA*, repeated depth-first probes under a rising cost threshold.
//!
//! Every solver returns a [`SearchResult`](solver::SearchResult); "found",
//! "no solution" and "timed out" are all plain values of
//! [`Outcome`](solver::Outcome). The solvers never check solvability up front.
//!
//! ```
//! use slide_puzzle_search::puzzle::Board;
//! use slide_puzzle_search::solver::{AStarSolver, Solver};
//!
//! let start: Board = "3,3,123456078".parse().unwrap();
//! let goal = Board::solved(3).unwrap();
//! let result = AStarSolver::new(start.clone(), goal.clone()).solve();
//!
//! let path = result.path().unwrap();
//! assert_eq!(path.first(), Some(&start));
//! assert_eq!(path.last(), Some(&goal));
//! assert_eq!(result.move_count(), Some(2));
//! ```

pub mod clock;
pub mod config;
pub mod error;
pub mod node;
pub mod puzzle;
pub mod report;
pub mod solver;
pub mod tile;
pub mod traits;
pub mod util;

mod test;

pub use error::{PuzzleError, Result};
