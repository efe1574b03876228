//! The three interchangeable search strategies.
//!
//! - [`BfsSolver`]: FIFO frontier, visited set, wall-clock budget.
//! - [`AStarSolver`]: frontier ordered by `f = g + h`, ties in insertion order.
//! - [`IdaStarSolver`]: depth-first search bounded by an `f` threshold that is
//!   raised to the smallest rejected cost after every round.
//!
//! All of them share the board model from [`crate::puzzle`], the parent-linked
//! [`SearchNode`](crate::node::SearchNode) for path reconstruction, and report
//! a [`SearchResult`].

mod astar;
mod bfs;
mod idastar;

use std::fmt;
use std::time::Duration;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::config::SolverConfig;
use crate::puzzle::{Board, Direction};

pub use astar::AStarSolver;
pub use bfs::BfsSolver;
pub use idastar::IdaStarSolver;

/// How a search ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Boards from start to goal, both inclusive.
    Found(Vec<Board>),
    /// The reachable space was exhausted without meeting the goal.
    NoSolution,
    /// The wall-clock budget ran out first. Says nothing about solvability.
    TimedOut { elapsed: Duration },
}

/// Work counters for a single solve.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    /// Nodes whose neighbors were generated.
    pub expanded: u64,
    /// Child nodes created.
    pub generated: u64,
    /// Threshold rounds for IDA*, 1 otherwise.
    pub iterations: u32,
    /// Peak frontier size, or peak recursion depth for IDA*.
    pub max_frontier: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    pub outcome: Outcome,
    pub stats: SearchStats,
}

impl SearchResult {
    pub fn path(&self) -> Option<&[Board]> {
        match &self.outcome {
            Outcome::Found(path) => Some(path),
            _ => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self.outcome, Outcome::Found(_))
    }

    pub fn move_count(&self) -> Option<usize> {
        self.path().map(|path| path.len() - 1)
    }

    /// Directions the blank travelled along the path.
    pub fn moves(&self) -> Option<Vec<Direction>> {
        self.path()?
            .windows(2)
            .map(|pair| Board::move_between(&pair[0], &pair[1]))
            .collect()
    }
}

pub trait Solver {
    fn name(&self) -> &'static str;

    /// Runs the search to completion. Each call starts from scratch, so repeated
    /// calls yield the same result.
    fn solve(&self) -> SearchResult;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    Bfs,
    #[value(name = "astar")]
    AStar,
    #[value(name = "idastar")]
    IdaStar,
}

impl Algorithm {
    pub const ALL: [Algorithm; 3] = [Algorithm::AStar, Algorithm::IdaStar, Algorithm::Bfs];

    pub fn build(self, config: &SolverConfig) -> Box<dyn Solver> {
        match self {
            Algorithm::Bfs => Box::new(BfsSolver::from_config(config)),
            Algorithm::AStar => Box::new(AStarSolver::from_config(config)),
            Algorithm::IdaStar => Box::new(IdaStarSolver::from_config(config)),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Algorithm::Bfs => "BFS",
            Algorithm::AStar => "A*",
            Algorithm::IdaStar => "IDA*",
        };
        f.write_str(name)
    }
}
