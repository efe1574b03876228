use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::rc::Rc;

use rustc_hash::FxHashSet;
use tracing::{debug, trace};

use crate::config::SolverConfig;
use crate::node::SearchNode;
use crate::puzzle::Board;
use crate::solver::{Outcome, SearchResult, SearchStats, Solver};
use crate::traits::puzzle::{Heuristic, ManhattanDistance};

/// Best-first search on `f = g + h`.
///
/// Duplicate boards may sit in the open list at different costs; only boards
/// already closed are filtered. With a consistent heuristic the first copy of a
/// board to be closed carries its optimal cost, so the returned path is optimal.
/// Later copies are dropped when dequeued and do not count as expanded.
#[derive(Debug, Clone)]
pub struct AStarSolver<H = ManhattanDistance> {
    start: Board,
    goal: Board,
    heuristic: H,
}

impl AStarSolver {
    pub fn new(start: Board, goal: Board) -> Self {
        debug_assert_eq!(start.dimension(), goal.dimension());
        let heuristic = ManhattanDistance::new(&goal);
        Self {
            start,
            goal,
            heuristic,
        }
    }

    pub fn from_config(config: &SolverConfig) -> Self {
        Self::new(config.start.clone(), config.goal.clone())
    }
}

impl<H: Heuristic> AStarSolver<H> {
    pub fn with_heuristic<T: Heuristic>(self, heuristic: T) -> AStarSolver<T> {
        AStarSolver {
            start: self.start,
            goal: self.goal,
            heuristic,
        }
    }
}

/// Open-list entry; `seq` is the insertion counter that breaks `f` ties first-in first-out.
struct Frontier {
    f: u32,
    seq: u64,
    node: Rc<SearchNode>,
}

impl PartialEq for Frontier {
    fn eq(&self, other: &Self) -> bool {
        self.f == other.f && self.seq == other.seq
    }
}

impl Eq for Frontier {}

impl Ord for Frontier {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed: BinaryHeap is a max-heap.
        other
            .f
            .cmp(&self.f)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Frontier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<H: Heuristic> Solver for AStarSolver<H> {
    fn name(&self) -> &'static str {
        "astar"
    }

    fn solve(&self) -> SearchResult {
        let mut stats = SearchStats {
            iterations: 1,
            ..SearchStats::default()
        };

        let mut open_list = BinaryHeap::new();
        let mut closed_list = FxHashSet::default();
        let mut seq: u64 = 0;

        let root = SearchNode::root(self.start.clone(), self.heuristic.estimate(&self.start));
        open_list.push(Frontier {
            f: root.f(),
            seq,
            node: root,
        });
        stats.max_frontier = 1;

        debug!(solver = self.name(), dimension = self.start.dimension(), "search started");

        while let Some(Frontier { node, .. }) = open_list.pop() {
            if node.state().is_goal(&self.goal) {
                debug!(solver = self.name(), moves = node.path_cost(), ?stats, "goal reached");
                return SearchResult {
                    outcome: Outcome::Found(node.path()),
                    stats,
                };
            }

            if !closed_list.insert(node.state().key()) {
                continue;
            }
            stats.expanded += 1;
            trace!(g = node.path_cost(), h = node.heuristic(), key = %node.state().key(), "expanding");

            for neighbour in node.state().neighbors() {
                if closed_list.contains(&neighbour.key()) {
                    continue;
                }
                let h = self.heuristic.estimate(&neighbour);
                let child = SearchNode::child(&node, neighbour, h);
                seq += 1;
                open_list.push(Frontier {
                    f: child.f(),
                    seq,
                    node: child,
                });
                stats.generated += 1;
            }
            stats.max_frontier = stats.max_frontier.max(open_list.len());
        }

        debug!(solver = self.name(), ?stats, "open list exhausted");
        SearchResult {
            outcome: Outcome::NoSolution,
            stats,
        }
    }
}
