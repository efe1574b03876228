use std::rc::Rc;

use tracing::{debug, trace};

use crate::config::{reachable_state_bound, SolverConfig};
use crate::node::SearchNode;
use crate::puzzle::Board;
use crate::solver::{Outcome, SearchResult, SearchStats, Solver};
use crate::traits::puzzle::{Heuristic, ManhattanDistance};

/// Iterative deepening on the `f = g + h` bound.
///
/// Keeps no open or closed list, only the recursion stack. The one duplicate check
/// is that a node never regenerates its own parent, so longer cycles are walked
/// again on every path and every round. Shallow levels are re-expanded each time
/// the threshold is raised; hard instances can take very long.
#[derive(Debug, Clone)]
pub struct IdaStarSolver<H = ManhattanDistance> {
    start: Board,
    goal: Board,
    heuristic: H,
    max_threshold: u32,
}

/// Result of one bounded depth-first probe.
enum Probe {
    Found(Rc<SearchNode>),
    /// Smallest `f` that exceeded the threshold, `None` when nothing was cut off.
    Rejected(Option<u32>),
}

impl IdaStarSolver {
    pub fn new(start: Board, goal: Board) -> Self {
        debug_assert_eq!(start.dimension(), goal.dimension());
        let heuristic = ManhattanDistance::new(&goal);
        let max_threshold = reachable_state_bound(start.dimension());
        Self {
            start,
            goal,
            heuristic,
            max_threshold,
        }
    }

    pub fn from_config(config: &SolverConfig) -> Self {
        Self::new(config.start.clone(), config.goal.clone())
            .with_max_threshold(config.limits.ida_max_threshold(config.dimension))
    }
}

impl<H: Heuristic> IdaStarSolver<H> {
    /// Thresholds above this are not tried; the search reports no solution instead.
    pub fn with_max_threshold(mut self, max_threshold: u32) -> Self {
        self.max_threshold = max_threshold;
        self
    }

    pub fn with_heuristic<T: Heuristic>(self, heuristic: T) -> IdaStarSolver<T> {
        IdaStarSolver {
            start: self.start,
            goal: self.goal,
            heuristic,
            max_threshold: self.max_threshold,
        }
    }

    pub fn max_threshold(&self) -> u32 {
        self.max_threshold
    }

    fn search(&self, node: &Rc<SearchNode>, threshold: u32, stats: &mut SearchStats) -> Probe {
        let f = node.f();
        if f > threshold {
            return Probe::Rejected(Some(f));
        }

        if node.state().is_goal(&self.goal) {
            return Probe::Found(Rc::clone(node));
        }

        stats.expanded += 1;
        stats.max_frontier = stats.max_frontier.max(node.path_cost() as usize + 1);
        trace!(g = node.path_cost(), f, threshold, "expanding");

        let mut min_rejected: Option<u32> = None;
        for neighbour in node.state().neighbors() {
            if node.parent().is_some_and(|parent| parent.state() == &neighbour) {
                continue;
            }

            let h = self.heuristic.estimate(&neighbour);
            let child = SearchNode::child(node, neighbour, h);
            stats.generated += 1;

            match self.search(&child, threshold, stats) {
                found @ Probe::Found(_) => return found,
                Probe::Rejected(Some(bound)) => {
                    min_rejected = Some(min_rejected.map_or(bound, |min| min.min(bound)));
                }
                Probe::Rejected(None) => {}
            }
        }

        Probe::Rejected(min_rejected)
    }
}

impl<H: Heuristic> Solver for IdaStarSolver<H> {
    fn name(&self) -> &'static str {
        "idastar"
    }

    fn solve(&self) -> SearchResult {
        let mut stats = SearchStats::default();
        let root = SearchNode::root(self.start.clone(), self.heuristic.estimate(&self.start));
        let mut threshold = root.heuristic();

        debug!(
            solver = self.name(),
            dimension = self.start.dimension(),
            threshold,
            max_threshold = self.max_threshold,
            "search started"
        );

        let outcome = loop {
            if threshold > self.max_threshold {
                debug!(solver = self.name(), threshold, "threshold ceiling reached");
                break Outcome::NoSolution;
            }

            stats.iterations += 1;
            debug!(solver = self.name(), round = stats.iterations, threshold, "threshold round");

            match self.search(&root, threshold, &mut stats) {
                Probe::Found(node) => {
                    debug!(solver = self.name(), moves = node.path_cost(), ?stats, "goal reached");
                    break Outcome::Found(node.path());
                }
                Probe::Rejected(None) => {
                    debug!(solver = self.name(), ?stats, "nothing left to expand");
                    break Outcome::NoSolution;
                }
                Probe::Rejected(Some(next)) => threshold = next,
            }
        };

        SearchResult { outcome, stats }
    }
}
