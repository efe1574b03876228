use std::collections::VecDeque;
use std::time::Duration;

use rustc_hash::FxHashSet;
use tracing::{debug, trace, warn};

use crate::clock::{Clock, ClockSource, SystemClockSource};
use crate::config::{SolverConfig, DEFAULT_BFS_TIME_BUDGET};
use crate::node::SearchNode;
use crate::puzzle::Board;
use crate::solver::{Outcome, SearchResult, SearchStats, Solver};

/// Breadth-first search over single blank moves.
///
/// Explores boards in non-decreasing depth order, so the first goal it dequeues
/// is reached by a shortest path. The clock is polled once per dequeued node and
/// the search gives up with [`Outcome::TimedOut`] once the budget is exceeded.
///
/// A board enqueued twice before its first copy was expanded is skipped on its
/// second dequeue, so `stats.expanded` counts each distinct board at most once.
#[derive(Debug, Clone)]
pub struct BfsSolver<S = SystemClockSource> {
    start: Board,
    goal: Board,
    time_budget: Duration,
    clocks: S,
}

impl BfsSolver {
    pub fn new(start: Board, goal: Board) -> Self {
        debug_assert_eq!(start.dimension(), goal.dimension());
        Self {
            start,
            goal,
            time_budget: DEFAULT_BFS_TIME_BUDGET,
            clocks: SystemClockSource,
        }
    }

    pub fn from_config(config: &SolverConfig) -> Self {
        Self::new(config.start.clone(), config.goal.clone())
            .with_time_budget(config.limits.bfs_time_budget())
    }
}

impl<S: ClockSource> BfsSolver<S> {
    pub fn with_time_budget(mut self, time_budget: Duration) -> Self {
        self.time_budget = time_budget;
        self
    }

    /// Swaps the time source, mostly for driving the budget in tests.
    pub fn with_clock<T: ClockSource>(self, clocks: T) -> BfsSolver<T> {
        BfsSolver {
            start: self.start,
            goal: self.goal,
            time_budget: self.time_budget,
            clocks,
        }
    }

    pub fn time_budget(&self) -> Duration {
        self.time_budget
    }
}

impl<S: ClockSource> Solver for BfsSolver<S> {
    fn name(&self) -> &'static str {
        "bfs"
    }

    fn solve(&self) -> SearchResult {
        let clock = self.clocks.start();
        let mut stats = SearchStats {
            iterations: 1,
            ..SearchStats::default()
        };

        let mut open_list = VecDeque::new();
        let mut closed_list = FxHashSet::default();
        open_list.push_back(SearchNode::root(self.start.clone(), 0));
        stats.max_frontier = 1;

        debug!(solver = self.name(), dimension = self.start.dimension(), "search started");

        while let Some(node) = open_list.pop_front() {
            let elapsed = clock.elapsed();
            if elapsed > self.time_budget {
                warn!(
                    solver = self.name(),
                    ?elapsed,
                    budget = ?self.time_budget,
                    expanded = stats.expanded,
                    "time budget exceeded"
                );
                return SearchResult {
                    outcome: Outcome::TimedOut { elapsed },
                    stats,
                };
            }

            if node.state().is_goal(&self.goal) {
                debug!(solver = self.name(), moves = node.path_cost(), ?stats, "goal reached");
                return SearchResult {
                    outcome: Outcome::Found(node.path()),
                    stats,
                };
            }

            // Duplicates enqueued before their first copy was expanded.
            if !closed_list.insert(node.state().key()) {
                continue;
            }
            stats.expanded += 1;
            trace!(depth = node.path_cost(), key = %node.state().key(), "expanding");

            for neighbour in node.state().neighbors() {
                if closed_list.contains(&neighbour.key()) {
                    continue;
                }
                open_list.push_back(SearchNode::child(&node, neighbour, 0));
                stats.generated += 1;
            }
            stats.max_frontier = stats.max_frontier.max(open_list.len());
        }

        debug!(solver = self.name(), ?stats, "frontier exhausted");
        SearchResult {
            outcome: Outcome::NoSolution,
            stats,
        }
    }
}
