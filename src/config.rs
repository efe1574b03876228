use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{PuzzleError, Result};
use crate::puzzle::Board;

pub const DEFAULT_BFS_TIME_BUDGET: Duration = Duration::from_secs(30);

/// Tunable cut-offs for the solvers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchLimits {
    /// Wall-clock budget for breadth-first search, in milliseconds.
    pub bfs_time_budget_ms: u64,
    /// Highest threshold IDA* will try; derived from the board size when unset.
    pub ida_max_threshold: Option<u32>,
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self {
            bfs_time_budget_ms: DEFAULT_BFS_TIME_BUDGET.as_millis() as u64,
            ida_max_threshold: None,
        }
    }
}

impl SearchLimits {
    pub fn bfs_time_budget(&self) -> Duration {
        Duration::from_millis(self.bfs_time_budget_ms)
    }

    pub fn ida_max_threshold(&self, dimension: usize) -> u32 {
        self.ida_max_threshold
            .unwrap_or_else(|| reachable_state_bound(dimension))
    }
}

/// Longest possible optimal solution: one less than the number of boards reachable
/// from any start, `(N²)! / 2`. Saturates at `u32::MAX`.
pub fn reachable_state_bound(dimension: usize) -> u32 {
    let cells = (dimension * dimension) as u64;
    let mut states: u64 = 1;
    for factor in 3..=cells {
        match states.checked_mul(factor) {
            Some(product) if product <= u64::from(u32::MAX) => states = product,
            _ => return u32::MAX,
        }
    }
    // 1 * 3 * 4 * ... * cells == cells! / 2
    (states - 1) as u32
}

/// Start and goal boards of one search plus its limits. Fixed once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SolverConfig {
    pub dimension: usize,
    pub start: Board,
    pub goal: Board,
    pub limits: SearchLimits,
}

impl SolverConfig {
    pub fn new(start: Board, goal: Board) -> Result<Self> {
        if start.dimension() != goal.dimension() {
            return Err(PuzzleError::DimensionMismatch {
                start: start.dimension(),
                goal: goal.dimension(),
            });
        }

        Ok(Self {
            dimension: start.dimension(),
            start,
            goal,
            limits: SearchLimits::default(),
        })
    }

    pub fn with_limits(mut self, limits: SearchLimits) -> Self {
        self.limits = limits;
        self
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let file: ConfigFile = serde_json::from_str(json)?;
        file.into_config()
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_json(&contents)
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    dimension: Option<usize>,
    start: Board,
    goal: Option<Board>,
    #[serde(default)]
    limits: SearchLimits,
}

impl ConfigFile {
    fn into_config(self) -> Result<SolverConfig> {
        if let Some(dimension) = self.dimension {
            if dimension != self.start.dimension() {
                return Err(PuzzleError::DeclaredDimension {
                    declared: dimension,
                    found: self.start.dimension(),
                });
            }
        }

        let goal = match self.goal {
            Some(goal) => goal,
            None => Board::solved(self.start.dimension())?,
        };

        Ok(SolverConfig::new(self.start, goal)?.with_limits(self.limits))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reachable_bound_matches_half_factorial() {
        assert_eq!(reachable_state_bound(2), 11);
        assert_eq!(reachable_state_bound(3), 181_439);
        assert_eq!(reachable_state_bound(4), u32::MAX);
    }

    #[test]
    fn limits_default_to_thirty_seconds() {
        let limits = SearchLimits::default();
        assert_eq!(limits.bfs_time_budget(), Duration::from_secs(30));
        assert_eq!(limits.ida_max_threshold(2), 11);
    }

    #[test]
    fn parses_rows_and_defaults_goal() {
        let config = SolverConfig::from_json(
            r#"{ "dimension": 3, "start": [[1, 2, 3], [4, 0, 5], [6, 7, 8]] }"#,
        )
        .unwrap();

        assert_eq!(config.dimension, 3);
        assert_eq!(config.goal, Board::solved(3).unwrap());
        assert_eq!(config.limits, SearchLimits::default());
    }

    #[test]
    fn parses_text_boards_and_limits() {
        let config = SolverConfig::from_json(
            r#"{
                "start": "2,2,1203",
                "goal": "2,2,1230",
                "limits": { "bfs_time_budget_ms": 250, "ida_max_threshold": 40 }
            }"#,
        )
        .unwrap();

        assert_eq!(config.dimension, 2);
        assert_eq!(config.limits.bfs_time_budget(), Duration::from_millis(250));
        assert_eq!(config.limits.ida_max_threshold(2), 40);
    }

    #[test]
    fn rejects_mismatched_dimensions() {
        let error = SolverConfig::from_json(r#"{ "start": "2,2,1230", "goal": "3,3,123456780" }"#)
            .unwrap_err();
        assert!(matches!(
            error,
            PuzzleError::DimensionMismatch { start: 2, goal: 3 }
        ));

        let error = SolverConfig::from_json(r#"{ "dimension": 3, "start": "2,2,1230" }"#)
            .unwrap_err();
        assert!(matches!(
            error,
            PuzzleError::DeclaredDimension {
                declared: 3,
                found: 2
            }
        ));
        assert_eq!(
            error.to_string(),
            "dimension is declared as 3 but start is 2x2"
        );
    }

    #[test]
    fn malformed_boards_surface_as_json_errors() {
        let error = SolverConfig::from_json(r#"{ "start": [[1, 2], [3]] }"#).unwrap_err();
        assert!(matches!(error, PuzzleError::Json(_)));
    }
}
