use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::puzzle::{moves_str, Board};
use crate::solver::{Algorithm, Outcome, SearchResult, SearchStats};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeKind {
    Found,
    NoSolution,
    TimedOut,
}

/// Machine-readable summary of one solver run.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub algorithm: Algorithm,
    pub started_at: DateTime<Utc>,
    pub elapsed_ms: u64,
    pub start: Board,
    pub goal: Board,
    pub outcome: OutcomeKind,
    pub move_count: Option<usize>,
    pub moves: Option<String>,
    pub path: Option<Vec<Board>>,
    pub stats: SearchStats,
}

impl RunReport {
    pub fn new(
        algorithm: Algorithm,
        start: &Board,
        goal: &Board,
        started_at: DateTime<Utc>,
        elapsed: Duration,
        result: &SearchResult,
    ) -> Self {
        let outcome = match result.outcome {
            Outcome::Found(_) => OutcomeKind::Found,
            Outcome::NoSolution => OutcomeKind::NoSolution,
            Outcome::TimedOut { .. } => OutcomeKind::TimedOut,
        };

        Self {
            algorithm,
            started_at,
            elapsed_ms: elapsed.as_millis() as u64,
            start: start.clone(),
            goal: goal.clone(),
            outcome,
            move_count: result.move_count(),
            moves: result.moves().map(|moves| moves_str(&moves)),
            path: result.path().map(<[Board]>::to_vec),
            stats: result.stats,
        }
    }
}
