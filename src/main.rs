use std::io::{self, IsTerminal};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::{Duration, Instant};

use chrono::Utc;
use clap::{Parser, ValueEnum};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use slide_puzzle_search::config::{SearchLimits, SolverConfig};
use slide_puzzle_search::puzzle::Board;
use slide_puzzle_search::report::RunReport;
use slide_puzzle_search::solver::{Algorithm, Outcome, SearchResult};
use slide_puzzle_search::traits::puzzle::DebugPrintable;
use slide_puzzle_search::util::read_puzzles;
use slide_puzzle_search::Result;

const DEMO_START: [[u8; 3]; 3] = [[1, 2, 3], [4, 0, 5], [6, 7, 8]];

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Selection {
    All,
    Bfs,
    #[value(name = "astar")]
    AStar,
    #[value(name = "idastar")]
    IdaStar,
}

impl Selection {
    fn algorithms(self) -> Vec<Algorithm> {
        match self {
            Selection::All => Algorithm::ALL.to_vec(),
            Selection::Bfs => vec![Algorithm::Bfs],
            Selection::AStar => vec![Algorithm::AStar],
            Selection::IdaStar => vec![Algorithm::IdaStar],
        }
    }
}

/// Solve sliding-tile puzzles with breadth-first search, A* and IDA*.
///
/// Boards use the text form "<width>,<height>,<tiles>", tiles written as
/// 0-9, a-z, A-Z with 0 for the blank, e.g. "3,3,123405678".
#[derive(Debug, Parser)]
#[command(version)]
struct Cli {
    /// Start board. Without --start, --config or --batch a built-in demo is solved.
    #[arg(long, conflicts_with_all = ["config", "batch"])]
    start: Option<Board>,

    /// Goal board; defaults to tiles in order with the blank last.
    #[arg(long, conflicts_with = "config")]
    goal: Option<Board>,

    /// JSON file with "start", optional "goal", "dimension" and "limits".
    #[arg(long, conflicts_with = "batch")]
    config: Option<PathBuf>,

    /// File with one start board per line.
    #[arg(long)]
    batch: Option<PathBuf>,

    #[arg(short, long, value_enum, default_value_t = Selection::All)]
    algorithm: Selection,

    /// Wall-clock budget for BFS in milliseconds.
    #[arg(long)]
    time_budget_ms: Option<u64>,

    /// Highest cost threshold IDA* may try.
    #[arg(long)]
    max_threshold: Option<u32>,

    /// Print one JSON report per run instead of boards.
    #[arg(long)]
    json: bool,

    /// Draw boards as boxed grids.
    #[arg(long)]
    pretty: bool,

    /// Log search progress at debug level (RUST_LOG takes precedence).
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn limits(&self, base: SearchLimits) -> SearchLimits {
        SearchLimits {
            bfs_time_budget_ms: self.time_budget_ms.unwrap_or(base.bfs_time_budget_ms),
            ida_max_threshold: self.max_threshold.or(base.ida_max_threshold),
        }
    }

    fn configs(&self) -> Result<Vec<SolverConfig>> {
        let configs = if let Some(path) = &self.config {
            vec![SolverConfig::load(path)?]
        } else if let Some(path) = &self.batch {
            read_puzzles(path)?
                .into_iter()
                .map(|start| self.with_goal(start))
                .collect::<Result<Vec<_>>>()?
        } else if let Some(start) = &self.start {
            vec![self.with_goal(start.clone())?]
        } else {
            vec![self.with_goal(Board::from_rows(&DEMO_START)?)?]
        };

        Ok(configs
            .into_iter()
            .map(|config| {
                let limits = self.limits(config.limits);
                config.with_limits(limits)
            })
            .collect())
    }

    fn with_goal(&self, start: Board) -> Result<SolverConfig> {
        let goal = match &self.goal {
            Some(goal) => goal.clone(),
            None => Board::solved(start.dimension())?,
        };
        SolverConfig::new(start, goal)
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn spinner(cli: &Cli, message: String) -> ProgressBar {
    if cli.json || !io::stderr().is_terminal() {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new_spinner();
    let style = ProgressStyle::with_template("{spinner:.green} {msg} [{elapsed_precise}]")
        .unwrap_or_else(|_| ProgressStyle::default_spinner());
    pb.set_style(style);
    pb.set_message(message);
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

fn print_result(cli: &Cli, algorithm: Algorithm, result: &SearchResult, elapsed: Duration) {
    let title = format!(" {algorithm} ");
    println!("{}", format!("{title:_^54}").as_str().bold());

    match &result.outcome {
        Outcome::Found(path) => {
            println!(
                "{} {} moves, {} nodes expanded in {:.2?}",
                "Solution found!".green().bold(),
                path.len() - 1,
                result.stats.expanded,
                elapsed
            );
            let color = io::stdout().is_terminal();
            for board in path {
                if cli.pretty {
                    print!("{}", board.render(color));
                } else {
                    println!("{board}");
                }
                println!();
            }
        }
        Outcome::NoSolution => {
            println!(
                "{} ({} nodes expanded)",
                "No solution found.".red().bold(),
                result.stats.expanded
            );
        }
        Outcome::TimedOut { elapsed } => {
            println!(
                "{} gave up after {:.2?} ({} nodes expanded)",
                "Time budget exceeded:".yellow().bold(),
                elapsed,
                result.stats.expanded
            );
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let configs = cli.configs()?;

    for config in &configs {
        config.start.validate()?;
        config.goal.validate()?;

        if !config.start.is_solvable_towards(&config.goal) {
            warn!(
                start = %config.start.key(),
                goal = %config.goal.key(),
                "goal is in the other parity class; searches will exhaust without a solution"
            );
        }

        for algorithm in cli.algorithm.algorithms() {
            let solver = algorithm.build(config);
            info!(solver = solver.name(), start = %config.start.key(), "solving");

            let pb = spinner(cli, format!("running {algorithm}"));
            let started_at = Utc::now();
            let timer = Instant::now();
            let result = solver.solve();
            let elapsed = timer.elapsed();
            pb.finish_and_clear();

            if cli.json {
                let report = RunReport::new(
                    algorithm,
                    &config.start,
                    &config.goal,
                    started_at,
                    elapsed,
                    &result,
                );
                println!("{}", serde_json::to_string(&report)?);
            } else {
                print_result(cli, algorithm, &result, elapsed);
            }
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {e}", "error:".red().bold());
            ExitCode::FAILURE
        }
    }
}
