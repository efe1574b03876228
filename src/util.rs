use std::fs;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::Result;
use crate::puzzle::Board;

/// Reads one text-format board per line. Blank lines and `#` comments are skipped.
pub fn read_puzzles(path: impl AsRef<Path>) -> Result<Vec<Board>> {
    let file = fs::File::open(path)?;
    parse_puzzles(BufReader::new(file))
}

pub fn parse_puzzles(reader: impl BufRead) -> Result<Vec<Board>> {
    let mut result: Vec<Board> = vec![];

    for (line_idx, line) in reader.lines().enumerate() {
        let line = line?;
        let puzzle_str = line.trim();
        if puzzle_str.is_empty() || puzzle_str.starts_with('#') {
            continue;
        }

        let puzzle = puzzle_str
            .parse::<Board>()
            .map_err(|e| e.at_line(line_idx + 1))?;
        result.push(puzzle);
    }

    Ok(result)
}
