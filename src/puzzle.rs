use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{PuzzleError, Result};
use crate::tile::{serialize_tiles, Tile};
use crate::traits::puzzle::{Heuristic, ManhattanDistance};

/// Largest supported dimension; every tile has to fit in a `u8`.
pub const MAX_DIMENSION: usize = 16;

/// The direction the blank travels in a single move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// Emission order of `Board::neighbors`. Frontier tie-breaks depend on it.
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];

    pub fn to_char(self) -> char {
        match self {
            Direction::Left => 'L',
            Direction::Right => 'R',
            Direction::Up => 'U',
            Direction::Down => 'D',
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }

    fn offset(self) -> (isize, isize) {
        match self {
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::Left => "left",
            Direction::Right => "right",
            Direction::Up => "up",
            Direction::Down => "down",
        };
        f.write_str(name)
    }
}

pub fn moves_str(moves: &[Direction]) -> String {
    moves.iter().map(|d| d.to_char()).collect()
}

/// Row-major encoding of a board's cells, used for equality and set membership.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BoardKey(Box<[u8]>);

impl BoardKey {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for BoardKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, value) in self.0.iter().enumerate() {
            if idx > 0 {
                f.write_str(",")?;
            }
            write!(f, "{value}")?;
        }
        Ok(())
    }
}

/// An N×N arrangement of tiles with exactly one blank.
///
/// Boards are immutable; every move produces a new board. Construction checks the
/// shape and the presence of a blank but not whether the tiles form a permutation,
/// see [`Board::validate`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[derive(Serialize, Deserialize)]
#[serde(try_from = "BoardRepr", into = "Vec<Vec<u8>>")]
pub struct Board {
    dimension: usize,
    tiles: Vec<Tile>,
    space_idx: usize,
}

impl Board {
    pub fn from_cells(dimension: usize, cells: Vec<u8>) -> Result<Self> {
        check_dimension(dimension)?;
        let expected = dimension * dimension;
        if cells.len() != expected {
            return Err(PuzzleError::CellCount {
                expected,
                found: cells.len(),
            });
        }
        Self::from_tiles(dimension, cells.into_iter().map(Tile::new).collect())
    }

    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self> {
        let dimension = rows.len();
        check_dimension(dimension)?;

        let mut cells = Vec::with_capacity(dimension * dimension);
        for row in rows {
            let row = row.as_ref();
            if row.len() != dimension {
                return Err(PuzzleError::CellCount {
                    expected: dimension,
                    found: row.len(),
                });
            }
            cells.extend_from_slice(row);
        }

        Self::from_cells(dimension, cells)
    }

    fn from_tiles(dimension: usize, tiles: Vec<Tile>) -> Result<Self> {
        let space_idx = tiles
            .iter()
            .position(|t| t.is_blank())
            .ok_or(PuzzleError::MissingBlank)?;

        Ok(Self {
            dimension,
            tiles,
            space_idx,
        })
    }

    /// The conventional goal: tiles ascending in row-major order, blank last.
    pub fn solved(dimension: usize) -> Result<Self> {
        check_dimension(dimension)?;
        let count = dimension * dimension;
        let mut tiles: Vec<Tile> = (1..count).map(|v| Tile::new(v as u8)).collect();
        tiles.push(Tile::BLANK);

        Ok(Self {
            dimension,
            tiles,
            space_idx: count - 1,
        })
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn tile_at(&self, row: usize, col: usize) -> Tile {
        self.tiles[row * self.dimension + col]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Tile]> + '_ {
        self.tiles.chunks(self.dimension)
    }

    pub fn space_idx(&self) -> usize {
        self.space_idx
    }

    pub fn space_position(&self) -> (usize, usize) {
        (self.space_idx / self.dimension, self.space_idx % self.dimension)
    }

    pub fn key(&self) -> BoardKey {
        BoardKey(self.tiles.iter().map(|t| t.value()).collect())
    }

    pub fn is_goal(&self, goal: &Board) -> bool {
        self.tiles == goal.tiles
    }

    /// Sum of the Manhattan distances of every numbered tile to its cell in `goal`.
    pub fn heuristic(&self, goal: &Board) -> u32 {
        ManhattanDistance::new(goal).estimate(self)
    }

    fn target_of(&self, direction: Direction) -> Option<usize> {
        let (row, col) = self.space_position();
        let (dr, dc) = direction.offset();
        let row = row.checked_add_signed(dr).filter(|&r| r < self.dimension)?;
        let col = col.checked_add_signed(dc).filter(|&c| c < self.dimension)?;
        Some(row * self.dimension + col)
    }

    pub fn legal_moves(&self) -> impl Iterator<Item = Direction> + '_ {
        Direction::ALL
            .into_iter()
            .filter(move |&direction| self.target_of(direction).is_some())
    }

    fn slide(&self, direction: Direction) -> Option<Board> {
        let target_idx = self.target_of(direction)?;
        let mut tiles = self.tiles.clone();
        tiles.swap(self.space_idx, target_idx);

        Some(Board {
            dimension: self.dimension,
            tiles,
            space_idx: target_idx,
        })
    }

    pub fn apply(&self, direction: Direction) -> Result<Board> {
        self.slide(direction).ok_or_else(|| {
            let (row, col) = self.space_position();
            PuzzleError::IllegalMove {
                direction,
                row,
                col,
            }
        })
    }

    /// Every board one blank swap away, emitted as left, right, up, down.
    pub fn neighbors(&self) -> Vec<Board> {
        let mut result = Vec::with_capacity(4);
        for direction in Direction::ALL {
            if let Some(successor) = self.slide(direction) {
                result.push(successor);
            }
        }
        result
    }

    /// The move turning `from` into `to`, if they are exactly one legal move apart.
    pub fn move_between(from: &Board, to: &Board) -> Option<Direction> {
        if from.dimension != to.dimension {
            return None;
        }
        Direction::ALL
            .into_iter()
            .find(|&direction| from.slide(direction).is_some_and(|b| b.tiles == to.tiles))
    }

    /// Checks that the cells hold every tile `1..N²` exactly once plus a single blank.
    pub fn validate(&self) -> Result<()> {
        let count = self.tiles.len();
        let mut seen = vec![false; count];

        for tile in &self.tiles {
            let value = tile.value() as usize;
            if value >= count {
                return Err(PuzzleError::TileOutOfRange {
                    tile: value as u32,
                    dimension: self.dimension,
                });
            }
            if seen[value] {
                return Err(PuzzleError::DuplicateTile(tile.value()));
            }
            seen[value] = true;
        }

        Ok(())
    }

    fn inversions(&self) -> usize {
        let values: Vec<u8> = self
            .tiles
            .iter()
            .filter(|t| !t.is_blank())
            .map(|t| t.value())
            .collect();

        let mut inversions = 0;
        for (idx, value) in values.iter().enumerate() {
            inversions += values[idx + 1..].iter().filter(|&v| v < value).count();
        }
        inversions
    }

    /// Permutation parity check: whether `goal` lies in the same component of the
    /// move graph as `self`. Both boards must be valid and of equal size.
    pub fn is_solvable_towards(&self, goal: &Board) -> bool {
        let parity = |board: &Board| {
            let inversions = board.inversions();
            if board.dimension % 2 == 1 {
                inversions % 2
            } else {
                (inversions + board.space_position().0) % 2
            }
        };

        self.dimension == goal.dimension && parity(self) == parity(goal)
    }

    /// Text form `"<width>,<height>,<runes>"`, `None` when a tile has no rune.
    pub fn serialized(&self) -> Option<String> {
        let runes = serialize_tiles(&self.tiles)?;
        Some(format!("{},{},{}", self.dimension, self.dimension, runes))
    }
}

fn check_dimension(dimension: usize) -> Result<()> {
    if (2..=MAX_DIMENSION).contains(&dimension) {
        Ok(())
    } else {
        Err(PuzzleError::InvalidDimension(dimension))
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row_idx, row) in self.rows().enumerate() {
            if row_idx > 0 {
                writeln!(f)?;
            }
            for (col, tile) in row.iter().enumerate() {
                if col > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{tile}")?;
            }
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = PuzzleError;

    fn from_str(s: &str) -> Result<Self> {
        let mut parts = s.trim().splitn(3, ',');
        let mut next_number = |what: &str| -> Result<usize> {
            let part = parts
                .next()
                .ok_or_else(|| PuzzleError::parse(format!("missing {what}")))?;
            part.trim()
                .parse()
                .map_err(|_| PuzzleError::parse(format!("invalid {what} '{part}'")))
        };

        let width = next_number("width")?;
        let height = next_number("height")?;
        if width != height {
            return Err(PuzzleError::parse(format!(
                "only square boards are supported, got {width}x{height}"
            )));
        }
        check_dimension(width)?;

        let runes = parts
            .next()
            .ok_or_else(|| PuzzleError::parse("missing tiles"))?
            .trim();
        let mut cells = Vec::with_capacity(width * height);
        for rune in runes.chars() {
            let tile = Tile::from_rune(rune)
                .ok_or_else(|| PuzzleError::parse(format!("unrecognized tile '{rune}'")))?;
            cells.push(tile.value());
        }

        Board::from_cells(width, cells)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum BoardRepr {
    Rows(Vec<Vec<u8>>),
    Text(String),
}

impl TryFrom<BoardRepr> for Board {
    type Error = PuzzleError;

    fn try_from(repr: BoardRepr) -> Result<Self> {
        match repr {
            BoardRepr::Rows(rows) => Board::from_rows(&rows),
            BoardRepr::Text(text) => text.parse(),
        }
    }
}

impl From<Board> for Vec<Vec<u8>> {
    fn from(board: Board) -> Self {
        board
            .rows()
            .map(|row| row.iter().map(|t| t.value()).collect())
            .collect()
    }
}
