use std::cmp::Ordering;
use std::fmt;

/// Largest tile that has a rune in the text board format.
pub const MAX_RUNE_TILE: u8 = 61;

/// A single cell of the board. `Tile::BLANK` is the empty cell the tiles slide into.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Default)]
#[repr(transparent)]
pub struct Tile(u8);

impl Tile {
    pub const BLANK: Tile = Tile(0);

    pub const fn new(value: u8) -> Self {
        Self(value)
    }

    pub const fn value(self) -> u8 {
        self.0
    }

    pub const fn is_blank(self) -> bool {
        self.0 == 0
    }

    pub fn from_rune(rune: char) -> Option<Self> {
        let value = match rune {
            '0' => 0,
            '1'..='9' => rune as u8 - b'0',
            'a'..='z' => rune as u8 - b'a' + 10,
            'A'..='Z' => rune as u8 - b'A' + 36,
            _ => return None,
        };
        Some(Self(value))
    }

    /// Single-character form used by the text board format, `None` above `MAX_RUNE_TILE`.
    pub fn rune(self) -> Option<char> {
        match self.0 {
            0..=9 => Some((b'0' + self.0) as char),
            10..=35 => Some((b'a' + self.0 - 10) as char),
            36..=MAX_RUNE_TILE => Some((b'A' + self.0 - 36) as char),
            _ => None,
        }
    }

    /// Sort rank: numbered tiles ascending, the blank last.
    pub fn rank(self) -> u16 {
        if self.is_blank() {
            u16::from(u8::MAX) + 1
        } else {
            u16::from(self.0)
        }
    }
}

impl From<u8> for Tile {
    fn from(value: u8) -> Self {
        Self(value)
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl PartialOrd for Tile {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Tile {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank().cmp(&other.rank())
    }
}

pub fn serialize_tiles(tiles: &[Tile]) -> Option<String> {
    tiles.iter().map(|t| t.rune()).collect()
}
