//! Board representation for N×N tic-tac-toe

pub mod board;
pub mod position;


// Re-exports
pub use board::Board;
pub use position::Position;

use serde::{Deserialize, Serialize};

/// Smallest supported board (3x3)
pub const MIN_BOARD_SIZE: usize = 3;
/// Largest supported board (10x10)
pub const MAX_BOARD_SIZE: usize = 10;

/// Supported roster sizes
pub const MIN_PARTIES: usize = 2;
pub const MAX_PARTIES: usize = 3;

/// Who decides a party's moves
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Moves come from the alpha-beta search
    #[serde(alias = "ai")]
    Search,
    /// Moves come from outside the engine (a human at the menu)
    #[serde(alias = "human")]
    External,
}

impl Role {
    #[inline]
    pub fn is_search(self) -> bool {
        self == Role::Search
    }
}

/// One game participant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Party {
    pub role: Role,
    pub mark: char,
}

impl Party {
    #[inline]
    pub fn new(role: Role, mark: char) -> Self {
        Self { role, mark }
    }

    pub fn human(mark: char) -> Self {
        Self::new(Role::External, mark)
    }

    pub fn ai(mark: char) -> Self {
        Self::new(Role::Search, mark)
    }
}

impl std::fmt::Display for Party {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let role = match self.role {
            Role::Search => "AI",
            Role::External => "Human",
        };
        write!(f, "{} ({})", self.mark, role)
    }
}

/// Index of a party in the roster. This is what the grid stores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PartyId(pub u8);

impl PartyId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Cell address on the board (a move)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub row: u8,
    pub col: u8,
}

impl Pos {
    #[inline]
    pub fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Row-major index on a board of the given size
    #[inline]
    pub fn to_index(self, size: usize) -> usize {
        self.row as usize * size + self.col as usize
    }

    #[inline]
    pub fn from_index(idx: usize, size: usize) -> Self {
        Self {
            row: (idx / size) as u8,
            col: (idx % size) as u8,
        }
    }

    /// Signed bounds check, for coordinates that come from user input
    #[inline]
    pub fn is_valid(row: i32, col: i32, size: usize) -> bool {
        row >= 0 && row < size as i32 && col >= 0 && col < size as i32
    }

    /// Manhattan distance to another cell
    #[inline]
    pub fn manhattan(self, other: Pos) -> u32 {
        (self.row as i32 - other.row as i32).unsigned_abs()
            + (self.col as i32 - other.col as i32).unsigned_abs()
    }
}

impl std::fmt::Display for Pos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl PartialOrd for Pos {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pos {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.row, self.col).cmp(&(other.row, other.col))
    }
}
