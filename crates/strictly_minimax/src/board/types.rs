//! Core domain types for tic-tac-toe.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Number of cells on the board.
pub const CELLS: usize = 9;

/// Player in the game.
///
/// The human always plays `X` and moves first; the computer plays `O`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum Player {
    /// The human player (`X`).
    #[display("X")]
    Human,
    /// The computer player (`O`).
    #[display("O")]
    Computer,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::Human => Player::Computer,
            Player::Computer => Player::Human,
        }
    }

    /// Returns the mark drawn for this player.
    pub fn symbol(self) -> char {
        match self {
            Player::Human => 'X',
            Player::Computer => 'O',
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Returns the character used in the compact board form.
    pub fn symbol(self) -> char {
        match self {
            Square::Empty => ' ',
            Square::Occupied(player) => player.symbol(),
        }
    }
}

/// 3x3 tic-tac-toe board.
///
/// Squares are stored in row-major order, so index `row * 3 + col`.
/// The board is a plain grid: it does not track whose turn it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Board {
    squares: [Square; CELLS],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; CELLS],
        }
    }

    /// Gets the square at the given index, or `None` past the last cell.
    pub fn get(&self, cell: usize) -> Option<Square> {
        self.squares.get(cell).copied()
    }

    /// Writes `player`'s mark into `cell`.
    ///
    /// Indices past the last cell are ignored.
    pub fn set(&mut self, cell: usize, player: Player) {
        if let Some(square) = self.squares.get_mut(cell) {
            *square = Square::Occupied(player);
        }
    }

    /// Resets `cell` to empty.
    pub fn clear(&mut self, cell: usize) {
        if let Some(square) = self.squares.get_mut(cell) {
            *square = Square::Empty;
        }
    }

    /// Checks if a square is empty. Out-of-range indices are never empty.
    pub fn is_empty(&self, cell: usize) -> bool {
        matches!(self.get(cell), Some(Square::Empty))
    }

    /// Returns all squares.
    pub fn squares(&self) -> &[Square; CELLS] {
        &self.squares
    }

    /// Counts the marks placed by `player`.
    pub fn count(&self, player: Player) -> usize {
        self.squares
            .iter()
            .filter(|&&s| s == Square::Occupied(player))
            .count()
    }

    /// Returns the nine-character form accepted by [`FromStr`], with spaces for empty squares.
    pub fn compact(&self) -> String {
        self.squares.iter().map(|s| s.symbol()).collect()
    }
}

impl std::fmt::Display for Board {
    /// Renders a 3x3 grid; empty squares show their 1-based number.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                let cell = row * 3 + col;
                match self.squares[cell] {
                    Square::Empty => write!(f, "{}", cell + 1)?,
                    Square::Occupied(player) => write!(f, "{}", player)?,
                }
                if col < 2 {
                    f.write_str("|")?;
                }
            }
            if row < 2 {
                f.write_str("\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}

/// Error returned when a board string cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum BoardParseError {
    /// The string did not describe exactly nine cells.
    #[display("Board must have 9 cells, found {}", _0)]
    WrongLength(#[error(not(source))] usize),

    /// A character was not a mark or an empty placeholder.
    #[display("Unexpected character {:?} at cell {}", character, cell)]
    InvalidCharacter {
        /// The offending character.
        character: char,
        /// Cell index where it appeared.
        cell: usize,
    },
}

impl FromStr for Board {
    type Err = BoardParseError;

    /// Parses nine cells of `X`, `O`, or an empty placeholder (` `, `.`, `-`, `_`).
    ///
    /// Row separators (`/`, `|`, newlines) are skipped so `"XX./OO./..."` also parses.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cells: Vec<char> = s
            .chars()
            .filter(|c| !matches!(c, '/' | '|' | '\n' | '\r'))
            .collect();
        if cells.len() != CELLS {
            return Err(BoardParseError::WrongLength(cells.len()));
        }

        let mut board = Board::new();
        for (cell, character) in cells.into_iter().enumerate() {
            match character {
                'X' | 'x' => board.set(cell, Player::Human),
                'O' | 'o' => board.set(cell, Player::Computer),
                ' ' | '.' | '-' | '_' => {}
                _ => return Err(BoardParseError::InvalidCharacter { character, cell }),
            }
        }
        Ok(board)
    }
}
