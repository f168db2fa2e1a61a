//! Errors raised by rejected turns.

use derive_more::{Display, Error};

/// Why a session refused a move.
///
/// A rejected move leaves the session untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum TurnError {
    /// Human input arrived while the computer is to move.
    #[display("Wait for O to move")]
    NotHumanTurn,

    /// The computer was asked to move outside its turn.
    #[display("It's not O's turn")]
    NotComputerTurn,

    /// The round already has an outcome.
    #[display("Game is already over")]
    GameOver,

    /// The cell index is not on the board.
    #[display("Cell {} is off the board (must be 0-8)", _0)]
    OutOfRange(#[error(not(source))] usize),

    /// The cell already holds a mark.
    #[display("Cell {} is already occupied", _0)]
    Occupied(#[error(not(source))] usize),

    /// The engine found no empty cell.
    #[display("No move available")]
    NoMoveAvailable,
}
