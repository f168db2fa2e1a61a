//! Strictly Minimax - tic-tac-toe against an exhaustive adversarial search.
//!
//! # Architecture
//!
//! - **Board**: 3x3 grid of squares, win/draw rules, legal move enumeration
//! - **Search**: depth-bounded minimax with alpha-beta pruning
//! - **Session**: human-versus-computer turn controller and deferred computer moves
//! - **Arena**: engine-versus-engine matches
//!
//! # Example
//!
//! ```
//! use strictly_minimax::{Board, Engine};
//!
//! let mut board: Board = "XX OO    ".parse().unwrap();
//! assert_eq!(Engine::new(7).best_move(&mut board), Some(5));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod arena;
mod board;
mod search;
mod session;

// Crate-level exports - Board state and rules
pub use board::{
    Board, BoardParseError, CELLS, Player, Position, Square, WINNING_LINES, empty_cells,
    has_won, is_draw, winner,
};

// Crate-level exports - Search
pub use search::{Analysis, Decision, Engine, Pruning, Score};

// Crate-level exports - Session management
pub use session::{
    Outcome, Phase, Session, SharedSession, TurnError, lock, schedule_computer_move, share,
};

// Crate-level exports - Self-play
pub use arena::{MatchRecord, Tally, play_match, self_play};
