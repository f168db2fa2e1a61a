mod position;
mod types;

pub mod rules;

pub use position::Position;
pub use rules::{WINNING_LINES, empty_cells, has_won, is_draw, winner};
pub use types::{Board, BoardParseError, CELLS, Player, Square};
