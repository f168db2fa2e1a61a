//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](super::Board). They do not know whose turn it is;
//! callers decide what to ask and in which order (win before draw).

pub mod draw;
pub mod win;

pub use draw::{empty_cells, is_draw};
pub use win::{WINNING_LINES, has_won, winner};
