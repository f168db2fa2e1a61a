//! Scoped mark placement for in-place tree search.

use crate::board::{Board, Player};
use std::ops::{Deref, DerefMut};

/// A mark written into an empty square for the lifetime of the guard.
///
/// Dropping the guard clears the square again, so the board is restored on
/// every exit from the enclosing scope, including early `break`s after a cutoff.
#[derive(Debug)]
pub(crate) struct Placement<'a> {
    board: &'a mut Board,
    cell: usize,
}

impl<'a> Placement<'a> {
    /// Places `player` at `cell`. The cell must be empty.
    pub(crate) fn new(board: &'a mut Board, cell: usize, player: Player) -> Self {
        debug_assert!(board.is_empty(cell), "placing on occupied cell {cell}");
        board.set(cell, player);
        Self { board, cell }
    }
}

impl Deref for Placement<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl DerefMut for Placement<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for Placement<'_> {
    fn drop(&mut self) {
        self.board.clear(self.cell);
    }
}
