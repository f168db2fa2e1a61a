//! Draw detection and move enumeration for tic-tac-toe.

use super::super::{Board, Square};

/// Checks if the board is full (no empty square remains).
///
/// This says nothing about winners: a full board may also hold a winning
/// line, so callers check for a win first.
pub fn is_draw(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

/// Indices of all empty squares, ascending. These are the legal moves.
pub fn empty_cells(board: &Board) -> Vec<usize> {
    board
        .squares()
        .iter()
        .enumerate()
        .filter(|(_, s)| **s == Square::Empty)
        .map(|(cell, _)| cell)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::super::win::has_won;
    use super::*;
    use crate::board::Player;

    #[test]
    fn test_empty_board_not_draw() {
        let board = Board::new();
        assert!(!is_draw(&board));
        assert_eq!(empty_cells(&board), (0..9).collect::<Vec<_>>());
    }

    #[test]
    fn test_partial_board() {
        let board: Board = "X   O    ".parse().unwrap();
        assert!(!is_draw(&board));
        assert_eq!(empty_cells(&board), vec![1, 2, 3, 5, 6, 7, 8]);
    }

    #[test]
    fn test_full_board_is_draw() {
        // X O X / O X X / O X O
        let board: Board = "XOXOXXOXO".parse().unwrap();
        assert!(is_draw(&board));
        assert!(empty_cells(&board).is_empty());
        assert!(!has_won(&board, Player::Human));
        assert!(!has_won(&board, Player::Computer));
    }

    #[test]
    fn test_full_board_can_also_be_won() {
        let board: Board = "XXXOOXXOO".parse().unwrap();
        assert!(is_draw(&board));
        assert!(has_won(&board, Player::Human));
    }
}
