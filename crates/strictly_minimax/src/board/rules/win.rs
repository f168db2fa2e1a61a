//! Win detection logic for tic-tac-toe.

use super::super::{Board, Player, Square};

/// Every index triple that wins the game: rows, then columns, then diagonals.
pub const WINNING_LINES: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// Returns `true` if `player` holds all three squares of any winning line.
pub fn has_won(board: &Board, player: Player) -> bool {
    let mark = Some(Square::Occupied(player));
    WINNING_LINES
        .iter()
        .any(|&[a, b, c]| board.get(a) == mark && board.get(b) == mark && board.get(c) == mark)
}

/// Returns the player holding a complete line, if any.
///
/// The human is checked first. Boards reached through legal play never
/// contain lines for both players.
pub fn winner(board: &Board) -> Option<Player> {
    [Player::Human, Player::Computer]
        .into_iter()
        .find(|&player| has_won(board, player))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert!(!has_won(&board, Player::Human));
        assert!(!has_won(&board, Player::Computer));
        assert_eq!(winner(&board), None);
    }

    #[test]
    fn test_winner_top_row() {
        let board = board("XXXOO    ");
        assert!(has_won(&board, Player::Human));
        assert!(!has_won(&board, Player::Computer));
        assert_eq!(winner(&board), Some(Player::Human));
    }

    #[test]
    fn test_winner_column() {
        let board = board("XO XO  OX");
        assert!(has_won(&board, Player::Computer));
        assert!(!has_won(&board, Player::Human));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let board = board("XXO O O X");
        assert!(has_won(&board, Player::Computer));
        assert_eq!(winner(&board), Some(Player::Computer));
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board = board("XX OO    ");
        assert_eq!(winner(&board), None);
    }

    #[test]
    fn test_every_line_is_detected() {
        for line in WINNING_LINES {
            let mut board = Board::new();
            for cell in line {
                board.set(cell, Player::Computer);
            }
            assert!(has_won(&board, Player::Computer), "line {:?}", line);
            assert!(!has_won(&board, Player::Human));
        }
    }
}
