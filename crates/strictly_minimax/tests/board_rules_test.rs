//! Tests for win, draw and move enumeration over every reachable board.

mod common;

use strictly_minimax::{Board, Player, Position, empty_cells, has_won, is_draw, winner};

#[test]
fn test_reachable_board_count() {
    // Distinct positions reachable in legal play, finished games included.
    assert_eq!(common::all_reachable_boards().len(), 5478);
}

#[test]
fn test_never_two_winners() {
    for board in common::all_reachable_boards() {
        assert!(
            !(has_won(&board, Player::Human) && has_won(&board, Player::Computer)),
            "both players won on {:?}",
            board.compact()
        );
    }
}

#[test]
fn test_draw_implies_no_empty_cells() {
    for board in common::all_reachable_boards() {
        if is_draw(&board) {
            assert!(empty_cells(&board).is_empty());
        } else {
            assert!(!empty_cells(&board).is_empty());
        }
    }
}

#[test]
fn test_empty_cells_ascending_and_empty() {
    for board in common::all_reachable_boards() {
        let cells = empty_cells(&board);
        assert!(cells.windows(2).all(|w| w[0] < w[1]));
        assert!(cells.iter().all(|&cell| board.is_empty(cell)));
        assert_eq!(
            cells,
            Position::valid_moves(&board)
                .into_iter()
                .map(Position::to_index)
                .collect::<Vec<_>>()
        );
    }
}

#[test]
fn test_mark_balance_holds() {
    for board in common::all_reachable_boards() {
        let x = board.count(Player::Human);
        let o = board.count(Player::Computer);
        assert!(x == o || x == o + 1, "unbalanced {:?}", board.compact());
    }
}

#[test]
fn test_winner_matches_has_won() {
    for board in common::all_reachable_boards() {
        match winner(&board) {
            Some(player) => assert!(has_won(&board, player)),
            None => {
                assert!(!has_won(&board, Player::Human));
                assert!(!has_won(&board, Player::Computer));
            }
        }
    }
}

#[test]
fn test_compact_form_parses_back() {
    let board: Board = "XOX O X  ".parse().unwrap();
    assert_eq!(board.compact().parse::<Board>().unwrap(), board);
}
