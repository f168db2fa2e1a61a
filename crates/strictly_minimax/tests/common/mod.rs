//! Shared helpers for integration tests.

#![allow(dead_code)]

use strictly_minimax::{Board, Player, empty_cells, has_won, is_draw};

/// Every position reachable from the empty board with `X` moving first,
/// excluding finished games, paired with the side to move.
pub fn reachable_positions() -> Vec<(Board, Player)> {
    let mut seen = std::collections::HashSet::new();
    let mut out = Vec::new();
    collect(Board::new(), Player::Human, &mut seen, &mut out);
    out
}

fn collect(
    board: Board,
    to_move: Player,
    seen: &mut std::collections::HashSet<Board>,
    out: &mut Vec<(Board, Player)>,
) {
    if !seen.insert(board) {
        return;
    }
    if has_won(&board, Player::Human) || has_won(&board, Player::Computer) || is_draw(&board) {
        return;
    }
    out.push((board, to_move));
    for cell in empty_cells(&board) {
        let mut next = board;
        next.set(cell, to_move);
        collect(next, to_move.opponent(), seen, out);
    }
}

/// Every board reachable through legal play, finished games included.
pub fn all_reachable_boards() -> Vec<Board> {
    let mut boards = Vec::new();
    let mut stack = vec![(Board::new(), Player::Human)];
    let mut seen = std::collections::HashSet::new();
    while let Some((board, to_move)) = stack.pop() {
        if !seen.insert(board) {
            continue;
        }
        boards.push(board);
        if has_won(&board, Player::Human) || has_won(&board, Player::Computer) {
            continue;
        }
        for cell in empty_cells(&board) {
            let mut next = board;
            next.set(cell, to_move);
            stack.push((next, to_move.opponent()));
        }
    }
    boards
}
