//! Engine-versus-engine matches.

use crate::board::{Board, Player, has_won, is_draw};
use crate::search::Engine;
use crate::session::Outcome;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// A completed engine-versus-engine game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRecord {
    /// Side that made the first move.
    pub first: Player,
    /// Cells played, in order.
    pub moves: Vec<usize>,
    /// How the game ended.
    pub outcome: Outcome,
    /// Final position.
    pub board: Board,
}

/// Tally of a series of matches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tally {
    /// Games won by `X`.
    pub x_wins: usize,
    /// Games won by `O`.
    pub o_wins: usize,
    /// Drawn games.
    pub draws: usize,
}

impl Tally {
    /// Counts one outcome.
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Winner(Player::Human) => self.x_wins += 1,
            Outcome::Winner(Player::Computer) => self.o_wins += 1,
            Outcome::Draw => self.draws += 1,
        }
    }

    /// Total games counted.
    pub fn games(&self) -> usize {
        self.x_wins + self.o_wins + self.draws
    }
}

/// Plays `x` against `o` from an empty board with `first` to move.
///
/// Each engine is made to play its own mark regardless of how it was built.
#[instrument(skip(x, o), fields(x_depth = x.depth(), o_depth = o.depth()))]
pub fn play_match(x: &Engine, o: &Engine, first: Player) -> MatchRecord {
    let x = x.playing(Player::Human);
    let o = o.playing(Player::Computer);

    let mut board = Board::new();
    let mut moves = Vec::new();
    let mut to_move = first;

    let outcome = loop {
        let engine = match to_move {
            Player::Human => &x,
            Player::Computer => &o,
        };
        let Some(cell) = engine.best_move(&mut board) else {
            break Outcome::Draw;
        };

        board.set(cell, to_move);
        moves.push(cell);
        debug!(player = %to_move, cell, "Engine moved");

        if has_won(&board, to_move) {
            break Outcome::Winner(to_move);
        }
        if is_draw(&board) {
            break Outcome::Draw;
        }
        to_move = to_move.opponent();
    };

    info!(%outcome, moves = moves.len(), "Match finished");
    MatchRecord {
        first,
        moves,
        outcome,
        board,
    }
}

/// Plays `games` matches of an engine against itself, alternating the first mover.
///
/// `X` opens the first game.
#[instrument]
pub fn self_play(depth: u8, games: usize) -> Vec<MatchRecord> {
    let engine = Engine::new(depth);
    (0..games)
        .map(|game| {
            let first = if game % 2 == 0 {
                Player::Human
            } else {
                Player::Computer
            };
            play_match(&engine, &engine, first)
        })
        .collect()
}
