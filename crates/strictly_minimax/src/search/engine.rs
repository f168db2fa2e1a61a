//! Depth-bounded minimax with alpha-beta pruning.

use super::placement::Placement;
use crate::board::{Board, CELLS, Player, empty_cells, has_won, is_draw};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, trace};

/// Search score. Positive favors the engine's side, negative its opponent.
pub type Score = i32;

const INFINITY: Score = Score::MAX;

/// Whether the search may skip siblings that cannot change the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Pruning {
    /// Alpha-beta cutoffs.
    #[default]
    AlphaBeta,
    /// Plain minimax over every child. Same result, more nodes.
    Exhaustive,
}

/// The engine's choice for a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decision {
    /// Board index (0-8) to play.
    pub cell: usize,
    /// Score of that move.
    pub score: Score,
    /// Positions visited while scoring every root move.
    pub nodes: u64,
}

/// A decision together with the root score of every legal move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Analysis {
    /// The chosen move.
    pub decision: Decision,
    /// Root score of every legal move, in cell order.
    pub scores: Vec<(usize, Score)>,
}

/// Recursion state for one search node.
#[derive(Debug, Clone, Copy)]
struct Node {
    ply: Score,
    remaining: Score,
    maximizing: bool,
}

impl Node {
    fn child(self) -> Self {
        Self {
            ply: self.ply + 1,
            remaining: self.remaining - 1,
            maximizing: !self.maximizing,
        }
    }
}

/// Minimax move selector.
///
/// `depth` is the number of plies the engine looks ahead, counting its own
/// move. A win found `ply` plies from the root scores `depth - ply` and a loss
/// scores `ply - depth`, so faster wins and slower losses are preferred. A win
/// landing exactly on the horizon scores the same as a draw.
///
/// The engine holds no board. It borrows the caller's board mutably while it
/// searches and leaves it exactly as it found it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Engine {
    depth: u8,
    side: Player,
    pruning: Pruning,
}

impl Engine {
    /// Lookahead that never loses when playing second.
    pub const DEFAULT_DEPTH: u8 = 7;

    /// Creates an engine playing the computer's side with alpha-beta pruning.
    pub fn new(depth: u8) -> Self {
        Self {
            depth,
            side: Player::Computer,
            pruning: Pruning::AlphaBeta,
        }
    }

    /// Returns this engine playing `side` instead.
    pub fn playing(self, side: Player) -> Self {
        Self { side, ..self }
    }

    /// Returns this engine with the given pruning mode.
    pub fn with_pruning(self, pruning: Pruning) -> Self {
        Self { pruning, ..self }
    }

    /// Maximum search depth in plies.
    pub fn depth(&self) -> u8 {
        self.depth
    }

    /// The side this engine moves for.
    pub fn side(&self) -> Player {
        self.side
    }

    /// Pruning mode.
    pub fn pruning(&self) -> Pruning {
        self.pruning
    }

    /// Index of the best empty cell for the engine's side, or `None` on a full board.
    ///
    /// Callers are expected to check for a finished game first; on a board
    /// that already has a winner the result is still an empty cell but carries
    /// no meaning.
    pub fn best_move(&self, board: &mut Board) -> Option<usize> {
        self.decide(board).map(|decision| decision.cell)
    }

    /// Scores every empty cell and picks the highest, lowest index on ties.
    pub fn decide(&self, board: &mut Board) -> Option<Decision> {
        self.analyze(board).map(|analysis| analysis.decision)
    }

    /// Like [`Engine::decide`], keeping the root scores from the same search.
    #[instrument(skip(self, board), fields(depth = self.depth, side = %self.side, board = %board.compact()))]
    pub fn analyze(&self, board: &mut Board) -> Option<Analysis> {
        let mut nodes = 0;
        let scores = self.root_scores(board, &mut nodes);

        let (cell, score) = scores.iter().fold(None, |best, &(cell, score)| match best {
            Some((_, best_score)) if score <= best_score => best,
            _ => Some((cell, score)),
        })?;

        debug!(cell, score, nodes, "Search complete");
        Some(Analysis {
            decision: Decision { cell, score, nodes },
            scores,
        })
    }

    /// Root score of every legal move, in cell order.
    #[instrument(skip(self, board), fields(depth = self.depth, side = %self.side))]
    pub fn score_moves(&self, board: &mut Board) -> Vec<(usize, Score)> {
        let mut nodes = 0;
        self.root_scores(board, &mut nodes)
    }

    fn root_scores(&self, board: &mut Board, nodes: &mut u64) -> Vec<(usize, Score)> {
        let before = *board;
        let root = Node {
            ply: 1,
            remaining: Score::from(self.depth) - 1,
            maximizing: false,
        };

        let mut scores = Vec::with_capacity(CELLS);
        for cell in empty_cells(board) {
            let score = {
                let mut placed = Placement::new(board, cell, self.side);
                self.minimax(&mut placed, root, -INFINITY, INFINITY, nodes)
            };
            trace!(cell, score, "Scored root move");
            scores.push((cell, score));
        }

        debug_assert_eq!(*board, before, "search must restore the board");
        scores
    }

    fn minimax(
        &self,
        board: &mut Board,
        node: Node,
        mut alpha: Score,
        mut beta: Score,
        nodes: &mut u64,
    ) -> Score {
        *nodes += 1;

        let horizon = Score::from(self.depth);
        if has_won(board, self.side) {
            return horizon - node.ply;
        }
        if has_won(board, self.side.opponent()) {
            return node.ply - horizon;
        }
        if is_draw(board) || node.remaining <= 0 {
            return 0;
        }

        let mover = if node.maximizing {
            self.side
        } else {
            self.side.opponent()
        };
        let mut best = if node.maximizing { -INFINITY } else { INFINITY };

        for cell in 0..CELLS {
            if !board.is_empty(cell) {
                continue;
            }

            let score = {
                let mut placed = Placement::new(board, cell, mover);
                self.minimax(&mut placed, node.child(), alpha, beta, nodes)
            };

            if node.maximizing {
                best = best.max(score);
                alpha = alpha.max(best);
            } else {
                best = best.min(score);
                beta = beta.min(best);
            }

            if self.pruning == Pruning::AlphaBeta && beta <= alpha {
                break;
            }
        }

        best
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(Self::DEFAULT_DEPTH)
    }
}
