//! Human-versus-computer turn controller.

use super::error::TurnError;
use super::phase::{Outcome, Phase};
use crate::board::{Board, CELLS, Player, has_won, is_draw};
use crate::search::Engine;
use tracing::{debug, info, instrument};

/// One round of tic-tac-toe between a human (`X`, moving first) and the engine (`O`).
///
/// All turn order is carried in [`Phase`]. Input that arrives in the wrong
/// phase is rejected with a [`TurnError`] instead of being silently dropped.
#[derive(Debug, Clone)]
pub struct Session {
    board: Board,
    phase: Phase,
    engine: Engine,
    revision: u64,
}

impl Session {
    /// Creates a session with an empty board, waiting for the human.
    ///
    /// The engine always plays the computer's side.
    #[instrument]
    pub fn new(engine: Engine) -> Self {
        info!(depth = engine.depth(), "Creating new session");
        Self {
            board: Board::new(),
            phase: Phase::AwaitingHuman,
            engine: engine.playing(Player::Computer),
            revision: 0,
        }
    }

    /// Creates a session whose engine looks `depth` plies ahead.
    pub fn with_depth(depth: u8) -> Self {
        Self::new(Engine::new(depth))
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns the computer's engine.
    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    /// Counter bumped by every accepted move and every reset.
    ///
    /// Deferred work records it and compares before acting.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Status line for display: `"X turn"`, `"O turn"`, `"X wins!"`, `"O wins!"` or `"Draw!"`.
    pub fn status_text(&self) -> String {
        self.phase.to_string()
    }

    /// Places the human's mark at `cell` (0-8).
    #[instrument(skip(self), fields(revision = self.revision))]
    pub fn play_human(&mut self, cell: usize) -> Result<Phase, TurnError> {
        match self.phase {
            Phase::AwaitingHuman => {}
            Phase::AwaitingComputer => return Err(TurnError::NotHumanTurn),
            Phase::Finished(_) => return Err(TurnError::GameOver),
        }
        if cell >= CELLS {
            return Err(TurnError::OutOfRange(cell));
        }
        if !self.board.is_empty(cell) {
            return Err(TurnError::Occupied(cell));
        }

        self.board.set(cell, Player::Human);
        self.advance(Player::Human);
        info!(cell, phase = %self.phase, "Human moved");
        Ok(self.phase)
    }

    /// Asks the engine for the computer's move and plays it.
    ///
    /// Returns the cell the computer took.
    #[instrument(skip(self), fields(revision = self.revision))]
    pub fn play_computer(&mut self) -> Result<usize, TurnError> {
        match self.phase {
            Phase::AwaitingComputer => {}
            Phase::AwaitingHuman => return Err(TurnError::NotComputerTurn),
            Phase::Finished(_) => return Err(TurnError::GameOver),
        }

        let cell = self
            .engine
            .best_move(&mut self.board)
            .ok_or(TurnError::NoMoveAvailable)?;

        self.board.set(cell, Player::Computer);
        self.advance(Player::Computer);
        info!(cell, phase = %self.phase, "Computer moved");
        Ok(cell)
    }

    /// Clears the board and gives the first move back to the human.
    #[instrument(skip(self), fields(revision = self.revision))]
    pub fn reset(&mut self) {
        self.board = Board::new();
        self.phase = Phase::AwaitingHuman;
        self.revision += 1;
        debug!("Session reset");
    }

    fn advance(&mut self, mover: Player) {
        self.phase = if has_won(&self.board, mover) {
            Phase::Finished(Outcome::Winner(mover))
        } else if is_draw(&self.board) {
            Phase::Finished(Outcome::Draw)
        } else {
            match mover {
                Player::Human => Phase::AwaitingComputer,
                Player::Computer => Phase::AwaitingHuman,
            }
        };
        self.revision += 1;
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Engine::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_waits_for_human() {
        let session = Session::default();
        assert_eq!(session.phase(), Phase::AwaitingHuman);
        assert_eq!(session.board(), &Board::new());
        assert_eq!(session.status_text(), "X turn");
    }

    #[test]
    fn test_human_move_hands_turn_to_computer() {
        let mut session = Session::default();
        assert_eq!(session.play_human(0), Ok(Phase::AwaitingComputer));
        assert_eq!(session.status_text(), "O turn");
        assert_eq!(session.revision(), 1);
    }

    #[test]
    fn test_human_rejected_during_computer_turn() {
        let mut session = Session::default();
        session.play_human(0).unwrap();
        let before = session.board().clone();

        assert_eq!(session.play_human(1), Err(TurnError::NotHumanTurn));
        assert_eq!(session.board(), &before);
        assert_eq!(session.revision(), 1);
    }

    #[test]
    fn test_computer_rejected_during_human_turn() {
        let mut session = Session::default();
        assert_eq!(session.play_computer(), Err(TurnError::NotComputerTurn));
        assert_eq!(session.revision(), 0);
    }

    #[test]
    fn test_bad_cells_rejected() {
        let mut session = Session::default();
        assert_eq!(session.play_human(9), Err(TurnError::OutOfRange(9)));

        session.play_human(4).unwrap();
        let reply = session.play_computer().unwrap();
        assert_eq!(session.play_human(4), Err(TurnError::Occupied(4)));
        assert_eq!(session.play_human(reply), Err(TurnError::Occupied(reply)));
        assert_eq!(session.phase(), Phase::AwaitingHuman);
    }

    #[test]
    fn test_computer_answers_corner_with_center() {
        let mut session = Session::default();
        session.play_human(0).unwrap();
        assert_eq!(session.play_computer(), Ok(4));
        assert_eq!(session.phase(), Phase::AwaitingHuman);
    }

    #[test]
    fn test_computer_wins_when_human_blunders() {
        let mut session = Session::default();
        // X: 0, O: 4 (center), X: 1, O blocks at 2, X: 8, O completes 2-4-6.
        session.play_human(0).unwrap();
        assert_eq!(session.play_computer(), Ok(4));
        session.play_human(1).unwrap();
        assert_eq!(session.play_computer(), Ok(2));
        session.play_human(8).unwrap();
        assert_eq!(session.play_computer(), Ok(6));

        assert_eq!(
            session.phase(),
            Phase::Finished(Outcome::Winner(Player::Computer))
        );
        assert_eq!(session.status_text(), "O wins!");
        assert_eq!(session.play_human(3), Err(TurnError::GameOver));
        assert_eq!(session.play_computer(), Err(TurnError::GameOver));
    }

    #[test]
    fn test_reset_returns_to_initial_state() {
        let mut session = Session::default();
        session.play_human(0).unwrap();
        session.play_computer().unwrap();
        session.play_human(1).unwrap();
        session.play_computer().unwrap();
        session.play_human(8).unwrap();
        session.play_computer().unwrap();
        assert!(session.phase().is_finished());

        let revision = session.revision();
        session.reset();
        assert_eq!(session.board(), &Board::new());
        assert_eq!(session.phase(), Phase::AwaitingHuman);
        assert_eq!(session.phase().outcome(), None);
        assert!(session.revision() > revision);
    }
}
