//! Application state and key handling.

use super::input::move_cursor;
use crossterm::event::KeyCode;
use std::time::Duration;
use strictly_minimax::{
    Board, Phase, Position, Session, SharedSession, TurnError, lock, schedule_computer_move,
    share,
};
use tracing::{debug, info};

/// What the event loop should do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// Keep running.
    Continue,
    /// Leave the UI.
    Quit,
}

/// Main application state.
pub struct App {
    session: SharedSession,
    cursor: Position,
    /// Last rejection, tagged with the session revision it was raised at.
    message: Option<(u64, String)>,
    delay: Duration,
}

impl App {
    /// Creates a new application around `session`.
    pub fn new(session: Session, delay: Duration) -> Self {
        Self {
            session: share(session),
            cursor: Position::Center,
            message: None,
            delay,
        }
    }

    /// Snapshot of the board.
    pub fn board(&self) -> Board {
        *lock(&self.session).board()
    }

    /// Engine lookahead, for the title bar.
    pub fn depth(&self) -> u8 {
        lock(&self.session).engine().depth()
    }

    /// Square under the cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Status line: the last rejection until the session moves on, then the session status.
    pub fn status(&self) -> String {
        let session = lock(&self.session);
        match &self.message {
            Some((revision, message)) if *revision == session.revision() => message.clone(),
            _ => session.status_text(),
        }
    }

    /// Handles a key press. Must run inside a tokio runtime.
    pub fn handle_key(&mut self, key: KeyCode) -> Control {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => {
                info!("User quit");
                return Control::Quit;
            }
            KeyCode::Char('r') => self.restart(),
            KeyCode::Char(c) if c.is_ascii_digit() => {
                if let Some(position) = Position::parse(&c.to_string()) {
                    self.cursor = position;
                    self.play(position);
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.play(self.cursor),
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.cursor = move_cursor(self.cursor, key);
            }
            _ => {}
        }
        Control::Continue
    }

    fn play(&mut self, position: Position) {
        let (result, revision) = {
            let mut session = lock(&self.session);
            let result = session.play_human(position.to_index());
            (result, session.revision())
        };
        match result {
            Ok(Phase::AwaitingComputer) => {
                self.message = None;
                // The task re-checks the session when it fires; no handle is kept.
                let _ = schedule_computer_move(self.session.clone(), self.delay);
            }
            Ok(_) => self.message = None,
            Err(e) => {
                debug!(error = %e, position = %position, "Move rejected");
                let message = match e {
                    TurnError::Occupied(_) => format!("{} is already taken", position),
                    other => other.to_string(),
                };
                self.message = Some((revision, message));
            }
        }
    }

    /// Restarts the game.
    fn restart(&mut self) {
        debug!("Restarting game");
        lock(&self.session).reset();
        self.cursor = Position::Center;
        self.message = None;
    }
}
