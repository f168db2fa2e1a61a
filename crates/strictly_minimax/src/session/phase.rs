//! Turn phases of a human-versus-computer round.

use crate::board::Player;
use serde::{Deserialize, Serialize};

/// Outcome of a finished round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// A player completed a line.
    Winner(Player),
    /// The board filled with no line.
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Winner(player) => Some(*player),
            Outcome::Draw => None,
        }
    }

    /// Returns true if the round was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Winner(player) => write!(f, "{} wins!", player),
            Outcome::Draw => write!(f, "Draw!"),
        }
    }
}

/// Whose input the session is waiting for.
///
/// `Finished` is terminal; only a reset leaves it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// The human may place a mark.
    AwaitingHuman,
    /// The computer's reply is pending; human input is rejected.
    AwaitingComputer,
    /// The round is over.
    Finished(Outcome),
}

impl Phase {
    /// Returns true once the round has an outcome.
    pub fn is_finished(&self) -> bool {
        matches!(self, Phase::Finished(_))
    }

    /// The outcome, if finished.
    pub fn outcome(&self) -> Option<Outcome> {
        match self {
            Phase::Finished(outcome) => Some(*outcome),
            _ => None,
        }
    }
}

impl std::fmt::Display for Phase {
    /// Status line shown to the player.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Phase::AwaitingHuman => write!(f, "{} turn", Player::Human),
            Phase::AwaitingComputer => write!(f, "{} turn", Player::Computer),
            Phase::Finished(outcome) => write!(f, "{}", outcome),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_labels() {
        assert_eq!(Phase::AwaitingHuman.to_string(), "X turn");
        assert_eq!(Phase::AwaitingComputer.to_string(), "O turn");
        assert_eq!(
            Phase::Finished(Outcome::Winner(Player::Human)).to_string(),
            "X wins!"
        );
        assert_eq!(
            Phase::Finished(Outcome::Winner(Player::Computer)).to_string(),
            "O wins!"
        );
        assert_eq!(Phase::Finished(Outcome::Draw).to_string(), "Draw!");
    }

    #[test]
    fn test_outcome_accessors() {
        assert_eq!(Outcome::Winner(Player::Computer).winner(), Some(Player::Computer));
        assert!(Outcome::Draw.is_draw());
        assert_eq!(Phase::AwaitingHuman.outcome(), None);
        assert!(Phase::Finished(Outcome::Draw).is_finished());
    }
}
