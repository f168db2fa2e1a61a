//! Turn control for a human playing the engine.

mod controller;
mod error;
mod phase;
mod scheduler;

pub use controller::Session;
pub use error::TurnError;
pub use phase::{Outcome, Phase};
pub use scheduler::{SharedSession, lock, schedule_computer_move, share};
