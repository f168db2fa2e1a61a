//! Adversarial search over the board.

mod engine;
mod placement;

pub use engine::{Analysis, Decision, Engine, Pruning, Score};
