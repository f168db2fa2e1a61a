//! Strictly Minimax - Unified CLI
//!
//! Play tic-tac-toe against the engine, query it for a position, or watch it play itself.

#![warn(missing_docs)]

mod cli;
mod config;
mod tui;

use anyhow::{Context, Result, bail};
use clap::Parser;
use cli::{Cli, Command};
use config::GameConfig;
use serde::Serialize;
use strictly_minimax::{
    Analysis, Board, MatchRecord, Player, Position, Tally, has_won, is_draw, self_play,
};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // The TUI owns the terminal and logs to a file instead
    if !matches!(cli.command, Command::Play { .. }) {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
            )
            .with_writer(std::io::stderr)
            .init();
    }

    let config = GameConfig::load(&cli.config)?;

    match cli.command {
        Command::Play { depth, delay_ms } => {
            tui::run_tui(config.with_overrides(depth, delay_ms)?, &cli.config).await
        }
        Command::BestMove {
            board,
            depth,
            side,
            json,
        } => run_best_move(config.with_overrides(depth, None)?, &board, side, json),
        Command::SelfPlay { games, depth, json } => {
            run_self_play(config.with_overrides(depth, None)?, games, json)
        }
    }
}

/// Result of a `best-move` query.
#[derive(Debug, Serialize)]
struct BestMoveReport {
    board: String,
    side: Player,
    depth: u8,
    #[serde(flatten)]
    analysis: Analysis,
}

/// Picks the side to move: explicit `X`/`O`, or whichever side has fewer marks (`X` on ties).
fn side_to_move(board: &Board, side: Option<char>) -> Result<Player> {
    match side.map(|c| c.to_ascii_uppercase()) {
        Some('X') => Ok(Player::Human),
        Some('O') => Ok(Player::Computer),
        Some(other) => bail!("Side must be X or O, got {:?}", other),
        None if board.count(Player::Human) > board.count(Player::Computer) => {
            Ok(Player::Computer)
        }
        None => Ok(Player::Human),
    }
}

#[instrument(skip(config))]
fn run_best_move(config: GameConfig, board: &str, side: Option<char>, json: bool) -> Result<()> {
    let mut board: Board = board
        .parse()
        .with_context(|| format!("Invalid board {:?}", board))?;
    if has_won(&board, Player::Human) || has_won(&board, Player::Computer) || is_draw(&board) {
        bail!("Board {:?} is already finished", board.compact());
    }

    let side = side_to_move(&board, side)?;
    let engine = config.engine().playing(side);
    let Some(analysis) = engine.analyze(&mut board) else {
        bail!("No empty cell on {:?}", board.compact());
    };
    let decision = analysis.decision;
    info!(cell = decision.cell, score = decision.score, "Best move found");

    if json {
        let report = BestMoveReport {
            board: board.compact(),
            side,
            depth: engine.depth(),
            analysis,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{}\n", board);
    let label = Position::from_index(decision.cell)
        .map(|position| position.label())
        .unwrap_or("?");
    println!(
        "{} plays {} (key {}): score {}, {} nodes at depth {}",
        side,
        label,
        decision.cell + 1,
        decision.score,
        decision.nodes,
        engine.depth()
    );
    for (cell, score) in analysis.scores {
        println!("  key {}: {:>3}", cell + 1, score);
    }
    Ok(())
}

/// Result of a `self-play` run.
#[derive(Debug, Serialize)]
struct SelfPlayReport {
    depth: u8,
    games: Vec<MatchRecord>,
    tally: Tally,
}

#[instrument(skip(config))]
fn run_self_play(config: GameConfig, games: usize, json: bool) -> Result<()> {
    let depth = *config.depth();
    let records = self_play(depth, games);

    let mut tally = Tally::default();
    for record in &records {
        tally.record(record.outcome);
    }

    if json {
        let report = SelfPlayReport {
            depth,
            games: records,
            tally,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    for (number, record) in records.iter().enumerate() {
        let keys: Vec<String> = record.moves.iter().map(|cell| (cell + 1).to_string()).collect();
        println!(
            "Game {}: {} first, moves {} -> {}",
            number + 1,
            record.first,
            keys.join(" "),
            record.outcome
        );
    }
    println!(
        "\nDepth {}: X wins {}, O wins {}, draws {} ({} games)",
        depth,
        tally.x_wins,
        tally.o_wins,
        tally.draws,
        tally.games()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_inferred_from_counts() {
        let board: Board = "XX OO    ".parse().unwrap();
        assert_eq!(side_to_move(&board, None).unwrap(), Player::Human);

        let board: Board = "X        ".parse().unwrap();
        assert_eq!(side_to_move(&board, None).unwrap(), Player::Computer);
    }

    #[test]
    fn test_explicit_side() {
        let board = Board::new();
        assert_eq!(side_to_move(&board, Some('o')).unwrap(), Player::Computer);
        assert!(side_to_move(&board, Some('Z')).is_err());
    }

    #[test]
    fn test_best_move_rejects_finished_board() {
        let result = run_best_move(GameConfig::default(), "XXXOO    ", None, false);
        assert!(result.is_err());
    }

    #[test]
    fn test_best_move_reports_open_position() {
        assert!(run_best_move(GameConfig::default(), "XX OO    ", None, true).is_ok());
        assert!(run_best_move(GameConfig::default(), "X   XO   ", Some('O'), false).is_ok());
    }

    #[test]
    fn test_best_move_rejects_garbage() {
        let result = run_best_move(GameConfig::default(), "nope", None, true);
        assert!(result.is_err());
    }
}
