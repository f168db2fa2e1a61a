//! Terminal UI for playing against the engine.

mod app;
mod input;
mod ui;

use crate::config::GameConfig;
use anyhow::{Context, Result};
use app::{App, Control};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::fs::File;
use std::io::{self, Stdout};
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use strictly_minimax::Session;
use tracing::{Subscriber, error, info, instrument};
use tracing_subscriber::EnvFilter;

type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Runs the interactive game until the player quits.
pub async fn run_tui(config: GameConfig, config_path: &Path) -> Result<()> {
    // Log to a file so output does not interfere with the screen
    let _ = tracing::subscriber::set_global_default(file_subscriber(config.log_file())?);
    log_startup(&config, config_path);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let mut app = App::new(Session::new(config.engine()), config.delay());
    let res = run_game(&mut terminal, &mut app).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    res
}

/// Builds a subscriber writing plain-text logs to `log_file`.
fn file_subscriber(log_file: &Path) -> Result<impl Subscriber + Send + Sync + 'static> {
    let file = File::create(log_file)
        .with_context(|| format!("Failed to create log file {}", log_file.display()))?;
    Ok(tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .finish())
}

/// Records where the settings came from, once the log file is open.
fn log_startup(config: &GameConfig, config_path: &Path) {
    info!(
        config_file = %config_path.display(),
        found = config_path.exists(),
        depth = config.depth(),
        delay_ms = config.computer_delay_ms(),
        log_file = %config.log_file().display(),
        "Starting TUI"
    );
}

#[instrument(skip_all)]
async fn run_game(terminal: &mut Tui, app: &mut App) -> Result<()> {
    loop {
        let view = ui::View {
            board: app.board(),
            cursor: app.cursor(),
            status: app.status(),
            depth: app.depth(),
        };
        terminal.draw(|frame| ui::draw(frame, &view))?;

        if event::poll(Duration::from_millis(50))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
            && app.handle_key(key.code) == Control::Quit
        {
            return Ok(());
        }

        // Let the pending computer move run between polls
        tokio::task::yield_now().await;
    }
}
