//! Terminal UI for flip.

mod app;
mod input;
mod ui;

pub use app::{App, PendingFlip};
pub use input::move_cursor;

use crate::config::FlipConfig;
use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyEvent, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use flip_core::Engine;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::{Instant, sleep_until};
use tracing::{debug, error, info, instrument, warn};

/// Runs the game until the player quits.
pub async fn run(config: FlipConfig) -> Result<()> {
    let engine = match config.seed() {
        Some(seed) => Engine::seeded(*config.grid_size(), *seed),
        None => Engine::start(*config.grid_size()),
    }
    .context("Failed to start game")?;
    let mut app = App::new(engine, config.mismatch_delay());

    info!("Starting flip TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let (key_tx, mut key_rx) = mpsc::channel(32);
    let reader = tokio::task::spawn_blocking(move || read_keys(key_tx));

    let res = run_game(&mut terminal, &mut app, &mut key_rx).await;

    // Closing the channel stops the reader on its next poll.
    drop(key_rx);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = reader.await {
        warn!(error = %e, "Input reader did not shut down cleanly");
    }

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    res
}

/// Main loop: redraw, then wait for a key or the flip-back deadline.
#[instrument(skip_all)]
async fn run_game(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
    keys: &mut mpsc::Receiver<KeyEvent>,
) -> Result<()> {
    loop {
        let state = app.state();
        terminal.draw(|frame| ui::draw(frame, &state, app.cursor(), app.status_message()))?;

        if app.should_quit() {
            return Ok(());
        }

        let deadline = app.pending_flip().map(|pending| pending.deadline());
        tokio::select! {
            key = keys.recv() => match key {
                Some(key) => app.handle_key(key.code),
                None => {
                    debug!("Input closed");
                    return Ok(());
                }
            },
            () = flip_timer(deadline) => app.flip_back(),
        }
    }
}

/// Completes at the deadline, or never when no flip-back is armed.
async fn flip_timer(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => sleep_until(deadline).await,
        None => std::future::pending().await,
    }
}

/// Forwards key presses until the receiver is dropped.
fn read_keys(tx: mpsc::Sender<KeyEvent>) {
    while !tx.is_closed() {
        match event::poll(Duration::from_millis(100)) {
            Ok(false) => continue,
            Ok(true) => {}
            Err(e) => {
                error!(error = %e, "Failed to poll terminal events");
                return;
            }
        }

        match event::read() {
            Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                if tx.blocking_send(key).is_err() {
                    return;
                }
            }
            Ok(_) => {}
            Err(e) => {
                error!(error = %e, "Failed to read terminal event");
                return;
            }
        }
    }
}
