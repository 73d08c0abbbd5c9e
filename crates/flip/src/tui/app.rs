//! Application state and logic.

use super::input;
use crossterm::event::KeyCode;
use flip_core::{
    Engine, EngineState, Outcome, Position, Rejection, SelectionResult, SessionId,
};
use std::time::Duration;
use tokio::time::Instant;
use tracing::{debug, info, instrument, warn};

/// A mismatched pair waiting to flip back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingFlip {
    deadline: Instant,
    session: SessionId,
}

impl PendingFlip {
    /// When the pair should flip back.
    pub fn deadline(&self) -> Instant {
        self.deadline
    }

    /// Session that produced the mismatch.
    pub fn session(&self) -> SessionId {
        self.session
    }
}

/// Main application state.
pub struct App {
    engine: Engine,
    grid_size: usize,
    mismatch_delay: Duration,
    cursor: Position,
    status_message: String,
    pending_flip: Option<PendingFlip>,
    should_quit: bool,
}

impl App {
    /// Creates a new application around a started engine.
    pub fn new(engine: Engine, mismatch_delay: Duration) -> Self {
        let grid_size = engine.state().grid.side();
        Self {
            engine,
            grid_size,
            mismatch_delay,
            cursor: Position::new(0, 0),
            status_message: "Match identical numbers!".to_string(),
            pending_flip: None,
            should_quit: false,
        }
    }

    /// Current engine snapshot.
    pub fn state(&self) -> EngineState {
        self.engine.state()
    }

    /// Tile under the cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Gets the current status message.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// Armed flip-back timer, if any.
    pub fn pending_flip(&self) -> Option<PendingFlip> {
        self.pending_flip
    }

    /// Returns true once the player asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Dispatches a key press.
    pub fn handle_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => {
                info!("User quit");
                self.should_quit = true;
            }
            KeyCode::Char('r') => self.restart(),
            KeyCode::Enter | KeyCode::Char(' ') => self.select(),
            key if input::is_movement(key) => {
                let grid = self.engine.state().grid;
                self.cursor = input::move_cursor(self.cursor, key, grid);
            }
            _ => {}
        }
    }

    /// Flips the tile under the cursor.
    #[instrument(skip(self), fields(cursor = %self.cursor))]
    pub fn select(&mut self) {
        let result = self.engine.select_tile(self.cursor);
        debug!(?result, "Selection result");

        match result {
            SelectionResult::NoOp(Rejection::Resolving) => {}
            SelectionResult::NoOp(Rejection::GameOver) => {
                self.status_message = "Game over. Press 'r' to play again.".to_string();
            }
            SelectionResult::NoOp(reason) => {
                debug!(%reason, "Selection refused");
            }
            SelectionResult::FirstPickAccepted { .. } => {
                self.status_message = "Pick a second tile.".to_string();
            }
            SelectionResult::Matched { .. } => {
                self.status_message = "It's a match!".to_string();
            }
            SelectionResult::Mismatched { session, .. } => {
                self.status_message = "No match.".to_string();
                self.pending_flip = Some(PendingFlip {
                    deadline: Instant::now() + self.mismatch_delay,
                    session,
                });
            }
            SelectionResult::GameOver(Outcome::Won) => {
                info!("Player won");
                self.status_message =
                    "Congratulations, you won! Press 'r' to restart or 'q' to quit.".to_string();
            }
            SelectionResult::GameOver(Outcome::Lost) => {
                info!("Player ran out of tries");
                self.status_message =
                    "Game over! Maximum tries reached. Press 'r' to restart or 'q' to quit."
                        .to_string();
            }
        }
    }

    /// Fires the armed flip-back timer.
    pub fn flip_back(&mut self) {
        if let Some(pending) = self.pending_flip.take() {
            debug!(session = %pending.session, "Flip-back timer fired");
            let state = self.engine.resolve_mismatch(pending.session);
            if !state.turn.is_resolving() && !state.status.is_terminal() {
                self.status_message = "Pick a tile.".to_string();
            }
        }
    }

    /// Starts over on a fresh board of the same size.
    ///
    /// An armed timer stays armed; the engine ignores it once it fires.
    pub fn restart(&mut self) {
        debug!("Restarting game");
        match self.engine.restart_game(self.grid_size) {
            Ok(_) => {
                self.cursor = Position::new(0, 0);
                self.status_message = "Game restarted. Match identical numbers!".to_string();
            }
            Err(e) => {
                warn!(error = %e, "Restart failed");
                self.status_message = format!("Restart failed: {}", e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flip_core::{GameStatus, GridSize, Layout, Reveal, TurnState};

    fn app() -> App {
        let grid = GridSize::new(2).unwrap();
        let layout = Layout::from_faces(grid, [1, 2, 1, 2]).unwrap();
        App::new(Engine::from_layout(layout), Duration::from_millis(500))
    }

    #[test]
    fn test_mismatch_arms_timer() {
        let mut app = app();
        app.handle_key(KeyCode::Enter);
        app.handle_key(KeyCode::Right);
        app.handle_key(KeyCode::Enter);

        let pending = app.pending_flip().expect("Timer armed");
        assert_eq!(pending.session(), app.state().session);
        assert!(app.state().turn.is_resolving());

        app.flip_back();
        assert!(app.pending_flip().is_none());
        assert_eq!(app.state().turn, TurnState::AwaitingFirstPick);
        assert_eq!(
            app.state().tile(Position::new(0, 1)).unwrap().reveal,
            Reveal::Hidden
        );
    }

    #[test]
    fn test_match_does_not_arm_timer() {
        let mut app = app();
        app.handle_key(KeyCode::Enter);
        app.handle_key(KeyCode::Down);
        app.handle_key(KeyCode::Char(' '));

        assert!(app.pending_flip().is_none());
        assert_eq!(app.state().pairs_found, 1);
        assert_eq!(app.status_message(), "It's a match!");
    }

    #[test]
    fn test_restart_leaves_timer_to_engine() {
        let mut app = app();
        app.handle_key(KeyCode::Enter);
        app.handle_key(KeyCode::Right);
        app.handle_key(KeyCode::Enter);
        let stale = app.pending_flip().expect("Timer armed").session();

        app.handle_key(KeyCode::Char('r'));
        assert_ne!(app.state().session, stale);
        assert_eq!(app.cursor(), Position::new(0, 0));

        app.handle_key(KeyCode::Enter);
        app.flip_back();
        assert!(matches!(
            app.state().turn,
            TurnState::AwaitingSecondPick { .. }
        ));
    }

    #[test]
    fn test_quit_keys() {
        let mut app = app();
        assert!(!app.should_quit());
        app.handle_key(KeyCode::Esc);
        assert!(app.should_quit());

        let mut app = self::app();
        app.handle_key(KeyCode::Char('q'));
        assert!(app.should_quit());
    }

    #[test]
    fn test_win_message() {
        let mut app = app();
        for key in [
            KeyCode::Enter,
            KeyCode::Down,
            KeyCode::Enter,
            KeyCode::Right,
            KeyCode::Enter,
            KeyCode::Up,
            KeyCode::Enter,
        ] {
            app.handle_key(key);
        }
        assert_eq!(app.state().status, GameStatus::Won);
        assert!(app.status_message().contains("won"));
    }
}
