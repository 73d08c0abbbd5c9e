//! The game engine: owns one session at a time and drives it from
//! tile-selection events.

use crate::board::{self, Layout};
use crate::contracts::{Contract, SelectionContract, assert_invariants, assert_selection_post};
use crate::error::ConfigurationError;
use crate::grid::Position;
use crate::selection::SelectionResult;
use crate::session::Session;
use crate::snapshot::EngineState;
use crate::turn::{SessionId, TurnRecord};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, instrument};

/// Memory game engine.
///
/// The engine is a plain value: no global state, no timers, no threads. The
/// shell forwards selections, schedules its own flip-back delay after a
/// [`SelectionResult::Mismatched`], and renders [`EngineState`] snapshots.
///
/// The random source is injected so boards can be reproduced from a seed.
#[derive(Debug, Clone)]
pub struct Engine<R = StdRng> {
    rng: R,
    session: Session,
}

impl Engine<StdRng> {
    /// Starts a session on an OS-seeded board.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError`] if `side` is not a playable grid size.
    pub fn start(side: usize) -> Result<Self, ConfigurationError> {
        Self::with_rng(side, StdRng::from_os_rng())
    }

    /// Starts a session whose boards are reproducible from `seed`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError`] if `side` is not a playable grid size.
    pub fn seeded(side: usize, seed: u64) -> Result<Self, ConfigurationError> {
        Self::with_rng(side, StdRng::seed_from_u64(seed))
    }

    /// Starts a session on a fixed layout. Restarts deal OS-seeded boards.
    pub fn from_layout(layout: Layout) -> Self {
        Self::with_layout(layout, StdRng::from_os_rng())
    }
}

impl<R: Rng> Engine<R> {
    /// Starts a session using the given random source.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError`] if `side` is not a playable grid size.
    #[instrument(skip(rng))]
    pub fn with_rng(side: usize, mut rng: R) -> Result<Self, ConfigurationError> {
        let layout = board::generate(side, &mut rng)?;
        Ok(Self::with_layout(layout, rng))
    }

    /// Starts a session on a fixed layout using the given random source for restarts.
    pub fn with_layout(layout: Layout, rng: R) -> Self {
        let session = Session::new(SessionId::FIRST, layout);
        info!(session = %session.id(), grid = %session.board().grid(), "Session started");
        Self { rng, session }
    }

    /// Handles a "tile selected" event.
    ///
    /// Refused selections return [`SelectionResult::NoOp`] and leave the
    /// session untouched. Only the second pick of a turn spends a try.
    #[instrument(skip(self), fields(session = %self.session.id()))]
    pub fn select_tile(&mut self, position: Position) -> SelectionResult {
        if let Err(reason) = SelectionContract::pre(&self.session, &position) {
            debug!(%reason, "Selection ignored");
            return SelectionResult::NoOp(reason);
        }

        let before = cfg!(debug_assertions).then(|| self.session.clone());
        let result = self.session.reveal(position);
        if let Some(before) = before {
            assert_selection_post(&before, &self.session);
        }

        debug!(?result, remaining = self.session.budget().remaining(), "Selection applied");
        result
    }

    /// Flips a mismatched pair back face down.
    ///
    /// Only acts when `session` is still the current session and a mismatch
    /// is pending; otherwise it is a no-op. Always returns a fresh snapshot.
    #[instrument(skip(self), fields(current = %self.session.id()))]
    pub fn resolve_mismatch(&mut self, session: SessionId) -> EngineState {
        if session != self.session.id() {
            debug!(stale = %session, "Ignoring flip-back from a previous session");
            return self.state();
        }

        if self.session.flip_back() {
            if cfg!(debug_assertions) {
                assert_invariants(&self.session);
            }
        } else {
            debug!("No mismatch pending");
        }
        self.state()
    }

    /// Discards the current session and deals a new board.
    ///
    /// Callable from any state. On error the current session is kept.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError`] if `side` is not a playable grid size.
    #[instrument(skip(self), fields(previous = %self.session.id()))]
    pub fn restart_game(&mut self, side: usize) -> Result<EngineState, ConfigurationError> {
        let layout = board::generate(side, &mut self.rng)?;
        Ok(self.restart_with_layout(layout))
    }

    /// Discards the current session and starts over on a fixed layout.
    #[instrument(skip_all, fields(previous = %self.session.id()))]
    pub fn restart_with_layout(&mut self, layout: Layout) -> EngineState {
        let id = self.session.id().next();
        self.session = Session::new(id, layout);
        info!(session = %id, grid = %self.session.board().grid(), "Session restarted");
        self.state()
    }

    /// Snapshot of the current session.
    pub fn state(&self) -> EngineState {
        EngineState::capture(&self.session)
    }

    /// Current session.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Completed turns of the current session, oldest first.
    pub fn history(&self) -> &[TurnRecord] {
        self.session.history()
    }
}
