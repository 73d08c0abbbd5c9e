//! Per-session game state and its transitions.

use crate::board::{Board, Layout};
use crate::grid::Position;
use crate::selection::{Rejection, SelectionResult};
use crate::turn::{GameStatus, Outcome, SessionId, TryBudget, TurnRecord, TurnState};
use tracing::{debug, info};

/// Everything one game owns: tiles, budget, turn cursor, status, history.
///
/// A restart replaces the whole value; nothing carries over between sessions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub(crate) id: SessionId,
    pub(crate) board: Board,
    pub(crate) budget: TryBudget,
    pub(crate) turn: TurnState,
    pub(crate) status: GameStatus,
    pub(crate) history: Vec<TurnRecord>,
}

impl Session {
    /// Starts a session on a freshly dealt board.
    pub fn new(id: SessionId, layout: Layout) -> Self {
        let budget = TryBudget::new(layout.grid().max_tries());
        Self {
            id,
            board: Board::from_layout(layout),
            budget,
            turn: TurnState::AwaitingFirstPick,
            status: GameStatus::InProgress,
            history: Vec::new(),
        }
    }

    /// Session identifier.
    pub fn id(&self) -> SessionId {
        self.id
    }

    /// Tile arena.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Try accounting.
    pub fn budget(&self) -> &TryBudget {
        &self.budget
    }

    /// Current turn cursor.
    pub fn turn(&self) -> TurnState {
        self.turn
    }

    /// Current status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Completed turns, oldest first.
    pub fn history(&self) -> &[TurnRecord] {
        &self.history
    }

    /// Reveals a tile whose selection already passed the preconditions.
    pub(crate) fn reveal(&mut self, position: Position) -> SelectionResult {
        match self.turn {
            TurnState::AwaitingFirstPick => {
                self.show(position);
                self.turn = TurnState::AwaitingSecondPick { first: position };
                debug!(%position, "First pick revealed");
                SelectionResult::FirstPickAccepted { position }
            }
            TurnState::AwaitingSecondPick { first } => self.complete_turn(first, position),
            TurnState::Resolving { .. } => SelectionResult::NoOp(Rejection::Resolving),
        }
    }

    fn complete_turn(&mut self, first: Position, second: Position) -> SelectionResult {
        self.show(second);
        let remaining = self.budget.spend();

        let matched = self.board.tile(first).map(|tile| tile.face())
            == self.board.tile(second).map(|tile| tile.face());
        self.history.push(TurnRecord {
            first,
            second,
            matched,
        });

        if matched {
            for position in [first, second] {
                if let Some(tile) = self.board.tile_mut(position) {
                    tile.mark_matched();
                }
            }
        }
        debug!(%first, %second, matched, remaining, "Turn completed");

        // Exhaustion is checked before completion: a last-try match that
        // clears the board still loses.
        if self.budget.is_exhausted() {
            self.status = GameStatus::LostByExhaustedTries;
            self.turn = TurnState::AwaitingFirstPick;
            self.board.lock_all();
            info!(session = %self.id, "Out of tries");
            return SelectionResult::GameOver(Outcome::Lost);
        }

        if !matched {
            self.turn = TurnState::Resolving { first, second };
            return SelectionResult::Mismatched {
                first,
                second,
                session: self.id,
            };
        }

        self.turn = TurnState::AwaitingFirstPick;
        if self.board.all_matched() {
            self.status = GameStatus::Won;
            info!(session = %self.id, tries_used = self.budget.used(), "All pairs found");
            return SelectionResult::GameOver(Outcome::Won);
        }

        SelectionResult::Matched { first, second }
    }

    /// Flips a pending mismatched pair face down. Returns false if nothing was pending.
    pub(crate) fn flip_back(&mut self) -> bool {
        let TurnState::Resolving { first, second } = self.turn else {
            return false;
        };
        if self.status.is_terminal() {
            return false;
        }

        for position in [first, second] {
            if let Some(tile) = self.board.tile_mut(position) {
                tile.hide();
            }
        }
        self.turn = TurnState::AwaitingFirstPick;
        debug!(%first, %second, "Mismatched pair flipped back");
        true
    }

    fn show(&mut self, position: Position) {
        if let Some(tile) = self.board.tile_mut(position) {
            tile.show();
        }
    }
}
