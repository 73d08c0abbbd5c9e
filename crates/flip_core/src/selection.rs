//! Results returned to the presentation layer for each tile selection.
//!
//! Selections are domain events: the engine answers every one of them with a
//! [`SelectionResult`], including the ones it refuses.

use crate::grid::Position;
use crate::turn::{Outcome, SessionId};
use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Why a selection was ignored.
///
/// Stray or late clicks are expected from a user interface, so these are not
/// errors; they leave the session untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum Rejection {
    /// The session has already been won or lost.
    #[display("Game is already over")]
    GameOver,

    /// A mismatched pair is still face up.
    #[display("Waiting for the mismatched pair to flip back")]
    Resolving,

    /// The position is off the board.
    #[display("Position {position} is off the board")]
    OutOfBounds {
        /// Requested position.
        position: Position,
    },

    /// The tile belongs to a pair already found.
    #[display("Tile {position} is already matched")]
    AlreadyMatched {
        /// Requested position.
        position: Position,
    },

    /// The tile is locked.
    #[display("Tile {position} is disabled")]
    Disabled {
        /// Requested position.
        position: Position,
    },

    /// The tile is already the first pick of this turn.
    #[display("Tile {position} is already face up")]
    PendingFirstPick {
        /// Requested position.
        position: Position,
    },
}

/// Outcome of a single `select_tile` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectionResult {
    /// Nothing changed.
    NoOp(Rejection),
    /// The first tile of a turn is now face up.
    FirstPickAccepted {
        /// Tile revealed.
        position: Position,
    },
    /// Both tiles share a face and stay revealed.
    Matched {
        /// First tile of the pair.
        first: Position,
        /// Second tile of the pair.
        second: Position,
    },
    /// The faces differ; call `resolve_mismatch` with `session` to flip them back.
    Mismatched {
        /// First tile of the turn.
        first: Position,
        /// Second tile of the turn.
        second: Position,
        /// Session that must still be current when the flip-back is applied.
        session: SessionId,
    },
    /// The session ended on this selection.
    GameOver(Outcome),
}

impl SelectionResult {
    /// Returns true if the selection changed the session.
    pub fn is_accepted(&self) -> bool {
        !matches!(self, SelectionResult::NoOp(_))
    }
}
