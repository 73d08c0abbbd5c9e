//! Contract-based validation for tile selections.
//!
//! Contracts define correctness through preconditions and postconditions:
//! {P(state, action)} action {Q(before, after)}. A failed precondition is a
//! [`Rejection`], which the engine reports as a no-op.

use crate::grid::Position;
use crate::invariants::{InvariantSet, InvariantViolation, SessionInvariants};
use crate::selection::Rejection;
use crate::session::Session;
use tracing::{instrument, warn};

/// Preconditions and postconditions for a state transition.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), Rejection>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), Vec<InvariantViolation>>;
}

// ─────────────────────────────────────────────────────────────
//  Selection preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the session has not ended.
pub struct GameNotOver;

impl GameNotOver {
    /// Rejects selections in a terminal session.
    pub fn check(session: &Session) -> Result<(), Rejection> {
        if session.status().is_terminal() {
            Err(Rejection::GameOver)
        } else {
            Ok(())
        }
    }
}

/// Precondition: no mismatched pair is waiting to flip back.
pub struct NotResolving;

impl NotResolving {
    /// Rejects selections while a flip-back is pending.
    pub fn check(session: &Session) -> Result<(), Rejection> {
        if session.turn().is_resolving() {
            Err(Rejection::Resolving)
        } else {
            Ok(())
        }
    }
}

/// Precondition: the tile exists and can be picked this turn.
pub struct TileSelectable;

impl TileSelectable {
    /// Rejects off-board, matched, disabled and already-picked tiles.
    pub fn check(session: &Session, position: Position) -> Result<(), Rejection> {
        let tile = session
            .board()
            .tile(position)
            .ok_or(Rejection::OutOfBounds { position })?;

        if tile.is_matched() {
            return Err(Rejection::AlreadyMatched { position });
        }
        if !tile.is_enabled() {
            return Err(Rejection::Disabled { position });
        }
        if session.turn().revealed().contains(&position) {
            return Err(Rejection::PendingFirstPick { position });
        }
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Selection contract (pre + post)
// ─────────────────────────────────────────────────────────────

/// Contract for `select_tile`.
///
/// Preconditions:
/// - Session is in progress
/// - No flip-back is pending
/// - Tile is on the board, unmatched, enabled and not the pending pick
///
/// Postconditions:
/// - Tries never increase and drop by at most one
/// - Every session invariant still holds
pub struct SelectionContract;

impl Contract<Session, Position> for SelectionContract {
    fn pre(session: &Session, position: &Position) -> Result<(), Rejection> {
        GameNotOver::check(session)?;
        NotResolving::check(session)?;
        TileSelectable::check(session, *position)
    }

    fn post(before: &Session, after: &Session) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = SessionInvariants::check_all(after).err().unwrap_or_default();

        let spent = before
            .budget()
            .remaining()
            .checked_sub(after.budget().remaining());
        if !matches!(spent, Some(0 | 1)) {
            violations.push(InvariantViolation::new(
                "A selection spends at most one try",
            ));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// Checks every session invariant, logging and asserting on violation in
/// debug builds.
#[instrument(skip_all, fields(session = %session.id()))]
pub fn assert_invariants(session: &Session) {
    if let Err(violations) = SessionInvariants::check_all(session) {
        report(&violations);
    }
}

/// Checks the selection postcondition in debug builds.
pub(crate) fn assert_selection_post(before: &Session, after: &Session) {
    if let Err(violations) = SelectionContract::post(before, after) {
        report(&violations);
    }
}

fn report(violations: &[InvariantViolation]) {
    for violation in violations {
        warn!(invariant = %violation.description, "Invariant violated");
    }
    debug_assert!(
        violations.is_empty(),
        "Invariant violation: {}",
        violations
            .iter()
            .map(|v| v.description.as_str())
            .collect::<Vec<_>>()
            .join("; ")
    );
}
