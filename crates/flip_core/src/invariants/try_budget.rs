//! Try budget invariant: the budget matches the grid and the turn history.

use super::Invariant;
use crate::session::Session;

/// Invariant: `max_tries` is one less than the tile count, and every spent
/// try corresponds to exactly one completed turn.
pub struct TryBudgetInvariant;

impl Invariant<Session> for TryBudgetInvariant {
    fn holds(session: &Session) -> bool {
        let budget = session.budget();
        budget.max() == session.board().grid().max_tries()
            && budget.remaining() <= budget.max()
            && budget.used() == session.history().len()
    }

    fn description() -> &'static str {
        "Tries used equals completed turns and never exceeds the budget"
    }
}
