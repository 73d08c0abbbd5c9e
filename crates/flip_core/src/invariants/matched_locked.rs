//! Matched-locked invariant: found pairs stay face up and unselectable.

use super::Invariant;
use crate::session::Session;

/// Invariant: every matched tile is disabled, and the number of matched
/// tiles is twice the number of matching turns in the history.
pub struct MatchedLockedInvariant;

impl Invariant<Session> for MatchedLockedInvariant {
    fn holds(session: &Session) -> bool {
        let tiles = session.board().tiles();
        let locked = tiles
            .iter()
            .filter(|tile| tile.is_matched())
            .all(|tile| !tile.is_enabled());

        let matching_turns = session.history().iter().filter(|turn| turn.matched).count();

        locked && session.board().matched_count() == matching_turns * 2
    }

    fn description() -> &'static str {
        "Matched tiles are disabled and correspond to matching turns"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Position;
    use crate::invariants::fixtures::two_by_two;

    #[test]
    fn test_match_locks_both_tiles() {
        let mut session = two_by_two();
        session.reveal(Position::new(0, 0));
        session.reveal(Position::new(0, 1));
        assert_eq!(session.board().matched_count(), 2);
        assert!(MatchedLockedInvariant::holds(&session));
    }

    #[test]
    fn test_unlocked_match_fails() {
        let mut session = two_by_two();
        session.reveal(Position::new(0, 0));
        session.reveal(Position::new(0, 1));
        if let Some(tile) = session.board.tile_mut(Position::new(0, 0)) {
            tile.enabled = true;
        }
        assert!(!MatchedLockedInvariant::holds(&session));
    }
}
