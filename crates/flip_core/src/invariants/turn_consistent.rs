//! Turn consistency invariant: face-up tiles agree with the turn cursor.

use super::Invariant;
use crate::board::Reveal;
use crate::session::Session;
use crate::turn::GameStatus;

/// Invariant: the tiles shown for the current turn are exactly the ones the
/// turn state names.
///
/// - In progress: shown tiles equal `turn.revealed()`, unmatched tiles are enabled.
/// - Won: every tile is matched.
/// - Lost: every tile is disabled, and at most the final pair is shown.
pub struct TurnConsistentInvariant;

impl Invariant<Session> for TurnConsistentInvariant {
    fn holds(session: &Session) -> bool {
        let board = session.board();
        let shown: Vec<_> = board
            .grid()
            .positions()
            .filter(|position| {
                board
                    .tile(*position)
                    .is_some_and(|tile| tile.reveal() == Reveal::Shown)
            })
            .collect();

        match session.status() {
            GameStatus::InProgress => {
                let mut expected = session.turn().revealed();
                expected.sort_by_key(|position| (position.row, position.col));
                let unmatched_enabled = board
                    .tiles()
                    .iter()
                    .filter(|tile| !tile.is_matched())
                    .all(|tile| tile.is_enabled());
                shown == expected && unmatched_enabled
            }
            GameStatus::Won => board.all_matched(),
            GameStatus::LostByExhaustedTries => {
                shown.len() <= 2 && board.tiles().iter().all(|tile| !tile.is_enabled())
            }
        }
    }

    fn description() -> &'static str {
        "Face-up tiles match the turn state"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Position;
    use crate::invariants::fixtures::two_by_two;
    use crate::turn::TurnState;

    #[test]
    fn test_pending_pick_holds() {
        let mut session = two_by_two();
        session.reveal(Position::new(1, 1));
        assert!(TurnConsistentInvariant::holds(&session));
    }

    #[test]
    fn test_resolving_pair_holds() {
        let mut session = two_by_two();
        session.reveal(Position::new(0, 1));
        session.reveal(Position::new(1, 0));
        assert!(session.turn().is_resolving());
        assert!(TurnConsistentInvariant::holds(&session));
    }

    #[test]
    fn test_forgotten_tile_fails() {
        let mut session = two_by_two();
        session.reveal(Position::new(0, 0));
        session.turn = TurnState::AwaitingFirstPick;
        assert!(!TurnConsistentInvariant::holds(&session));
    }

    #[test]
    fn test_loss_holds() {
        let mut session = two_by_two();
        for _ in 0..3 {
            session.reveal(Position::new(0, 0));
            session.reveal(Position::new(1, 0));
            session.flip_back();
        }
        assert_eq!(session.status(), GameStatus::LostByExhaustedTries);
        assert!(TurnConsistentInvariant::holds(&session));
    }
}
