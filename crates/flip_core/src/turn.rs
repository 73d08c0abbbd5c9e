//! Turn cursor, game status and try accounting.

use crate::grid::Position;
use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Identifies one session of an engine.
///
/// Every start or restart gets a fresh id. Mismatch results carry the id of
/// the session that produced them so a late flip-back timer cannot touch a
/// newer board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize)]
#[display("#{_0}")]
#[serde(transparent)]
pub struct SessionId(u64);

impl SessionId {
    /// Id of the first session an engine runs.
    pub const FIRST: SessionId = SessionId(1);

    /// The id that follows this one.
    pub fn next(self) -> Self {
        SessionId(self.0.wrapping_add(1))
    }
}

/// Where the engine is within a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnState {
    /// No tile is face up for this turn.
    AwaitingFirstPick,
    /// One tile is face up and waiting for its partner.
    AwaitingSecondPick {
        /// The first tile of the turn.
        first: Position,
    },
    /// A mismatched pair is face up until the flip-back is applied.
    Resolving {
        /// The first tile of the turn.
        first: Position,
        /// The second tile of the turn.
        second: Position,
    },
}

impl TurnState {
    /// Positions the turn currently holds face up.
    pub fn revealed(&self) -> Vec<Position> {
        match *self {
            TurnState::AwaitingFirstPick => Vec::new(),
            TurnState::AwaitingSecondPick { first } => vec![first],
            TurnState::Resolving { first, second } => vec![first, second],
        }
    }

    /// Returns true while a mismatch flip-back is pending.
    pub fn is_resolving(&self) -> bool {
        matches!(self, TurnState::Resolving { .. })
    }
}

/// Overall session status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum GameStatus {
    /// Selections are accepted.
    #[strum(serialize = "In progress")]
    InProgress,
    /// Every pair was found.
    #[strum(serialize = "Won")]
    Won,
    /// The try budget ran out.
    #[strum(serialize = "Out of tries")]
    LostByExhaustedTries,
}

impl GameStatus {
    /// Returns true once the session has ended.
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

/// How a finished session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum Outcome {
    /// All pairs found before the budget ran out.
    #[display("won")]
    Won,
    /// Budget exhausted.
    #[display("lost")]
    Lost,
}

/// Fixed allowance of completed turns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TryBudget {
    max: usize,
    remaining: usize,
}

impl TryBudget {
    /// Creates a full budget.
    pub fn new(max: usize) -> Self {
        Self {
            max,
            remaining: max,
        }
    }

    /// Tries granted at the start of the session.
    pub fn max(&self) -> usize {
        self.max
    }

    /// Tries left.
    pub fn remaining(&self) -> usize {
        self.remaining
    }

    /// Tries consumed so far.
    pub fn used(&self) -> usize {
        self.max.saturating_sub(self.remaining)
    }

    /// Returns true once no tries remain.
    pub fn is_exhausted(&self) -> bool {
        self.remaining == 0
    }

    /// Consumes one try, saturating at zero, and returns what is left.
    pub(crate) fn spend(&mut self) -> usize {
        self.remaining = self.remaining.saturating_sub(1);
        self.remaining
    }
}

/// One completed turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnRecord {
    /// First tile selected.
    pub first: Position,
    /// Second tile selected.
    pub second: Position,
    /// Whether the faces matched.
    pub matched: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_budget_saturates_at_zero() {
        let mut budget = TryBudget::new(2);
        assert_eq!(budget.spend(), 1);
        assert_eq!(budget.spend(), 0);
        assert_eq!(budget.spend(), 0);
        assert!(budget.is_exhausted());
        assert_eq!(budget.used(), 2);
    }

    #[test]
    fn test_used_never_underflows() {
        let budget: TryBudget = serde_json::from_str(r#"{"max":3,"remaining":7}"#).unwrap();
        assert_eq!(budget.used(), 0);
    }

    #[test]
    fn test_revealed_positions_follow_turn() {
        let first = Position::new(0, 0);
        let second = Position::new(1, 1);
        assert!(TurnState::AwaitingFirstPick.revealed().is_empty());
        assert_eq!(TurnState::AwaitingSecondPick { first }.revealed(), vec![first]);
        assert_eq!(
            TurnState::Resolving { first, second }.revealed(),
            vec![first, second]
        );
    }

    #[test]
    fn test_status_display() {
        assert_eq!(GameStatus::InProgress.to_string(), "In progress");
        assert_eq!(GameStatus::LostByExhaustedTries.to_string(), "Out of tries");
        assert!(GameStatus::Won.is_terminal());
        assert!(!GameStatus::InProgress.is_terminal());
    }
}
