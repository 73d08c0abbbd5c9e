//! Flip core - pure tile-matching memory game logic.
//!
//! A square grid of hidden numbered tiles is revealed two at a time. Matching
//! pairs stay face up, mismatches flip back once the shell calls
//! [`Engine::resolve_mismatch`], and every completed pair-attempt spends one
//! try from a budget of `N² − 1`.
//!
//! # Architecture
//!
//! - **Board generator**: [`Layout::generate`] deals each face twice and shuffles
//! - **Engine**: [`Engine`] owns a [`Session`] and answers selections with a
//!   [`SelectionResult`]
//! - **Contracts**: [`SelectionContract`] turns refused selections into
//!   [`Rejection`]s and checks [`SessionInvariants`] after every transition
//!
//! # Example
//!
//! ```
//! use flip_core::{Engine, GridSize, Layout, Position, SelectionResult};
//!
//! let grid = GridSize::new(2).unwrap();
//! let layout = Layout::from_faces(grid, [1, 1, 2, 2]).unwrap();
//! let mut engine = Engine::from_layout(layout);
//!
//! engine.select_tile(Position::new(0, 0));
//! let result = engine.select_tile(Position::new(0, 1));
//! assert!(matches!(result, SelectionResult::Matched { .. }));
//! assert_eq!(engine.state().tries_remaining, 2);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod contracts;
mod engine;
mod error;
mod grid;
mod invariants;
mod selection;
mod session;
mod snapshot;
mod turn;

pub use board::{Board, Face, Layout, Reveal, Tile, generate};
pub use contracts::{
    Contract, GameNotOver, NotResolving, SelectionContract, TileSelectable, assert_invariants,
};
pub use engine::Engine;
pub use error::ConfigurationError;
pub use grid::{GridSize, Position};
pub use invariants::{
    Invariant, InvariantSet, InvariantViolation, MatchedLockedInvariant, PairedFacesInvariant,
    SessionInvariants, TryBudgetInvariant, TurnConsistentInvariant,
};
pub use selection::{Rejection, SelectionResult};
pub use session::Session;
pub use snapshot::{EngineState, TileView};
pub use turn::{GameStatus, Outcome, SessionId, TryBudget, TurnRecord, TurnState};
