//! Read-only engine snapshots for rendering.

use crate::board::{Face, Reveal};
use crate::grid::{GridSize, Position};
use crate::session::Session;
use crate::turn::{GameStatus, SessionId, TurnState};
use serde::{Deserialize, Serialize};

/// What the shell may know about one tile.
///
/// `face` is only populated while the tile is face up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileView {
    /// Tile coordinate.
    pub position: Position,
    /// Face value, present only when shown or matched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub face: Option<Face>,
    /// Visibility.
    pub reveal: Reveal,
    /// Whether a selection would be considered.
    pub enabled: bool,
}

/// Snapshot of a session, safe to hand to a renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineState {
    /// Session the snapshot was taken from.
    pub session: SessionId,
    /// Grid dimensions.
    pub grid: GridSize,
    /// Tiles in row-major order.
    pub tiles: Vec<TileView>,
    /// Tries left.
    pub tries_remaining: usize,
    /// Tries granted at session start.
    pub max_tries: usize,
    /// Overall status.
    pub status: GameStatus,
    /// Turn cursor.
    pub turn: TurnState,
    /// Pairs found so far.
    pub pairs_found: usize,
    /// Pairs on the board.
    pub total_pairs: usize,
}

impl EngineState {
    pub(crate) fn capture(session: &Session) -> Self {
        let board = session.board();
        let grid = board.grid();
        let tiles = grid
            .positions()
            .zip(board.tiles())
            .map(|(position, tile)| TileView {
                position,
                face: (tile.reveal() != Reveal::Hidden).then(|| tile.face()),
                reveal: tile.reveal(),
                enabled: tile.is_enabled(),
            })
            .collect();

        Self {
            session: session.id(),
            grid,
            tiles,
            tries_remaining: session.budget().remaining(),
            max_tries: session.budget().max(),
            status: session.status(),
            turn: session.turn(),
            pairs_found: board.matched_count() / 2,
            total_pairs: grid.pair_count(),
        }
    }

    /// Tries consumed so far.
    pub fn tries_used(&self) -> usize {
        self.max_tries.saturating_sub(self.tries_remaining)
    }

    /// Tile view at a position.
    pub fn tile(&self, position: Position) -> Option<&TileView> {
        self.grid
            .index_of(position)
            .and_then(|index| self.tiles.get(index))
    }

    /// Tiles grouped by row.
    pub fn rows(&self) -> impl Iterator<Item = &[TileView]> {
        self.tiles.chunks(self.grid.side())
    }
}
