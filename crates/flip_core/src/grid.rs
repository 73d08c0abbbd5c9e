//! Grid geometry: validated grid sizes and tile positions.

use crate::error::ConfigurationError;
use derive_more::Display;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Side length of a square board.
///
/// A valid grid size is at least 2 and yields an even tile count, so the
/// board splits cleanly into pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[display("{_0}x{_0}")]
#[serde(try_from = "usize", into = "usize")]
pub struct GridSize(usize);

impl GridSize {
    /// Smallest playable side length.
    pub const MIN: usize = 2;

    /// Validates a side length.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError`] if the side is below 2, the tile count
    /// is odd, or the tile count overflows.
    #[instrument]
    pub fn new(side: usize) -> Result<Self, ConfigurationError> {
        if side < Self::MIN {
            return Err(ConfigurationError::TooSmall { side });
        }

        let tiles = side
            .checked_mul(side)
            .ok_or(ConfigurationError::TooLarge { side })?;

        if tiles % 2 != 0 {
            return Err(ConfigurationError::OddTileCount { side, tiles });
        }

        Ok(Self(side))
    }

    /// Number of rows (and columns).
    pub fn side(self) -> usize {
        self.0
    }

    /// Total number of tiles on the board.
    pub fn tile_count(self) -> usize {
        self.0 * self.0
    }

    /// Number of distinct face values, each appearing twice.
    pub fn pair_count(self) -> usize {
        self.tile_count() / 2
    }

    /// Try budget for a board of this size: one less than the tile count.
    pub fn max_tries(self) -> usize {
        self.tile_count() - 1
    }

    /// Returns true if the position lies on the board.
    pub fn contains(self, position: Position) -> bool {
        position.row < self.0 && position.col < self.0
    }

    /// Row-major arena index for a position, if it lies on the board.
    pub fn index_of(self, position: Position) -> Option<usize> {
        self.contains(position)
            .then(|| position.row * self.0 + position.col)
    }

    /// Position for a row-major arena index, if it lies on the board.
    pub fn position_of(self, index: usize) -> Option<Position> {
        (index < self.tile_count()).then(|| Position::new(index / self.0, index % self.0))
    }

    /// All positions in row-major order.
    pub fn positions(self) -> impl Iterator<Item = Position> {
        let side = self.0;
        (0..side).flat_map(move |row| (0..side).map(move |col| Position::new(row, col)))
    }
}

impl TryFrom<usize> for GridSize {
    type Error = ConfigurationError;

    fn try_from(side: usize) -> Result<Self, Self::Error> {
        Self::new(side)
    }
}

impl From<GridSize> for usize {
    fn from(grid: GridSize) -> Self {
        grid.0
    }
}

/// A tile coordinate: row and column, both zero-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[display("({row}, {col})")]
pub struct Position {
    /// Zero-based row.
    pub row: usize,
    /// Zero-based column.
    pub col: usize,
}

impl Position {
    /// Creates a position.
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_small_grids() {
        assert_eq!(GridSize::new(0), Err(ConfigurationError::TooSmall { side: 0 }));
        assert_eq!(GridSize::new(1), Err(ConfigurationError::TooSmall { side: 1 }));
    }

    #[test]
    fn test_rejects_odd_tile_counts() {
        assert_eq!(
            GridSize::new(3),
            Err(ConfigurationError::OddTileCount { side: 3, tiles: 9 })
        );
        assert!(GridSize::new(5).is_err());
    }

    #[test]
    fn test_rejects_overflowing_grids() {
        assert_eq!(
            GridSize::new(usize::MAX),
            Err(ConfigurationError::TooLarge { side: usize::MAX })
        );
    }

    #[test]
    fn test_derived_counts() {
        let grid = GridSize::new(4).unwrap();
        assert_eq!(grid.tile_count(), 16);
        assert_eq!(grid.pair_count(), 8);
        assert_eq!(grid.max_tries(), 15);
        assert_eq!(grid.to_string(), "4x4");
    }

    #[test]
    fn test_index_mapping_is_row_major() {
        let grid = GridSize::new(2).unwrap();
        assert_eq!(grid.index_of(Position::new(0, 0)), Some(0));
        assert_eq!(grid.index_of(Position::new(0, 1)), Some(1));
        assert_eq!(grid.index_of(Position::new(1, 0)), Some(2));
        assert_eq!(grid.index_of(Position::new(2, 0)), None);
        assert_eq!(grid.position_of(3), Some(Position::new(1, 1)));
        assert_eq!(grid.position_of(4), None);
    }

    #[test]
    fn test_positions_cover_grid() {
        let grid = GridSize::new(4).unwrap();
        let positions: Vec<_> = grid.positions().collect();
        assert_eq!(positions.len(), 16);
        for (index, position) in positions.into_iter().enumerate() {
            assert_eq!(grid.index_of(position), Some(index));
        }
    }
}
