//! Configuration errors raised when a session cannot be started.

use derive_more::{Display, Error};

/// A board configuration that cannot produce a valid game.
///
/// Returned by grid-size validation, board generation and explicit layouts.
/// An engine never creates a partial session from an invalid configuration.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum ConfigurationError {
    /// The grid is smaller than 2×2.
    #[display("Grid size {side} is too small (minimum is 2)")]
    TooSmall {
        /// Requested side length.
        side: usize,
    },

    /// The grid has an odd number of tiles and cannot be split into pairs.
    #[display("Grid size {side} yields {tiles} tiles, which cannot be split into pairs")]
    OddTileCount {
        /// Requested side length.
        side: usize,
        /// Resulting tile count.
        tiles: usize,
    },

    /// The tile count does not fit in the platform integer.
    #[display("Grid size {side} is too large")]
    TooLarge {
        /// Requested side length.
        side: usize,
    },

    /// An explicit layout has the wrong number of faces.
    #[display("Layout has {found} faces, expected {expected}")]
    LayoutLength {
        /// Tile count of the grid.
        expected: usize,
        /// Number of faces supplied.
        found: usize,
    },

    /// An explicit layout contains a face outside `1..=pairs`.
    #[display("Face {face} is out of range (faces run from 1 to {pairs})")]
    FaceOutOfRange {
        /// Offending face value.
        face: usize,
        /// Number of pairs on the board.
        pairs: usize,
    },

    /// An explicit layout contains a face that does not appear exactly twice.
    #[display("Face {face} appears {count} times, expected exactly 2")]
    UnpairedFace {
        /// Offending face value.
        face: usize,
        /// How many times it appears.
        count: usize,
    },
}
