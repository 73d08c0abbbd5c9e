//! Board generation and the tile arena.

use crate::error::ConfigurationError;
use crate::grid::{GridSize, Position};
use derive_more::{Display, From};
use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Face value printed on a tile. Runs from 1 to the board's pair count.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, From, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Face(usize);

impl Face {
    /// Returns the numeric face value.
    pub fn get(self) -> usize {
        self.0
    }
}

/// Visibility of a tile's face.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display,
)]
pub enum Reveal {
    /// Face down.
    #[strum(serialize = "hidden")]
    Hidden,
    /// Face up for the current turn only.
    #[strum(serialize = "shown")]
    Shown,
    /// Face up for the rest of the session.
    #[strum(serialize = "matched")]
    Matched,
}

/// One grid cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tile {
    pub(crate) face: Face,
    pub(crate) reveal: Reveal,
    pub(crate) enabled: bool,
}

impl Tile {
    /// Creates a hidden, selectable tile.
    pub fn new(face: Face) -> Self {
        Self {
            face,
            reveal: Reveal::Hidden,
            enabled: true,
        }
    }

    /// The tile's face value.
    pub fn face(&self) -> Face {
        self.face
    }

    /// Current visibility.
    pub fn reveal(&self) -> Reveal {
        self.reveal
    }

    /// Whether the tile accepts selections.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Whether the tile has been permanently matched.
    pub fn is_matched(&self) -> bool {
        self.reveal == Reveal::Matched
    }

    pub(crate) fn show(&mut self) {
        self.reveal = Reveal::Shown;
    }

    pub(crate) fn hide(&mut self) {
        self.reveal = Reveal::Hidden;
    }

    pub(crate) fn mark_matched(&mut self) {
        self.reveal = Reveal::Matched;
        self.enabled = false;
    }

    pub(crate) fn lock(&mut self) {
        self.enabled = false;
    }
}

/// A face sequence ready to be dealt onto a grid, in row-major order.
///
/// Deserialized layouts go through [`Layout::from_faces`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawLayout")]
pub struct Layout {
    grid: GridSize,
    faces: Vec<Face>,
}

/// Unchecked wire form of a [`Layout`].
#[derive(Deserialize)]
struct RawLayout {
    grid: GridSize,
    faces: Vec<usize>,
}

impl TryFrom<RawLayout> for Layout {
    type Error = ConfigurationError;

    fn try_from(raw: RawLayout) -> Result<Self, Self::Error> {
        Self::from_faces(raw.grid, raw.faces)
    }
}

impl Layout {
    /// Deals every face `1..=pairs` twice and shuffles the result.
    ///
    /// The shuffle is an unbiased Fisher-Yates pass driven by `rng`, so a
    /// seeded generator reproduces the same board.
    #[instrument(skip(rng))]
    pub fn generate<R: Rng + ?Sized>(grid: GridSize, rng: &mut R) -> Self {
        let mut faces: Vec<Face> = (1..=grid.pair_count())
            .flat_map(|value| [Face(value), Face(value)])
            .collect();
        faces.shuffle(rng);

        debug!(tiles = faces.len(), "Generated shuffled layout");
        Self { grid, faces }
    }

    /// Builds a layout from an explicit face sequence.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError`] if the sequence length differs from the
    /// tile count, or any face is out of range or not paired exactly.
    #[instrument(skip(faces))]
    pub fn from_faces(
        grid: GridSize,
        faces: impl IntoIterator<Item = usize>,
    ) -> Result<Self, ConfigurationError> {
        let faces: Vec<Face> = faces.into_iter().map(Face).collect();

        if faces.len() != grid.tile_count() {
            return Err(ConfigurationError::LayoutLength {
                expected: grid.tile_count(),
                found: faces.len(),
            });
        }

        let pairs = grid.pair_count();
        let mut counts = vec![0usize; pairs + 1];
        for face in &faces {
            let value = face.get();
            if value == 0 || value > pairs {
                return Err(ConfigurationError::FaceOutOfRange { face: value, pairs });
            }
            counts[value] += 1;
        }

        if let Some((face, &count)) = counts
            .iter()
            .enumerate()
            .skip(1)
            .find(|(_, count)| **count != 2)
        {
            return Err(ConfigurationError::UnpairedFace { face, count });
        }

        Ok(Self { grid, faces })
    }

    /// Grid the layout is dealt onto.
    pub fn grid(&self) -> GridSize {
        self.grid
    }

    /// Faces in row-major order.
    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    /// Face dealt to a position, if it lies on the grid.
    pub fn face_at(&self, position: Position) -> Option<Face> {
        self.grid
            .index_of(position)
            .and_then(|index| self.faces.get(index).copied())
    }
}

/// Generates a shuffled layout for a side length.
///
/// # Errors
///
/// Returns [`ConfigurationError`] if `side` is not a playable grid size.
pub fn generate<R: Rng + ?Sized>(side: usize, rng: &mut R) -> Result<Layout, ConfigurationError> {
    let grid = GridSize::new(side)?;
    Ok(Layout::generate(grid, rng))
}

/// Tile arena indexed by [`Position`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    grid: GridSize,
    tiles: Vec<Tile>,
}

impl Board {
    /// Lays out hidden tiles from a layout.
    pub fn from_layout(layout: Layout) -> Self {
        Self {
            grid: layout.grid,
            tiles: layout.faces.into_iter().map(Tile::new).collect(),
        }
    }

    /// Grid dimensions.
    pub fn grid(&self) -> GridSize {
        self.grid
    }

    /// Tiles in row-major order.
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Tile at a position, if it lies on the board.
    pub fn tile(&self, position: Position) -> Option<&Tile> {
        self.grid
            .index_of(position)
            .and_then(|index| self.tiles.get(index))
    }

    pub(crate) fn tile_mut(&mut self, position: Position) -> Option<&mut Tile> {
        self.grid
            .index_of(position)
            .and_then(|index| self.tiles.get_mut(index))
    }

    /// Number of tiles permanently matched.
    pub fn matched_count(&self) -> usize {
        self.tiles.iter().filter(|tile| tile.is_matched()).count()
    }

    /// Returns true once every tile has been matched.
    pub fn all_matched(&self) -> bool {
        self.tiles.iter().all(Tile::is_matched)
    }

    pub(crate) fn lock_all(&mut self) {
        self.tiles.iter_mut().for_each(Tile::lock);
    }
}
