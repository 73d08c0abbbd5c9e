//! Paired faces invariant: every face value appears exactly twice.

use super::Invariant;
use crate::session::Session;

/// Invariant: the board holds each face `1..=pairs` exactly twice.
///
/// Faces are dealt once per session and never change, so any drift here
/// means the arena was corrupted.
pub struct PairedFacesInvariant;

impl Invariant<Session> for PairedFacesInvariant {
    fn holds(session: &Session) -> bool {
        let grid = session.board().grid();
        let tiles = session.board().tiles();
        if tiles.len() != grid.tile_count() {
            return false;
        }

        let mut counts = vec![0usize; grid.pair_count() + 1];
        for tile in tiles {
            match counts.get_mut(tile.face().get()) {
                Some(count) => *count += 1,
                None => return false,
            }
        }

        counts[0] == 0 && counts[1..].iter().all(|&count| count == 2)
    }

    fn description() -> &'static str {
        "Every face value appears exactly twice"
    }
}
