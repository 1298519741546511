//! Collection challenge data structures.

use crate::challenges::ARENA;
use crate::utils::geometry::Position;
use rand::Rng;
use serde::Serialize;

/// Markers spawned per game.
pub const MARKER_COUNT: usize = 8;
/// A click this close to a marker collects it.
pub const COLLECT_RADIUS: f64 = 30.0;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Marker {
    pub position: Position,
    pub collected: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct CollectionGame {
    pub markers: Vec<Marker>,
}

impl CollectionGame {
    pub fn new<R: Rng>(rng: &mut R) -> Self {
        let inset = COLLECT_RADIUS as i32;
        let positions = (0..MARKER_COUNT)
            .map(|_| {
                Position::new(
                    rng.gen_range(ARENA.x + inset..ARENA.right() - inset),
                    rng.gen_range(ARENA.y + inset..ARENA.bottom() - inset),
                )
            })
            .collect();
        Self::with_markers(positions)
    }

    pub fn with_markers(positions: Vec<Position>) -> Self {
        Self {
            markers: positions
                .into_iter()
                .map(|position| Marker {
                    position,
                    collected: false,
                })
                .collect(),
        }
    }

    pub fn collected_count(&self) -> usize {
        self.markers.iter().filter(|m| m.collected).count()
    }
}
