//! Proximity care data structures.

use crate::challenges::ARENA;
use crate::utils::geometry::Position;
use rand::Rng;
use serde::Serialize;

pub const COW_COUNT: usize = 5;
/// Pointer distance within which a cow is being cared for.
pub const CARE_RADIUS: f64 = 60.0;
/// Contentment gained per tick while cared for.
pub const CARE_PER_TICK: u8 = 2;
pub const CONTENTMENT_CAP: u8 = 100;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Cow {
    pub position: Position,
    pub contentment: u8,
    pub done: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct CareGame {
    pub cows: Vec<Cow>,
    /// Last known pointer position; `None` until the pointer first moves.
    pub pointer: Option<Position>,
}

impl CareGame {
    pub fn new<R: Rng>(rng: &mut R) -> Self {
        let inset = CARE_RADIUS as i32;
        // One cow per vertical strip so they never pile up.
        let strip = ARENA.width / COW_COUNT as i32;
        let positions = (0..COW_COUNT as i32)
            .map(|i| {
                let left = ARENA.x + i * strip;
                Position::new(
                    rng.gen_range(left + inset / 2..left + strip - inset / 2),
                    rng.gen_range(ARENA.y + inset..ARENA.bottom() - inset),
                )
            })
            .collect();
        Self::with_cows(positions)
    }

    pub fn with_cows(positions: Vec<Position>) -> Self {
        Self {
            cows: positions
                .into_iter()
                .map(|position| Cow {
                    position,
                    contentment: 0,
                    done: false,
                })
                .collect(),
            pointer: None,
        }
    }

    pub fn content_count(&self) -> usize {
        self.cows.iter().filter(|c| c.done).count()
    }
}
