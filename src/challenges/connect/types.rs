//! Ordered connect data structures.

use crate::challenges::ARENA;
use crate::utils::geometry::Position;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;

pub const PART_COUNT: usize = 6;
/// Click radius around a part.
pub const PART_RADIUS: f64 = 40.0;
/// Parts sit on a ring of this radius around the arena centre.
const RING_RADIUS: f64 = 200.0;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Part {
    pub id: u8,
    pub position: Position,
    pub connected: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct ConnectGame {
    pub parts: Vec<Part>,
    /// Required connection order, as part ids.
    pub order: Vec<u8>,
    /// Index into `order` of the next expected part.
    pub next: usize,
}

impl ConnectGame {
    pub fn new<R: Rng>(rng: &mut R) -> Self {
        let centre = Position::new(ARENA.x + ARENA.width / 2, ARENA.y + ARENA.height / 2);
        let parts = (0..PART_COUNT)
            .map(|i| {
                let angle = i as f64 * std::f64::consts::TAU / PART_COUNT as f64;
                Part {
                    id: i as u8 + 1,
                    position: Position::new(
                        centre.x + (RING_RADIUS * angle.cos()).round() as i32,
                        centre.y + (RING_RADIUS * angle.sin()).round() as i32,
                    ),
                    connected: false,
                }
            })
            .collect::<Vec<_>>();
        let mut order: Vec<u8> = parts.iter().map(|p| p.id).collect();
        order.shuffle(rng);
        Self::with_layout(parts, order)
    }

    pub fn with_layout(parts: Vec<Part>, order: Vec<u8>) -> Self {
        Self {
            parts,
            order,
            next: 0,
        }
    }

    /// Id of the part that must be clicked next, if any remain.
    pub fn expected_next(&self) -> Option<u8> {
        self.order.get(self.next).copied()
    }

    pub fn connected_count(&self) -> usize {
        self.parts.iter().filter(|p| p.connected).count()
    }
}
