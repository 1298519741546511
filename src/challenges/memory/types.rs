//! Memory pairs data structures.

use crate::challenges::ARENA;
use crate::utils::geometry::{Position, Rect};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;

pub const PAIR_COUNT: usize = 8;
pub const GRID_COLS: usize = 4;
pub const GRID_ROWS: usize = 4;
pub const CARD_WIDTH: i32 = 100;
pub const CARD_HEIGHT: i32 = 110;
pub const CARD_GAP: i32 = 20;
/// How long a mismatched pair stays face up.
pub const MISMATCH_DELAY_MS: u64 = 800;

/// Symbols printed on the cards, indexed by `Card::symbol`.
pub const CARD_SYMBOLS: [char; PAIR_COUNT] = ['♠', '♥', '♦', '♣', '★', '☂', '♪', '☀'];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CardState {
    Hidden,
    Revealed,
    Matched,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Card {
    pub symbol: usize,
    pub state: CardState,
}

/// A mismatched pair waiting to be flipped back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PendingMismatch {
    pub first: usize,
    pub second: usize,
    pub remaining_ms: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct MemoryGame {
    pub cards: Vec<Card>,
    /// First card of the pair currently being flipped.
    pub first_pick: Option<usize>,
    pub mismatch: Option<PendingMismatch>,
}

impl MemoryGame {
    pub fn new<R: Rng>(rng: &mut R) -> Self {
        let mut symbols: Vec<usize> = (0..PAIR_COUNT).flat_map(|s| [s, s]).collect();
        symbols.shuffle(rng);
        Self::with_symbols(symbols)
    }

    pub fn with_symbols(symbols: Vec<usize>) -> Self {
        Self {
            cards: symbols
                .into_iter()
                .map(|symbol| Card {
                    symbol,
                    state: CardState::Hidden,
                })
                .collect(),
            first_pick: None,
            mismatch: None,
        }
    }

    pub fn matched_pairs(&self) -> usize {
        self.cards
            .iter()
            .filter(|c| c.state == CardState::Matched)
            .count()
            / 2
    }
}

fn grid_origin() -> Position {
    let grid_w = GRID_COLS as i32 * CARD_WIDTH + (GRID_COLS as i32 - 1) * CARD_GAP;
    let grid_h = GRID_ROWS as i32 * CARD_HEIGHT + (GRID_ROWS as i32 - 1) * CARD_GAP;
    Position::new(
        ARENA.x + (ARENA.width - grid_w) / 2,
        ARENA.y + (ARENA.height - grid_h) / 2,
    )
}

/// Playfield box of the card at `index` (row-major).
pub fn card_rect(index: usize) -> Rect {
    let origin = grid_origin();
    let col = (index % GRID_COLS) as i32;
    let row = (index / GRID_COLS) as i32;
    Rect::new(
        origin.x + col * (CARD_WIDTH + CARD_GAP),
        origin.y + row * (CARD_HEIGHT + CARD_GAP),
        CARD_WIDTH,
        CARD_HEIGHT,
    )
}

/// Index of the card under `pos`, if any.
pub fn card_at(pos: Position, card_count: usize) -> Option<usize> {
    (0..card_count).find(|&i| card_rect(i).contains(pos))
}
