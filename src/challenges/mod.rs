//! Quest mini-games: one module per archetype, plus the session wrapper that
//! tracks progress against a target and a time limit.

pub mod button_mash;
pub mod care;
pub mod collection;
pub mod connect;
pub mod memory;
pub mod pattern;
pub mod repair;
pub mod sequence;
pub mod session;
pub mod variants;
pub mod word;

pub use button_mash::ButtonMashGame;
pub use care::CareGame;
pub use collection::CollectionGame;
pub use connect::ConnectGame;
pub use memory::MemoryGame;
pub use pattern::PatternGame;
pub use repair::RepairGame;
pub use sequence::SequenceGame;
pub use session::{MinigameResult, MinigameSession};
pub use variants::{select_variant, Variant};
pub use word::WordGame;

use crate::character::FriendId;
use crate::input::Intent;
use crate::utils::geometry::Rect;
use rand::Rng;
use serde::Serialize;

/// Playfield area the pointer-driven mini-games lay their pieces out in.
pub const ARENA: Rect = Rect::new(100, 150, 1000, 500);

/// What a single input or autonomous step did to session progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressChange {
    None,
    Advance(i32),
    /// Drop progress back to zero.
    Reset,
}

/// Mini-game archetypes. Each friend owns one; unmatched objectives fall back
/// to [`MinigameKind::ButtonMash`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum MinigameKind {
    Collection,
    PatternMatch,
    MemoryPairs,
    WordCompletion,
    ProximityCare,
    OrderedConnect,
    ToolMatch,
    DirectionalSequence,
    ButtonMash,
}

impl MinigameKind {
    pub fn for_friend(friend: FriendId) -> Self {
        match friend {
            FriendId::Phrits => Self::Collection,
            FriendId::Mika => Self::PatternMatch,
            FriendId::Jordy => Self::MemoryPairs,
            FriendId::Casper => Self::WordCompletion,
            FriendId::Roel => Self::ProximityCare,
            FriendId::Alex => Self::OrderedConnect,
            FriendId::Rick => Self::ToolMatch,
            FriendId::Suen => Self::DirectionalSequence,
        }
    }

    pub fn target(&self) -> i32 {
        match self {
            Self::Collection => 6,
            Self::PatternMatch => 5,
            Self::MemoryPairs => memory::PAIR_COUNT as i32,
            Self::WordCompletion => 3,
            Self::ProximityCare => care::COW_COUNT as i32,
            Self::OrderedConnect => connect::PART_COUNT as i32,
            Self::ToolMatch => repair::PART_COUNT as i32,
            Self::DirectionalSequence => 5,
            Self::ButtonMash => 100,
        }
    }

    pub fn duration_ms(&self) -> u64 {
        match self {
            Self::Collection => 10_000,
            Self::PatternMatch => 15_000,
            Self::MemoryPairs => 20_000,
            Self::WordCompletion => 20_000,
            Self::ProximityCare => 15_000,
            Self::OrderedConnect => 18_000,
            Self::ToolMatch => 15_000,
            Self::DirectionalSequence => 25_000,
            Self::ButtonMash => 5_000,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Collection => "Collection",
            Self::PatternMatch => "Pattern Match",
            Self::MemoryPairs => "Memory Pairs",
            Self::WordCompletion => "Word Completion",
            Self::ProximityCare => "Proximity Care",
            Self::OrderedConnect => "Ordered Connect",
            Self::ToolMatch => "Tool Match",
            Self::DirectionalSequence => "Directional Sequence",
            Self::ButtonMash => "Button Mash",
        }
    }
}

/// Archetype sub-state of the running mini-game.
#[derive(Debug, Clone, Serialize)]
pub enum ActiveMinigame {
    Collection(CollectionGame),
    Pattern(PatternGame),
    Memory(MemoryGame),
    Word(WordGame),
    Care(CareGame),
    Connect(ConnectGame),
    Repair(RepairGame),
    Sequence(SequenceGame),
    ButtonMash(ButtonMashGame),
}

impl ActiveMinigame {
    pub fn new<R: Rng>(kind: MinigameKind, rng: &mut R) -> Self {
        match kind {
            MinigameKind::Collection => Self::Collection(CollectionGame::new(rng)),
            MinigameKind::PatternMatch => Self::Pattern(PatternGame::new(rng)),
            MinigameKind::MemoryPairs => Self::Memory(MemoryGame::new(rng)),
            MinigameKind::WordCompletion => Self::Word(WordGame::new(rng)),
            MinigameKind::ProximityCare => Self::Care(CareGame::new(rng)),
            MinigameKind::OrderedConnect => Self::Connect(ConnectGame::new(rng)),
            MinigameKind::ToolMatch => Self::Repair(RepairGame::new(rng)),
            MinigameKind::DirectionalSequence => Self::Sequence(SequenceGame::new(rng)),
            MinigameKind::ButtonMash => Self::ButtonMash(ButtonMashGame::default()),
        }
    }

    pub fn kind(&self) -> MinigameKind {
        match self {
            Self::Collection(_) => MinigameKind::Collection,
            Self::Pattern(_) => MinigameKind::PatternMatch,
            Self::Memory(_) => MinigameKind::MemoryPairs,
            Self::Word(_) => MinigameKind::WordCompletion,
            Self::Care(_) => MinigameKind::ProximityCare,
            Self::Connect(_) => MinigameKind::OrderedConnect,
            Self::Repair(_) => MinigameKind::ToolMatch,
            Self::Sequence(_) => MinigameKind::DirectionalSequence,
            Self::ButtonMash(_) => MinigameKind::ButtonMash,
        }
    }

    pub fn process_input<R: Rng>(&mut self, intent: &Intent, rng: &mut R) -> ProgressChange {
        match self {
            Self::Collection(game) => collection::process_input(game, intent),
            Self::Pattern(game) => pattern::process_input(game, intent, rng),
            Self::Memory(game) => memory::process_input(game, intent),
            Self::Word(game) => word::process_input(game, intent),
            Self::Care(game) => care::process_input(game, intent),
            Self::Connect(game) => connect::process_input(game, intent),
            Self::Repair(game) => repair::process_input(game, intent),
            Self::Sequence(game) => sequence::process_input(game, intent, rng),
            Self::ButtonMash(game) => button_mash::process_input(game, intent),
        }
    }

    /// Autonomous per-tick rule. Archetypes without one report no change.
    pub fn tick<R: Rng>(&mut self, dt_ms: u64, rng: &mut R) -> ProgressChange {
        match self {
            Self::Memory(game) => {
                memory::tick(game, dt_ms);
                ProgressChange::None
            }
            Self::Care(game) => care::tick(game),
            Self::Sequence(game) => {
                sequence::tick(game, dt_ms);
                ProgressChange::None
            }
            Self::ButtonMash(_) => button_mash::tick(rng),
            Self::Collection(_)
            | Self::Pattern(_)
            | Self::Word(_)
            | Self::Connect(_)
            | Self::Repair(_) => ProgressChange::None,
        }
    }
}
