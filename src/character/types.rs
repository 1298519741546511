//! Runtime records for the player and the eight friends.

use crate::content::{catalog, AbilityKind, ColorTag, ObjectiveList};
use crate::core::constants::{CHARACTER_HEIGHT, CHARACTER_WIDTH, MAX_HAPPINESS, STARTING_HAPPINESS};
use crate::utils::geometry::{Position, Rect};
use serde::Serialize;

/// Identity of a friend. Doubles as the key into every content table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum FriendId {
    Phrits,
    Mika,
    Jordy,
    Casper,
    Roel,
    Alex,
    Rick,
    Suen,
}

impl FriendId {
    pub const ALL: [FriendId; 8] = [
        FriendId::Phrits,
        FriendId::Mika,
        FriendId::Jordy,
        FriendId::Casper,
        FriendId::Roel,
        FriendId::Alex,
        FriendId::Rick,
        FriendId::Suen,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Phrits => "Phrits",
            Self::Mika => "Mika",
            Self::Jordy => "Jordy",
            Self::Casper => "Casper",
            Self::Roel => "Roel",
            Self::Alex => "Alex",
            Self::Rick => "Rick",
            Self::Suen => "Suen",
        }
    }

    /// Name with nickname, for dialog headers.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Phrits => "Phrits",
            Self::Mika => "Mika (Barfika)",
            Self::Jordy => "Jordy (Snordy)",
            Self::Casper => "Casper",
            Self::Roel => "Roel (DJ Roomboter)",
            Self::Alex => "Alex",
            Self::Rick => "Rick (Pringers)",
            Self::Suen => "Suen (Suenpai)",
        }
    }

    pub fn ability(&self) -> AbilityKind {
        match self {
            Self::Phrits => AbilityKind::BiologicalResilience,
            Self::Mika => AbilityKind::StatisticalInsight,
            Self::Jordy => AbilityKind::MasterOfDisguise,
            Self::Casper => AbilityKind::JokestersWit,
            Self::Roel => AbilityKind::EarthyWisdom,
            Self::Alex => AbilityKind::ImaginativeCreativity,
            Self::Rick => AbilityKind::MechanicalMastery,
            Self::Suen => AbilityKind::MinMaxMastery,
        }
    }

    pub fn color(&self) -> ColorTag {
        match self {
            Self::Phrits => ColorTag::Green,
            Self::Mika => ColorTag::Orange,
            Self::Jordy => ColorTag::Red,
            Self::Casper => ColorTag::LightBlue,
            Self::Roel => ColorTag::Brown,
            Self::Alex => ColorTag::Purple,
            Self::Rick => ColorTag::SteelGray,
            Self::Suen => ColorTag::ElectricBlue,
        }
    }
}

/// A friend on the field.
#[derive(Debug, Clone, Serialize)]
pub struct Friend {
    pub id: FriendId,
    pub position: Position,
    /// Always within `0..=MAX_HAPPINESS`.
    pub happiness: u8,
    pub ability: AbilityKind,
    /// Which catalog this friend draws objectives from.
    pub objective_source: FriendId,
    pub quest_completed: bool,
    pub color: ColorTag,
}

impl Friend {
    pub fn new(id: FriendId, position: Position) -> Self {
        Self {
            id,
            position,
            happiness: STARTING_HAPPINESS,
            ability: id.ability(),
            objective_source: id,
            quest_completed: false,
            color: id.color(),
        }
    }

    pub fn name(&self) -> &'static str {
        self.id.name()
    }

    pub fn objectives(&self) -> &'static ObjectiveList {
        catalog(self.objective_source)
    }

    pub fn rect(&self) -> Rect {
        Rect::at(self.position, CHARACTER_WIDTH, CHARACTER_HEIGHT)
    }

    /// Apply a happiness change, clamped to `0..=MAX_HAPPINESS`.
    pub fn adjust_happiness(&mut self, delta: i32) {
        let value = (i32::from(self.happiness) + delta).clamp(0, i32::from(MAX_HAPPINESS));
        self.happiness = value as u8;
    }
}

/// The player-controlled character. Has no ability, objectives or quest flag.
#[derive(Debug, Clone, Serialize)]
pub struct Player {
    pub name: &'static str,
    pub position: Position,
}

impl Player {
    pub fn new(position: Position) -> Self {
        Self {
            name: "Thijs",
            position,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::at(self.position, CHARACTER_WIDTH, CHARACTER_HEIGHT)
    }
}
