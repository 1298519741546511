//! Static content tables: objectives, abilities and color tags.

pub mod abilities;
pub mod colors;
pub mod objectives;

pub use abilities::{AbilityEffect, AbilityKind, Bonus, BonusValue};
pub use colors::ColorTag;
pub use objectives::{catalog, Objective, ObjectiveList};
