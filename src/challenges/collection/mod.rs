//! Specimen collection: click markers scattered over the arena.

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;
