//! Directional sequence: watch a run of arrows, then repeat it.

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;
