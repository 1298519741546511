//! Proximity care: keep the pointer near each cow until it is content.

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;
