//! Machinery repair: pick the right tool for each broken part.

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;
