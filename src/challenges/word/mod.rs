//! Word completion: fill in the missing word of a punchline.

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;
