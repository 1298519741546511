//! Memory pairs: flip hidden cards two at a time and find the matches.

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;
