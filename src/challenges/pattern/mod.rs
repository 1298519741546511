//! Pattern match: type back a sequence of digits.

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;
