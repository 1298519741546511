//! Ordered connect: wire up parts in a hidden order.

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;
