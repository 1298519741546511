//! Player and friend entities.

pub mod types;

pub use types::{Friend, FriendId, Player};
