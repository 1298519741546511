//! Core game state and logic.

pub mod constants;
pub mod game_logic;
pub mod game_state;
pub mod tick;

pub use constants::*;
pub use game_logic::*;
pub use game_state::*;
pub use tick::{apply_tick_events, game_tick, TickEvent, TickResult};
