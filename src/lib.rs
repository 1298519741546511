//! Friend Quest - a small top-down adventure about helping friends.
//!
//! This module exposes the game logic for testing and for the terminal host.

pub mod build_info;
pub mod challenges;
pub mod character;
pub mod config;
pub mod content;
pub mod core;
pub mod input;
pub mod ui;
pub mod utils;
