//! Ordered connect logic.

use super::types::*;
use crate::challenges::ProgressChange;
use crate::input::Intent;
use crate::utils::geometry::{within_radius, Position};

pub fn process_input(game: &mut ConnectGame, intent: &Intent) -> ProgressChange {
    match *intent {
        Intent::PointerClick(pos) => match part_at(game, pos) {
            Some(index) => connect(game, index),
            None => ProgressChange::None,
        },
        _ => ProgressChange::None,
    }
}

/// Index of the unconnected part under `pos`, if any.
pub fn part_at(game: &ConnectGame, pos: Position) -> Option<usize> {
    game.parts
        .iter()
        .position(|p| !p.connected && within_radius(pos, p.position, PART_RADIUS))
}

/// Try to connect the part at `index`. The wrong part undoes every
/// connection made so far.
pub fn connect(game: &mut ConnectGame, index: usize) -> ProgressChange {
    let Some(part) = game.parts.get(index) else {
        return ProgressChange::None;
    };
    if part.connected {
        return ProgressChange::None;
    }

    if game.expected_next() == Some(part.id) {
        game.parts[index].connected = true;
        game.next += 1;
        ProgressChange::Advance(1)
    } else {
        for part in game.parts.iter_mut() {
            part.connected = false;
        }
        game.next = 0;
        ProgressChange::Reset
    }
}
