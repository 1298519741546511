//! Directional sequence logic.

use super::types::*;
use crate::challenges::ProgressChange;
use crate::input::Intent;
use rand::Rng;

/// Directions only count once the display phase is over.
pub fn process_input<R: Rng>(game: &mut SequenceGame, intent: &Intent, rng: &mut R) -> ProgressChange {
    let Intent::Directional(direction) = *intent else {
        return ProgressChange::None;
    };
    if game.phase != SequencePhase::Input {
        return ProgressChange::None;
    }

    if game.sequence.get(game.input.len()) != Some(&direction) {
        game.input.clear();
        return ProgressChange::None;
    }

    game.input.push(direction);
    if game.input.len() < game.sequence.len() {
        return ProgressChange::None;
    }

    game.completed += 1;
    game.sequence = generate_sequence(rng, game.completed);
    game.input.clear();
    game.phase = SequencePhase::Display {
        remaining_ms: DISPLAY_MS,
    };
    ProgressChange::Advance(1)
}

pub fn tick(game: &mut SequenceGame, dt_ms: u64) {
    if let SequencePhase::Display { remaining_ms } = game.phase {
        let left = remaining_ms.saturating_sub(dt_ms);
        game.phase = if left == 0 {
            SequencePhase::Input
        } else {
            SequencePhase::Display { remaining_ms: left }
        };
    }
}
