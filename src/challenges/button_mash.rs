//! Fallback mini-game for objectives without a dedicated mechanic: mash the
//! action key while luck trickles in.

use crate::challenges::ProgressChange;
use crate::input::Intent;
use rand::Rng;
use serde::Serialize;

/// Per-tick chance of a free point.
pub const RANDOM_GAIN_CHANCE: f64 = 0.02;
pub const PRIMARY_ACTION_GAIN: i32 = 10;

#[derive(Debug, Clone, Default, Serialize)]
pub struct ButtonMashGame {
    pub presses: u32,
}

pub fn process_input(game: &mut ButtonMashGame, intent: &Intent) -> ProgressChange {
    match intent {
        Intent::PrimaryAction => {
            game.presses += 1;
            ProgressChange::Advance(PRIMARY_ACTION_GAIN)
        }
        _ => ProgressChange::None,
    }
}

pub fn tick<R: Rng>(rng: &mut R) -> ProgressChange {
    if rng.gen_bool(RANDOM_GAIN_CHANCE) {
        ProgressChange::Advance(1)
    } else {
        ProgressChange::None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_primary_action_gives_ten() {
        let mut game = ButtonMashGame::default();
        assert_eq!(
            process_input(&mut game, &Intent::PrimaryAction),
            ProgressChange::Advance(10)
        );
        assert_eq!(process_input(&mut game, &Intent::Confirm), ProgressChange::None);
        assert_eq!(game.presses, 1);
    }

    #[test]
    fn test_random_gain_is_rare() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let gains = (0..1000)
            .filter(|_| tick(&mut rng) != ProgressChange::None)
            .count();
        assert!(gains > 0 && gains < 60, "gains = {gains}");
    }
}
