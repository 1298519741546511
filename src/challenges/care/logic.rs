//! Proximity care logic.

use super::types::*;
use crate::challenges::ProgressChange;
use crate::input::Intent;
use crate::utils::geometry::within_radius;

/// Track the pointer. Care itself happens in [`tick`].
pub fn process_input(game: &mut CareGame, intent: &Intent) -> ProgressChange {
    if let Intent::PointerMove(pos) | Intent::PointerClick(pos) = *intent {
        game.pointer = Some(pos);
    }
    ProgressChange::None
}

/// Raise contentment of every unfinished cow near the pointer. Each cow that
/// reaches the cap this tick counts once.
pub fn tick(game: &mut CareGame) -> ProgressChange {
    let Some(pointer) = game.pointer else {
        return ProgressChange::None;
    };

    let mut finished = 0;
    for cow in game
        .cows
        .iter_mut()
        .filter(|c| !c.done && within_radius(pointer, c.position, CARE_RADIUS))
    {
        cow.contentment = cow
            .contentment
            .saturating_add(CARE_PER_TICK)
            .min(CONTENTMENT_CAP);
        if cow.contentment >= CONTENTMENT_CAP {
            cow.done = true;
            finished += 1;
        }
    }

    if finished > 0 {
        ProgressChange::Advance(finished)
    } else {
        ProgressChange::None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::geometry::Position;

    const TICKS_TO_CONTENT: u32 = (CONTENTMENT_CAP / CARE_PER_TICK) as u32;

    fn game() -> CareGame {
        CareGame::with_cows(vec![Position::new(300, 300), Position::new(800, 300)])
    }

    #[test]
    fn test_no_pointer_no_care() {
        let mut game = game();
        assert_eq!(tick(&mut game), ProgressChange::None);
        assert_eq!(game.cows[0].contentment, 0);
    }

    #[test]
    fn test_cow_in_range_becomes_content() {
        let mut game = game();
        process_input(&mut game, &Intent::PointerMove(Position::new(310, 290)));

        for _ in 0..TICKS_TO_CONTENT - 1 {
            assert_eq!(tick(&mut game), ProgressChange::None);
        }
        assert_eq!(tick(&mut game), ProgressChange::Advance(1));
        assert!(game.cows[0].done);
        assert_eq!(game.cows[1].contentment, 0);
    }

    #[test]
    fn test_done_cow_counts_once() {
        let mut game = game();
        process_input(&mut game, &Intent::PointerMove(Position::new(300, 300)));
        for _ in 0..TICKS_TO_CONTENT {
            tick(&mut game);
        }
        assert_eq!(tick(&mut game), ProgressChange::None);
        assert_eq!(game.content_count(), 1);
    }

    #[test]
    fn test_care_pauses_out_of_range() {
        let mut game = game();
        process_input(&mut game, &Intent::PointerMove(Position::new(300, 300)));
        tick(&mut game);
        tick(&mut game);
        process_input(&mut game, &Intent::PointerMove(Position::new(550, 700)));
        tick(&mut game);
        assert_eq!(game.cows[0].contentment, CARE_PER_TICK * 2);
    }
}
