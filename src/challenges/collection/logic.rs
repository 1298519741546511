//! Collection challenge logic.

use super::types::*;
use crate::challenges::ProgressChange;
use crate::input::Intent;
use crate::utils::geometry::within_radius;

/// Process one intent. Only clicks matter.
pub fn process_input(game: &mut CollectionGame, intent: &Intent) -> ProgressChange {
    let Intent::PointerClick(pos) = *intent else {
        return ProgressChange::None;
    };

    match game
        .markers
        .iter_mut()
        .find(|m| !m.collected && within_radius(pos, m.position, COLLECT_RADIUS))
    {
        Some(marker) => {
            marker.collected = true;
            ProgressChange::Advance(1)
        }
        None => ProgressChange::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::geometry::Position;

    fn game() -> CollectionGame {
        CollectionGame::with_markers(vec![Position::new(200, 200), Position::new(600, 400)])
    }

    #[test]
    fn test_click_on_marker_collects() {
        let mut game = game();
        let change = process_input(&mut game, &Intent::PointerClick(Position::new(210, 190)));
        assert_eq!(change, ProgressChange::Advance(1));
        assert!(game.markers[0].collected);
        assert!(!game.markers[1].collected);
    }

    #[test]
    fn test_second_click_on_same_marker_does_nothing() {
        let mut game = game();
        process_input(&mut game, &Intent::PointerClick(Position::new(200, 200)));
        let change = process_input(&mut game, &Intent::PointerClick(Position::new(200, 200)));
        assert_eq!(change, ProgressChange::None);
        assert_eq!(game.collected_count(), 1);
    }

    #[test]
    fn test_click_outside_radius_misses() {
        let mut game = game();
        let change = process_input(&mut game, &Intent::PointerClick(Position::new(240, 240)));
        assert_eq!(change, ProgressChange::None);
        assert_eq!(game.collected_count(), 0);
    }

    #[test]
    fn test_non_click_intents_ignored() {
        let mut game = game();
        assert_eq!(
            process_input(&mut game, &Intent::PointerMove(Position::new(200, 200))),
            ProgressChange::None
        );
        assert_eq!(process_input(&mut game, &Intent::PrimaryAction), ProgressChange::None);
    }
}
