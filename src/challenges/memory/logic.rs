//! Memory pairs logic.

use super::types::*;
use crate::challenges::ProgressChange;
use crate::input::Intent;

/// Process one intent. Clicks flip the card underneath.
pub fn process_input(game: &mut MemoryGame, intent: &Intent) -> ProgressChange {
    match *intent {
        Intent::PointerClick(pos) => match card_at(pos, game.cards.len()) {
            Some(index) => reveal(game, index),
            None => ProgressChange::None,
        },
        _ => ProgressChange::None,
    }
}

/// Flip the card at `index`. Ignored while a mismatched pair is still showing
/// or when the card is already face up.
pub fn reveal(game: &mut MemoryGame, index: usize) -> ProgressChange {
    if game.mismatch.is_some() {
        return ProgressChange::None;
    }
    match game.cards.get(index) {
        Some(card) if card.state == CardState::Hidden => {}
        _ => return ProgressChange::None,
    }

    game.cards[index].state = CardState::Revealed;

    let Some(first) = game.first_pick.take() else {
        game.first_pick = Some(index);
        return ProgressChange::None;
    };

    if game.cards[first].symbol == game.cards[index].symbol {
        game.cards[first].state = CardState::Matched;
        game.cards[index].state = CardState::Matched;
        ProgressChange::Advance(1)
    } else {
        game.mismatch = Some(PendingMismatch {
            first,
            second: index,
            remaining_ms: MISMATCH_DELAY_MS,
        });
        ProgressChange::None
    }
}

/// Count down a pending mismatch and flip the pair back once it expires.
pub fn tick(game: &mut MemoryGame, dt_ms: u64) {
    let Some(pending) = game.mismatch.as_mut() else {
        return;
    };
    pending.remaining_ms = pending.remaining_ms.saturating_sub(dt_ms);
    if pending.remaining_ms == 0 {
        let (first, second) = (pending.first, pending.second);
        game.cards[first].state = CardState::Hidden;
        game.cards[second].state = CardState::Hidden;
        game.mismatch = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Pairs sit side by side: (0,1), (2,3), ...
    fn ordered_game() -> MemoryGame {
        MemoryGame::with_symbols((0..PAIR_COUNT).flat_map(|s| [s, s]).collect())
    }

    #[test]
    fn test_matching_pair() {
        let mut game = ordered_game();
        assert_eq!(reveal(&mut game, 0), ProgressChange::None);
        assert_eq!(game.first_pick, Some(0));
        assert_eq!(reveal(&mut game, 1), ProgressChange::Advance(1));
        assert_eq!(game.cards[0].state, CardState::Matched);
        assert_eq!(game.cards[1].state, CardState::Matched);
        assert_eq!(game.first_pick, None);
        assert_eq!(game.matched_pairs(), 1);
    }

    #[test]
    fn test_mismatch_hides_after_delay() {
        let mut game = ordered_game();
        reveal(&mut game, 0);
        assert_eq!(reveal(&mut game, 2), ProgressChange::None);
        assert_eq!(game.cards[2].state, CardState::Revealed);
        assert!(game.mismatch.is_some());

        tick(&mut game, MISMATCH_DELAY_MS - 1);
        assert_eq!(game.cards[0].state, CardState::Revealed);

        tick(&mut game, 1);
        assert_eq!(game.cards[0].state, CardState::Hidden);
        assert_eq!(game.cards[2].state, CardState::Hidden);
        assert!(game.mismatch.is_none());
    }

    #[test]
    fn test_clicks_ignored_while_mismatch_showing() {
        let mut game = ordered_game();
        reveal(&mut game, 0);
        reveal(&mut game, 2);
        assert_eq!(reveal(&mut game, 4), ProgressChange::None);
        assert_eq!(game.cards[4].state, CardState::Hidden);
    }

    #[test]
    fn test_revealing_same_card_twice_ignored() {
        let mut game = ordered_game();
        reveal(&mut game, 0);
        assert_eq!(reveal(&mut game, 0), ProgressChange::None);
        assert_eq!(game.first_pick, Some(0));
    }

    #[test]
    fn test_matched_cards_cannot_be_flipped() {
        let mut game = ordered_game();
        reveal(&mut game, 0);
        reveal(&mut game, 1);
        assert_eq!(reveal(&mut game, 1), ProgressChange::None);
        assert_eq!(game.first_pick, None);
    }

    #[test]
    fn test_click_maps_to_card() {
        let mut game = ordered_game();
        let rect = card_rect(3);
        let click = Intent::PointerClick(crate::utils::geometry::Position::new(rect.x + 1, rect.y + 1));
        process_input(&mut game, &click);
        assert_eq!(game.cards[3].state, CardState::Revealed);
    }
}
