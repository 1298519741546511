//! Pattern match logic.

use super::types::*;
use crate::challenges::ProgressChange;
use crate::input::Intent;
use rand::Rng;

/// Process one intent. A wrong digit wipes the typed input; a full match
/// scores and deals a fresh sequence.
pub fn process_input<R: Rng>(game: &mut PatternGame, intent: &Intent, rng: &mut R) -> ProgressChange {
    let Intent::Digit(digit) = *intent else {
        return ProgressChange::None;
    };
    if !(1..=MAX_DIGIT).contains(&digit) {
        return ProgressChange::None;
    }

    let index = game.input.len();
    if game.sequence.get(index) != Some(&digit) {
        game.input.clear();
        return ProgressChange::None;
    }

    game.input.push(digit);
    if game.input.len() < game.sequence.len() {
        return ProgressChange::None;
    }

    game.completed += 1;
    game.sequence = generate_sequence(rng);
    game.input.clear();
    ProgressChange::Advance(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn type_digits(game: &mut PatternGame, digits: &[u8], rng: &mut ChaCha8Rng) -> Vec<ProgressChange> {
        digits
            .iter()
            .map(|&d| process_input(game, &Intent::Digit(d), rng))
            .collect()
    }

    #[test]
    fn test_full_match_advances_and_regenerates() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let mut game = PatternGame::with_sequence(vec![2, 4, 1, 3, 2, 1]);
        let changes = type_digits(&mut game, &[2, 4, 1, 3, 2, 1], &mut rng);

        assert_eq!(changes.last(), Some(&ProgressChange::Advance(1)));
        assert!(changes[..5].iter().all(|c| *c == ProgressChange::None));
        assert_eq!(game.completed, 1);
        assert!(game.input.is_empty());
        assert_eq!(game.sequence.len(), SEQUENCE_LENGTH);
    }

    #[test]
    fn test_mismatch_resets_input() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let mut game = PatternGame::with_sequence(vec![2, 4, 1, 3, 2, 1]);
        type_digits(&mut game, &[2, 4, 1], &mut rng);
        assert_eq!(game.input, vec![2, 4, 1]);

        type_digits(&mut game, &[4], &mut rng);
        assert!(game.input.is_empty());
        assert_eq!(game.sequence, vec![2, 4, 1, 3, 2, 1]);
        assert_eq!(game.completed, 0);
    }

    #[test]
    fn test_can_restart_after_mismatch() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut game = PatternGame::with_sequence(vec![1, 1, 2, 2, 3, 3]);
        type_digits(&mut game, &[1, 3], &mut rng);
        let changes = type_digits(&mut game, &[1, 1, 2, 2, 3, 3], &mut rng);
        assert_eq!(changes.last(), Some(&ProgressChange::Advance(1)));
    }

    #[test]
    fn test_out_of_range_digit_ignored() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let mut game = PatternGame::with_sequence(vec![2, 4, 1, 3, 2, 1]);
        type_digits(&mut game, &[2], &mut rng);
        let change = process_input(&mut game, &Intent::Digit(9), &mut rng);
        assert_eq!(change, ProgressChange::None);
        assert_eq!(game.input, vec![2]);
    }

    #[test]
    fn test_generated_digits_in_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        for _ in 0..20 {
            let seq = generate_sequence(&mut rng);
            assert!(seq.iter().all(|d| (1..=MAX_DIGIT).contains(d)));
        }
    }
}
