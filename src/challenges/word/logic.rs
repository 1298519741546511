//! Word completion logic.

use super::types::*;
use crate::challenges::ProgressChange;
use crate::input::Intent;

pub fn process_input(game: &mut WordGame, intent: &Intent) -> ProgressChange {
    match *intent {
        Intent::Letter(c) if c.is_ascii_alphabetic() => {
            game.last_attempt_wrong = false;
            if game.buffer.len() < MAX_BUFFER_LEN {
                game.buffer.push(c.to_ascii_lowercase());
            }
            ProgressChange::None
        }
        Intent::Backspace => {
            game.last_attempt_wrong = false;
            game.buffer.pop();
            ProgressChange::None
        }
        Intent::Confirm => submit(game),
        _ => ProgressChange::None,
    }
}

/// Check the typed word against the current phrase. Either way the buffer
/// is cleared; only a correct word moves on to the next phrase.
pub fn submit(game: &mut WordGame) -> ProgressChange {
    let correct = game
        .buffer
        .eq_ignore_ascii_case(game.current_phrase().answer);
    game.buffer.clear();

    if correct {
        game.current += 1;
        game.last_attempt_wrong = false;
        ProgressChange::Advance(1)
    } else {
        game.last_attempt_wrong = true;
        ProgressChange::None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game() -> WordGame {
        WordGame::with_phrases(PHRASES.iter().collect())
    }

    fn type_word(game: &mut WordGame, word: &str) {
        for c in word.chars() {
            process_input(game, &Intent::Letter(c));
        }
    }

    #[test]
    fn test_correct_word_advances() {
        let mut game = game();
        type_word(&mut game, "banana");
        assert_eq!(process_input(&mut game, &Intent::Confirm), ProgressChange::Advance(1));
        assert_eq!(game.current, 1);
        assert!(game.buffer.is_empty());
        assert_eq!(game.current_phrase().answer, "down");
    }

    #[test]
    fn test_comparison_ignores_case() {
        let mut game = game();
        game.buffer = "BaNaNa".to_string();
        assert_eq!(submit(&mut game), ProgressChange::Advance(1));
    }

    #[test]
    fn test_wrong_word_clears_buffer_only() {
        let mut game = game();
        type_word(&mut game, "apple");
        assert_eq!(process_input(&mut game, &Intent::Confirm), ProgressChange::None);
        assert!(game.buffer.is_empty());
        assert_eq!(game.current, 0);
        assert!(game.last_attempt_wrong);
    }

    #[test]
    fn test_backspace_removes_last_letter() {
        let mut game = game();
        type_word(&mut game, "bananx");
        process_input(&mut game, &Intent::Backspace);
        type_word(&mut game, "a");
        assert_eq!(game.buffer, "banana");
    }

    #[test]
    fn test_backspace_on_empty_buffer() {
        let mut game = game();
        process_input(&mut game, &Intent::Backspace);
        assert!(game.buffer.is_empty());
    }

    #[test]
    fn test_buffer_is_bounded() {
        let mut game = game();
        type_word(&mut game, &"z".repeat(40));
        assert_eq!(game.buffer.len(), MAX_BUFFER_LEN);
    }

    #[test]
    fn test_every_prompt_has_one_blank() {
        for phrase in PHRASES.iter() {
            assert_eq!(phrase.prompt.matches(BLANK).count(), 1, "{}", phrase.prompt);
            assert!(phrase.answer.chars().all(|c| c.is_ascii_lowercase()));
        }
    }
}
