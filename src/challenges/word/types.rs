//! Word completion data structures.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;

/// Longest answer the typing buffer accepts.
pub const MAX_BUFFER_LEN: usize = 16;
/// Placeholder shown where the missing word goes.
pub const BLANK: &str = "____";

#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct Phrase {
    /// Prompt containing [`BLANK`] once.
    pub prompt: &'static str,
    pub answer: &'static str,
}

pub static PHRASES: [Phrase; 7] = [
    Phrase {
        prompt: "Time flies like an arrow; fruit flies like a ____.",
        answer: "banana",
    },
    Phrase {
        prompt: "A book about anti-gravity is impossible to put ____.",
        answer: "down",
    },
    Phrase {
        prompt: "Ghosts are terrible liars: you can see right ____ them.",
        answer: "through",
    },
    Phrase {
        prompt: "The scarecrow won an award for being outstanding in his ____.",
        answer: "field",
    },
    Phrase {
        prompt: "A fake noodle is called an ____.",
        answer: "impasta",
    },
    Phrase {
        prompt: "Skeletons never fight because they don't have the ____.",
        answer: "guts",
    },
    Phrase {
        prompt: "That pizza joke was a little too ____.",
        answer: "cheesy",
    },
];

#[derive(Debug, Clone, Serialize)]
pub struct WordGame {
    /// Play order for this game.
    pub phrases: Vec<&'static Phrase>,
    pub current: usize,
    pub buffer: String,
    /// Set after a wrong answer, cleared on the next keystroke.
    pub last_attempt_wrong: bool,
}

impl WordGame {
    pub fn new<R: Rng>(rng: &mut R) -> Self {
        let mut phrases: Vec<&'static Phrase> = PHRASES.iter().collect();
        phrases.shuffle(rng);
        Self::with_phrases(phrases)
    }

    pub fn with_phrases(phrases: Vec<&'static Phrase>) -> Self {
        Self {
            phrases,
            current: 0,
            buffer: String::new(),
            last_attempt_wrong: false,
        }
    }

    pub fn current_phrase(&self) -> &'static Phrase {
        self.phrases[self.current % self.phrases.len()]
    }
}
