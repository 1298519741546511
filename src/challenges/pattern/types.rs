//! Pattern match data structures.

use rand::Rng;
use serde::Serialize;

/// Digits per sequence.
pub const SEQUENCE_LENGTH: usize = 6;
/// Digits are drawn from `1..=MAX_DIGIT`.
pub const MAX_DIGIT: u8 = 4;

#[derive(Debug, Clone, Serialize)]
pub struct PatternGame {
    pub sequence: Vec<u8>,
    /// Digits typed so far; always a prefix of `sequence`.
    pub input: Vec<u8>,
    pub completed: u32,
}

impl PatternGame {
    pub fn new<R: Rng>(rng: &mut R) -> Self {
        Self::with_sequence(generate_sequence(rng))
    }

    pub fn with_sequence(sequence: Vec<u8>) -> Self {
        Self {
            sequence,
            input: Vec::new(),
            completed: 0,
        }
    }
}

pub fn generate_sequence<R: Rng>(rng: &mut R) -> Vec<u8> {
    (0..SEQUENCE_LENGTH)
        .map(|_| rng.gen_range(1..=MAX_DIGIT))
        .collect()
}
