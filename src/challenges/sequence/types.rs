//! Directional sequence data structures.

use crate::input::Direction;
use rand::Rng;
use serde::Serialize;

/// How long a fresh sequence stays on screen before input opens.
pub const DISPLAY_MS: u64 = 2000;
pub const BASE_LENGTH: usize = 3;
pub const MAX_LENGTH: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SequencePhase {
    Display { remaining_ms: u64 },
    Input,
}

#[derive(Debug, Clone, Serialize)]
pub struct SequenceGame {
    pub sequence: Vec<Direction>,
    pub input: Vec<Direction>,
    pub phase: SequencePhase,
    pub completed: u32,
}

impl SequenceGame {
    pub fn new<R: Rng>(rng: &mut R) -> Self {
        Self::with_sequence(generate_sequence(rng, 0))
    }

    pub fn with_sequence(sequence: Vec<Direction>) -> Self {
        Self {
            sequence,
            input: Vec::new(),
            phase: SequencePhase::Display {
                remaining_ms: DISPLAY_MS,
            },
            completed: 0,
        }
    }

    pub fn is_displaying(&self) -> bool {
        matches!(self.phase, SequencePhase::Display { .. })
    }
}

/// Sequences grow by one per completed round, up to [`MAX_LENGTH`].
pub fn sequence_length(completed: u32) -> usize {
    (BASE_LENGTH + completed as usize).min(MAX_LENGTH)
}

pub fn generate_sequence<R: Rng>(rng: &mut R, completed: u32) -> Vec<Direction> {
    (0..sequence_length(completed))
        .map(|_| Direction::ALL[rng.gen_range(0..Direction::ALL.len())])
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_grows_and_caps() {
        assert_eq!(sequence_length(0), 3);
        assert_eq!(sequence_length(2), 5);
        assert_eq!(sequence_length(10), MAX_LENGTH);
    }

    #[test]
    fn test_starts_in_display() {
        let game = SequenceGame::with_sequence(vec![Direction::Up]);
        assert!(game.is_displaying());
    }
}
