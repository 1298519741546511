//! A running mini-game bound to the friend whose quest started it.

use super::{select_variant, ActiveMinigame, MinigameKind, ProgressChange, Variant};
use crate::character::FriendId;
use crate::content::Objective;
use crate::core::constants::SUCCESS_THRESHOLD_PERCENT;
use crate::input::Intent;
use rand::Rng;
use serde::Serialize;

/// How a finished mini-game turned out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MinigameResult {
    Success,
    Partial,
    /// Progress dropped below zero before time ran out.
    Failed,
}

#[derive(Debug, Clone, Serialize)]
pub struct MinigameSession {
    pub friend: FriendId,
    pub variant: &'static Variant,
    pub progress: i32,
    pub target: i32,
    pub elapsed_ms: u64,
    pub duration_ms: u64,
    pub game: ActiveMinigame,
}

impl MinigameSession {
    /// Start the mini-game for `friend`, flavored by the objective text.
    pub fn start<R: Rng>(friend: FriendId, objective: &Objective, rng: &mut R) -> Self {
        let variant = select_variant(friend, objective.text);
        Self::with_game(friend, variant, ActiveMinigame::new(variant.kind, rng))
    }

    /// Wrap an already built game. Target and time limit come from its kind.
    pub fn with_game(friend: FriendId, variant: &'static Variant, game: ActiveMinigame) -> Self {
        let kind = game.kind();
        Self {
            friend,
            variant,
            progress: 0,
            target: kind.target(),
            elapsed_ms: 0,
            duration_ms: kind.duration_ms(),
            game,
        }
    }

    pub fn kind(&self) -> MinigameKind {
        self.game.kind()
    }

    pub fn remaining_ms(&self) -> u64 {
        self.duration_ms.saturating_sub(self.elapsed_ms)
    }

    pub fn apply_input<R: Rng>(&mut self, intent: &Intent, rng: &mut R) {
        let change = self.game.process_input(intent, rng);
        self.apply(change);
    }

    /// Advance the clock and run the archetype's autonomous rule.
    pub fn tick<R: Rng>(&mut self, dt_ms: u64, rng: &mut R) {
        self.elapsed_ms = self.elapsed_ms.saturating_add(dt_ms);
        let change = self.game.tick(dt_ms, rng);
        self.apply(change);
    }

    fn apply(&mut self, change: ProgressChange) {
        match change {
            ProgressChange::None => {}
            ProgressChange::Advance(n) => self.progress += n,
            ProgressChange::Reset => self.progress = 0,
        }
    }

    /// `Some` once the session is over: time is up, the target is reached, or
    /// progress went negative.
    pub fn evaluate(&self) -> Option<MinigameResult> {
        if self.elapsed_ms >= self.duration_ms || self.progress >= self.target {
            Some(self.grade())
        } else if self.progress < 0 {
            Some(MinigameResult::Failed)
        } else {
            None
        }
    }

    /// Success at or above the threshold share of the target, partial below.
    pub fn grade(&self) -> MinigameResult {
        let scaled = i64::from(self.progress) * 100;
        if scaled >= i64::from(self.target) * i64::from(SUCCESS_THRESHOLD_PERCENT) {
            MinigameResult::Success
        } else {
            MinigameResult::Partial
        }
    }
}
