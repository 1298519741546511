//! The per-tick orchestration function.
//!
//! [`game_tick`] applies one tick's worth of intents to the session, runs the
//! phase's autonomous rules and returns a [`TickResult`] describing what
//! happened. The presentation layer turns the events into log lines without
//! the game logic ever touching UI types.

use crate::challenges::MinigameResult;
use crate::character::FriendId;
use crate::content::AbilityKind;
use crate::core::game_logic::{
    accept_quest, complete_minigame, decline_quest, move_player, restart, start_game,
    update_roaming,
};
use crate::core::game_state::{GamePhase, GameState};
use crate::input::Intent;
use rand::Rng;

/// A single event produced by a game tick.
#[derive(Debug, Clone, PartialEq)]
pub enum TickEvent {
    GameStarted {
        message: String,
    },
    QuestOffered {
        friend: FriendId,
        objective: &'static str,
        message: String,
    },
    QuestDeclined {
        friend: FriendId,
        message: String,
    },
    MinigameStarted {
        friend: FriendId,
        variant: &'static str,
        message: String,
    },
    MinigameResolved {
        friend: FriendId,
        result: MinigameResult,
        message: String,
    },
    AbilityActivated {
        friend: FriendId,
        ability: AbilityKind,
        message: String,
    },
    Victory {
        score: u32,
        message: String,
    },
    GameOver {
        score: u32,
        message: String,
    },
    /// Session replaced; the message log starts over with it.
    Restarted,
}

impl TickEvent {
    /// Player-facing line for the message log, if the event has one.
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::GameStarted { message }
            | Self::QuestOffered { message, .. }
            | Self::QuestDeclined { message, .. }
            | Self::MinigameStarted { message, .. }
            | Self::MinigameResolved { message, .. }
            | Self::AbilityActivated { message, .. }
            | Self::Victory { message, .. }
            | Self::GameOver { message, .. } => Some(message),
            Self::Restarted => None,
        }
    }
}

/// Result of a single tick.
#[derive(Debug, Clone, Default)]
pub struct TickResult {
    pub events: Vec<TickEvent>,
    /// A quit intent arrived; the host should shut down.
    pub quit: bool,
}

/// Advance the session by one tick of `dt_ms` milliseconds.
///
/// Intents are applied in arrival order, each against the phase current at
/// that moment. Afterwards the phase's per-tick rules run once, provided the
/// intents left the phase unchanged.
pub fn game_tick<R: Rng>(state: &mut GameState, intents: &[Intent], dt_ms: u64, rng: &mut R) -> TickResult {
    let mut result = TickResult::default();
    let phase_at_start = state.phase;

    for intent in intents {
        if *intent == Intent::Quit {
            result.quit = true;
            return result;
        }
        dispatch_intent(state, intent, rng, &mut result.events);
    }

    // A phase entered through an intent this tick starts its rules next tick.
    if state.phase != phase_at_start {
        return result;
    }

    match state.phase {
        GamePhase::Roaming => update_roaming(state, rng, &mut result.events),
        GamePhase::MiniGame => tick_minigame(state, dt_ms, rng, &mut result.events),
        GamePhase::MainMenu | GamePhase::QuestDialog | GamePhase::GameOver | GamePhase::Victory => {}
    }

    result
}

fn dispatch_intent<R: Rng>(state: &mut GameState, intent: &Intent, rng: &mut R, events: &mut Vec<TickEvent>) {
    match (state.phase, intent) {
        (GamePhase::MainMenu, Intent::Confirm) => start_game(state, events),
        (GamePhase::Roaming, Intent::Move(direction)) => move_player(state, *direction),
        (GamePhase::QuestDialog, Intent::Confirm) => accept_quest(state, rng, events),
        (GamePhase::QuestDialog, Intent::Decline) => decline_quest(state, events),
        (GamePhase::MiniGame, _) => {
            if let Some(session) = state.minigame.as_mut() {
                session.apply_input(intent, rng);
            }
        }
        (GamePhase::GameOver | GamePhase::Victory, Intent::Restart) => restart(state, rng, events),
        _ => {}
    }
}

fn tick_minigame<R: Rng>(state: &mut GameState, dt_ms: u64, rng: &mut R, events: &mut Vec<TickEvent>) {
    let Some(session) = state.minigame.as_mut() else {
        state.phase = GamePhase::Roaming;
        return;
    };
    session.tick(dt_ms, rng);
    if let Some(outcome) = session.evaluate() {
        complete_minigame(state, outcome, events);
    }
}

/// Feed tick events into the session's message log.
pub fn apply_tick_events(state: &mut GameState, events: &[TickEvent]) {
    for event in events {
        if let Some(message) = event.message() {
            state.add_message(message.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::challenges::{select_variant, ActiveMinigame, ButtonMashGame, MinigameSession};
    use crate::input::Direction;
    use crate::utils::geometry::Position;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn menu_state(rng: &mut ChaCha8Rng) -> GameState {
        GameState::new_session(rng)
    }

    #[test]
    fn test_confirm_leaves_menu() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let mut state = menu_state(&mut rng);
        let result = game_tick(&mut state, &[Intent::Confirm], 16, &mut rng);
        assert_eq!(state.phase, GamePhase::Roaming);
        assert!(matches!(result.events[0], TickEvent::GameStarted { .. }));
    }

    #[test]
    fn test_quit_short_circuits() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let mut state = menu_state(&mut rng);
        let result = game_tick(&mut state, &[Intent::Quit, Intent::Confirm], 16, &mut rng);
        assert!(result.quit);
        assert_eq!(state.phase, GamePhase::MainMenu);
    }

    #[test]
    fn test_move_intents_are_not_normalized() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let mut state = menu_state(&mut rng);
        state.phase = GamePhase::Roaming;
        for f in state.friends.iter_mut() {
            f.position = Position::new(0, 0);
        }
        let start = state.player.position;
        game_tick(
            &mut state,
            &[Intent::Move(Direction::Right), Intent::Move(Direction::Down)],
            16,
            &mut rng,
        );
        assert_eq!(state.player.position, Position::new(start.x + 5, start.y + 5));
    }

    #[test]
    fn test_moves_ignored_outside_roaming() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let mut state = menu_state(&mut rng);
        let start = state.player.position;
        game_tick(&mut state, &[Intent::Move(Direction::Up)], 16, &mut rng);
        assert_eq!(state.player.position, start);
    }

    #[test]
    fn test_minigame_times_out_into_partial() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let mut state = menu_state(&mut rng);
        let variant = select_variant(FriendId::Roel, "nothing matches");
        let mut session = MinigameSession::with_game(
            FriendId::Roel,
            variant,
            ActiveMinigame::ButtonMash(ButtonMashGame::default()),
        );
        session.elapsed_ms = session.duration_ms - 16;
        state.minigame = Some(session);
        state.phase = GamePhase::MiniGame;

        let result = game_tick(&mut state, &[], 16, &mut rng);
        assert_eq!(state.phase, GamePhase::Roaming);
        assert!(state.minigame.is_none());
        assert!(result.events.iter().any(|e| matches!(
            e,
            TickEvent::MinigameResolved {
                result: MinigameResult::Partial,
                ..
            }
        )));
    }

    #[test]
    fn test_events_feed_message_log() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let mut state = menu_state(&mut rng);
        let result = game_tick(&mut state, &[Intent::Confirm], 16, &mut rng);
        apply_tick_events(&mut state, &result.events);
        assert_eq!(state.message_log.len(), 1);
    }
}
