//! Session controller transitions. Every function here takes the whole
//! [`GameState`] and reports what happened through [`TickEvent`]s.

use crate::challenges::{MinigameResult, MinigameSession};
use crate::character::FriendId;
use crate::core::constants::*;
use crate::core::game_state::{Encounter, GamePhase, GameState};
use crate::core::tick::TickEvent;
use crate::input::Direction;
use crate::utils::geometry::{clamp_to_bounds, rects_overlap, Position, Rect};
use rand::Rng;

const FIELD: Rect = Rect::new(0, 0, FIELD_WIDTH, FIELD_HEIGHT);

/// Leave the main menu.
pub fn start_game(state: &mut GameState, events: &mut Vec<TickEvent>) {
    if state.phase != GamePhase::MainMenu {
        return;
    }
    state.phase = GamePhase::Roaming;
    tracing::info!("Game started");
    events.push(TickEvent::GameStarted {
        message: "Walk near friends to help them!".to_string(),
    });
}

/// One movement step, clamped to the playfield.
pub fn move_player(state: &mut GameState, direction: Direction) {
    let (dx, dy) = direction.delta();
    let moved = Position::new(
        state.player.position.x + dx * PLAYER_SPEED,
        state.player.position.y + dy * PLAYER_SPEED,
    );
    state.player.position = clamp_to_bounds(moved, CHARACTER_WIDTH, CHARACTER_HEIGHT, &FIELD);
}

/// First friend with an open quest whose box overlaps the player.
pub fn find_encounter(state: &GameState) -> Option<FriendId> {
    let player = state.player.rect();
    state
        .friends
        .iter()
        .find(|f| !f.quest_completed && rects_overlap(&player, &f.rect()))
        .map(|f| f.id)
}

/// Per-tick roaming rules after movement: collisions, energy regeneration
/// and the end-of-game checks.
pub fn update_roaming<R: Rng>(state: &mut GameState, rng: &mut R, events: &mut Vec<TickEvent>) {
    if state.phase != GamePhase::Roaming {
        return;
    }

    if let Some(friend) = find_encounter(state) {
        offer_quest(state, friend, rng, events);
    }

    state.set_energy(state.energy + ENERGY_REGEN_PER_TICK);

    if state.all_friends_completed() {
        state.phase = GamePhase::Victory;
        state.encounter = None;
        tracing::info!("Victory with score {}", state.score);
        events.push(TickEvent::Victory {
            score: state.score,
            message: format!("Everyone is happy! Final score: {}", state.score),
        });
    } else if state.energy <= 0.0 {
        enter_game_over(state, events);
    }
}

fn offer_quest<R: Rng>(state: &mut GameState, friend: FriendId, rng: &mut R, events: &mut Vec<TickEvent>) {
    let objective = state.friend(friend).objectives().pick_random(rng);
    state.encounter = Some(Encounter { friend, objective });
    state.phase = GamePhase::QuestDialog;
    tracing::info!("{} offers quest: {}", friend.name(), objective.text);
    events.push(TickEvent::QuestOffered {
        friend,
        objective: objective.text,
        message: dialog_line(objective.text),
    });
}

/// What a friend says when offering a quest.
pub fn dialog_line(objective: &str) -> String {
    format!(
        "Hey! I'd like to {}, could you help me?",
        objective.to_lowercase()
    )
}

/// Accept the bound quest. Without enough energy the dialog closes and
/// nothing else changes.
pub fn accept_quest<R: Rng>(state: &mut GameState, rng: &mut R, events: &mut Vec<TickEvent>) {
    if state.phase != GamePhase::QuestDialog {
        return;
    }
    let Some(encounter) = state.encounter else {
        state.phase = GamePhase::Roaming;
        return;
    };

    if state.energy < QUEST_ENERGY_COST || state.friend(encounter.friend).quest_completed {
        tracing::debug!(
            "Quest for {} not started (energy {:.1})",
            encounter.friend.name(),
            state.energy
        );
        state.encounter = None;
        state.phase = GamePhase::Roaming;
        return;
    }

    state.set_energy(state.energy - QUEST_ENERGY_COST);
    let session = MinigameSession::start(encounter.friend, encounter.objective, rng);
    tracing::info!(
        "Quest accepted: {} ({}, {:?})",
        session.variant.name,
        encounter.friend.name(),
        session.kind()
    );
    events.push(TickEvent::MinigameStarted {
        friend: encounter.friend,
        variant: session.variant.name,
        message: format!("{}: {}", session.variant.name, session.variant.instruction),
    });
    state.minigame = Some(session);
    state.phase = GamePhase::MiniGame;
}

pub fn decline_quest(state: &mut GameState, events: &mut Vec<TickEvent>) {
    if state.phase != GamePhase::QuestDialog {
        return;
    }
    if let Some(encounter) = state.encounter.take() {
        tracing::info!("Quest declined: {}", encounter.friend.name());
        events.push(TickEvent::QuestDeclined {
            friend: encounter.friend,
            message: format!("Maybe later, {}.", encounter.friend.name()),
        });
    }
    state.phase = GamePhase::Roaming;
}

/// Apply a finished mini-game's outcome and return to roaming.
pub fn complete_minigame(state: &mut GameState, result: MinigameResult, events: &mut Vec<TickEvent>) {
    let Some(session) = state.minigame.take() else {
        return;
    };
    let friend_id = session.friend;
    state.encounter = None;
    state.phase = GamePhase::Roaming;

    tracing::info!(
        "Mini-game {} for {} resolved: {:?} ({}/{})",
        session.variant.name,
        friend_id.name(),
        result,
        session.progress,
        session.target
    );

    match result {
        MinigameResult::Success => {
            state.score += SUCCESS_SCORE;
            state.completed_quest_count += 1;
            state.friendship_points += SUCCESS_FRIENDSHIP;
            state.completed_friends.insert(friend_id);
            let friend = state.friend_mut(friend_id);
            friend.adjust_happiness(SUCCESS_HAPPINESS);
            friend.quest_completed = true;
            events.push(TickEvent::MinigameResolved {
                friend: friend_id,
                result,
                message: format!("Quest complete! {} is thrilled.", friend_id.name()),
            });
            activate_ability(state, friend_id, events);
        }
        MinigameResult::Partial => {
            state.score += PARTIAL_SCORE;
            state.friend_mut(friend_id).adjust_happiness(PARTIAL_HAPPINESS);
            events.push(TickEvent::MinigameResolved {
                friend: friend_id,
                result,
                message: format!("Nice try! {} appreciates the help.", friend_id.name()),
            });
        }
        MinigameResult::Failed => fail_minigame(state, friend_id, events),
    }

    if state.energy <= 0.0 {
        enter_game_over(state, events);
    }
}

/// Early failure: costs energy and happiness.
pub fn fail_minigame(state: &mut GameState, friend: FriendId, events: &mut Vec<TickEvent>) {
    state.set_energy(state.energy - EARLY_FAILURE_ENERGY_PENALTY);
    state.friend_mut(friend).adjust_happiness(-FAILURE_HAPPINESS_PENALTY);
    events.push(TickEvent::MinigameResolved {
        friend,
        result: MinigameResult::Failed,
        message: format!("That went wrong... {} is disappointed.", friend.name()),
    });
}

/// Fire the friend's ability. The effect bundle is only announced.
fn activate_ability(state: &GameState, friend: FriendId, events: &mut Vec<TickEvent>) {
    let ability = state.friend(friend).ability;
    let effect = ability.activate();
    tracing::info!(
        "{} activated {} ({} bonuses)",
        friend.name(),
        ability.name(),
        effect.bonuses.len()
    );
    events.push(TickEvent::AbilityActivated {
        friend,
        ability,
        message: ability.announcement(friend.name()),
    });
}

fn enter_game_over(state: &mut GameState, events: &mut Vec<TickEvent>) {
    state.phase = GamePhase::GameOver;
    state.encounter = None;
    state.minigame = None;
    tracing::info!("Game over with score {}", state.score);
    events.push(TickEvent::GameOver {
        score: state.score,
        message: "Out of energy! Game over.".to_string(),
    });
}

/// Throw the session away and start over at the main menu.
pub fn restart<R: Rng>(state: &mut GameState, rng: &mut R, events: &mut Vec<TickEvent>) {
    if !state.phase.is_terminal() {
        return;
    }
    *state = GameState::new_session(rng);
    tracing::info!("Session restarted");
    events.push(TickEvent::Restarted);
}
