use crate::challenges::MinigameSession;
use crate::character::{Friend, FriendId, Player};
use crate::content::Objective;
use crate::core::constants::*;
use crate::utils::geometry::Position;
use rand::Rng;
use serde::Serialize;
use std::collections::{BTreeSet, VecDeque};

/// Top-level phase of a play session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GamePhase {
    MainMenu,
    Roaming,
    QuestDialog,
    MiniGame,
    GameOver,
    Victory,
}

impl GamePhase {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::GameOver | Self::Victory)
    }
}

/// The friend and objective currently on offer (or being played).
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Encounter {
    pub friend: FriendId,
    pub objective: &'static Objective,
}

/// Everything one play session owns. Replaced wholesale on restart.
#[derive(Debug, Clone, Serialize)]
pub struct GameState {
    pub phase: GamePhase,
    pub player: Player,
    pub friends: Vec<Friend>,
    pub score: u32,
    /// Always within `0.0..=MAX_ENERGY`.
    pub energy: f64,
    pub friendship_points: u32,
    pub completed_quest_count: u32,
    pub completed_friends: BTreeSet<FriendId>,
    pub encounter: Option<Encounter>,
    pub minigame: Option<MinigameSession>,
    /// Recent player-facing messages, newest last.
    pub message_log: VecDeque<String>,
}

impl GameState {
    /// Fresh session: player at the field centre, every friend placed at a
    /// random spot away from the player.
    pub fn new_session<R: Rng>(rng: &mut R) -> Self {
        let start = Position::new(PLAYER_START_X, PLAYER_START_Y);
        let friends = FriendId::ALL
            .iter()
            .map(|&id| Friend::new(id, spawn_position(start, rng)))
            .collect();

        Self {
            phase: GamePhase::MainMenu,
            player: Player::new(start),
            friends,
            score: 0,
            energy: MAX_ENERGY,
            friendship_points: 0,
            completed_quest_count: 0,
            completed_friends: BTreeSet::new(),
            encounter: None,
            minigame: None,
            message_log: VecDeque::new(),
        }
    }

    /// Panics if the friend is not part of this session.
    pub fn friend(&self, id: FriendId) -> &Friend {
        self.friends
            .iter()
            .find(|f| f.id == id)
            .unwrap_or_else(|| panic!("friend {id:?} missing from session"))
    }

    /// Panics if the friend is not part of this session.
    pub fn friend_mut(&mut self, id: FriendId) -> &mut Friend {
        self.friends
            .iter_mut()
            .find(|f| f.id == id)
            .unwrap_or_else(|| panic!("friend {id:?} missing from session"))
    }

    pub fn all_friends_completed(&self) -> bool {
        self.completed_friends.len() >= self.friends.len()
    }

    /// Set energy, clamped to `0.0..=MAX_ENERGY`.
    pub fn set_energy(&mut self, energy: f64) {
        self.energy = energy.clamp(0.0, MAX_ENERGY);
    }

    pub fn add_message(&mut self, message: String) {
        if self.message_log.len() >= MAX_MESSAGE_LOG {
            self.message_log.pop_front();
        }
        self.message_log.push_back(message);
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            phase: self.phase,
            player: self.player.position,
            friends: self
                .friends
                .iter()
                .map(|f| FriendSnapshot {
                    id: f.id,
                    position: f.position,
                    happiness: f.happiness,
                    quest_completed: f.quest_completed,
                })
                .collect(),
            score: self.score,
            energy: self.energy,
            friendship_points: self.friendship_points,
            completed_quest_count: self.completed_quest_count,
            completed_friends: self.completed_friends.iter().copied().collect(),
            encounter: self.encounter.map(|e| e.friend),
            minigame: self.minigame.clone(),
        }
    }
}

/// Random friend position inside the spawn margin, kept clear of `start`.
pub fn spawn_position<R: Rng>(start: Position, rng: &mut R) -> Position {
    let max_x = FIELD_WIDTH - CHARACTER_WIDTH - SPAWN_MARGIN;
    let max_y = FIELD_HEIGHT - CHARACTER_HEIGHT - SPAWN_MARGIN;
    loop {
        let pos = Position::new(
            rng.gen_range(SPAWN_MARGIN..=max_x),
            rng.gen_range(SPAWN_MARGIN..=max_y),
        );
        let crowding = (pos.x - start.x).abs() <= SPAWN_CLEARANCE
            && (pos.y - start.y).abs() <= SPAWN_CLEARANCE;
        if !crowding {
            return pos;
        }
    }
}

/// Read-only, serializable view of a session for renderers and tests.
#[derive(Debug, Clone, Serialize)]
pub struct GameSnapshot {
    pub phase: GamePhase,
    pub player: Position,
    pub friends: Vec<FriendSnapshot>,
    pub score: u32,
    pub energy: f64,
    pub friendship_points: u32,
    pub completed_quest_count: u32,
    pub completed_friends: Vec<FriendId>,
    pub encounter: Option<FriendId>,
    pub minigame: Option<MinigameSession>,
}

#[derive(Debug, Clone, Serialize)]
pub struct FriendSnapshot {
    pub id: FriendId,
    pub position: Position,
    pub happiness: u8,
    pub quest_completed: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_new_session_defaults() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let state = GameState::new_session(&mut rng);
        assert_eq!(state.phase, GamePhase::MainMenu);
        assert_eq!(state.friends.len(), 8);
        assert_eq!(state.score, 0);
        assert_eq!(state.energy, MAX_ENERGY);
        assert!(state.completed_friends.is_empty());
        assert!(state.encounter.is_none());
        assert!(state.minigame.is_none());
        assert!(state
            .friends
            .iter()
            .all(|f| f.happiness == STARTING_HAPPINESS && !f.quest_completed));
    }

    #[test]
    fn test_spawn_positions_respect_margin_and_clearance() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let start = Position::new(PLAYER_START_X, PLAYER_START_Y);
        for _ in 0..200 {
            let pos = spawn_position(start, &mut rng);
            assert!(pos.x >= SPAWN_MARGIN && pos.x <= FIELD_WIDTH - CHARACTER_WIDTH - SPAWN_MARGIN);
            assert!(pos.y >= SPAWN_MARGIN && pos.y <= FIELD_HEIGHT - CHARACTER_HEIGHT - SPAWN_MARGIN);
            assert!(
                (pos.x - start.x).abs() > SPAWN_CLEARANCE || (pos.y - start.y).abs() > SPAWN_CLEARANCE
            );
        }
    }

    #[test]
    fn test_set_energy_clamps() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let mut state = GameState::new_session(&mut rng);
        state.set_energy(150.0);
        assert_eq!(state.energy, MAX_ENERGY);
        state.set_energy(-3.0);
        assert_eq!(state.energy, 0.0);
    }

    #[test]
    fn test_message_log_is_bounded() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let mut state = GameState::new_session(&mut rng);
        for i in 0..20 {
            state.add_message(format!("line {i}"));
        }
        assert_eq!(state.message_log.len(), MAX_MESSAGE_LOG);
        assert_eq!(state.message_log.back().map(String::as_str), Some("line 19"));
    }

    #[test]
    fn test_friend_lookup() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let mut state = GameState::new_session(&mut rng);
        state.friend_mut(FriendId::Roel).happiness = 77;
        assert_eq!(state.friend(FriendId::Roel).happiness, 77);
    }

    #[test]
    #[should_panic(expected = "missing from session")]
    fn test_missing_friend_panics() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let mut state = GameState::new_session(&mut rng);
        state.friends.retain(|f| f.id != FriendId::Suen);
        state.friend(FriendId::Suen);
    }
}
