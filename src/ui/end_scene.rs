//! Game over and victory screens.

use super::game_common::{render_game_over_overlay, GameResultType};
use crate::core::game_state::{GamePhase, GameState};
use ratatui::{layout::Rect, Frame};

pub fn render_end_scene(frame: &mut Frame, area: Rect, state: &GameState) {
    let totals = format!(
        "Score: {}   Friendship: {}   Quests: {}",
        state.score, state.friendship_points, state.completed_quest_count
    );
    if state.phase == GamePhase::Victory {
        render_game_over_overlay(
            frame,
            area,
            GameResultType::Win,
            "VICTORY!",
            "You helped all your friends!",
            &totals,
        );
    } else {
        render_game_over_overlay(
            frame,
            area,
            GameResultType::Loss,
            "GAME OVER",
            "You ran out of energy.",
            &totals,
        );
    }
}
