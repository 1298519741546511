pub mod canvas;
pub mod dialog_scene;
pub mod end_scene;
pub mod field_scene;
pub mod game_common;
pub mod menu_scene;
pub mod minigame_scene;

use crate::core::game_state::{GamePhase, GameState};
use game_common::game_layout;
use ratatui::{layout::Rect, Frame};

/// Main UI drawing function. Picks the scene for the current phase.
pub fn draw_ui(frame: &mut Frame, game_state: &GameState) {
    let size = frame.size();
    let layout = game_layout(size);

    match game_state.phase {
        GamePhase::MainMenu => menu_scene::render_menu_scene(frame, size),
        GamePhase::Roaming => field_scene::render_field_scene(frame, &layout, game_state),
        GamePhase::QuestDialog => {
            field_scene::render_field_scene(frame, &layout, game_state);
            dialog_scene::render_dialog_scene(frame, &layout, game_state);
        }
        GamePhase::MiniGame => minigame_scene::render_minigame_scene(frame, &layout, game_state),
        GamePhase::GameOver | GamePhase::Victory => {
            end_scene::render_end_scene(frame, size, game_state)
        }
    }
}

/// Terminal area the playfield is drawn into for a screen of `size`.
/// Mouse events are mapped through the same rectangle.
pub fn field_viewport(size: Rect) -> Rect {
    game_layout(size).field
}
