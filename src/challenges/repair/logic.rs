//! Machinery repair logic.

use super::types::*;
use crate::challenges::ProgressChange;
use crate::input::Intent;
use crate::utils::geometry::{within_radius, Position};

pub fn process_input(game: &mut RepairGame, intent: &Intent) -> ProgressChange {
    let Intent::PointerClick(pos) = *intent else {
        return ProgressChange::None;
    };

    if let Some(tool) = tool_at(game, pos) {
        game.selected = Some(tool);
        return ProgressChange::None;
    }
    match part_at(game, pos) {
        Some(index) => apply_tool(game, index),
        None => ProgressChange::None,
    }
}

pub fn tool_at(game: &RepairGame, pos: Position) -> Option<Tool> {
    game.tools
        .iter()
        .find(|slot| within_radius(pos, slot.position, HIT_RADIUS))
        .map(|slot| slot.tool)
}

/// Index of the unfixed part under `pos`.
pub fn part_at(game: &RepairGame, pos: Position) -> Option<usize> {
    game.parts
        .iter()
        .position(|p| !p.fixed && within_radius(pos, p.position, HIT_RADIUS))
}

/// Use the latched tool on part `index`. The selection is spent either way;
/// a wrong tool costs nothing else.
pub fn apply_tool(game: &mut RepairGame, index: usize) -> ProgressChange {
    let Some(tool) = game.selected else {
        return ProgressChange::None;
    };
    let Some(part) = game.parts.get_mut(index) else {
        return ProgressChange::None;
    };
    if part.fixed {
        return ProgressChange::None;
    }

    game.selected = None;
    if part.required == tool {
        part.fixed = true;
        ProgressChange::Advance(1)
    } else {
        ProgressChange::None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game() -> RepairGame {
        RepairGame::with_parts(vec![
            MachinePart {
                name: "Gearbox",
                position: Position::new(200, 300),
                required: Tool::Wrench,
                fixed: false,
            },
            MachinePart {
                name: "Boiler",
                position: Position::new(500, 300),
                required: Tool::Hammer,
                fixed: false,
            },
        ])
    }

    fn click_tool(game: &mut RepairGame, tool: Tool) {
        let pos = game.tools.iter().find(|s| s.tool == tool).unwrap().position;
        process_input(game, &Intent::PointerClick(pos));
    }

    #[test]
    fn test_clicking_tool_latches_selection() {
        let mut game = game();
        click_tool(&mut game, Tool::Pliers);
        assert_eq!(game.selected, Some(Tool::Pliers));
        click_tool(&mut game, Tool::Hammer);
        assert_eq!(game.selected, Some(Tool::Hammer));
    }

    #[test]
    fn test_right_tool_fixes_part() {
        let mut game = game();
        click_tool(&mut game, Tool::Wrench);
        let change = process_input(&mut game, &Intent::PointerClick(Position::new(200, 300)));
        assert_eq!(change, ProgressChange::Advance(1));
        assert!(game.parts[0].fixed);
        assert!(game.selected.is_none());
    }

    #[test]
    fn test_wrong_tool_clears_selection_without_penalty() {
        let mut game = game();
        click_tool(&mut game, Tool::Screwdriver);
        let change = process_input(&mut game, &Intent::PointerClick(Position::new(500, 300)));
        assert_eq!(change, ProgressChange::None);
        assert!(!game.parts[1].fixed);
        assert!(game.selected.is_none());
    }

    #[test]
    fn test_part_click_without_tool() {
        let mut game = game();
        let change = process_input(&mut game, &Intent::PointerClick(Position::new(200, 300)));
        assert_eq!(change, ProgressChange::None);
        assert_eq!(game.fixed_count(), 0);
    }

    #[test]
    fn test_fixed_part_ignores_clicks() {
        let mut game = game();
        click_tool(&mut game, Tool::Wrench);
        process_input(&mut game, &Intent::PointerClick(Position::new(200, 300)));
        click_tool(&mut game, Tool::Wrench);
        let change = process_input(&mut game, &Intent::PointerClick(Position::new(200, 300)));
        assert_eq!(change, ProgressChange::None);
        assert_eq!(game.selected, Some(Tool::Wrench));
    }
}
