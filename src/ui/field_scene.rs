//! Roaming view: the playfield, the HUD and the side panel.

use super::canvas::FieldCanvas;
use super::game_common::{meter, render_field_frame, render_panel_frame, render_status_bar, tag_color, GameLayout};
use crate::core::constants::{FIELD_HEIGHT, MAX_ENERGY, MAX_HAPPINESS};
use crate::core::game_state::GameState;
use crate::utils::geometry::Position;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const PLAYER_COLOR: Color = Color::Rgb(240, 220, 120);
const COMPLETED_COLOR: Color = Color::Rgb(60, 90, 60);

pub fn render_field_scene(frame: &mut Frame, layout: &GameLayout, state: &GameState) {
    render_hud(frame, layout.hud, state);
    render_field_frame(frame, layout, " The Field ", Color::Green);
    render_playfield(frame, layout.field, state);
    render_status_bar(
        frame,
        layout.status_bar,
        "Walk near friends to help them!",
        Color::Gray,
        &[("[WASD/Arrows]", "Move"), ("[Esc]", "Quit")],
    );
    render_side_panel(frame, layout.side_panel, state);
}

pub fn render_hud(frame: &mut Frame, area: Rect, state: &GameState) {
    let energy_color = if state.energy < 20.0 {
        Color::Red
    } else {
        Color::Cyan
    };
    let line = Line::from(vec![
        Span::styled(" Score ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            state.score.to_string(),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ),
        Span::styled("  Energy ", Style::default().fg(Color::DarkGray)),
        Span::styled(meter(state.energy, MAX_ENERGY, 10), Style::default().fg(energy_color)),
        Span::styled(format!(" {:.0}", state.energy), Style::default().fg(energy_color)),
        Span::styled("  Friendship ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            state.friendship_points.to_string(),
            Style::default().fg(Color::Magenta),
        ),
        Span::styled("  Quests ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            format!("{}/{}", state.completed_friends.len(), state.friends.len()),
            Style::default().fg(Color::Yellow),
        ),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn render_playfield(frame: &mut Frame, area: Rect, state: &GameState) {
    let mut canvas = FieldCanvas::new(area);
    let row_height = FIELD_HEIGHT / i32::from(area.height.max(1));

    for friend in &state.friends {
        let color = if friend.quest_completed {
            COMPLETED_COLOR
        } else {
            tag_color(friend.color)
        };
        let rect = friend.rect();
        canvas.fill(rect, color);
        let mark = if friend.quest_completed { '\u{2713}' } else { '!' };
        canvas.put(Position::new(rect.x + rect.width / 2, rect.y + rect.height / 2), mark, Color::White);
        canvas.label(
            Position::new(rect.x + rect.width / 2, rect.y - row_height),
            friend.name(),
            Color::White,
        );
    }

    let player = state.player.rect();
    canvas.fill(player, PLAYER_COLOR);
    canvas.label(
        Position::new(player.x + player.width / 2, (player.y - row_height).max(0)),
        state.player.name,
        PLAYER_COLOR,
    );
    canvas.render(frame);
}

/// Friends with happiness bars on top, the message log below.
pub fn render_side_panel(frame: &mut Frame, area: Rect, state: &GameState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(state.friends.len() as u16 + 2),
            Constraint::Min(3),
        ])
        .split(area);

    let inner = render_panel_frame(frame, chunks[0], " Friends ");
    let bar_width = (inner.width as usize).saturating_sub(10).min(12);
    let lines: Vec<Line> = state
        .friends
        .iter()
        .map(|f| {
            let status = if f.quest_completed { "\u{2713}" } else { " " };
            Line::from(vec![
                Span::styled(
                    format!("{:<7}", f.name()),
                    Style::default().fg(tag_color(f.color)),
                ),
                Span::styled(
                    meter(f.happiness.into(), MAX_HAPPINESS.into(), bar_width),
                    Style::default().fg(Color::Yellow),
                ),
                Span::styled(format!(" {status}"), Style::default().fg(Color::Green)),
            ])
        })
        .collect();
    frame.render_widget(Paragraph::new(lines), inner);

    let inner = render_panel_frame(frame, chunks[1], " Log ");
    let visible = inner.height as usize;
    let skip = state.message_log.len().saturating_sub(visible);
    let lines: Vec<Line> = state
        .message_log
        .iter()
        .skip(skip)
        .map(|m| Line::from(Span::styled(m.as_str(), Style::default().fg(Color::Gray))))
        .collect();
    frame.render_widget(Paragraph::new(lines), inner);
}
