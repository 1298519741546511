//! Title screen.

use super::game_common::{centered_rect, tag_color};
use crate::character::FriendId;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

pub fn render_menu_scene(frame: &mut Frame, area: Rect) {
    frame.render_widget(Clear, area);
    let modal = centered_rect(area, 60, 16);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow))
        .title(" Friend Quest ");
    let inner = block.inner(modal);
    frame.render_widget(block, modal);

    let friends: Vec<Span> = FriendId::ALL
        .iter()
        .flat_map(|id| {
            [
                Span::styled(id.name(), Style::default().fg(tag_color(id.color()))),
                Span::raw(" "),
            ]
        })
        .collect();

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Friend Quest",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Thijs' Adventure",
            Style::default().fg(Color::White),
        )),
        Line::from(""),
        Line::from(friends),
        Line::from(""),
        Line::from("Walk up to each friend and help them with their objective."),
        Line::from("Every quest costs energy; rest by walking around."),
        Line::from(""),
        Line::from(Span::styled(
            "Press SPACE to start",
            Style::default().fg(Color::Green),
        )),
        Line::from(Span::styled(
            "Esc to quit",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);
}
