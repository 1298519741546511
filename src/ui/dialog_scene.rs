//! Quest offer dialog, drawn over the field.

use super::game_common::{centered_rect, render_status_bar, tag_color, GameLayout};
use crate::core::constants::QUEST_ENERGY_COST;
use crate::core::game_logic::dialog_line;
use crate::core::game_state::GameState;
use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

pub fn render_dialog_scene(frame: &mut Frame, layout: &GameLayout, state: &GameState) {
    let Some(encounter) = state.encounter else {
        return;
    };
    let friend = state.friend(encounter.friend);
    let color = tag_color(friend.color);

    let modal = centered_rect(layout.field_block, 56, 11);
    frame.render_widget(Clear, modal);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color))
        .title(format!(" {} ", friend.id.display_name()));
    let inner = block.inner(modal);
    frame.render_widget(block, modal);

    let affordable = state.energy >= QUEST_ENERGY_COST;
    let cost_line = if affordable {
        Span::styled(
            format!("Helping costs {QUEST_ENERGY_COST:.0} energy."),
            Style::default().fg(Color::DarkGray),
        )
    } else {
        Span::styled(
            "You're too tired to help right now.",
            Style::default().fg(Color::Red),
        )
    };

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            dialog_line(encounter.objective.text),
            Style::default().fg(Color::White),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("{} {}", friend.ability.icon(), friend.ability.name()),
            Style::default().fg(color).add_modifier(Modifier::ITALIC),
        )),
        Line::from(""),
        Line::from(cost_line),
    ];
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        inner,
    );

    render_status_bar(
        frame,
        layout.status_bar,
        &format!("{} needs your help!", friend.name()),
        color,
        &[("[Y]", "Accept"), ("[N]", "Decline"), ("[Esc]", "Quit")],
    );
}
