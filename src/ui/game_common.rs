//! Shared layout and widgets for every scene.

use crate::content::ColorTag;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Width of the side panel holding friends and the message log.
pub const SIDE_PANEL_WIDTH: u16 = 30;

/// Layout areas returned by [`game_layout`].
pub struct GameLayout {
    /// One-line HUD across the top.
    pub hud: Rect,
    /// Bordered playfield area.
    pub field_block: Rect,
    /// Inside of `field_block`; playfield coordinates map onto this.
    pub field: Rect,
    /// Status bar area (2 lines) under the playfield.
    pub status_bar: Rect,
    pub side_panel: Rect,
}

/// Split the screen into HUD, playfield, status bar and side panel.
///
/// ```text
/// Score 100  Energy ████░░  Friendship 10  Quests 1/8
/// ┌─ Title ─────────────────────────┬─ Friends ──┐
/// │   [field]                       │            │
/// └─────────────────────────────────┤─ Log ──────┤
///   [status bar - 2 lines]          │            │
/// ```
///
/// Pure: the host uses it to map mouse events without drawing.
pub fn game_layout(area: Rect) -> GameLayout {
    let v_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(8), Constraint::Length(2)])
        .split(area);

    let h_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(SIDE_PANEL_WIDTH)])
        .split(v_chunks[1]);

    let field_block = h_chunks[0];
    GameLayout {
        hud: v_chunks[0],
        field_block,
        field: Block::default().borders(Borders::ALL).inner(field_block),
        status_bar: v_chunks[2],
        side_panel: h_chunks[1],
    }
}

/// Draw the border around the playfield.
pub fn render_field_frame(frame: &mut Frame, layout: &GameLayout, title: &str, border_color: Color) {
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    frame.render_widget(block, layout.field_block);
}

/// Render a standardized status bar (2 lines: status message + controls).
///
/// `controls` is a slice of (key, action) pairs, e.g.
/// `[("[Y]", "Accept"), ("[Esc]", "Quit")]`.
pub fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    status_text: &str,
    status_color: Color,
    controls: &[(&str, &str)],
) {
    if area.height < 1 {
        return;
    }

    let status = Paragraph::new(status_text)
        .style(Style::default().fg(status_color))
        .alignment(Alignment::Center);
    frame.render_widget(status, Rect { height: 1, ..area });

    if area.height >= 2 && !controls.is_empty() {
        let mut spans = Vec::new();
        for (i, (key, action)) in controls.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled("  ", Style::default()));
            }
            spans.push(Span::styled(*key, Style::default().fg(Color::White)));
            spans.push(Span::styled(
                format!(" {}", action),
                Style::default().fg(Color::DarkGray),
            ));
        }

        let controls_line = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
        frame.render_widget(
            controls_line,
            Rect {
                y: area.y + 1,
                height: 1,
                ..area
            },
        );
    }
}

/// Render a titled panel frame with a DarkGray border.
///
/// Returns the inner Rect for content rendering.
pub fn render_panel_frame(frame: &mut Frame, area: Rect, title: &str) -> Rect {
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    inner
}

/// `[█████░░░░░]` style bar for a value out of `max`.
pub fn meter(value: f64, max: f64, width: usize) -> String {
    let ratio = if max > 0.0 { (value / max).clamp(0.0, 1.0) } else { 0.0 };
    let filled = (ratio * width as f64).round() as usize;
    format!(
        "{}{}",
        "\u{2588}".repeat(filled),
        "\u{2591}".repeat(width - filled)
    )
}

pub fn tag_color(tag: ColorTag) -> Color {
    let (r, g, b) = tag.rgb();
    Color::Rgb(r, g, b)
}

/// Game result type for the shared overlay.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum GameResultType {
    Win,
    Loss,
}

impl GameResultType {
    pub fn color(self) -> Color {
        match self {
            GameResultType::Win => Color::Green,
            GameResultType::Loss => Color::Red,
        }
    }
}

/// Full-screen end-of-session overlay: title, message, totals and the
/// restart prompt.
pub fn render_game_over_overlay(
    frame: &mut Frame,
    area: Rect,
    result_type: GameResultType,
    title: &str,
    message: &str,
    totals: &str,
) {
    frame.render_widget(Clear, area);

    let title_color = result_type.color();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(title_color));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let content_height: u16 = 7;
    let y_offset = inner.y + (inner.height.saturating_sub(content_height)) / 2;

    let lines = vec![
        Line::from(Span::styled(
            title,
            Style::default()
                .fg(title_color)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(message, Style::default().fg(Color::White))),
        Line::from(""),
        Line::from(Span::styled(totals, Style::default().fg(Color::Cyan))),
        Line::from(""),
        Line::from(Span::styled(
            "Press R to play again or Q to quit",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let text = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(
        text,
        Rect::new(inner.x, y_offset, inner.width, content_height.min(inner.height)),
    );
}

/// Centered modal box of the given size, clipped to `area`.
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}
