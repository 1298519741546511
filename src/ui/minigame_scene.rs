//! Mini-game view. Pointer archetypes draw on the field canvas in playfield
//! coordinates; keyboard archetypes draw text panels.

use super::canvas::FieldCanvas;
use super::field_scene::{render_hud, render_side_panel};
use super::game_common::{meter, render_field_frame, render_status_bar, tag_color, GameLayout};
use crate::challenges::care::CONTENTMENT_CAP;
use crate::challenges::memory::{card_rect, CardState, CARD_SYMBOLS};
use crate::challenges::sequence::SequencePhase;
use crate::challenges::{
    ActiveMinigame, CareGame, CollectionGame, ConnectGame, MemoryGame, MinigameSession,
    PatternGame, RepairGame, SequenceGame, WordGame, ARENA,
};
use crate::core::game_state::GameState;
use crate::utils::geometry::Position;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const ARENA_BG: Color = Color::Rgb(30, 55, 30);
const DIM: Color = Color::Rgb(90, 90, 90);

pub fn render_minigame_scene(frame: &mut Frame, layout: &GameLayout, state: &GameState) {
    let Some(session) = state.minigame.as_ref() else {
        return;
    };
    let friend = state.friend(session.friend);
    let color = tag_color(friend.color);

    render_hud(frame, layout.hud, state);
    render_field_frame(frame, layout, &format!(" {} ", session.variant.name), color);

    match &session.game {
        ActiveMinigame::Collection(game) => draw_canvas(frame, layout.field, |c| draw_collection(c, game)),
        ActiveMinigame::Memory(game) => draw_canvas(frame, layout.field, |c| draw_memory(c, game)),
        ActiveMinigame::Care(game) => draw_canvas(frame, layout.field, |c| draw_care(c, game)),
        ActiveMinigame::Connect(game) => draw_canvas(frame, layout.field, |c| draw_connect(c, game)),
        ActiveMinigame::Repair(game) => draw_canvas(frame, layout.field, |c| draw_repair(c, game)),
        ActiveMinigame::Pattern(game) => render_text(frame, layout.field, pattern_lines(game)),
        ActiveMinigame::Word(game) => render_text(frame, layout.field, word_lines(game)),
        ActiveMinigame::Sequence(game) => render_text(frame, layout.field, sequence_lines(game)),
        ActiveMinigame::ButtonMash(_) => render_text(frame, layout.field, mash_lines(session)),
    }

    let status = format!(
        "{}   Progress {}/{}   Time {:.1}s",
        session.variant.instruction,
        session.progress,
        session.target,
        session.remaining_ms() as f64 / 1000.0
    );
    render_status_bar(frame, layout.status_bar, &status, color, controls(&session.game));
    render_side_panel(frame, layout.side_panel, state);
}

fn controls(game: &ActiveMinigame) -> &'static [(&'static str, &'static str)] {
    match game {
        ActiveMinigame::Collection(_)
        | ActiveMinigame::Memory(_)
        | ActiveMinigame::Connect(_)
        | ActiveMinigame::Repair(_) => &[("[Click]", "Select"), ("[Esc]", "Quit")],
        ActiveMinigame::Care(_) => &[("[Mouse]", "Hover"), ("[Esc]", "Quit")],
        ActiveMinigame::Pattern(_) => &[("[1-4]", "Enter digit"), ("[Esc]", "Quit")],
        ActiveMinigame::Word(_) => &[("[a-z]", "Type"), ("[Enter]", "Submit"), ("[Esc]", "Quit")],
        ActiveMinigame::Sequence(_) => &[("[Arrows]", "Repeat"), ("[Esc]", "Quit")],
        ActiveMinigame::ButtonMash(_) => &[("[Space]", "Mash"), ("[Esc]", "Quit")],
    }
}

fn draw_canvas(frame: &mut Frame, area: Rect, draw: impl FnOnce(&mut FieldCanvas)) {
    let mut canvas = FieldCanvas::new(area);
    canvas.fill(ARENA, ARENA_BG);
    draw(&mut canvas);
    canvas.render(frame);
}

fn draw_collection(canvas: &mut FieldCanvas, game: &CollectionGame) {
    for marker in &game.markers {
        if marker.collected {
            canvas.put(marker.position, '\u{00B7}', DIM);
        } else {
            canvas.put(marker.position, '\u{273F}', Color::LightGreen);
        }
    }
}

fn draw_memory(canvas: &mut FieldCanvas, game: &MemoryGame) {
    for (index, card) in game.cards.iter().enumerate() {
        let rect = card_rect(index);
        let centre = Position::new(rect.x + rect.width / 2, rect.y + rect.height / 2);
        match card.state {
            CardState::Hidden => {
                canvas.fill(rect, Color::Rgb(60, 60, 120));
                canvas.put(centre, '?', Color::White);
            }
            CardState::Revealed => {
                canvas.fill(rect, Color::Rgb(200, 200, 220));
                canvas.put(centre, CARD_SYMBOLS[card.symbol], Color::Black);
            }
            CardState::Matched => {
                canvas.fill(rect, Color::Rgb(50, 110, 50));
                canvas.put(centre, CARD_SYMBOLS[card.symbol], Color::White);
            }
        }
    }
}

fn draw_care(canvas: &mut FieldCanvas, game: &CareGame) {
    for cow in &game.cows {
        let color = if cow.done { Color::Green } else { Color::White };
        canvas.put(cow.position, 'C', color);
        let bar = meter(cow.contentment.into(), CONTENTMENT_CAP.into(), 5);
        canvas.label(Position::new(cow.position.x, cow.position.y + 40), &bar, Color::Yellow);
    }
    if let Some(pointer) = game.pointer {
        canvas.put(pointer, '+', Color::LightRed);
    }
}

fn draw_connect(canvas: &mut FieldCanvas, game: &ConnectGame) {
    for part in &game.parts {
        let color = if part.connected { Color::LightGreen } else { Color::White };
        canvas.put(part.position, char::from(b'0' + part.id), color);
    }
    let order: Vec<String> = game
        .order
        .iter()
        .enumerate()
        .map(|(i, id)| if i < game.next { format!("[{id}]") } else { id.to_string() })
        .collect();
    canvas.label(
        Position::new(ARENA.x + ARENA.width / 2, ARENA.y + 20),
        &format!("Order: {}", order.join(" > ")),
        Color::Yellow,
    );
}

fn draw_repair(canvas: &mut FieldCanvas, game: &RepairGame) {
    for part in &game.parts {
        let (text, color) = if part.fixed {
            (format!("{} \u{2713}", part.name), Color::LightGreen)
        } else {
            (format!("{} ({})", part.name, part.required.name()), Color::White)
        };
        canvas.label(part.position, &text, color);
    }
    for slot in &game.tools {
        let color = if game.selected == Some(slot.tool) {
            Color::Yellow
        } else {
            Color::Gray
        };
        canvas.label(slot.position, slot.tool.name(), color);
    }
}

fn render_text(frame: &mut Frame, area: Rect, lines: Vec<Line<'static>>) {
    let top = area.height.saturating_sub(lines.len() as u16) / 2;
    let body = Rect::new(area.x, area.y + top, area.width, area.height - top);
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), body);
}

fn big(text: String, color: Color) -> Line<'static> {
    Line::from(Span::styled(
        text,
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    ))
}

fn pattern_lines(game: &PatternGame) -> Vec<Line<'static>> {
    let target: Vec<String> = game.sequence.iter().map(u8::to_string).collect();
    let typed: Vec<String> = (0..game.sequence.len())
        .map(|i| game.input.get(i).map_or("_".to_string(), u8::to_string))
        .collect();
    vec![
        Line::from("Sequence"),
        big(target.join("  "), Color::Cyan),
        Line::from(""),
        Line::from("Typed"),
        big(typed.join("  "), Color::White),
    ]
}

fn word_lines(game: &WordGame) -> Vec<Line<'static>> {
    let phrase = game.current_phrase();
    let mut lines = vec![
        Line::from(phrase.prompt),
        Line::from(""),
        big(format!("> {}_", game.buffer), Color::White),
    ];
    if game.last_attempt_wrong {
        lines.push(Line::from(Span::styled(
            "Not quite, try again!",
            Style::default().fg(Color::Red),
        )));
    }
    lines
}

fn sequence_lines(game: &SequenceGame) -> Vec<Line<'static>> {
    match game.phase {
        SequencePhase::Display { remaining_ms } => {
            let arrows: Vec<String> = game.sequence.iter().map(|d| d.arrow().to_string()).collect();
            vec![
                Line::from(format!("Memorize! ({:.1}s)", remaining_ms as f64 / 1000.0)),
                big(arrows.join(" "), Color::Cyan),
            ]
        }
        SequencePhase::Input => {
            let typed: Vec<String> = (0..game.sequence.len())
                .map(|i| game.input.get(i).map_or("_".to_string(), |d| d.arrow().to_string()))
                .collect();
            vec![Line::from("Your turn!"), big(typed.join(" "), Color::White)]
        }
    }
}

fn mash_lines(session: &MinigameSession) -> Vec<Line<'static>> {
    vec![
        big("Mash SPACE!".to_string(), Color::Yellow),
        Line::from(""),
        Line::from(meter(session.progress.into(), session.target.into(), 30)),
    ]
}
