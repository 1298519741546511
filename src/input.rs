//! Input adapter: turns raw terminal events into abstract intents.
//!
//! The game core never looks at key codes or mouse buttons. Everything it
//! consumes is an [`Intent`], produced here from crossterm events with the
//! help of an [`InputContext`] describing what the current phase listens for.

use crate::challenges::MinigameKind;
use crate::core::constants::{FIELD_HEIGHT, FIELD_WIDTH};
use crate::core::game_state::{GamePhase, GameState};
use crate::utils::geometry::Position;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect as TermRect;
use serde::Serialize;

/// Four-way direction used for movement and directional sequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Returns the (dx, dy) unit delta for this direction.
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }

    pub fn arrow(&self) -> char {
        match self {
            Self::Up => '\u{2191}',
            Self::Down => '\u{2193}',
            Self::Left => '\u{2190}',
            Self::Right => '\u{2192}',
        }
    }
}

/// Abstract player intent consumed by the session controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Intent {
    Quit,
    Confirm,
    Decline,
    Restart,
    Move(Direction),
    PrimaryAction,
    /// Pattern digit, 1 through 4.
    Digit(u8),
    /// Lower-case ASCII letter.
    Letter(char),
    Backspace,
    Directional(Direction),
    PointerMove(Position),
    PointerClick(Position),
}

/// What the active phase listens for. Decides how ambiguous keys map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputContext {
    Menu,
    Roaming,
    Dialog,
    MiniGame(MinigameKind),
    EndScreen,
}

impl InputContext {
    pub fn for_state(state: &GameState) -> Self {
        match state.phase {
            GamePhase::MainMenu => Self::Menu,
            GamePhase::Roaming => Self::Roaming,
            GamePhase::QuestDialog => Self::Dialog,
            GamePhase::MiniGame => match state.minigame.as_ref() {
                Some(session) => Self::MiniGame(session.kind()),
                None => Self::Roaming,
            },
            GamePhase::GameOver | GamePhase::Victory => Self::EndScreen,
        }
    }
}

fn direction_for(code: KeyCode) -> Option<Direction> {
    match code {
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Some(Direction::Up),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Some(Direction::Down),
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(Direction::Left),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(Direction::Right),
        _ => None,
    }
}

/// Map a key event to an intent for the given context.
pub fn map_key(key: KeyEvent, context: InputContext) -> Option<Intent> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    if key.code == KeyCode::Esc
        || (key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c'))
    {
        return Some(Intent::Quit);
    }

    match context {
        InputContext::Menu => match key.code {
            KeyCode::Char(' ') | KeyCode::Enter => Some(Intent::Confirm),
            KeyCode::Char('q') | KeyCode::Char('Q') => Some(Intent::Quit),
            _ => None,
        },
        InputContext::Roaming => direction_for(key.code).map(Intent::Move),
        InputContext::Dialog => match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => Some(Intent::Confirm),
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Backspace => Some(Intent::Decline),
            _ => None,
        },
        InputContext::EndScreen => match key.code {
            KeyCode::Char('r') | KeyCode::Char('R') => Some(Intent::Restart),
            KeyCode::Char('q') | KeyCode::Char('Q') => Some(Intent::Quit),
            _ => None,
        },
        InputContext::MiniGame(kind) => map_minigame_key(key.code, kind),
    }
}

fn map_minigame_key(code: KeyCode, kind: MinigameKind) -> Option<Intent> {
    match (kind, code) {
        (_, KeyCode::Enter) => Some(Intent::Confirm),
        (MinigameKind::WordCompletion, KeyCode::Backspace) => Some(Intent::Backspace),
        (MinigameKind::WordCompletion, KeyCode::Char(c)) if c.is_ascii_alphabetic() => {
            Some(Intent::Letter(c.to_ascii_lowercase()))
        }
        (MinigameKind::PatternMatch, KeyCode::Char(c @ '1'..='4')) => {
            Some(Intent::Digit(c as u8 - b'0'))
        }
        (MinigameKind::DirectionalSequence, code) => direction_for(code).map(Intent::Directional),
        (_, KeyCode::Char(' ')) => Some(Intent::PrimaryAction),
        _ => None,
    }
}

/// Map a mouse event over the field viewport to a pointer intent.
///
/// Events outside `viewport` are dropped.
pub fn map_mouse(event: MouseEvent, viewport: TermRect) -> Option<Intent> {
    let pos = cell_to_field(event.column, event.row, viewport)?;
    match event.kind {
        MouseEventKind::Down(MouseButton::Left) => Some(Intent::PointerClick(pos)),
        MouseEventKind::Moved | MouseEventKind::Drag(MouseButton::Left) => {
            Some(Intent::PointerMove(pos))
        }
        _ => None,
    }
}

/// Convert a terminal cell inside `viewport` to the playfield point at its centre.
pub fn cell_to_field(column: u16, row: u16, viewport: TermRect) -> Option<Position> {
    if viewport.width == 0
        || viewport.height == 0
        || column < viewport.x
        || row < viewport.y
        || column >= viewport.x + viewport.width
        || row >= viewport.y + viewport.height
    {
        return None;
    }
    let col = i64::from(column - viewport.x);
    let line = i64::from(row - viewport.y);
    let x = (col * 2 + 1) * i64::from(FIELD_WIDTH) / (2 * i64::from(viewport.width));
    let y = (line * 2 + 1) * i64::from(FIELD_HEIGHT) / (2 * i64::from(viewport.height));
    Some(Position::new(x as i32, y as i32))
}

/// Convert a playfield point to the terminal cell that displays it.
pub fn field_to_cell(pos: Position, viewport: TermRect) -> Option<(u16, u16)> {
    if viewport.width == 0 || viewport.height == 0 {
        return None;
    }
    if pos.x < 0 || pos.y < 0 || pos.x >= FIELD_WIDTH || pos.y >= FIELD_HEIGHT {
        return None;
    }
    let col = i64::from(pos.x) * i64::from(viewport.width) / i64::from(FIELD_WIDTH);
    let row = i64::from(pos.y) * i64::from(viewport.height) / i64::from(FIELD_HEIGHT);
    Some((viewport.x + col as u16, viewport.y + row as u16))
}
