//! Character-cell canvas over the playfield. Callers draw in field
//! coordinates; the canvas maps them onto the terminal viewport the same way
//! pointer input is mapped back.

use crate::input::field_to_cell;
use crate::utils::geometry::{Position, Rect as FieldRect};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub const BACKGROUND: Color = Color::Rgb(20, 40, 20);

#[derive(Clone, Copy, PartialEq)]
struct Cell {
    ch: char,
    fg: Color,
    bg: Color,
    bold: bool,
}

const EMPTY: Cell = Cell {
    ch: ' ',
    fg: Color::Reset,
    bg: BACKGROUND,
    bold: false,
};

pub struct FieldCanvas {
    viewport: Rect,
    cells: Vec<Cell>,
}

impl FieldCanvas {
    pub fn new(viewport: Rect) -> Self {
        Self {
            viewport,
            cells: vec![EMPTY; viewport.width as usize * viewport.height as usize],
        }
    }

    fn cell_mut(&mut self, pos: Position) -> Option<&mut Cell> {
        let (col, row) = field_to_cell(pos, self.viewport)?;
        let index = (row - self.viewport.y) as usize * self.viewport.width as usize
            + (col - self.viewport.x) as usize;
        self.cells.get_mut(index)
    }

    pub fn put(&mut self, pos: Position, ch: char, color: Color) {
        if let Some(cell) = self.cell_mut(pos) {
            cell.ch = ch;
            cell.fg = color;
            cell.bold = true;
        }
    }

    /// Write `text` starting at `pos`, one character per cell to the right.
    pub fn text(&mut self, pos: Position, text: &str, color: Color) {
        let Some((col, row)) = field_to_cell(pos, self.viewport) else {
            return;
        };
        let right = self.viewport.x + self.viewport.width;
        for (i, ch) in text.chars().enumerate() {
            let c = col + i as u16;
            if c >= right {
                break;
            }
            let index = (row - self.viewport.y) as usize * self.viewport.width as usize
                + (c - self.viewport.x) as usize;
            if let Some(cell) = self.cells.get_mut(index) {
                cell.ch = ch;
                cell.fg = color;
            }
        }
    }

    /// Write `text` centred horizontally on `pos`.
    pub fn label(&mut self, pos: Position, text: &str, color: Color) {
        let cell_width = crate::core::constants::FIELD_WIDTH / i32::from(self.viewport.width.max(1));
        let half = text.chars().count() as i32 / 2 * cell_width.max(1);
        self.text(Position::new(pos.x - half, pos.y), text, color);
    }

    /// Paint the background of every cell covered by `rect`.
    pub fn fill(&mut self, rect: FieldRect, bg: Color) {
        let (Some((c0, r0)), Some((c1, r1))) = (
            field_to_cell(Position::new(rect.x, rect.y), self.viewport),
            field_to_cell(Position::new(rect.right() - 1, rect.bottom() - 1), self.viewport),
        ) else {
            return;
        };
        for row in r0..=r1 {
            for col in c0..=c1 {
                let index = (row - self.viewport.y) as usize * self.viewport.width as usize
                    + (col - self.viewport.x) as usize;
                if let Some(cell) = self.cells.get_mut(index) {
                    cell.bg = bg;
                }
            }
        }
    }

    pub fn render(self, frame: &mut Frame) {
        let width = self.viewport.width as usize;
        if width == 0 {
            return;
        }
        let lines: Vec<Line> = self
            .cells
            .chunks(width)
            .map(|row| {
                let mut spans = Vec::new();
                let mut run = String::new();
                let mut style = Style::default();
                for cell in row {
                    let mut cell_style = Style::default().fg(cell.fg).bg(cell.bg);
                    if cell.bold {
                        cell_style = cell_style.add_modifier(Modifier::BOLD);
                    }
                    if cell_style != style && !run.is_empty() {
                        spans.push(Span::styled(std::mem::take(&mut run), style));
                    }
                    style = cell_style;
                    run.push(cell.ch);
                }
                if !run.is_empty() {
                    spans.push(Span::styled(run, style));
                }
                Line::from(spans)
            })
            .collect();
        frame.render_widget(Paragraph::new(lines), self.viewport);
    }
}
