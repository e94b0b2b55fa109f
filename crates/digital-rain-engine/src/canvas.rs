//! In-memory glyph canvas with alpha compositing.

use digital_rain_core::{Rgb, blend};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::Widget,
};

use crate::surface::{GlyphDraw, Surface};

/// Cells dimmer than this on every channel lose their glyph.
const VISIBLE_THRESHOLD: u8 = 8;

/// Glow strength from which a glyph is drawn bold.
const BOLD_GLOW: f32 = 10.0;

/// Terminal cells per grid column; katakana are full-width.
const CELL_WIDTH: u16 = 2;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
struct CanvasCell {
    glyph: Option<char>,
    color: Rgb,
    glow: f32,
}

/// A fixed grid of glyph cells that keeps what was drawn until it fades.
#[derive(Debug, Clone)]
pub struct CellCanvas {
    columns: u16,
    rows: u16,
    cells: Vec<CanvasCell>,
}

impl CellCanvas {
    pub fn new(columns: u16, rows: u16) -> Self {
        Self {
            columns,
            rows,
            cells: vec![CanvasCell::default(); columns as usize * rows as usize],
        }
    }

    pub fn columns(&self) -> u16 {
        self.columns
    }

    pub fn rows(&self) -> u16 {
        self.rows
    }

    /// Size of the canvas in terminal cells.
    pub fn terminal_size(&self) -> (u16, u16) {
        (self.columns * CELL_WIDTH, self.rows)
    }

    /// Glyph and colour at a grid position, if anything is visible there.
    pub fn cell(&self, column: u16, row: u16) -> Option<(char, Rgb)> {
        let cell = self.cells.get(self.index(column, row)?)?;
        cell.glyph.map(|glyph| (glyph, cell.color))
    }

    fn index(&self, column: u16, row: u16) -> Option<usize> {
        (column < self.columns && row < self.rows)
            .then(|| row as usize * self.columns as usize + column as usize)
    }
}

impl Surface for CellCanvas {
    fn fade(&mut self, color: Rgb, alpha: u8) {
        for cell in &mut self.cells {
            cell.color = blend(color, f32::from(alpha), cell.color);
            let Rgb { r, g, b } = cell.color;
            if r.max(g).max(b) < VISIBLE_THRESHOLD {
                cell.glyph = None;
            }
        }
    }

    fn draw_glyph(&mut self, draw: &GlyphDraw) {
        if draw.opacity <= 0.0 {
            return;
        }
        let Some(index) = self.index(draw.column, draw.row) else {
            return;
        };
        let cell = &mut self.cells[index];
        cell.color = blend(draw.color, draw.opacity, cell.color);
        cell.glyph = Some(draw.glyph);
        cell.glow = draw.glow;
    }
}

impl Widget for &CellCanvas {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for row in 0..self.rows {
            let y = area.y + row;
            if row >= area.height {
                break;
            }
            for column in 0..self.columns {
                let offset = column * CELL_WIDTH;
                if offset + CELL_WIDTH > area.width {
                    break;
                }
                let Some(index) = self.index(column, row) else {
                    continue;
                };
                let cell = self.cells[index];
                let Some(glyph) = cell.glyph else {
                    continue;
                };

                let mut style = Style::new().fg(Color::from(cell.color));
                if cell.glow >= BOLD_GLOW {
                    style = style.add_modifier(Modifier::BOLD);
                }
                buf.set_string(area.x + offset, y, glyph.to_string(), style);
            }
        }
    }
}
