//! Terminal renderer
//!
//! Rasterizes entity rectangles into a cell grid at double vertical
//! resolution (each text row carries two surface rows via half-block
//! glyphs), then writes the grid with cursor addressing. Raw mode, hidden
//! cursor and mouse reporting are enabled for the renderer's lifetime and
//! restored on drop.

use std::io::{self, Stdout, Write};

use termion::cursor::{Goto, HideCursor};
use termion::input::MouseTerminal;
use termion::raw::{IntoRawMode, RawTerminal};

use super::{DrawCommand, Renderer};
use crate::settings::Settings;
use crate::sim::Rect;

/// Text row for the score readout
const SCORE_ROW: u16 = 1;
/// Horizontal inset of the score readout, in columns from either wall
const SCORE_INSET: u16 = 6;

/// Boolean pixel grid in surface coordinates
///
/// Pure rasterization target, kept separate from the terminal handle so
/// stamping and glyph selection stay testable.
#[derive(Debug, Clone)]
pub struct FrameBuffer {
    width: usize,
    height: usize,
    cells: Vec<bool>,
}

impl FrameBuffer {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![false; width * height],
        }
    }

    pub fn clear(&mut self) {
        self.cells.fill(false);
    }

    /// Stamp a rectangle; parts outside the surface are dropped
    pub fn fill_rect(&mut self, rect: &Rect) {
        let b = rect.bounding_box();
        if b.right <= 0.0 || b.bottom <= 0.0 {
            return;
        }
        let x0 = b.left.max(0.0).round() as usize;
        let y0 = b.top.max(0.0).round() as usize;
        let x1 = b.right.min(self.width as f32).round() as usize;
        let y1 = b.bottom.min(self.height as f32).round() as usize;

        for y in y0..y1 {
            for x in x0..x1 {
                self.cells[y * self.width + x] = true;
            }
        }
    }

    /// Render the grid as text rows, two surface rows per text row
    ///
    /// High contrast promotes half-covered cells to full blocks for fonts
    /// that render half blocks poorly.
    pub fn to_rows(&self, high_contrast: bool) -> Vec<String> {
        let mut rows = Vec::with_capacity(self.height / 2);
        for text_row in 0..self.height / 2 {
            let mut row = String::with_capacity(self.width);
            for x in 0..self.width {
                let upper = self.cells[(text_row * 2) * self.width + x];
                let lower = self.cells[(text_row * 2 + 1) * self.width + x];
                row.push(glyph(upper, lower, high_contrast));
            }
            rows.push(row);
        }
        rows
    }
}

fn glyph(upper: bool, lower: bool, high_contrast: bool) -> char {
    if high_contrast {
        return if upper || lower { '█' } else { ' ' };
    }
    match (upper, lower) {
        (true, true) => '█',
        (true, false) => '▀',
        (false, true) => '▄',
        (false, false) => ' ',
    }
}

/// Renderer over a raw-mode terminal with mouse reporting
pub struct TermRenderer {
    out: MouseTerminal<RawTerminal<HideCursor<Stdout>>>,
    buffer: FrameBuffer,
    cols: u16,
    rows: u16,
    settings: Settings,
}

impl TermRenderer {
    /// Enter raw mode, hide the cursor, enable mouse reporting
    pub fn new(settings: Settings) -> io::Result<Self> {
        let (cols, rows) = termion::terminal_size()?;
        let out = MouseTerminal::from(HideCursor::from(io::stdout()).into_raw_mode()?);
        log::debug!("terminal {cols}x{rows} cells, surface {cols}x{}", rows * 2);

        Ok(Self {
            out,
            buffer: FrameBuffer::new(usize::from(cols), usize::from(rows) * 2),
            cols,
            rows,
            settings,
        })
    }

    /// Declared drawing surface dimensions, in surface units
    pub fn surface_size(&self) -> (f32, f32) {
        (self.buffer.width as f32, self.buffer.height as f32)
    }
}

impl Renderer for TermRenderer {
    fn submit(&mut self, frame: &[DrawCommand]) -> io::Result<()> {
        // Text overlays print after the grid so they sit on top of it
        let mut texts: Vec<(u16, u16, String)> = Vec::new();

        for command in frame {
            match command {
                DrawCommand::Clear => self.buffer.clear(),
                DrawCommand::FillRect(rect) => self.buffer.fill_rect(rect),
                DrawCommand::Scores { left, right } => {
                    if self.settings.show_scores {
                        texts.push((SCORE_INSET, SCORE_ROW, left.to_string()));

                        let right_text = right.to_string();
                        let len = right_text.len() as u16;
                        let col = (self.cols + 2).saturating_sub(SCORE_INSET + len).max(1);
                        texts.push((col, SCORE_ROW, right_text));
                    }
                }
                DrawCommand::GameOver => {
                    let text = "GAME OVER";
                    let col = (self.cols / 2)
                        .saturating_sub(text.len() as u16 / 2)
                        .max(1);
                    texts.push((col, (self.rows / 2).max(1), text.to_string()));
                }
            }
        }

        for (text_row, row) in self
            .buffer
            .to_rows(self.settings.high_contrast)
            .iter()
            .enumerate()
        {
            write!(self.out, "{}{row}", Goto(1, text_row as u16 + 1))?;
        }
        for (col, row, text) in texts {
            write!(self.out, "{}{text}", Goto(col, row))?;
        }
        self.out.flush()
    }
}

impl Drop for TermRenderer {
    fn drop(&mut self) {
        // Park the cursor on the last row so the shell prompt lands cleanly
        let _ = write!(self.out, "{}", Goto(1, self.rows));
        let _ = self.out.flush();
    }
}
