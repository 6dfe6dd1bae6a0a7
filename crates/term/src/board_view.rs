//! BoardView: maps a `GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested, and the same
//! coordinate mapping drives both drawing and mouse hit-testing, so a click
//! always resolves to the block it visually landed on.

use corsi_core::snapshot::GameSnapshot;
use corsi_types::{BlockId, GameStatus, BLOCK_SIZE, BOARD_SIZE};
use crossterm::style::Color;

use crate::fb::{FrameBuffer, Style};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Rows reserved above the board frame for the header.
const HEADER_ROWS: u16 = 3;

const BOARD_BG: Style = Style::new(
    Color::Rgb {
        r: 90,
        g: 90,
        b: 100,
    },
    Color::Rgb {
        r: 38,
        g: 40,
        b: 48,
    },
);

const BORDER: Style = Style::new(
    Color::Rgb {
        r: 200,
        g: 200,
        b: 200,
    },
    Color::Rgb { r: 0, g: 0, b: 0 },
);

// Block palette mirrors the original surface: pale blue idle blocks, a
// saturated blue flash during presentation, pale green once tapped.
const BLOCK_IDLE: Style = Style::new(
    Color::Rgb {
        r: 30,
        g: 58,
        b: 138,
    },
    Color::Rgb {
        r: 191,
        g: 219,
        b: 254,
    },
);

const BLOCK_LIT: Style = Style::new(
    Color::Rgb {
        r: 255,
        g: 255,
        b: 255,
    },
    Color::Rgb {
        r: 59,
        g: 130,
        b: 246,
    },
);

const BLOCK_TAPPED: Style = Style::new(
    Color::Rgb {
        r: 22,
        g: 101,
        b: 52,
    },
    Color::Rgb {
        r: 187,
        g: 247,
        b: 208,
    },
);

/// A lightweight terminal view of the test board.
///
/// Board units map to terminal cells through a fixed scale; the default
/// (4 units per column, 8 per row) compensates for the usual 1:2 glyph
/// aspect ratio, giving a 60x30 cell board with 8x4 cell blocks.
pub struct BoardView {
    units_per_col: f32,
    units_per_row: f32,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            units_per_col: 4.0,
            units_per_row: 8.0,
        }
    }
}

impl BoardView {
    pub fn new(units_per_col: f32, units_per_row: f32) -> Self {
        Self {
            units_per_col,
            units_per_row,
        }
    }

    /// Board interior size in terminal cells.
    pub fn board_cells(&self) -> (u16, u16) {
        (
            (BOARD_SIZE / self.units_per_col).round() as u16,
            (BOARD_SIZE / self.units_per_row).round() as u16,
        )
    }

    /// Top-left corner of the board frame (border included).
    fn frame_origin(&self, viewport: Viewport) -> (u16, u16) {
        let (cols, _) = self.board_cells();
        let x = viewport.width.saturating_sub(cols + 2) / 2;
        (x, HEADER_ROWS)
    }

    /// Render the snapshot into an existing framebuffer.
    ///
    /// `highlight` is the block currently lit by the presentation driver;
    /// the engine itself never tracks it.
    pub fn render_into(
        &self,
        snap: &GameSnapshot,
        highlight: Option<BlockId>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Style::default().into_cell(' '));

        let (cols, rows) = self.board_cells();
        let (ox, oy) = self.frame_origin(viewport);

        self.draw_header(snap, viewport, fb);

        // Board backdrop and frame.
        fb.fill_rect(ox + 1, oy + 1, cols, rows, ' ', BOARD_BG);
        draw_border(fb, ox, oy, cols + 2, rows + 2);

        // Blocks, labeled 1..=9 to match the digit keys.
        for p in &snap.layout {
            let style = if highlight == Some(p.id) {
                BLOCK_LIT.bold()
            } else if snap.accepting_input() && snap.tapped[p.id as usize] {
                BLOCK_TAPPED
            } else {
                BLOCK_IDLE
            };

            let (bx, by) = self.block_cell(ox, oy, p.x, p.y);
            let (bw, bh) = self.block_size_cells();
            fb.fill_rect(bx, by, bw, bh, ' ', style);

            let label = (b'1' + p.id) as char;
            fb.put_char(bx + bw / 2, by + bh / 2, label, style);
        }

        self.draw_prompt(snap, ox, oy + rows + 2, fb);
        self.draw_error_panel(snap, ox, oy + rows + 4, fb);
    }

    /// Resolve a screen cell to the block drawn there, if any.
    ///
    /// Inverse of the mapping used by `render_into`, evaluated at the cell
    /// center so edge cells stay inside their block.
    pub fn hit_test(
        &self,
        snap: &GameSnapshot,
        viewport: Viewport,
        col: u16,
        row: u16,
    ) -> Option<BlockId> {
        let (cols, rows) = self.board_cells();
        let (ox, oy) = self.frame_origin(viewport);

        let inner_x = col.checked_sub(ox + 1)?;
        let inner_y = row.checked_sub(oy + 1)?;
        if inner_x >= cols || inner_y >= rows {
            return None;
        }

        let ux = (inner_x as f32 + 0.5) * self.units_per_col;
        let uy = (inner_y as f32 + 0.5) * self.units_per_row;

        snap.layout
            .iter()
            .find(|p| {
                ux >= p.x && ux < p.x + BLOCK_SIZE && uy >= p.y && uy < p.y + BLOCK_SIZE
            })
            .map(|p| p.id)
    }

    fn block_size_cells(&self) -> (u16, u16) {
        (
            (BLOCK_SIZE / self.units_per_col).round() as u16,
            (BLOCK_SIZE / self.units_per_row).round() as u16,
        )
    }

    fn block_cell(&self, ox: u16, oy: u16, x: f32, y: f32) -> (u16, u16) {
        (
            ox + 1 + (x / self.units_per_col).round() as u16,
            oy + 1 + (y / self.units_per_row).round() as u16,
        )
    }

    fn draw_header(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        let title = Style::default().bold();
        let dim = Style::default();

        let status_line = format!(
            "CORSI BLOCK TEST   level {}   attempt {}/{}   mode {}",
            snap.level,
            snap.attempt,
            snap.attempts_per_level,
            snap.mode.as_str()
        );
        fb.put_str(1, 0, &status_line, title);

        let help = "[enter] start   [1-9 / click] tap   [m] mode   [r] reset   [q] quit";
        if viewport.width > help.len() as u16 {
            fb.put_str(1, 1, help, dim);
        }
    }

    fn draw_prompt(&self, snap: &GameSnapshot, x: u16, y: u16, fb: &mut FrameBuffer) {
        let prompt = match snap.status {
            GameStatus::Ready => "press enter to start the trial".to_string(),
            GameStatus::Playing => {
                format!("watch the sequence ({} order)", snap.mode.as_str())
            }
            GameStatus::Input => format!(
                "repeat the sequence in {} order ({}/{})",
                snap.mode.as_str(),
                snap.response_len,
                snap.sequence_len
            ),
            GameStatus::Finished => "test complete - press r to restart".to_string(),
        };
        fb.put_str(x, y, &prompt, Style::default());
    }

    /// Error record below the board, one line per failed level.
    ///
    /// Lines that do not fit the viewport are clipped by the framebuffer.
    fn draw_error_panel(&self, snap: &GameSnapshot, x: u16, y: u16, fb: &mut FrameBuffer) {
        if !snap.has_errors() {
            return;
        }

        fb.put_str(x, y, "ERRORS", Style::default().bold());
        for (i, (level, count)) in snap.error_entries().enumerate() {
            let line = format!("level {}: {}", level, count);
            fb.put_str(x, y + 1 + i as u16, &line, Style::default());
        }
    }
}

fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
    if w < 2 || h < 2 {
        return;
    }

    fb.put_char(x, y, '┌', BORDER);
    fb.put_char(x + w - 1, y, '┐', BORDER);
    fb.put_char(x, y + h - 1, '└', BORDER);
    fb.put_char(x + w - 1, y + h - 1, '┘', BORDER);

    for dx in 1..w - 1 {
        fb.put_char(x + dx, y, '─', BORDER);
        fb.put_char(x + dx, y + h - 1, '─', BORDER);
    }
    for dy in 1..h - 1 {
        fb.put_char(x, y + dy, '│', BORDER);
        fb.put_char(x + w - 1, y + dy, '│', BORDER);
    }
}
