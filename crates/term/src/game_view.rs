//! GameView: paints a [`GameSnapshot`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::layout::{Layout, Viewport, BUTTONS, HELP_LABEL};
use crate::types::{Cell, BACKGROUND, BOARD_HEIGHT, BOARD_WIDTH, PALETTE};

const BG: Rgb = Rgb::from_array(BACKGROUND);
const ACCENT: Rgb = Rgb::from_array(PALETTE[1]);
const TEXT: Rgb = Rgb::new(255, 255, 255);
const SCREEN_BG: Rgb = Rgb::new(0, 0, 0);
const DEBUG_BG: Rgb = Rgb::new(200, 40, 40);

/// Overlays keep this much of the underlying color (out of 256).
const SHADE_KEEP: u8 = 64;

const BLOCK: char = '█';

const INSTRUCTIONS: [&str; 6] = [
    "← →   move",
    "↑ ␣   rotate",
    "↓     soft drop",
    "? F1  help",
    "Esc   close",
    "q     quit",
];

/// A lightweight terminal renderer for the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameView {
    /// Largest cell scale the layout may pick.
    max_scale: u16,
    /// Highlight pointer hit regions.
    debug: bool,
}

impl Default for GameView {
    fn default() -> Self {
        Self {
            max_scale: 1,
            debug: false,
        }
    }
}

impl GameView {
    pub fn new(max_scale: u16) -> Self {
        Self {
            max_scale: max_scale.max(1),
            debug: false,
        }
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Layout for a terminal of the given size.
    pub fn layout(&self, viewport: Viewport) -> Layout {
        Layout::compute(viewport, self.max_scale)
    }

    /// Render the snapshot into an existing framebuffer.
    ///
    /// This is the allocation-free hot path. Callers keep one framebuffer and
    /// one layout across frames and recompute the layout only on resize.
    pub fn render_into(&self, snap: &GameSnapshot, layout: &Layout, fb: &mut FrameBuffer) {
        fb.resize(layout.viewport.width, layout.viewport.height);
        fb.clear(crate::fb::Cell::default());

        let border = CellStyle::new(Rgb::new(200, 200, 200), SCREEN_BG);

        fb.fill_rect(layout.board, ' ', CellStyle::new(BG, BG));
        fb.stroke_rect(layout.frame, border);

        // Settled cells.
        for (y, row) in snap.board.iter().enumerate() {
            for (x, &cell) in row.iter().enumerate() {
                if let Some(color) = cell_color(cell) {
                    self.draw_block(fb, layout, x as u16, y as u16, color);
                }
            }
        }

        // Active piece.
        if let Some(active) = snap.active {
            if let Some(&rgb) = PALETTE.get(active.color as usize) {
                for (x, y) in active.visible_cells() {
                    self.draw_block(fb, layout, x, y, Rgb::from_array(rgb));
                }
            }
        }

        self.draw_status(fb, layout, snap.score);
        self.draw_buttons(fb, layout);

        if self.debug {
            self.draw_hit_regions(fb, layout);
        }

        if snap.overlay_visible {
            self.draw_instructions(fb, layout);
        }
        if snap.game_over {
            self.draw_game_over(fb, layout, snap.score);
        }
    }

    /// Convenience helper that computes a layout and allocates a framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let layout = self.layout(viewport);
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, &layout, &mut fb);
        fb
    }

    fn draw_block(&self, fb: &mut FrameBuffer, layout: &Layout, x: u16, y: u16, color: Rgb) {
        if x >= BOARD_WIDTH as u16 || y >= BOARD_HEIGHT as u16 {
            return;
        }
        let rect = layout.cell_rect(x, y);
        fb.fill_rect(rect, BLOCK, CellStyle::new(color, BG));
    }

    fn draw_status(&self, fb: &mut FrameBuffer, layout: &Layout, score: u32) {
        let label = CellStyle::new(TEXT, SCREEN_BG).bold();
        let x = layout.status.x + 1;
        fb.put_str(x, layout.status.y, "SCORE ", label);
        fb.put_u32(x + 6, layout.status.y, score, CellStyle::new(TEXT, SCREEN_BG));

        let icon = CellStyle::new(BG, ACCENT).bold();
        fb.put_str(layout.help_icon.x, layout.help_icon.y, HELP_LABEL, icon);
    }

    fn draw_buttons(&self, fb: &mut FrameBuffer, layout: &Layout) {
        let style = CellStyle::new(BG, ACCENT).bold();
        for ((_, rect), (_, label)) in layout.buttons.iter().zip(BUTTONS.iter()) {
            fb.fill_rect(*rect, ' ', style);
            fb.put_str_centered(*rect, rect.y, label, style);
        }
    }

    fn draw_hit_regions(&self, fb: &mut FrameBuffer, layout: &Layout) {
        fb.tint_rect(layout.help_icon, DEBUG_BG);
        for (_, rect) in layout.buttons.iter() {
            fb.tint_rect(*rect, DEBUG_BG);
        }
    }

    fn draw_instructions(&self, fb: &mut FrameBuffer, layout: &Layout) {
        fb.shade_rect(layout.board, SHADE_KEEP);

        let style = CellStyle::new(TEXT, BG.darken(SHADE_KEEP));
        let longest = INSTRUCTIONS
            .iter()
            .map(|line| line.chars().count() as u16)
            .max()
            .unwrap_or(0);
        let x = layout.board.x + layout.board.w.saturating_sub(longest) / 2;
        let top = layout.board.y + layout.board.h.saturating_sub(INSTRUCTIONS.len() as u16 * 2) / 2;
        for (i, line) in INSTRUCTIONS.iter().enumerate() {
            fb.put_str(x, top + i as u16 * 2, line, style);
        }
    }

    fn draw_game_over(&self, fb: &mut FrameBuffer, layout: &Layout, score: u32) {
        fb.shade_rect(layout.board, SHADE_KEEP);

        let bg = BG.darken(SHADE_KEEP);
        let title = CellStyle::new(TEXT, bg).bold();
        let mid = layout.board.y + layout.board.h / 2;

        fb.put_str_centered(layout.board, mid.saturating_sub(3), "GAME OVER", title);

        let score_line = "Score: ";
        let digits = digit_count(score);
        let width = score_line.len() as u16 + digits;
        let x = layout.board.x + layout.board.w.saturating_sub(width) / 2;
        fb.put_str(x, mid.saturating_sub(1), score_line, CellStyle::new(TEXT, bg));
        fb.put_u32(x + score_line.len() as u16, mid.saturating_sub(1), score, CellStyle::new(TEXT, bg));

        let hint = CellStyle::new(ACCENT, bg);
        fb.put_str_centered(layout.board, mid + 1, "Tap or Space", hint);
        fb.put_str_centered(layout.board, mid + 2, "to restart", hint);
    }
}

/// Palette color of a settled cell, or None for empty.
fn cell_color(cell: Cell) -> Option<Rgb> {
    let index = (cell as usize).checked_sub(1)?;
    PALETTE.get(index).copied().map(Rgb::from_array)
}

fn digit_count(mut n: u32) -> u16 {
    let mut count = 1;
    while n >= 10 {
        n /= 10;
        count += 1;
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_cells_have_no_color() {
        assert_eq!(cell_color(0), None);
        assert_eq!(cell_color(1), Some(Rgb::from_array(PALETTE[0])));
        assert_eq!(cell_color(7), Some(Rgb::from_array(PALETTE[6])));
        assert_eq!(cell_color(8), None);
    }

    #[test]
    fn digit_count_matches() {
        assert_eq!(digit_count(0), 1);
        assert_eq!(digit_count(9), 1);
        assert_eq!(digit_count(100), 3);
        assert_eq!(digit_count(u32::MAX), 10);
    }
}
