//! Screen layout and hit testing.
//!
//! The layout is derived from the terminal size alone and only needs
//! recomputing when the terminal is resized. It places, top to bottom:
//!
//! ```text
//!  SCORE 300          (?)     <- status row, help icon on the right
//! ┌────────────────────┐
//! │ board (10 x 20)    │      <- each board cell is cell_w x cell_h chars
//! └────────────────────┘
//!  [ ◀ ][ ⟳ ][ ▼ ][ ▶ ]       <- on-screen buttons
//! ```

use crate::types::{Command, UiTarget, BOARD_HEIGHT, BOARD_WIDTH};

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

/// Axis-aligned rectangle in terminal cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub w: u16,
    pub h: u16,
}

impl Rect {
    pub const fn new(x: u16, y: u16, w: u16, h: u16) -> Self {
        Self { x, y, w, h }
    }

    pub fn right(&self) -> u16 {
        self.x.saturating_add(self.w)
    }

    pub fn bottom(&self) -> u16 {
        self.y.saturating_add(self.h)
    }

    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }
}

/// On-screen buttons, left to right.
pub const BUTTONS: [(Command, &str); 4] = [
    (Command::MoveLeft, "◀"),
    (Command::Rotate, "⟳"),
    (Command::SoftDrop, "▼"),
    (Command::MoveRight, "▶"),
];

/// Label of the help icon.
pub const HELP_LABEL: &str = "(?)";

/// Rows used besides the board frame: status row, gap, button row.
const CHROME_ROWS: u16 = 3;

/// Positions of every drawn element for one terminal size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub viewport: Viewport,
    /// Board cell width in terminal columns.
    pub cell_w: u16,
    /// Board cell height in terminal rows.
    pub cell_h: u16,
    /// Board including its border.
    pub frame: Rect,
    /// Inside of the border: the 10x20 play field.
    pub board: Rect,
    /// Row above the frame holding the score and the help icon.
    pub status: Rect,
    pub help_icon: Rect,
    pub buttons: [(Command, Rect); 4],
    /// False when even the smallest scale overflows the viewport.
    pub fits: bool,
}

impl Layout {
    /// Pick the largest scale up to `max_scale` whose board fits `viewport`.
    ///
    /// At scale `s` a board cell is `2s` columns by `s` rows, which keeps
    /// cells roughly square with typical terminal glyphs.
    pub fn compute(viewport: Viewport, max_scale: u16) -> Self {
        let max_scale = max_scale.min(Self::largest_fitting_scale(viewport)).max(1);
        let scale = (1..=max_scale)
            .rev()
            .find(|&s| {
                let (w, h) = Self::footprint(s);
                w <= viewport.width && h <= viewport.height
            });
        let fits = scale.is_some();
        Self::at_scale(viewport, scale.unwrap_or(1), fits)
    }

    /// Upper bound on the scale whose board could fit `viewport`.
    fn largest_fitting_scale(viewport: Viewport) -> u16 {
        let by_width = viewport.width.saturating_sub(2) / (BOARD_WIDTH as u16 * 2);
        let by_height = viewport.height.saturating_sub(2 + CHROME_ROWS) / BOARD_HEIGHT as u16;
        by_width.min(by_height)
    }

    /// Total columns and rows needed at scale `s`. Saturates at `u16::MAX`.
    fn footprint(s: u16) -> (u16, u16) {
        let frame_w = (BOARD_WIDTH as u16 * 2).saturating_mul(s).saturating_add(2);
        let frame_h = (BOARD_HEIGHT as u16).saturating_mul(s).saturating_add(2);
        (frame_w, frame_h.saturating_add(CHROME_ROWS))
    }

    fn at_scale(viewport: Viewport, s: u16, fits: bool) -> Self {
        let cell_w = 2 * s;
        let cell_h = s;
        let (total_w, total_h) = Self::footprint(s);
        let frame_w = total_w;
        let frame_h = total_h - CHROME_ROWS;

        let origin_x = viewport.width.saturating_sub(total_w) / 2;
        let origin_y = viewport.height.saturating_sub(total_h) / 2;

        let status = Rect::new(origin_x, origin_y, frame_w, 1);
        let frame = Rect::new(origin_x, origin_y + 1, frame_w, frame_h);
        let board = Rect::new(
            frame.x + 1,
            frame.y + 1,
            BOARD_WIDTH as u16 * cell_w,
            BOARD_HEIGHT as u16 * cell_h,
        );

        let help_w = HELP_LABEL.chars().count() as u16;
        let help_icon = Rect::new(frame.right().saturating_sub(help_w + 1), status.y, help_w, 1);

        let button_y = frame.bottom() + 1;
        let slot_w = frame_w / BUTTONS.len() as u16;
        let mut buttons = [(Command::MoveLeft, Rect::default()); 4];
        for (i, (command, _)) in BUTTONS.iter().enumerate() {
            let x = frame.x + slot_w * i as u16;
            // One column gap between neighbours.
            buttons[i] = (*command, Rect::new(x, button_y, slot_w.saturating_sub(1), 1));
        }

        Self {
            viewport,
            cell_w,
            cell_h,
            frame,
            board,
            status,
            help_icon,
            buttons,
            fits,
        }
    }

    /// Screen rectangle of board cell (x, y).
    pub fn cell_rect(&self, x: u16, y: u16) -> Rect {
        Rect::new(
            self.board.x + x * self.cell_w,
            self.board.y + y * self.cell_h,
            self.cell_w,
            self.cell_h,
        )
    }

    /// What a pointer press at terminal cell (x, y) landed on.
    pub fn hit_test(&self, x: u16, y: u16) -> UiTarget {
        if self.help_icon.contains(x, y) {
            return UiTarget::HelpIcon;
        }
        if let Some((command, _)) = self.buttons.iter().find(|(_, r)| r.contains(x, y)) {
            return UiTarget::Button(*command);
        }
        if self.status.contains(x, y) || self.frame.contains(x, y) {
            return UiTarget::Board;
        }
        UiTarget::Outside
    }
}
