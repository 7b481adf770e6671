//! Shared types and constants for the falling-block game.
//!
//! Everything here is plain data with no external dependencies, so it can be
//! used by the core simulation, the terminal presentation and the input layer
//! alike.
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19, top to bottom)
//! - **Spawn position**: (`BOARD_WIDTH / 2 - 1`, 0) = (4, 0)
//!
//! # Timing
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DROP_INTERVAL_MS` | 400 | Gravity: one row per interval |
//! | `FRAME_MS` | 16 | Main loop frame budget (~60 FPS) |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{Command, BOARD_HEIGHT, BOARD_WIDTH, SHAPE_TEMPLATES};
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! assert_eq!(SHAPE_TEMPLATES.len(), 7);
//!
//! let cmd = Command::from_str("moveLeft").unwrap();
//! assert_eq!(cmd, Command::MoveLeft);
//! assert_eq!(cmd.as_str(), "moveLeft");
//! ```

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Gravity interval in milliseconds (one row per 400ms)
pub const DROP_INTERVAL_MS: u32 = 400;

/// Main loop frame budget in milliseconds (16ms ≈ 60 FPS)
pub const FRAME_MS: u32 = 16;

/// Points awarded per cleared row
pub const LINE_CLEAR_BONUS: u32 = 100;

/// Number of shape templates (and palette entries)
pub const SHAPE_COUNT: usize = 7;

/// Largest width or height of any shape matrix
pub const MAX_SHAPE_DIM: usize = 4;

/// A cell on the board: `0` is empty, `1..=7` is a 1-based palette index.
pub type Cell = u8;

/// The empty cell value.
pub const EMPTY_CELL: Cell = 0;

/// Shape templates as 0/1 matrices, rows top to bottom.
///
/// A piece spawned from template `i` is painted with `PALETTE[i]`.
pub const SHAPE_TEMPLATES: [&[&[u8]]; SHAPE_COUNT] = [
    &[&[1, 1, 1], &[0, 1, 0]],
    &[&[1, 1], &[1, 1]],
    &[&[1, 1, 0], &[0, 1, 1]],
    &[&[0, 1, 1], &[1, 1, 0]],
    &[&[1, 1, 1, 1]],
    &[&[1, 1, 1], &[1, 0, 0]],
    &[&[1, 1, 1], &[0, 0, 1]],
];

/// Index of the 2x2 square template.
pub const SQUARE_TEMPLATE: usize = 1;

/// Piece colors as RGB triples.
///
/// `#FF6B6B #4ECDC4 #45B7D1 #FDCB6E #6C5CE7 #FFA07A #55E6C1`
pub const PALETTE: [[u8; 3]; SHAPE_COUNT] = [
    [0xFF, 0x6B, 0x6B],
    [0x4E, 0xCD, 0xC4],
    [0x45, 0xB7, 0xD1],
    [0xFD, 0xCB, 0x6E],
    [0x6C, 0x5C, 0xE7],
    [0xFF, 0xA0, 0x7A],
    [0x55, 0xE6, 0xC1],
];

/// Play-field background (`#2C3E50`).
pub const BACKGROUND: [u8; 3] = [0x2C, 0x3E, 0x50];

/// Commands the presentation layer may send to the game.
///
/// Each command is a zero-argument request. The game either applies it
/// immediately or silently ignores it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Move piece one cell down
    SoftDrop,
    /// Rotate piece 90° clockwise about its matrix corner
    Rotate,
    /// Show or hide the instructions overlay
    ToggleOverlay,
    /// Hide the instructions overlay if shown
    DismissOverlay,
    /// Start a new game (only after game over)
    Reset,
}

impl Command {
    /// Every command, in declaration order.
    pub const ALL: [Command; 7] = [
        Command::MoveLeft,
        Command::MoveRight,
        Command::SoftDrop,
        Command::Rotate,
        Command::ToggleOverlay,
        Command::DismissOverlay,
        Command::Reset,
    ];

    /// Parse command from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::Command;
    ///
    /// assert_eq!(Command::from_str("rotate"), Some(Command::Rotate));
    /// assert_eq!(Command::from_str("SOFTDROP"), Some(Command::SoftDrop));
    /// assert_eq!(Command::from_str("hardDrop"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(Command::MoveLeft),
            "moveright" => Some(Command::MoveRight),
            "softdrop" => Some(Command::SoftDrop),
            "rotate" => Some(Command::Rotate),
            "toggleoverlay" => Some(Command::ToggleOverlay),
            "dismissoverlay" => Some(Command::DismissOverlay),
            "reset" => Some(Command::Reset),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Command::MoveLeft => "moveLeft",
            Command::MoveRight => "moveRight",
            Command::SoftDrop => "softDrop",
            Command::Rotate => "rotate",
            Command::ToggleOverlay => "toggleOverlay",
            Command::DismissOverlay => "dismissOverlay",
            Command::Reset => "reset",
        }
    }

    /// Whether this command moves or rotates the active piece.
    pub fn is_gameplay(&self) -> bool {
        matches!(
            self,
            Command::MoveLeft | Command::MoveRight | Command::SoftDrop | Command::Rotate
        )
    }
}

/// What a pointer press landed on.
///
/// Produced by the presentation layer's hit test and consumed by the input
/// mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiTarget {
    /// The "?" help icon in the corner of the board frame
    HelpIcon,
    /// One of the on-screen control buttons
    Button(Command),
    /// Anywhere inside the board frame
    Board,
    /// Outside every interactive region
    Outside,
}
