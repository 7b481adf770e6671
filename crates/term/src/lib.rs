//! Terminal presentation for blockfall.
//!
//! Rendering goes through a plain framebuffer rather than a widget toolkit:
//! a [`GameView`] paints a snapshot into a [`FrameBuffer`] using a [`Layout`]
//! computed from the terminal size, and the [`TerminalRenderer`] flushes only
//! the cells that changed since the previous frame.
//!
//! - board cells are drawn 2 columns wide per row so they look square
//! - the layout also answers pointer hit tests, so clicks and taps land on
//!   exactly what was drawn

pub mod fb;
pub mod game_view;
pub mod layout;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::GameView;
pub use layout::{Layout, Rect, Viewport, BUTTONS, HELP_LABEL};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
