//! Pointer (mouse / touch) mapping.
//!
//! The terminal reports clicks and taps as mouse events. The presentation
//! layer hit-tests the position into a [`UiTarget`]; this module turns the
//! target into a command.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::types::{Command, UiTarget};

/// Terminal cell of a primary-button press, or None for any other mouse event.
///
/// Buttons act on press, not release, so a tap responds immediately.
pub fn pointer_press(event: MouseEvent) -> Option<(u16, u16)> {
    match event.kind {
        MouseEventKind::Down(MouseButton::Left) => Some((event.column, event.row)),
        _ => None,
    }
}

/// Map a pressed target to a command.
///
/// - help icon: toggle the instructions overlay
/// - button: the button's own command
/// - anywhere else on the board: dismiss the overlay, or restart after game over
pub fn handle_pointer(target: UiTarget, game_over: bool) -> Option<Command> {
    match target {
        UiTarget::HelpIcon => Some(Command::ToggleOverlay),
        UiTarget::Button(command) => Some(command),
        UiTarget::Board if game_over => Some(Command::Reset),
        UiTarget::Board => Some(Command::DismissOverlay),
        UiTarget::Outside => None,
    }
}
