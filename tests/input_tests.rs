//! Keyboard mapping as seen from the game: keys drive state transitions.

use blockfall::core::GameState;
use blockfall::input::{handle_key_event, should_quit};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

fn press(state: &mut GameState, code: KeyCode) -> bool {
    match handle_key_event(KeyEvent::from(code), state.game_over()) {
        Some(cmd) => state.apply_command(cmd),
        None => false,
    }
}

#[test]
fn test_arrow_keys_move_piece() {
    let mut state = GameState::new(5);
    let start = state.active().unwrap();

    assert!(press(&mut state, KeyCode::Left));
    assert_eq!(state.active().unwrap().x, start.x - 1);
    assert!(press(&mut state, KeyCode::Right));
    assert!(press(&mut state, KeyCode::Down));
    assert_eq!(state.active().unwrap().y, start.y + 1);
}

#[test]
fn test_help_key_toggles_and_escape_dismisses() {
    let mut state = GameState::new(5);
    assert!(press(&mut state, KeyCode::Char('?')));
    assert!(state.overlay_visible());
    assert!(press(&mut state, KeyCode::Esc));
    assert!(!state.overlay_visible());

    assert!(press(&mut state, KeyCode::F(1)));
    assert!(press(&mut state, KeyCode::F(1)));
    assert!(!state.overlay_visible());
}

#[test]
fn test_unmapped_keys_do_nothing() {
    let mut state = GameState::new(5);
    let before = state.snapshot();
    assert!(!press(&mut state, KeyCode::Char('x')));
    assert!(!press(&mut state, KeyCode::Tab));
    assert_eq!(state.snapshot(), before);
}

#[test]
fn test_quit_keys() {
    assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
    assert!(should_quit(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)));
    assert!(!should_quit(KeyEvent::from(KeyCode::Char('c'))));
}
