use blockfall::core::GameState;
use blockfall::input::{handle_pointer, pointer_press};
use blockfall::term::{FrameBuffer, GameView, Rgb, Viewport, BUTTONS};
use blockfall::types::{Command, UiTarget};
use crossterm::event::{KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

fn text(fb: &FrameBuffer) -> String {
    let mut all = String::new();
    for y in 0..fb.height() {
        for x in 0..fb.width() {
            all.push(fb.get(x, y).unwrap().ch);
        }
        all.push('\n');
    }
    all
}

fn row_text(fb: &FrameBuffer, y: u16) -> String {
    (0..fb.width()).map(|x| fb.get(x, y).unwrap().ch).collect()
}

// 22x25 is the smallest terminal that fits: status row, 22x22 frame, gap, buttons.
const SMALL: Viewport = Viewport {
    width: 22,
    height: 25,
};

#[test]
fn term_view_renders_border_corners() {
    let snap = GameState::new(1).snapshot();
    let fb = GameView::new(1).render(&snap, SMALL);

    assert_eq!(fb.get(0, 1).unwrap().ch, '┌');
    assert_eq!(fb.get(21, 1).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 22).unwrap().ch, '└');
    assert_eq!(fb.get(21, 22).unwrap().ch, '┘');
}

#[test]
fn term_view_renders_settled_cell_two_chars_wide() {
    let mut snap = GameState::new(1).snapshot();
    snap.board[19][0] = 1;
    snap.active = None;

    let fb = GameView::new(1).render(&snap, SMALL);

    // Inside the border the board starts at (1, 2).
    let (x0, y0) = (1, 2 + 19);
    assert_eq!(fb.get(x0, y0).unwrap().ch, '█');
    assert_eq!(fb.get(x0 + 1, y0).unwrap().ch, '█');
    assert_eq!(fb.get(x0 + 2, y0).unwrap().ch, ' ');
    assert_eq!(fb.get(x0, y0).unwrap().style.fg, Rgb::new(0xFF, 0x6B, 0x6B));
}

#[test]
fn term_view_draws_active_piece_on_top_row() {
    let snap = GameState::new(1).snapshot();
    let fb = GameView::new(1).render(&snap, SMALL);
    assert!(row_text(&fb, 2).contains('█'));
}

#[test]
fn term_view_draws_score_help_icon_and_buttons() {
    let mut snap = GameState::new(1).snapshot();
    snap.score = 1234;

    let fb = GameView::new(1).render(&snap, SMALL);
    let status = row_text(&fb, 0);
    assert!(status.contains("SCORE 1234"), "{status:?}");
    assert!(status.trim_end().ends_with("(?)"), "{status:?}");

    let buttons = row_text(&fb, 24);
    for (_, label) in BUTTONS {
        assert!(buttons.contains(label), "{buttons:?}");
    }
}

#[test]
fn term_view_draws_overlays() {
    let view = GameView::new(1);
    let mut snap = GameState::new(1).snapshot();

    assert!(!text(&view.render(&snap, SMALL)).contains("soft drop"));

    snap.overlay_visible = true;
    assert!(text(&view.render(&snap, SMALL)).contains("soft drop"));

    snap.overlay_visible = false;
    snap.game_over = true;
    snap.score = 300;
    let all = text(&view.render(&snap, SMALL));
    assert!(all.contains("GAME OVER"));
    assert!(all.contains("Score: 300"));
    assert!(all.contains("restart"));
}

#[test]
fn term_view_debug_tints_hit_regions() {
    let snap = GameState::new(1).snapshot();
    let view = GameView::new(1).with_debug(true);
    let layout = view.layout(SMALL);
    let fb = view.render(&snap, SMALL);

    let help = layout.help_icon;
    assert_eq!(fb.get(help.x, help.y).unwrap().style.bg, Rgb::new(200, 40, 40));

    let plain = GameView::new(1).render(&snap, SMALL);
    assert_ne!(plain.get(help.x, help.y).unwrap().style.bg, Rgb::new(200, 40, 40));
}

#[test]
fn term_view_scales_up_in_large_terminals() {
    let mut snap = GameState::new(1).snapshot();
    snap.board[19][0] = 1;
    snap.active = None;

    let view = GameView::new(2);
    let vp = Viewport::new(42, 45);
    let layout = view.layout(vp);
    assert_eq!((layout.cell_w, layout.cell_h), (4, 2));

    let fb = view.render(&snap, vp);
    let cell = layout.cell_rect(0, 19);
    for y in cell.y..cell.bottom() {
        for x in cell.x..cell.right() {
            assert_eq!(fb.get(x, y).unwrap().ch, '█');
        }
    }
}

#[test]
fn render_into_reuses_framebuffer_across_resizes() {
    let snap = GameState::new(1).snapshot();
    let view = GameView::new(2);
    let mut fb = FrameBuffer::new(0, 0);

    let small = view.layout(SMALL);
    view.render_into(&snap, &small, &mut fb);
    assert_eq!((fb.width(), fb.height()), (22, 25));

    let big = view.layout(Viewport::new(50, 50));
    view.render_into(&snap, &big, &mut fb);
    assert_eq!((fb.width(), fb.height()), (50, 50));
}

#[test]
fn pointer_press_on_help_icon_opens_overlay() {
    let view = GameView::new(1);
    let layout = view.layout(SMALL);
    let mut state = GameState::new(1);

    let click = |x: u16, y: u16| MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column: x,
        row: y,
        modifiers: KeyModifiers::NONE,
    };

    let dispatch = |state: &mut GameState, x: u16, y: u16| {
        let (x, y) = pointer_press(click(x, y)).unwrap();
        if let Some(cmd) = handle_pointer(layout.hit_test(x, y), state.game_over()) {
            state.apply_command(cmd);
        }
    };

    dispatch(&mut state, layout.help_icon.x, layout.help_icon.y);
    assert!(state.overlay_visible());

    // A tap on the board closes it again.
    dispatch(&mut state, 10, 10);
    assert!(!state.overlay_visible());

    // The rightmost button moves the piece right.
    let (cmd, rect) = layout.buttons[3];
    assert_eq!(cmd, Command::MoveRight);
    assert_eq!(layout.hit_test(rect.x, rect.y), UiTarget::Button(Command::MoveRight));
    let x0 = state.active().unwrap().x;
    dispatch(&mut state, rect.x, rect.y);
    assert_eq!(state.active().unwrap().x, x0 + 1);
}
