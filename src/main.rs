//! Blockfall terminal runner (default binary).
//!
//! Uses crossterm for keyboard and mouse input and a custom framebuffer-based
//! renderer. Settings come from `BLOCKFALL_*` environment variables.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use log::{debug, error, info, trace};

use blockfall::config::AppConfig;
use blockfall::core::{GameSnapshot, GameState};
use blockfall::input::{handle_key_event, handle_pointer, pointer_press, should_quit};
use blockfall::logging::init_logging;
use blockfall::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use blockfall::types::{Command, FRAME_MS};

fn main() -> Result<()> {
    let config = AppConfig::from_env();
    init_logging(config.log_level, &config.log_path)?;
    info!("starting with {:?}", config);

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    if let Err(err) = &result {
        error!("exiting with error: {err:#}");
    }
    result
}

fn run(term: &mut TerminalRenderer, config: &AppConfig) -> Result<()> {
    let seed = config.resolve_seed();
    info!("seed {seed}");
    let mut game_state = GameState::new(seed);

    let view = GameView::new(config.max_scale).with_debug(config.debug);
    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    let mut layout = view.layout(Viewport::new(w, h));

    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(w, h);

    let frame = Duration::from_millis(FRAME_MS as u64);
    let mut last_tick = Instant::now();

    loop {
        // Render.
        game_state.snapshot_into(&mut snap);
        view.render_into(&snap, &layout, &mut fb);
        term.draw_swap(&mut fb)?;

        // Input with timeout until the next frame.
        let timeout = frame.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            let command = match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        info!("quit requested, score {}", game_state.score());
                        return Ok(());
                    }
                    handle_key_event(key, game_state.game_over())
                }
                Event::Mouse(mouse) => pointer_press(mouse).and_then(|(x, y)| {
                    handle_pointer(layout.hit_test(x, y), game_state.game_over())
                }),
                Event::Resize(w, h) => {
                    layout = view.layout(Viewport::new(w, h));
                    term.invalidate();
                    None
                }
                _ => None,
            };

            if let Some(command) = command {
                apply(&mut game_state, command);
            }
        }

        // Tick by the real time elapsed since the previous tick.
        let elapsed = last_tick.elapsed();
        if elapsed >= frame {
            last_tick = Instant::now();
            let ms = u32::try_from(elapsed.as_millis()).unwrap_or(u32::MAX);
            game_state.tick(ms);
        }
    }
}

fn apply(game_state: &mut GameState, command: Command) {
    let changed = game_state.apply_command(command);
    if command.is_gameplay() {
        trace!("{} -> {}", command.as_str(), changed);
    } else {
        debug!("{} -> {}", command.as_str(), changed);
    }
}
