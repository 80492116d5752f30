//! Terminal runner (default binary).
//!
//! crossterm for input, the framebuffer renderer for output. Gravity is driven by
//! wall-clock time measured between frames.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use log::info;

use blockfall::config::Config;
use blockfall::core::GameSnapshot;
use blockfall::input::{handle_key_event, should_quit, SwipeTracker};
use blockfall::logging;
use blockfall::session::GameSession;
use blockfall::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use blockfall::types::FRAME_MS;

fn main() -> Result<()> {
    let config = Config::from_env();
    let _log_handle = logging::init(&config)?;

    let session = GameSession::new(config.seed_or_clock(), config.score_store());

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config, session);

    // Always try to restore terminal state.
    let _ = term.exit();
    info!("exit");
    result
}

fn run(term: &mut TerminalRenderer, config: &Config, mut session: GameSession) -> Result<()> {
    let frame = Duration::from_millis(FRAME_MS as u64);
    let mut swipe = SwipeTracker::new();
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut last_tick = Instant::now();

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let viewport = Viewport::new(w, h);
        session.snapshot_into(&mut snap);
        GameView::for_layout(config.layout_for(viewport)).render_into(&snap, viewport, &mut fb);
        term.draw_swap(&mut fb)?;

        // Input until the next frame is due.
        let timeout = frame.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind != KeyEventKind::Release => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        session.apply(action);
                    }
                }
                Event::Mouse(mouse) => {
                    if let Some(action) = swipe.handle_mouse_event(mouse) {
                        session.apply(action);
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        // Gravity.
        let elapsed = last_tick.elapsed();
        if elapsed >= frame {
            last_tick = Instant::now();
            session.tick(elapsed.as_millis().min(u32::MAX as u128) as u32);
        }
    }
}
