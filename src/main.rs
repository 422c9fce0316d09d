//! Terminal game runner (default binary).
//!
//! crossterm for input, the framebuffer renderer for output. Configuration
//! comes from `TETRIS_*` environment variables (see [`GameConfig::from_env`]).

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tetris_classic::input::{map_key, should_quit};
use tetris_classic::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use tetris_classic::{GameConfig, Session};

/// Upper bound on the wait between frames.
const FRAME_MS: u64 = 16;

fn main() -> Result<()> {
    let config = GameConfig::from_env();
    let mut session = Session::new(&config);

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut session);

    // Always try to restore terminal state.
    let _ = term.exit();

    for line in session.take_messages() {
        eprintln!("{}", line);
    }
    println!(
        "[Session] Final score {} ({} lines, level {}), seed {}",
        session.game().score(),
        session.game().lines(),
        session.game().level(),
        session.game().seed()
    );
    result
}

fn run(term: &mut TerminalRenderer, session: &mut Session) -> Result<()> {
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut last = Instant::now();

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&session.snapshot(), &session.panel(), Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        if event::poll(Duration::from_millis(FRAME_MS))? {
            match event::read()? {
                Event::Key(key) if key.kind != KeyEventKind::Release => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(command) = map_key(key) {
                        session.apply(command);
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        let now = Instant::now();
        let elapsed = now.duration_since(last).as_millis().min(u32::MAX as u128) as u32;
        if elapsed > 0 {
            session.advance(elapsed);
            last = now;
        }
    }
}
