//! Terminal Blocktris runner (default binary).
//!
//! It uses crossterm for input and the framebuffer-based renderer from
//! `blocktris-term`. Gravity and key commands are serialized through a
//! single [`Session`] on this thread.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use log::info;

use blocktris::cli::{parse_args, CliConfig, USAGE};
use blocktris::core::{GameEngine, GameSnapshot};
use blocktris::input::handle_key_event;
use blocktris::logging::init_log;
use blocktris::session::{Flow, Session};
use blocktris::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use blocktris::types::TICK_MS;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let cli = parse_args(&args)?;
    if cli.help {
        println!("{}", USAGE);
        return Ok(());
    }
    if let Some(path) = cli.log_file.as_deref() {
        init_log(cli.log_level, path)?;
    }

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &cli);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, cli: &CliConfig) -> Result<()> {
    let engine = match cli.seed {
        Some(seed) => GameEngine::with_seed(cli.game, seed)?,
        None => GameEngine::new(cli.game)?,
    };
    info!(
        "starting {}x{} game, gravity {}ms",
        cli.game.width, cli.game.height, cli.gravity_ms
    );
    let mut session = Session::new(engine, cli.gravity_ms);

    let view = GameView::default();
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);

    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        session.snapshot_into(&mut snap);
        view.render_into(&snap, session.view_options(), Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if let Some(command) = handle_key_event(key) {
                        if session.handle(command) == Flow::Quit {
                            info!("quit");
                            return Ok(());
                        }
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        // Tick.
        let elapsed = last_tick.elapsed();
        if elapsed >= tick_duration {
            last_tick = Instant::now();
            session.tick(elapsed.as_millis().min(u32::MAX as u128) as u32);
        }
    }
}
