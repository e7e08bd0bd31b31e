//! Terminal Blockfall runner (default binary).
//!
//! One thread: input is polled with a timeout until the next gravity tick,
//! every key press becomes one command for the driver, and the frame is
//! redrawn after each event.

use std::fs::File;
use std::sync::Mutex;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use tracing::{debug, info};
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

use blockfall::engine::{Driver, DriverConfig, ScoreDisplay};
use blockfall::input::{handle_key_event, should_quit, KEY_HELP};
use blockfall::term::{GameView, TerminalRenderer, Viewport};

fn main() -> Result<()> {
    init_logging()?;

    let config = DriverConfig::from_env();
    let seed = config.seed.unwrap_or_else(time_seed);
    let mut driver = Driver::new(&config, seed).context("invalid board size")?;
    info!(
        seed,
        width = config.board.width,
        height = config.board.height,
        gravity_ms = config.gravity_ms,
        "starting"
    );

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut driver);

    // Always try to restore terminal state.
    let _ = term.exit();
    info!(score = driver.session().score(), "exiting");
    result
}

fn run(term: &mut TerminalRenderer, driver: &mut Driver) -> Result<()> {
    let view = GameView::default().with_help(&KEY_HELP);
    let mut snap = driver.snapshot();
    let mut score = ScoreDisplay::new(driver);
    let mut last = Instant::now();

    loop {
        driver.snapshot_into(&mut snap);
        // The side panel shows the pushed score, not the session's.
        snap.score = score.shown();
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let fb = view.render(&snap, Viewport::new(w, h));
        term.draw(&fb)?;

        // Paused or game over: nothing happens until a key arrives.
        let timeout = driver
            .until_next_tick()
            .map(|ms| Duration::from_millis(ms as u64))
            .unwrap_or(Duration::from_secs(3600));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        if score.observe(&driver.dispatch(action)) {
                            debug!(score = score.shown(), "score changed");
                        }
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        let now = Instant::now();
        let elapsed = now.duration_since(last).as_millis().min(u32::MAX as u128) as u32;
        last = now;
        if score.observe(&driver.advance(elapsed)) {
            debug!(score = score.shown(), "score changed");
        }
    }
}

/// Log to `BLOCKFALL_LOG_PATH` when set; stderr would corrupt the raw-mode screen.
fn init_logging() -> Result<()> {
    let Some(path) = std::env::var_os("BLOCKFALL_LOG_PATH") else {
        return Ok(());
    };
    let file = File::create(&path)
        .with_context(|| format!("cannot open log file {}", path.to_string_lossy()))?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
    Ok(())
}

fn time_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}
