//! Terminal 2048 runner (default binary).
//!
//! crossterm for input, the framebuffer-based view for output, and a fixed
//! tick that paces the tile spawn after each move.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming};

use tui_2048::config::AppConfig;
use tui_2048::core::GameSnapshot;
use tui_2048::engine::{Notice, Session};
use tui_2048::input::{handle_key_event, should_quit};
use tui_2048::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use tui_2048::types::TICK_MS;

fn main() -> Result<()> {
    let config = AppConfig::from_env();
    let _logger = init_logging(&config)?;
    log::info!(
        "starting tui-2048 {} (seed {}, tile delay {}ms)",
        env!("CARGO_PKG_VERSION"),
        config.seed,
        config.new_tile_delay_ms
    );

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    if let Err(e) = &result {
        log::error!("terminal loop failed: {e:#}");
    }
    result
}

/// Log to files under the configured directory; the terminal is in raw mode
/// and cannot take log lines. No directory, no logging.
fn init_logging(config: &AppConfig) -> Result<Option<LoggerHandle>> {
    let Some(dir) = &config.log_dir else {
        return Ok(None);
    };
    let handle = Logger::try_with_env_or_str("info")?
        .log_to_file(
            FileSpec::default()
                .directory(dir)
                .basename("tui-2048")
                .suffix("log"),
        )
        .rotate(
            Criterion::Size(256 * 1024),
            Naming::Numbers,
            Cleanup::KeepLogFiles(3),
        )
        .start()?;
    Ok(Some(handle))
}

fn run(term: &mut TerminalRenderer, config: &AppConfig) -> Result<()> {
    let mut session = Session::new(config.seed, config.new_tile_delay_ms);

    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut snap = GameSnapshot::default();

    let tick_duration = Duration::from_millis(TICK_MS as u64);
    let mut last_tick = Instant::now();

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        session.snapshot_into(&mut snap);
        view.render_into_with_notice(
            &snap,
            session.notice().map(Notice::message),
            Viewport::new(w, h),
            &mut fb,
        );
        term.draw_swap(&mut fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        log::info!(
                            "quit with score {} after {} moves",
                            session.state().score(),
                            session.state().moves()
                        );
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        log::debug!("action {}", action.as_str());
                        session.dispatch(action);
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
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
