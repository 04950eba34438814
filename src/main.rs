//! Terminal charades runner (default binary).
//!
//! One round lasts a minute. Enter marks the word as guessed, Backspace skips
//! it. When the clock runs out the score screen is shown; `r` plays again.

use std::fs::OpenOptions;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event};
use tracing_subscriber::EnvFilter;

use tui_charades::adapter::{
    Config, CurrentRoute, HapticSignal, HapticsRuntime, Presenter, Route, RoundSummary,
    SummaryFormat,
};
use tui_charades::input::{handle_key_event, should_quit};
use tui_charades::term::{FrameBuffer, RoundView, ScoreView, TerminalRenderer, Viewport};

/// Input poll timeout; bounds how late a tick or buzz can be shown.
const FRAME_MS: u64 = 50;

type Host = Presenter<CurrentRoute, Option<HapticsRuntime>>;

fn main() -> Result<()> {
    let config = Config::from_env()?;
    init_logging(&config)?;
    tracing::info!(seed = config.seed, haptics = config.haptics_enabled, "starting");

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    let summary = result?;

    if config.summary == SummaryFormat::Json {
        println!("{}", summary.to_json_line()?);
    }
    Ok(())
}

fn init_logging(config: &Config) -> Result<()> {
    // stdout belongs to the UI; without a log file there is nowhere to log to.
    let Some(path) = &config.log_file else {
        return Ok(());
    };
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn run(term: &mut TerminalRenderer, config: &Config) -> Result<RoundSummary> {
    let haptics = if config.haptics_enabled {
        Some(HapticsRuntime::new()?)
    } else {
        None
    };
    let mut presenter: Host = Presenter::new(config.seed, CurrentRoute::default(), haptics);
    presenter.start();

    let round_view = RoundView::default();
    let score_view = ScoreView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut buzzing = false;
    let mut last_drawn = None;
    let mut clock = Instant::now();

    loop {
        // Render only when something visible changed.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let viewport = Viewport::new(w, h);
        let frame = (presenter.snapshot(), presenter.navigator().0, buzzing, viewport);
        if last_drawn != Some(frame) {
            match frame.1 {
                Route::Round => round_view.render_into(&frame.0, buzzing, viewport, &mut fb),
                Route::Score { score } => score_view.render_into(score, viewport, &mut fb),
            }
            term.draw_swap(&mut fb)?;
            last_drawn = Some(frame);
        }

        if event::poll(Duration::from_millis(FRAME_MS))? {
            match event::read()? {
                Event::Key(key) => {
                    if should_quit(key) {
                        break;
                    }
                    if let Some(action) = handle_key_event(key) {
                        presenter.apply_action(action);
                    }
                }
                Event::Resize(..) => {
                    term.invalidate();
                    last_drawn = None;
                }
                _ => {}
            }
        }

        // Advance by whole milliseconds, carrying the remainder.
        let elapsed_ms = clock.elapsed().as_millis().min(u32::MAX as u128) as u32;
        clock += Duration::from_millis(elapsed_ms as u64);
        presenter.advance(elapsed_ms);

        while let Some(signal) = presenter
            .haptics_mut()
            .as_mut()
            .and_then(HapticsRuntime::try_recv)
        {
            match signal {
                HapticSignal::On(_) => {
                    buzzing = true;
                    term.bell()?;
                }
                HapticSignal::Off => buzzing = false,
            }
        }
    }

    let summary = presenter.summary();
    presenter.dispose();
    Ok(summary)
}
