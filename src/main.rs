//! Terminal Corsi test runner (default binary).
//!
//! Owns the event loop: renders the board, maps key and mouse events to
//! engine actions, and executes presentation schedules with timed waits.
//! The engine itself never sleeps; all timing lives here.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::{anyhow, Result};
use crossterm::event::{self, Event, KeyEventKind, MouseButton, MouseEventKind};

use corsi_tui::core::GameState;
use corsi_tui::input::{handle_key_event, should_quit};
use corsi_tui::term::{BoardView, FrameBuffer, TerminalRenderer, Viewport};
use corsi_tui::types::{GameAction, GameStatus, Mode};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct RunConfig {
    seed: u32,
    mode: Mode,
}

fn parse_args(args: &[String]) -> Result<RunConfig> {
    let mut seed = clock_seed();
    let mut mode = Mode::Forward;

    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "--seed" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing value for --seed"))?;
                seed = v
                    .parse::<u32>()
                    .map_err(|_| anyhow!("invalid --seed value: {}", v))?;
            }
            "--reverse" => {
                mode = Mode::Reverse;
            }
            other => {
                return Err(anyhow!(
                    "unknown argument: {} (usage: corsi-tui [--seed N] [--reverse])",
                    other
                ));
            }
        }
        i += 1;
    }

    Ok(RunConfig { seed, mode })
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = parse_args(&args)?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, config);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, config: RunConfig) -> Result<()> {
    let mut game = GameState::new(config.seed);
    if config.mode == Mode::Reverse {
        game.toggle_mode();
    }

    let view = BoardView::default();
    let mut fb = FrameBuffer::new(0, 0);

    loop {
        draw(term, &view, &game, None, &mut fb)?;

        // Wake up periodically so resizes repaint even without input.
        if !event::poll(Duration::from_millis(250))? {
            continue;
        }

        let action = match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if should_quit(key) {
                    return Ok(());
                }
                handle_key_event(key)
            }
            Event::Mouse(mouse) => match mouse.kind {
                MouseEventKind::Down(MouseButton::Left) => view
                    .hit_test(&game.snapshot(), viewport(), mouse.column, mouse.row)
                    .map(GameAction::Tap),
                _ => None,
            },
            _ => None,
        };

        if let Some(action) = action {
            game.apply_action(action);
            if game.status() == GameStatus::Playing {
                if run_presentation(term, &view, &mut game, &mut fb)? {
                    return Ok(());
                }
            }
        }
    }
}

fn viewport() -> Viewport {
    let (w, h) = crossterm::terminal::size().unwrap_or((80, 40));
    Viewport::new(w, h)
}

fn draw(
    term: &mut TerminalRenderer,
    view: &BoardView,
    game: &GameState,
    highlight: Option<u8>,
    fb: &mut FrameBuffer,
) -> Result<()> {
    view.render_into(&game.snapshot(), highlight, viewport(), fb);
    term.draw(fb)
}

/// Execute the presentation schedule step by step.
///
/// Once started the sequence runs to completion: user input during the
/// steps is drained and discarded (the engine would ignore the taps
/// anyway), with only the quit keys still honored. Returns true on quit.
fn run_presentation(
    term: &mut TerminalRenderer,
    view: &BoardView,
    game: &mut GameState,
    fb: &mut FrameBuffer,
) -> Result<bool> {
    let schedule = game.presentation();
    for step in schedule.steps() {
        draw(term, view, game, step.highlight(), fb)?;
        if wait_discarding_input(Duration::from_millis(step.duration_ms() as u64))? {
            return Ok(true);
        }
    }

    game.finish_presentation();
    Ok(false)
}

fn wait_discarding_input(duration: Duration) -> Result<bool> {
    let deadline = Instant::now() + duration;
    loop {
        let remaining = deadline.saturating_duration_since(Instant::now());
        if remaining.is_zero() {
            return Ok(false);
        }
        if event::poll(remaining)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press && should_quit(key) => {
                    return Ok(true);
                }
                _ => {}
            }
        }
    }
}
