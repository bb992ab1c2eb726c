//! Terminal Snake runner (default binary).
//!
//! Polls the keyboard, feeds real elapsed time into the fixed-tick core and
//! redraws the whole terminal every frame through the diffing renderer.

use std::fs::File;
use std::time::Instant;

use anyhow::{Context, Result};
use log::info;

use tui_snake::core::{FixedTick, GameSnapshot, GameState};
use tui_snake::input::drain_actions;
use tui_snake::settings::{self, Settings};
use tui_snake::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use tui_snake::types::MIN_GRID_DIM;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let settings = settings::parse_args(&args)?;
    init_logging(&settings)?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &settings);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn init_logging(settings: &Settings) -> Result<()> {
    let Some(path) = settings.log_file.as_ref() else {
        return Ok(());
    };
    let file = File::create(path).with_context(|| format!("create log file {}", path.display()))?;
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(settings.log_level.as_str()),
    )
    .target(env_logger::Target::Pipe(Box::new(file)))
    .init();
    Ok(())
}

fn run(term: &mut TerminalRenderer, settings: &Settings) -> Result<()> {
    let seed = settings.seed.unwrap_or_else(rand::random::<u32>);
    let (w, h) = grid_size(term)?;
    let mut game = GameState::new(w, h, seed).with_driver(FixedTick::from_hz(settings.tick_hz));
    info!("seed {} tick rate {} Hz", seed, settings.tick_hz);

    let view = GameView::new();
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(w, h);
    let timeout = settings.frame_timeout();

    let mut last_frame = Instant::now();
    loop {
        let (w, h) = grid_size(term)?;

        for action in drain_actions(timeout).context("poll terminal input")? {
            game.handle_input(action);
        }

        let now = Instant::now();
        let delta = now.duration_since(last_frame).as_secs_f32();
        last_frame = now;

        if !game.advance_frame(delta, w, h) {
            info!("quit after {} ticks, score {}", game.ticks(), game.score());
            return Ok(());
        }

        game.snapshot_into(&mut snap);
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;
    }
}

/// Terminal size, widened to the smallest grid the game accepts.
fn grid_size(term: &TerminalRenderer) -> Result<(u16, u16)> {
    let (w, h) = term.size()?;
    Ok((w.max(MIN_GRID_DIM), h.max(MIN_GRID_DIM)))
}
