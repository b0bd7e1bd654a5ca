//! Terminal blockfall runner (default binary).
//!
//! Gravity runs on a tokio worker; this thread blocks on crossterm key events
//! and forwards them to the game.

mod logging;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use tokio::runtime::Runtime;

use tui_blockfall::engine::{Game, GameConfig, GameStatus};
use tui_blockfall::input::{handle_key_event, is_pause_toggle, should_quit};
use tui_blockfall::term::TerminalRenderer;

fn main() -> Result<()> {
    logging::init_from_env()?;

    let config = GameConfig::from_env();
    log::info!(
        "board {}x{}, step {:?}, {} fps, seed {}",
        config.board.width,
        config.board.height,
        config.board.block_down_time,
        config.fps,
        config.seed
    );

    let runtime = Runtime::new()?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let mut game = Game::from_config(&config, term, runtime.handle().clone());
    let result = run(&mut game);
    game.finish();

    // The game owns the drawing renderer; a fresh one restores the terminal.
    let _ = TerminalRenderer::new().exit();
    if let Err(e) = &result {
        log::error!("game aborted: {e}");
    }
    result
}

fn run(game: &mut Game) -> Result<()> {
    game.start();

    loop {
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        if should_quit(key) {
            return Ok(());
        }

        if is_pause_toggle(key) {
            match game.status() {
                GameStatus::Running => game.pause(),
                GameStatus::Paused => game.start(),
                GameStatus::Idle | GameStatus::Finished => {}
            }
            continue;
        }

        if let Some(operation) = handle_key_event(key) {
            game.apply(operation)?;
        }
    }
}
