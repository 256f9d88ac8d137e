use anyhow::{Context, Result};
use tracing::info;

use turtle_grid::cli;
use turtle_grid::io::{FrameRecorder, ScriptedKeys, TerminalKeys, TerminalScreen};
use turtle_grid::{Game, GameEngine};

fn main() -> Result<()> {
    let args = cli::parse();
    cli::init_tracing(args.log_file.as_deref())?;

    let seed = args.seed.unwrap_or_else(rand::random);
    let engine = GameEngine::new(&args.grid_config(), seed).context("invalid grid")?;
    let b = engine.world().boundaries();
    info!(
        seed,
        left = b.left,
        right = b.right,
        top = b.top,
        bottom = b.bottom,
        step = b.step(),
        "grid ready"
    );

    let show_info = !args.no_info;
    match args.replay {
        Some(script) => {
            let keys = ScriptedKeys::parse(&script)?;
            let mut game = Game::new(engine, keys, FrameRecorder::new(), show_info);
            game.run()?;
            if let Some(frame) = game.output().last() {
                println!("{}", frame.to_text());
            }
        }
        None => {
            let screen = TerminalScreen::enter().context("failed to set up terminal")?;
            let mut game = Game::new(engine, TerminalKeys, screen, show_info);
            game.run()?;
        }
    }

    info!("session ended");
    Ok(())
}
