use tracing::info;

use crate::game_engine::GameEngine;
use crate::io::{FrameWriter, KeySource};
use crate::models::errors::GameResult;
use crate::ui::{GridPresenter, InfoPane};

/// A session: reads commands, applies them to the engine and redraws after
/// every command that changed the world.
pub struct Game<K, W> {
    engine: GameEngine,
    keys: K,
    output: W,
    info_pane: Option<InfoPane>,
}

impl<K: KeySource, W: FrameWriter> Game<K, W> {
    pub fn new(engine: GameEngine, keys: K, output: W, show_info: bool) -> Self {
        let info_pane = show_info.then(|| InfoPane::new(engine.world().actor().speed()));
        Game {
            engine,
            keys,
            output,
            info_pane,
        }
    }

    pub fn run(&mut self) -> GameResult<()> {
        let actor = self.engine.world().actor();
        info!(
            position = %actor.position(),
            heading = %actor.heading(),
            speed = %actor.speed(),
            color = %actor.color(),
            "session started"
        );
        self.render()?;

        while !self.engine.is_finished() {
            let command = self.keys.next_command()?;
            let outcome = self.engine.execute(command);
            if let Some(pane) = self.info_pane.as_mut() {
                outcome.notify(pane);
            }
            if outcome.changed_world() {
                self.render()?;
            }
        }
        Ok(())
    }

    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    pub fn info_pane(&self) -> Option<&InfoPane> {
        self.info_pane.as_ref()
    }

    fn render(&mut self) -> GameResult<()> {
        let frame = GridPresenter::frame(self.engine.world(), self.info_pane.as_ref());
        self.output.draw(&frame)
    }
}
