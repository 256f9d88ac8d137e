//! Game state machine
//!
//! Maps player commands onto the navigation, speed and paint services.
//! The GameEngine owns the World and tracks whether the session is still
//! accepting commands.

use tracing::{debug, info};

use crate::models::boundaries::GridConfig;
use crate::models::color::Rgb;
use crate::models::errors::GameResult;
use crate::models::heading::Heading;
use crate::models::position::GridPosition;
use crate::models::speed::Speed;
use crate::models::world::World;
use crate::services::navigation::{self, MoveOutcome};
use crate::services::paint;
use crate::services::speed::{self, SpeedChange};

/// A single player request, one per key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Advance,
    TurnLeft,
    TurnRight,
    Recolor,
    Faster,
    Slower,
    Quit,
}

/// What a command did to the world.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    Moved { from: GridPosition, to: GridPosition },
    Blocked,
    Turned(Heading),
    SpeedChanged(Speed),
    SpeedRejected,
    Recolored(Rgb),
    Quit,
}

impl CommandOutcome {
    /// False for rejected commands and quit, which leave the world untouched.
    pub fn changed_world(&self) -> bool {
        !matches!(
            self,
            CommandOutcome::Blocked | CommandOutcome::SpeedRejected | CommandOutcome::Quit
        )
    }

    /// Forward a speed change to an observer. Other outcomes are ignored.
    pub fn notify(&self, observer: &mut dyn SpeedObserver) {
        if let CommandOutcome::SpeedChanged(speed) = self {
            observer.speed_changed(*speed);
        }
    }
}

/// Receives the new speed every time the dial actually moves.
pub trait SpeedObserver {
    fn speed_changed(&mut self, speed: Speed);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    Running,
    Finished,
}

pub struct GameEngine {
    world: World,
    state: GameState,
}

impl GameEngine {
    /// Creates an engine with the actor randomly placed on a fresh grid
    ///
    /// # Arguments
    ///
    /// * `config` - Grid dimensions
    /// * `seed` - Random number generator seed for placement and colors
    pub fn new(config: &GridConfig, seed: u64) -> GameResult<Self> {
        Ok(Self::from_world(World::new(config, seed)?))
    }

    pub fn from_world(world: World) -> Self {
        Self {
            world,
            state: GameState::Running,
        }
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state == GameState::Finished
    }

    /// Apply one command. Once the session has finished every command
    /// returns `Quit` without touching the world.
    pub fn execute(&mut self, command: Command) -> CommandOutcome {
        if self.is_finished() {
            return CommandOutcome::Quit;
        }

        match command {
            Command::Advance => match navigation::advance(&mut self.world) {
                MoveOutcome::Moved { from, to } => {
                    debug!(%from, %to, "moved");
                    CommandOutcome::Moved { from, to }
                }
                MoveOutcome::Blocked => CommandOutcome::Blocked,
            },
            Command::TurnLeft => CommandOutcome::Turned(navigation::turn_left(&mut self.world)),
            Command::TurnRight => CommandOutcome::Turned(navigation::turn_right(&mut self.world)),
            Command::Recolor => CommandOutcome::Recolored(paint::recolor(&mut self.world)),
            Command::Faster => self.adjust_speed(1),
            Command::Slower => self.adjust_speed(-1),
            Command::Quit => {
                info!(position = %self.world.actor().position(), "quit requested");
                self.state = GameState::Finished;
                CommandOutcome::Quit
            }
        }
    }

    fn adjust_speed(&mut self, delta: i32) -> CommandOutcome {
        match speed::set_speed(&mut self.world, delta) {
            SpeedChange::Changed(speed) => {
                debug!(%speed, "speed changed");
                CommandOutcome::SpeedChanged(speed)
            }
            SpeedChange::Rejected => CommandOutcome::SpeedRejected,
        }
    }
}
