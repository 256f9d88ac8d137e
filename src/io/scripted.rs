use std::collections::VecDeque;

use crate::controls::command_for_char;
use crate::game_engine::Command;
use crate::models::errors::{GameError, GameResult};
use crate::ui::Frame;

use super::{FrameWriter, KeySource};

/// Key source fed from a fixed command list. Once the list is exhausted it
/// keeps returning `Quit`, so a scripted session always terminates.
pub struct ScriptedKeys {
    commands: VecDeque<Command>,
}

impl ScriptedKeys {
    pub fn new(commands: impl IntoIterator<Item = Command>) -> Self {
        Self {
            commands: commands.into_iter().collect(),
        }
    }

    /// Parse a replay script. Whitespace is skipped.
    pub fn parse(script: &str) -> GameResult<Self> {
        let commands = script
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| {
                command_for_char(c).ok_or_else(|| {
                    GameError::InvalidInput(format!("unknown replay key '{}'", c))
                })
            })
            .collect::<GameResult<Vec<_>>>()?;
        Ok(Self::new(commands))
    }

    pub fn remaining(&self) -> usize {
        self.commands.len()
    }
}

impl KeySource for ScriptedKeys {
    fn next_command(&mut self) -> GameResult<Command> {
        Ok(self.commands.pop_front().unwrap_or(Command::Quit))
    }
}

/// Writer that keeps every frame it is given.
#[derive(Default)]
pub struct FrameRecorder {
    pub frames: Vec<Frame>,
}

impl FrameRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last(&self) -> Option<&Frame> {
        self.frames.last()
    }
}

impl FrameWriter for FrameRecorder {
    fn draw(&mut self, frame: &Frame) -> GameResult<()> {
        self.frames.push(frame.clone());
        Ok(())
    }
}
