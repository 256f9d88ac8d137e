use std::io::{self, Stdout, Write};

use crossterm::{
    cursor::{Hide, MoveTo, Show},
    event::{self, Event},
    execute, queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{
        disable_raw_mode, enable_raw_mode, Clear, ClearType, EnterAlternateScreen,
        LeaveAlternateScreen, SetTitle,
    },
};

use crate::controls::command_for_key;
use crate::game_engine::Command;
use crate::models::color::Rgb;
use crate::models::constants::TITLE;
use crate::models::errors::GameResult;
use crate::ui::Frame;

use super::{FrameWriter, KeySource};

/// Key source reading crossterm events from the controlling terminal.
/// Only meaningful while a `TerminalScreen` holds the terminal in raw mode.
pub struct TerminalKeys;

/// Interactive terminal in raw mode on the alternate screen.
/// The terminal is restored when this value is dropped.
pub struct TerminalScreen {
    stdout: Stdout,
}

impl TerminalScreen {
    pub fn enter() -> io::Result<Self> {
        let mut stdout = io::stdout();
        enable_raw_mode()?;
        if let Err(err) = execute!(stdout, EnterAlternateScreen, SetTitle(TITLE), Hide, Clear(ClearType::All)) {
            let _ = disable_raw_mode();
            return Err(err);
        }
        Ok(Self { stdout })
    }
}

impl Drop for TerminalScreen {
    fn drop(&mut self) {
        if let Err(err) = execute!(self.stdout, Show, LeaveAlternateScreen) {
            tracing::error!(?err, "failed to leave alternate screen");
        }
        if let Err(err) = disable_raw_mode() {
            tracing::error!(?err, "failed to disable raw mode");
        }
    }
}

impl KeySource for TerminalKeys {
    fn next_command(&mut self) -> GameResult<Command> {
        loop {
            if let Event::Key(key) = event::read()? {
                if let Some(command) = command_for_key(key) {
                    return Ok(command);
                }
            }
        }
    }
}

impl FrameWriter for TerminalScreen {
    fn draw(&mut self, frame: &Frame) -> GameResult<()> {
        queue_frame(&mut self.stdout, frame)?;
        self.stdout.flush()?;
        Ok(())
    }
}

/// Overwrite the previous frame line by line, clearing only what each line
/// leaves behind, then paint the trail and the marker in color.
fn queue_frame<W: Write>(out: &mut W, frame: &Frame) -> io::Result<()> {
    for (row, line) in frame.lines.iter().enumerate() {
        queue!(out, MoveTo(0, row as u16), Print(line), Clear(ClearType::UntilNewLine))?;
    }
    queue!(out, MoveTo(0, frame.lines.len() as u16), Clear(ClearType::FromCursorDown))?;

    for stroke in &frame.strokes {
        queue!(
            out,
            MoveTo(stroke.column as u16, stroke.row as u16),
            SetForegroundColor(to_crossterm(stroke.color)),
            Print(stroke.glyph)
        )?;
    }
    if let Some(marker) = frame.marker {
        queue!(
            out,
            MoveTo(marker.column as u16, marker.row as u16),
            SetForegroundColor(to_crossterm(marker.color)),
            Print(marker.glyph)
        )?;
    }
    queue!(out, ResetColor)
}

fn to_crossterm(color: Rgb) -> Color {
    Color::Rgb {
        r: color.r,
        g: color.g,
        b: color.b,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_engine::{Command, GameEngine};
    use crate::models::actor::Actor;
    use crate::models::boundaries::GridConfig;
    use crate::models::heading::Heading;
    use crate::models::position::GridPosition;
    use crate::models::world::World;
    use crate::ui::GridPresenter;

    fn rendered(engine: &GameEngine) -> String {
        let frame = GridPresenter::frame(engine.world(), None);
        let mut out = Vec::new();
        queue_frame(&mut out, &frame).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn engine() -> GameEngine {
        let actor = Actor::new(GridPosition::ORIGIN, Heading::East);
        GameEngine::from_world(World::with_actor(&GridConfig::default(), actor, 0).unwrap())
    }

    #[test]
    fn frame_is_redrawn_in_place() {
        let output = rendered(&engine());
        assert!(!output.contains("\x1b[2J"), "full-screen clear in {:?}", output);
        // one clear-to-end-of-line per frame line
        assert_eq!(output.matches("\x1b[K").count(), 21);
    }

    #[test]
    fn trail_and_marker_are_painted_in_color() {
        let mut engine = engine();
        engine.execute(Command::Advance);
        let color = engine.world().actor().color();
        let output = rendered(&engine);
        let sequence = format!("\x1b[38;2;{};{};{}m", color.r, color.g, color.b);
        // two trail characters and the marker
        assert_eq!(output.matches(&sequence).count(), 3);
        assert!(output.ends_with("\x1b[0m"));
    }
}
