use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::game_engine::Command;

/// Map a key press to a command. Releases and unbound keys map to None.
pub fn command_for_key(key: KeyEvent) -> Option<Command> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(Command::Quit),
        KeyCode::Up => Some(Command::Advance),
        KeyCode::Right => Some(Command::TurnRight),
        KeyCode::Left => Some(Command::TurnLeft),
        KeyCode::Esc => Some(Command::Quit),
        KeyCode::Char(c) => match c {
            'c' => Some(Command::Recolor),
            'f' => Some(Command::Faster),
            's' => Some(Command::Slower),
            'q' => Some(Command::Quit),
            _ => None,
        },
        _ => None,
    }
}

/// Map a replay script character to a command.
/// `^` advances, `<` and `>` turn; letters match the interactive keys.
pub fn command_for_char(c: char) -> Option<Command> {
    match c {
        '^' => Some(Command::Advance),
        '<' => Some(Command::TurnLeft),
        '>' => Some(Command::TurnRight),
        'c' => Some(Command::Recolor),
        'f' => Some(Command::Faster),
        's' => Some(Command::Slower),
        'q' => Some(Command::Quit),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn arrow_keys() {
        assert_eq!(command_for_key(press(KeyCode::Up)), Some(Command::Advance));
        assert_eq!(command_for_key(press(KeyCode::Left)), Some(Command::TurnLeft));
        assert_eq!(command_for_key(press(KeyCode::Right)), Some(Command::TurnRight));
        assert_eq!(command_for_key(press(KeyCode::Down)), None);
    }

    #[test]
    fn letter_keys() {
        assert_eq!(command_for_key(press(KeyCode::Char('c'))), Some(Command::Recolor));
        assert_eq!(command_for_key(press(KeyCode::Char('f'))), Some(Command::Faster));
        assert_eq!(command_for_key(press(KeyCode::Char('s'))), Some(Command::Slower));
        assert_eq!(command_for_key(press(KeyCode::Char('q'))), Some(Command::Quit));
        assert_eq!(command_for_key(press(KeyCode::Char('x'))), None);
    }

    #[test]
    fn quit_shortcuts() {
        assert_eq!(command_for_key(press(KeyCode::Esc)), Some(Command::Quit));
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(command_for_key(ctrl_c), Some(Command::Quit));
    }

    #[test]
    fn releases_are_ignored() {
        let mut key = press(KeyCode::Up);
        key.kind = KeyEventKind::Release;
        assert_eq!(command_for_key(key), None);
    }

    #[test]
    fn script_characters() {
        let commands: Vec<_> = "^<>cfsq".chars().filter_map(command_for_char).collect();
        assert_eq!(
            commands,
            vec![
                Command::Advance,
                Command::TurnLeft,
                Command::TurnRight,
                Command::Recolor,
                Command::Faster,
                Command::Slower,
                Command::Quit,
            ]
        );
        assert_eq!(command_for_char('x'), None);
    }
}
