//! Key mapping from terminal events and debug commands to game actions.

use crate::types::GameAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to game actions.
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    match key.code {
        // Movement
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Char('h') | KeyCode::Char('H') => {
            Some(GameAction::MoveLeft)
        }
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Char('l') | KeyCode::Char('L') => {
            Some(GameAction::MoveRight)
        }
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Char('j') | KeyCode::Char('J') => {
            Some(GameAction::SoftDrop)
        }

        // Rotation (clockwise only)
        KeyCode::Up
        | KeyCode::Char('w')
        | KeyCode::Char('W')
        | KeyCode::Char('k')
        | KeyCode::Char('K') => Some(GameAction::Rotate),

        // Actions
        KeyCode::Char(' ') => Some(GameAction::HardDrop),
        KeyCode::Esc | KeyCode::Char('e') | KeyCode::Char('E') => Some(GameAction::Exit),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

/// Parse one line typed in debug mode.
///
/// Surrounding whitespace is ignored unless the line is nothing but spaces,
/// which is the hard-drop command. Unknown words return `None`.
pub fn parse_command(line: &str) -> Option<GameAction> {
    let line = line.trim_end_matches(['\r', '\n']);
    if !line.is_empty() && line.chars().all(|c| c == ' ') {
        return Some(GameAction::HardDrop);
    }

    match line.trim().to_ascii_lowercase().as_str() {
        "a" | "left" => Some(GameAction::MoveLeft),
        "d" | "right" => Some(GameAction::MoveRight),
        "s" | "down" => Some(GameAction::SoftDrop),
        "w" | "rotate" => Some(GameAction::Rotate),
        "drop" => Some(GameAction::HardDrop),
        "e" | "exit" => Some(GameAction::Exit),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn test_movement_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Left)),
            Some(GameAction::MoveLeft)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Right)),
            Some(GameAction::MoveRight)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Down)),
            Some(GameAction::SoftDrop)
        );

        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('a'))),
            Some(GameAction::MoveLeft)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('D'))),
            Some(GameAction::MoveRight)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('j'))),
            Some(GameAction::SoftDrop)
        );
    }

    #[test]
    fn test_rotation_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Up)),
            Some(GameAction::Rotate)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('w'))),
            Some(GameAction::Rotate)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('K'))),
            Some(GameAction::Rotate)
        );
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('z'))), None);
    }

    #[test]
    fn test_action_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char(' '))),
            Some(GameAction::HardDrop)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Esc)),
            Some(GameAction::Exit)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('e'))),
            Some(GameAction::Exit)
        );
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Enter)), None);
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('c'))));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('x'))));
    }

    #[test]
    fn test_parse_command_words() {
        assert_eq!(parse_command("a\n"), Some(GameAction::MoveLeft));
        assert_eq!(parse_command("LEFT"), Some(GameAction::MoveLeft));
        assert_eq!(parse_command("  d  "), Some(GameAction::MoveRight));
        assert_eq!(parse_command("right\r\n"), Some(GameAction::MoveRight));
        assert_eq!(parse_command("s"), Some(GameAction::SoftDrop));
        assert_eq!(parse_command("down"), Some(GameAction::SoftDrop));
        assert_eq!(parse_command("w"), Some(GameAction::Rotate));
        assert_eq!(parse_command("Rotate"), Some(GameAction::Rotate));
        assert_eq!(parse_command("drop"), Some(GameAction::HardDrop));
        assert_eq!(parse_command("e"), Some(GameAction::Exit));
        assert_eq!(parse_command("exit\n"), Some(GameAction::Exit));
    }

    #[test]
    fn test_parse_command_space_is_hard_drop() {
        assert_eq!(parse_command(" "), Some(GameAction::HardDrop));
        assert_eq!(parse_command(" \n"), Some(GameAction::HardDrop));
    }

    #[test]
    fn test_parse_command_unknown() {
        assert_eq!(parse_command(""), None);
        assert_eq!(parse_command("\n"), None);
        assert_eq!(parse_command("jump"), None);
        assert_eq!(parse_command("q"), None);
    }
}
