//! Key handling: cursor movement and key-to-command mapping.

use crate::session::Command;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use greedy_toe_core::Position;

/// Moves cursor based on arrow keys.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let index = cursor.to_index();
    let (row, col) = (index / 3, index % 3);

    let (row, col) = match key {
        KeyCode::Left if col > 0 => (row, col - 1),
        KeyCode::Right if col < 2 => (row, col + 1),
        KeyCode::Up if row > 0 => (row - 1, col),
        KeyCode::Down if row < 2 => (row + 1, col),
        _ => (row, col),
    };

    Position::from_index(row * 3 + col).unwrap_or(cursor)
}

/// Translates a key press into a session command.
///
/// Arrow keys only move `cursor` and produce no command.
pub fn command_for(key: KeyEvent, cursor: &mut Position) -> Option<Command> {
    // crossterm reports both press and release on some platforms.
    if key.kind == KeyEventKind::Release {
        return None;
    }

    match key.code {
        KeyCode::Left | KeyCode::Right | KeyCode::Up | KeyCode::Down => {
            *cursor = move_cursor(*cursor, key.code);
            None
        }
        KeyCode::Enter | KeyCode::Char(' ') => Some(Command::Claim(cursor.to_index())),
        KeyCode::Char(c @ '1'..='9') => {
            let index = c.to_digit(10).map(|d| d as usize - 1)?;
            if let Some(pos) = Position::from_index(index) {
                *cursor = pos;
            }
            Some(Command::Claim(index))
        }
        KeyCode::Char('r') | KeyCode::Char('R') => Some(Command::Reset),
        KeyCode::Char('a') | KeyCode::Char('A') => Some(Command::ToggleAutomatedOpponent),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Command::Quit),
        _ => None,
    }
}
