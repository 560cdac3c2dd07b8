//! Core domain types for tic-tac-toe.

use derive_more::{Display, Error};
use std::str::FromStr;
use strum::EnumIter;
use tracing::instrument;

/// Player mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Player {
    /// Player X (moves first in two-player games).
    #[display("X")]
    X,
    /// Player O (the automated opponent's mark).
    #[display("O")]
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

/// A cell on the board, named by its row-major location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum Position {
    /// Top-left (index 0)
    TopLeft,
    /// Top-center (index 1)
    TopCenter,
    /// Top-right (index 2)
    TopRight,
    /// Middle-left (index 3)
    MiddleLeft,
    /// Center (index 4)
    Center,
    /// Middle-right (index 5)
    MiddleRight,
    /// Bottom-left (index 6)
    BottomLeft,
    /// Bottom-center (index 7)
    BottomCenter,
    /// Bottom-right (index 8)
    BottomRight,
}

impl Position {
    /// All 9 positions in ascending index order.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Label for display.
    pub fn label(self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }

    /// Converts position to board index (0-8).
    pub fn to_index(self) -> usize {
        self as usize
    }

    /// Creates position from board index, `None` outside 0-8.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Sets the square at the given position.
    pub fn set(&mut self, pos: Position, square: Square) {
        self.squares[pos.to_index()] = square;
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Checks whether `player` holds the square.
    pub fn holds(&self, pos: Position, player: Player) -> bool {
        self.get(pos) == Square::Occupied(player)
    }

    /// Returns all squares in row-major order.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Empty positions in ascending index order.
    pub fn empty_positions(&self) -> impl Iterator<Item = Position> + '_ {
        Position::ALL.into_iter().filter(|pos| self.is_empty(*pos))
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                let index = row * 3 + col;
                match self.squares[index] {
                    Square::Empty => write!(f, "{}", index + 1)?,
                    Square::Occupied(player) => write!(f, "{player}")?,
                }
                if col < 2 {
                    f.write_str("|")?;
                }
            }
            if row < 2 {
                f.write_str("\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}

/// Parses nine symbols in row-major order.
///
/// `X`/`x` and `O`/`o` are marks; `.`, `-` and `_` are empty squares.
/// Whitespace and `|` separators are ignored, so both `"XX..O...."` and
/// `"X|X|.\n.|O|.\n.|.|."` parse to the same board.
impl FromStr for Board {
    type Err = BoardError;

    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut board = Board::new();
        let mut count = 0usize;

        for symbol in s.chars().filter(|c| !c.is_whitespace() && *c != '|') {
            let square = match symbol {
                'X' | 'x' => Square::Occupied(Player::X),
                'O' | 'o' => Square::Occupied(Player::O),
                '.' | '-' | '_' => Square::Empty,
                other => return Err(BoardError::new(format!("Unexpected symbol {other:?}"))),
            };
            let pos = Position::from_index(count)
                .ok_or_else(|| BoardError::new("More than 9 squares given"))?;
            board.set(pos, square);
            count += 1;
        }

        if count != 9 {
            return Err(BoardError::new(format!("Expected 9 squares, found {count}")));
        }
        Ok(board)
    }
}

/// Board parsing error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Board error: {} at {}:{}", message, file, line)]
pub struct BoardError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl BoardError {
    /// Creates a new board error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_index_conversions() {
        assert_eq!(Position::TopLeft.to_index(), 0);
        assert_eq!(Position::Center.to_index(), 4);
        assert_eq!(Position::BottomRight.to_index(), 8);
        assert_eq!(Position::from_index(4), Some(Position::Center));
        assert_eq!(Position::from_index(9), None);
    }

    #[test]
    fn test_parse_compact_board() {
        let board: Board = "XX..O....".parse().unwrap();
        assert!(board.holds(Position::TopLeft, Player::X));
        assert!(board.holds(Position::TopCenter, Player::X));
        assert!(board.holds(Position::Center, Player::O));
        assert_eq!(board.empty_positions().count(), 6);
    }

    #[test]
    fn test_parse_grid_board() {
        let grid: Board = "X|X|.\n.|O|.\n.|.|.".parse().unwrap();
        let compact: Board = "XX..O....".parse().unwrap();
        assert_eq!(grid, compact);
    }

    #[test]
    fn test_parse_rejects_wrong_length() {
        assert!("XO".parse::<Board>().is_err());
        assert!("XOXOXOXOXO".parse::<Board>().is_err());
    }

    #[test]
    fn test_parse_rejects_unknown_symbol() {
        let err = "XX..Z....".parse::<Board>().unwrap_err();
        assert!(err.message.contains("'Z'"));
    }

    #[test]
    fn test_display_numbers_empty_squares() {
        let board: Board = "X...O...O".parse().unwrap();
        assert_eq!(board.to_string(), "X|2|3\n-+-+-\n4|O|6\n-+-+-\n7|8|O");
    }
}
