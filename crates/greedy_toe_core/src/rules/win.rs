//! Win detection logic for tic-tac-toe.

use crate::types::{Board, Player, Position};
use tracing::instrument;

/// The 8 winning lines: rows, columns, then diagonals.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Returns true if `player` holds all three squares of some line.
///
/// Makes no assumption that only one player can satisfy this.
pub fn has_won(board: &Board, player: Player) -> bool {
    winning_line(board, player).is_some()
}

/// Returns the first line completed by `player`, in [`LINES`] order.
pub fn winning_line(board: &Board, player: Player) -> Option<[Position; 3]> {
    LINES
        .into_iter()
        .find(|line| line.iter().all(|pos| board.holds(*pos, player)))
}

/// Returns the player with three in a row, checking X before O.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Player> {
    [Player::X, Player::O]
        .into_iter()
        .find(|player| has_won(board, *player))
}
