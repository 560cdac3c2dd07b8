//! Draw detection logic for tic-tac-toe.

use crate::types::{Board, Square};

/// Checks if every square is occupied.
///
/// This does not look at lines: callers check for a win first, and a full
/// board that also completes a line is a win, not a draw.
pub fn is_draw(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}
