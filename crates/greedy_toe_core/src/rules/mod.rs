//! Game rules for tic-tac-toe.
//!
//! Pure functions over a board snapshot. Rules are separated from board
//! storage so the controller and the move selector share one definition
//! of a finished game.

pub mod draw;
pub mod win;

pub use draw::is_draw;
pub use win::{LINES, check_winner, has_won, winning_line};
