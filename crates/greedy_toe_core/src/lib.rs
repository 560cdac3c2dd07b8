//! Tic-tac-toe rules, a greedy heuristic opponent and the game controller.
//!
//! # Architecture
//!
//! - **Types**: [`Board`], [`Square`], [`Position`], [`Player`]
//! - **Rules**: [`has_won`] and [`is_draw`] over a board snapshot
//! - **Selector**: [`select_move`], win-now, then block, then a shuffled
//!   positional preference
//! - **Controller**: [`Controller`] owns the [`GameState`] and reports to a
//!   [`Frontend`]
//!
//! # Example
//!
//! ```
//! use greedy_toe_core::{Board, Player, Position, select_move};
//! use rand::SeedableRng;
//!
//! let board: Board = "XX..O....".parse()?;
//! let mut rng = rand::rngs::StdRng::seed_from_u64(0);
//! assert_eq!(select_move(&board, Player::O, &mut rng)?, Position::TopRight);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod controller;
mod frontend;
mod rules;
mod selector;
mod state;
mod types;

pub use controller::{
    AUTOMATED_WIN_MESSAGE, AutomatedTurn, Controller, DRAW_MESSAGE, MoveOutcome, RejectReason,
    THINKING_TEXT, turn_text, win_message,
};
pub use frontend::{Cue, Frontend, Notifier, RecordingFrontend, Renderer, SoundCue};
pub use rules::{LINES, check_winner, has_won, is_draw, winning_line};
pub use selector::{
    HeuristicOpponent, NoMoveAvailable, PriorityGroup, Tier, select_move, select_move_with_tier,
};
pub use state::{GameState, GameStatus, Move};
pub use types::{Board, BoardError, Player, Position, Square};
