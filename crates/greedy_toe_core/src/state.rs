//! Game state owned by the controller.

use crate::types::{Board, Player, Position, Square};
use derive_new::new;

/// A placed mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, new)]
pub struct Move {
    /// The player who placed the mark.
    pub player: Player,
    /// Where the mark was placed.
    pub position: Position,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.position.label())
    }
}

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Won(Player),
    /// Game ended in a draw.
    Draw,
}

/// Complete game state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    current_player: Player,
    status: GameStatus,
    history: Vec<Move>,
}

impl GameState {
    /// Creates an empty, in-progress game with `first` to move.
    pub fn new(first: Player) -> Self {
        Self {
            board: Board::new(),
            current_player: first,
            status: GameStatus::InProgress,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player to move.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Moves placed this game, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// True once the game was won or drawn.
    pub fn is_over(&self) -> bool {
        self.status != GameStatus::InProgress
    }

    /// The winner, if the game was won.
    pub fn winner(&self) -> Option<Player> {
        match self.status {
            GameStatus::Won(player) => Some(player),
            _ => None,
        }
    }

    /// Places a mark (unchecked - the controller validates first).
    pub(crate) fn place(&mut self, pos: Position, player: Player) {
        self.board.set(pos, Square::Occupied(player));
        self.history.push(Move::new(player, pos));
    }

    pub(crate) fn set_current_player(&mut self, player: Player) {
        self.current_player = player;
    }

    pub(crate) fn set_status(&mut self, status: GameStatus) {
        self.status = status;
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(Player::X)
    }
}
