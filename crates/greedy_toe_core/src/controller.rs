//! Turn order, terminal checks and collaborator notifications.
//!
//! The controller is the only writer of [`GameState`]. It never sleeps:
//! when the automated opponent is due to move it captures a board snapshot
//! and reports [`AutomatedTurn::Pending`], and whoever drives the
//! controller calls [`Controller::play_automated_turn`] after its display
//! delay.

use crate::frontend::{Cue, Frontend};
use crate::rules::{has_won, is_draw};
use crate::selector::HeuristicOpponent;
use crate::state::{GameState, GameStatus, Move};
use crate::types::{Board, Player, Position};
use derive_more::Display;
use rand::Rng;
use tracing::{debug, info, instrument, warn};

/// Status text shown while the automated opponent is choosing.
pub const THINKING_TEXT: &str = "Thinking...";

/// Announcement for a draw.
pub const DRAW_MESSAGE: &str = "It's a Draw!";

/// Announcement when the automated opponent wins.
pub const AUTOMATED_WIN_MESSAGE: &str = "AI Wins!";

/// Why a move was ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum RejectReason {
    /// Index outside 0-8.
    #[display("Index {_0} is off the board")]
    OutOfRange(usize),
    /// The square already holds a mark.
    #[display("{_0} is already taken")]
    Occupied(Position),
    /// The game has finished.
    #[display("The game is over")]
    GameOver,
    /// The automated opponent's move is pending.
    #[display("The opponent is thinking")]
    OpponentThinking,
}

/// Whether an automated move is now owed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AutomatedTurn {
    /// Nothing to schedule.
    Idle,
    /// Schedule [`Controller::play_automated_turn`].
    Pending,
}

/// What an attempted move did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Nothing changed.
    Rejected(RejectReason),
    /// The mark was placed and the turn passed to `next`.
    Continue {
        /// Player now to move.
        next: Player,
        /// Whether `next` is the automated opponent.
        automated: AutomatedTurn,
    },
    /// The mover completed a line.
    Won(Player),
    /// The board filled up without a line.
    Draw,
}

impl MoveOutcome {
    /// True unless the move was rejected.
    pub fn is_accepted(&self) -> bool {
        !matches!(self, MoveOutcome::Rejected(_))
    }

    /// Whether the caller must schedule an automated move.
    pub fn automated_turn(&self) -> AutomatedTurn {
        match self {
            MoveOutcome::Continue { automated, .. } => *automated,
            _ => AutomatedTurn::Idle,
        }
    }
}

/// Message announced when a human `player` wins.
pub fn win_message(player: Player) -> String {
    format!("Player {player} Wins!")
}

/// Turn indicator for `player`.
pub fn turn_text(player: Player) -> String {
    format!("Turn: {player}")
}

/// Owns one game and drives it through its collaborators.
#[derive(Debug)]
pub struct Controller<F, R> {
    state: GameState,
    frontend: F,
    opponent: HeuristicOpponent<R>,
    automated_opponent: bool,
    pending: Option<Board>,
}

impl<F: Frontend, R: Rng> Controller<F, R> {
    /// Creates a controller whose automated opponent plays O.
    ///
    /// Nothing is rendered until [`Controller::reset`] starts the first game.
    pub fn new(frontend: F, rng: R, automated_opponent: bool) -> Self {
        Self {
            state: GameState::default(),
            frontend,
            opponent: HeuristicOpponent::new(Player::O, rng),
            automated_opponent,
            pending: None,
        }
    }

    /// Current game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// The collaborators.
    pub fn frontend(&self) -> &F {
        &self.frontend
    }

    /// Mutable access to the collaborators.
    pub fn frontend_mut(&mut self) -> &mut F {
        &mut self.frontend
    }

    /// The automated opponent's mark.
    pub fn opponent_mark(&self) -> Player {
        self.opponent.mark()
    }

    /// Whether the automated opponent is enabled.
    pub fn automated_opponent(&self) -> bool {
        self.automated_opponent
    }

    /// Enables or disables the automated opponent.
    ///
    /// Read at the next reset and the next turn boundary. A move already
    /// pending still gets played.
    #[instrument(skip(self))]
    pub fn set_automated_opponent(&mut self, enabled: bool) {
        info!(enabled, "Automated opponent toggled");
        self.automated_opponent = enabled;
    }

    /// True while an automated move is owed.
    pub fn is_thinking(&self) -> bool {
        self.pending.is_some()
    }

    /// Clears the board and starts a new game.
    ///
    /// Without the automated opponent X always starts; with it a fair coin
    /// decides. Any pending automated move is discarded.
    #[instrument(skip(self))]
    pub fn reset(&mut self) -> AutomatedTurn {
        self.pending = None;
        let first = if self.automated_opponent {
            self.opponent.flip_starting_player()
        } else {
            Player::X
        };
        info!(%first, automated = self.automated_opponent, "Starting new game");

        self.state = GameState::new(first);
        self.frontend.render(self.state.board());
        self.frontend.set_status_text(&turn_text(first));
        self.begin_turn(first)
    }

    /// Places `player`'s mark at `index`.
    ///
    /// Out-of-range indices, occupied squares, finished games and moves made
    /// while the automated opponent is pending are rejected without touching
    /// the state. Win is checked before draw, so a last placement that
    /// completes a line is a win.
    #[instrument(skip(self))]
    pub fn apply_move(&mut self, index: usize, player: Player) -> MoveOutcome {
        if self.is_thinking() {
            return self.reject(RejectReason::OpponentThinking);
        }
        self.place_mark(index, player, false)
    }

    fn place_mark(&mut self, index: usize, player: Player, automated: bool) -> MoveOutcome {
        if self.state.is_over() {
            return self.reject(RejectReason::GameOver);
        }
        let Some(pos) = Position::from_index(index) else {
            return self.reject(RejectReason::OutOfRange(index));
        };
        if !self.state.board().is_empty(pos) {
            return self.reject(RejectReason::Occupied(pos));
        }

        self.state.place(pos, player);
        debug!(placed = %Move::new(player, pos), automated, "Mark placed");
        self.frontend.play(Cue::Move);
        self.frontend.render(self.state.board());

        if has_won(self.state.board(), player) {
            self.state.set_status(GameStatus::Won(player));
            self.frontend.play(Cue::Win);
            let message = if automated {
                AUTOMATED_WIN_MESSAGE.to_string()
            } else {
                win_message(player)
            };
            self.frontend.announce_outcome(&message);
            info!(%player, "Game won");
            return MoveOutcome::Won(player);
        }

        if is_draw(self.state.board()) {
            self.state.set_status(GameStatus::Draw);
            self.frontend.play(Cue::Draw);
            self.frontend.announce_outcome(DRAW_MESSAGE);
            info!("Game drawn");
            return MoveOutcome::Draw;
        }

        let next = player.opponent();
        self.state.set_current_player(next);
        self.frontend.set_status_text(&turn_text(next));
        let automated = self.begin_turn(next);
        MoveOutcome::Continue { next, automated }
    }

    /// Human input: claims `index` for the player to move.
    ///
    /// Rejected while the automated opponent's move is pending.
    #[instrument(skip(self))]
    pub fn claim(&mut self, index: usize) -> MoveOutcome {
        let player = self.state.current_player();
        self.apply_move(index, player)
    }

    /// Plays the pending automated move against the snapshot taken when
    /// the turn began.
    ///
    /// Returns `None` when no move was pending or the selector found no
    /// free square; nothing is written in either case.
    #[instrument(skip(self))]
    pub fn play_automated_turn(&mut self) -> Option<MoveOutcome> {
        let snapshot = self.pending.take()?;
        let mark = self.opponent.mark();

        match self.opponent.choose(&snapshot) {
            Ok(pos) => {
                debug!(position = %pos, "Automated opponent chose");
                Some(self.place_mark(pos.to_index(), mark, true))
            }
            Err(e) => {
                warn!(error = %e, "Automated opponent skipped its turn");
                None
            }
        }
    }

    /// Marks the automated turn as owed if `player` is the opponent.
    fn begin_turn(&mut self, player: Player) -> AutomatedTurn {
        if self.automated_opponent && player == self.opponent.mark() && !self.state.is_over() {
            self.pending = Some(*self.state.board());
            self.frontend.set_status_text(THINKING_TEXT);
            debug!("Automated turn pending");
            AutomatedTurn::Pending
        } else {
            AutomatedTurn::Idle
        }
    }

    fn reject(&self, reason: RejectReason) -> MoveOutcome {
        debug!(%reason, "Move rejected");
        MoveOutcome::Rejected(reason)
    }
}
