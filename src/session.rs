//! Async driver for one controller and its delayed opponent moves.
//!
//! The session is the single owner of the [`Controller`] and of the one
//! timer that can be pending at a time. The timer lives in the session and
//! is polled by `&mut`, so dropping a `play_pending` future (for example
//! when another `select!` branch wins) never loses or duplicates a move.

use greedy_toe_core::{AutomatedTurn, Controller, Frontend, MoveOutcome};
use rand::Rng;
use std::ops::ControlFlow;
use std::pin::Pin;
use std::time::Duration;
use tokio::time::{Sleep, sleep};
use tracing::{debug, info, instrument};

/// User intent delivered by an input surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Claim the square at this index for the player to move.
    Claim(usize),
    /// Start a new game.
    Reset,
    /// Flip the automated-opponent toggle.
    ToggleAutomatedOpponent,
    /// Leave the session.
    Quit,
}

/// A controller plus the pending automated-move timer.
#[derive(Debug)]
pub struct Session<F, R> {
    controller: Controller<F, R>,
    think_delay: Duration,
    timer: Option<Pin<Box<Sleep>>>,
}

impl<F: Frontend, R: Rng> Session<F, R> {
    /// Wraps `controller`; call [`Session::start`] to begin the first game.
    pub fn new(controller: Controller<F, R>, think_delay: Duration) -> Self {
        Self {
            controller,
            think_delay,
            timer: None,
        }
    }

    /// The controller, read-only.
    pub fn controller(&self) -> &Controller<F, R> {
        &self.controller
    }

    /// The frontend the controller reports to.
    pub fn frontend_mut(&mut self) -> &mut F {
        self.controller.frontend_mut()
    }

    /// True while an automated move is scheduled.
    pub fn has_pending_move(&self) -> bool {
        self.timer.is_some()
    }

    /// Starts the first game.
    #[instrument(skip(self))]
    pub fn start(&mut self) {
        info!("Session started");
        self.timer = None;
        let turn = self.controller.reset();
        self.arm(turn);
    }

    /// Applies one command. Returns `Break` on [`Command::Quit`].
    #[instrument(skip(self))]
    pub fn handle(&mut self, command: Command) -> ControlFlow<()> {
        match command {
            Command::Claim(index) => {
                let outcome = self.controller.claim(index);
                self.arm(outcome.automated_turn());
            }
            Command::Reset => {
                self.timer = None;
                let turn = self.controller.reset();
                self.arm(turn);
            }
            Command::ToggleAutomatedOpponent => {
                let enabled = !self.controller.automated_opponent();
                self.controller.set_automated_opponent(enabled);
            }
            Command::Quit => {
                info!("Session quit");
                return ControlFlow::Break(());
            }
        }
        ControlFlow::Continue(())
    }

    /// Waits for the pending timer and plays the automated move.
    ///
    /// Never resolves while nothing is pending, which makes it usable as a
    /// `select!` branch next to input.
    pub async fn play_pending(&mut self) -> Option<MoveOutcome> {
        match self.timer.as_mut() {
            Some(timer) => timer.as_mut().await,
            None => std::future::pending::<()>().await,
        }
        self.timer = None;

        let outcome = self.controller.play_automated_turn();
        if let Some(outcome) = outcome {
            self.arm(outcome.automated_turn());
        }
        outcome
    }

    fn arm(&mut self, turn: AutomatedTurn) {
        if turn == AutomatedTurn::Pending {
            debug!(delay_ms = self.think_delay.as_millis() as u64, "Scheduling automated move");
            self.timer = Some(Box::pin(sleep(self.think_delay)));
        }
    }
}
