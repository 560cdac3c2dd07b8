//! Terminal frontend state.
//!
//! `App` is what the controller reports to. It only records what should be
//! on screen; drawing happens in [`super::ui`] on the next frame.

use greedy_toe_core::{Board, Cue, Notifier, Position, Renderer, SoundCue};
use std::time::{Duration, Instant};
use tracing::debug;

/// A transient outcome message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Popup {
    /// Text shown in the popup.
    pub message: String,
    /// When the popup disappears.
    pub expires_at: Instant,
}

/// Everything the TUI shows.
#[derive(Debug)]
pub struct App {
    board: Board,
    status: String,
    popup: Option<Popup>,
    cursor: Position,
    outcome_display: Duration,
    sound: bool,
    bells: usize,
}

impl App {
    /// Creates an empty frontend.
    pub fn new(outcome_display: Duration, sound: bool) -> Self {
        Self {
            board: Board::new(),
            status: String::new(),
            popup: None,
            cursor: Position::Center,
            outcome_display,
            sound,
            bells: 0,
        }
    }

    /// Last rendered board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Current status line.
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Popup still on screen, if any.
    pub fn popup(&self) -> Option<&Popup> {
        self.popup.as_ref()
    }

    /// Cell under the keyboard cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Mutable cursor for key handling.
    pub fn cursor_mut(&mut self) -> &mut Position {
        &mut self.cursor
    }

    /// Drops the popup once its time is up.
    pub fn expire_popup(&mut self, now: Instant) {
        if self.popup.as_ref().is_some_and(|p| now >= p.expires_at) {
            debug!("Outcome popup expired");
            self.popup = None;
        }
    }

    /// Number of bells owed since the last call.
    pub fn take_bells(&mut self) -> usize {
        std::mem::take(&mut self.bells)
    }
}

impl Renderer for App {
    fn render(&mut self, board: &Board) {
        self.board = *board;
    }

    fn set_status_text(&mut self, text: &str) {
        self.status = text.to_string();
    }
}

impl Notifier for App {
    fn announce_outcome(&mut self, message: &str) {
        self.popup = Some(Popup {
            message: message.to_string(),
            expires_at: Instant::now() + self.outcome_display,
        });
    }
}

impl SoundCue for App {
    fn play(&mut self, cue: Cue) {
        if self.sound {
            debug!(?cue, "Queueing bell");
            self.bells += 1;
        }
    }
}
