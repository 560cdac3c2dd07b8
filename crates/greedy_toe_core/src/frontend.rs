//! Collaborators the controller reports to.
//!
//! The controller never draws, beeps or pops anything up itself. It calls
//! these traits and moves on; none of them report failure back.

use crate::types::Board;

/// Sound cue kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cue {
    /// A mark was placed.
    Move,
    /// The game was won.
    Win,
    /// The game ended in a draw.
    Draw,
}

/// Visual board and status line.
pub trait Renderer {
    /// Reflects every square of `board`.
    fn render(&mut self, board: &Board);

    /// Shows a short status string (turn indicator, thinking indicator).
    fn set_status_text(&mut self, text: &str);
}

/// Transient outcome announcements.
///
/// Implementations clear the message on their own schedule.
pub trait Notifier {
    /// Announces a win or draw.
    fn announce_outcome(&mut self, message: &str);
}

/// Fire-and-forget sound playback.
pub trait SoundCue {
    /// Plays `cue`.
    fn play(&mut self, cue: Cue);
}

/// Everything the controller needs from a frontend.
pub trait Frontend: Renderer + Notifier + SoundCue {}

impl<T: Renderer + Notifier + SoundCue> Frontend for T {}

/// Frontend that keeps every notification it receives.
///
/// Backs headless runs and assertions on what a real frontend would show.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordingFrontend {
    /// Boards passed to [`Renderer::render`], oldest first.
    pub boards: Vec<Board>,
    /// Status texts, oldest first.
    pub statuses: Vec<String>,
    /// Outcome announcements, oldest first.
    pub outcomes: Vec<String>,
    /// Played cues, oldest first.
    pub cues: Vec<Cue>,
}

impl RecordingFrontend {
    /// Creates an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Most recent status text.
    pub fn last_status(&self) -> Option<&str> {
        self.statuses.last().map(String::as_str)
    }

    /// Most recently rendered board.
    pub fn last_board(&self) -> Option<&Board> {
        self.boards.last()
    }
}

impl Renderer for RecordingFrontend {
    fn render(&mut self, board: &Board) {
        self.boards.push(*board);
    }

    fn set_status_text(&mut self, text: &str) {
        self.statuses.push(text.to_string());
    }
}

impl Notifier for RecordingFrontend {
    fn announce_outcome(&mut self, message: &str) {
        self.outcomes.push(message.to_string());
    }
}

impl SoundCue for RecordingFrontend {
    fn play(&mut self, cue: Cue) {
        self.cues.push(cue);
    }
}
