//! Command-line interface for greedy_toe.

use crate::config::AppConfig;
use clap::{Args, Parser, Subcommand, ValueEnum};
use greedy_toe_core::Player;
use std::path::PathBuf;

/// Greedy Toe - tic-tac-toe against a greedy heuristic
#[derive(Parser, Debug)]
#[command(name = "greedy_toe")]
#[command(about = "Terminal tic-tac-toe with a heuristic opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (defaults apply if it is missing)
    #[arg(short, long, global = true, default_value = "greedy_toe.toml")]
    pub config: PathBuf,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal UI
    Play(PlayArgs),

    /// Print the opponent's move for a board
    Suggest {
        /// Nine symbols in row-major order: X, O, and . for empty
        board: String,

        /// Mark to move for
        #[arg(short, long, value_enum, default_value = "o")]
        mark: Mark,
    },
}

/// Overrides for the `play` command.
#[derive(Args, Debug, Default, Clone)]
pub struct PlayArgs {
    /// Disable the automated opponent (two humans share the keyboard)
    #[arg(long)]
    pub two_player: bool,

    /// Opponent display delay in milliseconds
    #[arg(long)]
    pub delay_ms: Option<u64>,

    /// Do not ring the terminal bell
    #[arg(long)]
    pub quiet: bool,
}

impl PlayArgs {
    /// Applies these flags on top of `config`.
    pub fn apply(&self, mut config: AppConfig) -> AppConfig {
        if self.two_player {
            config = config.with_automated_opponent(false);
        }
        if let Some(delay) = self.delay_ms {
            config = config.with_think_delay_ms(delay);
        }
        if self.quiet {
            config = config.with_sound(false);
        }
        config
    }
}

/// Mark selectable on the command line.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mark {
    /// Player X
    X,
    /// Player O
    O,
}

impl From<Mark> for Player {
    fn from(mark: Mark) -> Self {
        match mark {
            Mark::X => Player::X,
            Mark::O => Player::O,
        }
    }
}
