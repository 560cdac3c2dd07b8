//! Greedy Toe - terminal tic-tac-toe with a greedy heuristic opponent.
//!
//! The rules, the move selector and the controller live in
//! [`greedy_toe_core`]. This crate adds the pieces around them:
//!
//! - **Session**: async driver owning the controller and the delayed
//!   opponent move
//! - **TUI**: ratatui frontend implementing the collaborator traits
//! - **Config**: TOML settings
//! - **CLI**: command-line parsing
//!
//! # Example
//!
//! ```no_run
//! use greedy_toe::{AppConfig, tui};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let config = AppConfig::load_or_default("greedy_toe.toml")?;
//! tui::run_tui(config).await?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
mod config;
mod session;
pub mod tui;

pub use config::{AppConfig, ConfigError};
pub use session::{Command, Session};
