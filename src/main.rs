//! Greedy Toe - unified CLI.

use anyhow::{Context, Result};
use clap::Parser;
use greedy_toe::AppConfig;
use greedy_toe::cli::{Cli, Command, PlayArgs};
use greedy_toe_core::{Board, Player, select_move};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        None => run_play(&cli.config, PlayArgs::default()).await,
        Some(Command::Play(args)) => run_play(&cli.config, args).await,
        Some(Command::Suggest { board, mark }) => run_suggest(&board, mark.into()),
    }
}

/// Run the terminal game.
async fn run_play(config_path: &std::path::Path, args: PlayArgs) -> Result<()> {
    let config = AppConfig::load_or_default(config_path)
        .with_context(|| format!("Loading {}", config_path.display()))?;
    greedy_toe::tui::run_tui(args.apply(config)).await
}

/// Print the heuristic's choice for one board.
fn run_suggest(board: &str, mark: Player) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let board: Board = board.parse().context("Invalid board")?;
    info!(%mark, "Selecting move");

    println!("{board}\n");
    match select_move(&board, mark, &mut rand::rng()) {
        Ok(pos) => println!("{mark} plays {} ({})", pos.to_index(), pos.label()),
        Err(e) => println!("{e}"),
    }
    Ok(())
}
