//! Terminal UI for Greedy Toe.

mod app;
mod input;
mod ui;

pub use app::{App, Popup};
pub use input::{command_for, move_cursor};
pub use ui::{ModeInfo, draw};

use crate::config::AppConfig;
use crate::session::Session;
use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEvent},
    execute,
    style::Print,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use greedy_toe_core::Controller;
use rand::SeedableRng;
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::ops::ControlFlow;
use std::time::Instant;
use tokio::sync::mpsc;
use tokio::time::{Duration, interval};
use tracing::{debug, error, info, instrument};

/// Redraw cadence; also bounds how late an expired popup disappears.
const TICK: Duration = Duration::from_millis(100);

/// Run the TUI until the user quits.
pub async fn run_tui(config: AppConfig) -> Result<()> {
    // Setup logging to file to avoid interfering with TUI
    let log_file = std::fs::File::create(config.log_file())
        .with_context(|| format!("Failed to create log file {}", config.log_file().display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,greedy_toe=debug")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init(); // Don't panic if already initialized

    info!(?config, "Starting Greedy Toe TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_game(&mut terminal, &config).await;

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    res
}

/// Draw/input/timer loop over one session.
#[instrument(skip_all)]
async fn run_game<B>(terminal: &mut Terminal<B>, config: &AppConfig) -> Result<()>
where
    B: ratatui::backend::Backend,
    B::Error: Send + Sync + 'static,
{
    let app = App::new(config.outcome_display(), *config.sound());
    let controller = Controller::new(app, StdRng::from_os_rng(), *config.automated_opponent());
    let mut session = Session::new(controller, config.think_delay());
    session.start();

    let mut keys = spawn_key_reader();
    let mut ticker = interval(TICK);

    loop {
        session.frontend_mut().expire_popup(Instant::now());
        let mode = ModeInfo {
            automated_opponent: session.controller().automated_opponent(),
            opponent_mark: session.controller().opponent_mark(),
        };
        terminal.draw(|f| draw(f, session.controller().frontend(), mode))?;
        for _ in 0..session.frontend_mut().take_bells() {
            execute!(io::stdout(), Print('\x07'))?;
        }

        tokio::select! {
            key = keys.recv() => {
                let Some(key) = key else {
                    info!("Key reader stopped");
                    return Ok(());
                };
                let command = command_for(key, session.frontend_mut().cursor_mut());
                if let Some(command) = command {
                    debug!(?command, "Key mapped to command");
                    if let ControlFlow::Break(()) = session.handle(command) {
                        return Ok(());
                    }
                }
            }
            outcome = session.play_pending() => {
                debug!(?outcome, "Automated move played");
            }
            _ = ticker.tick() => {}
        }
    }
}

/// Forwards terminal key events from a blocking thread.
///
/// The thread exits once the receiver is dropped.
fn spawn_key_reader() -> mpsc::UnboundedReceiver<KeyEvent> {
    let (tx, rx) = mpsc::unbounded_channel();
    tokio::task::spawn_blocking(move || {
        while !tx.is_closed() {
            match event::poll(TICK) {
                Ok(true) => match event::read() {
                    Ok(Event::Key(key)) => {
                        if tx.send(key).is_err() {
                            break;
                        }
                    }
                    Ok(_) => {}
                    Err(e) => {
                        error!(error = %e, "Failed to read terminal event");
                        break;
                    }
                },
                Ok(false) => {}
                Err(e) => {
                    error!(error = %e, "Failed to poll terminal events");
                    break;
                }
            }
        }
    });
    rx
}
