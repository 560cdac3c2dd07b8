//! Session timing under a paused tokio clock.

use greedy_toe::{Command, Session};
use greedy_toe_core::{Controller, Player, RecordingFrontend, Square, THINKING_TEXT};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::ops::ControlFlow;
use std::time::Duration;
use tokio::time::{Instant, timeout};

const DELAY: Duration = Duration::from_millis(600);

type TestSession = Session<RecordingFrontend, StdRng>;

fn session(seed: u64, automated: bool) -> TestSession {
    let controller = Controller::new(
        RecordingFrontend::new(),
        StdRng::seed_from_u64(seed),
        automated,
    );
    let mut session = Session::new(controller, DELAY);
    session.start();
    session
}

/// A started session where X moves first against the opponent.
fn x_first() -> TestSession {
    (0..256)
        .map(|seed| session(seed, true))
        .find(|s| s.controller().state().current_player() == Player::X)
        .expect("a fair coin lands both ways within 256 seeds")
}

fn occupied(session: &TestSession) -> usize {
    session
        .controller()
        .state()
        .board()
        .squares()
        .iter()
        .filter(|sq| **sq != Square::Empty)
        .count()
}

#[tokio::test(start_paused = true)]
async fn test_opponent_move_waits_for_delay() {
    let mut session = x_first();
    assert!(!session.has_pending_move());

    let started = Instant::now();
    assert_eq!(session.handle(Command::Claim(4)), ControlFlow::Continue(()));
    assert!(session.has_pending_move());
    assert_eq!(session.controller().frontend().last_status(), Some(THINKING_TEXT));
    assert_eq!(occupied(&session), 1);

    let early = timeout(DELAY - Duration::from_millis(1), session.play_pending()).await;
    assert!(early.is_err(), "move played before the delay");
    assert!(session.has_pending_move(), "timed-out wait keeps the timer");

    let outcome = session.play_pending().await.expect("pending move plays");
    assert!(outcome.is_accepted());
    assert!(started.elapsed() >= DELAY);
    assert_eq!(occupied(&session), 2);
    assert!(!session.has_pending_move());
    assert_eq!(session.controller().state().current_player(), Player::X);
}

#[tokio::test(start_paused = true)]
async fn test_claims_rejected_while_thinking() {
    let mut session = x_first();
    session.handle(Command::Claim(0));
    session.handle(Command::Claim(8));
    assert_eq!(occupied(&session), 1);
    assert!(session.has_pending_move());
}

#[tokio::test(start_paused = true)]
async fn test_reset_drops_pending_move() {
    let mut session = x_first();
    session.handle(Command::Claim(4));
    assert!(session.has_pending_move());

    session.handle(Command::Reset);
    assert_eq!(occupied(&session), 0);
    let opponent_starts = session.controller().state().current_player() == Player::O;
    assert_eq!(session.has_pending_move(), opponent_starts);

    if !opponent_starts {
        let waited = timeout(DELAY * 2, session.play_pending()).await;
        assert!(waited.is_err(), "old timer must not fire after reset");
        assert_eq!(occupied(&session), 0);
    }
}

#[tokio::test(start_paused = true)]
async fn test_two_player_never_schedules() {
    let mut session = session(3, false);
    session.handle(Command::Claim(4));
    assert!(!session.has_pending_move());
    assert_eq!(session.controller().state().current_player(), Player::O);

    let waited = timeout(DELAY * 2, session.play_pending()).await;
    assert!(waited.is_err());

    session.handle(Command::Claim(0));
    assert_eq!(occupied(&session), 2);
}

#[tokio::test(start_paused = true)]
async fn test_toggle_and_quit() {
    let mut session = session(0, false);
    assert_eq!(
        session.handle(Command::ToggleAutomatedOpponent),
        ControlFlow::Continue(())
    );
    assert!(session.controller().automated_opponent());
    assert_eq!(session.handle(Command::Quit), ControlFlow::Break(()));
}

#[tokio::test(start_paused = true)]
async fn test_finished_game_arms_no_timer() {
    let mut session = x_first();
    while !session.controller().state().is_over() {
        if session.has_pending_move() {
            session.play_pending().await.expect("pending move plays");
            continue;
        }
        let free = session
            .controller()
            .state()
            .board()
            .empty_positions()
            .last()
            .expect("game in progress has a free square");
        session.handle(Command::Claim(free.to_index()));
    }

    assert!(!session.has_pending_move());
    assert!(!session.controller().is_thinking());
    let waited = timeout(DELAY * 2, session.play_pending()).await;
    assert!(waited.is_err(), "no move after the game is over");
}
