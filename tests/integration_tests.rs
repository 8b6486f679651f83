//! Integration tests for the game session (controller) and input wiring

use crossterm::event::{KeyCode, KeyEvent};
use rand::rngs::StdRng;
use rand::SeedableRng;

use tui_2048::core::Board;
use tui_2048::engine::{Session, SessionConfig, StepResult};
use tui_2048::input::handle_key_event;
use tui_2048::types::{GameAction, GameStatus, Grid, Position};

/// One empty cell whose neighbours (8 and 16) can never match a new tile.
const ONE_MOVE_LEFT: Grid = [[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 16], [4, 2, 8, 0]];

fn seeded(seed: u64) -> Session {
    Session::new(SessionConfig { seed: Some(seed) })
}

#[test]
fn test_game_lifecycle() {
    let mut session = seeded(12345);
    assert_eq!(session.status(), GameStatus::Active);
    assert_eq!(session.games(), 1);
    assert_eq!(session.moves(), 0);
    assert_eq!(session.board().occupied(), 2);

    for action in [GameAction::MoveLeft, GameAction::MoveUp] {
        assert!(matches!(session.apply(action), StepResult::Moved(_)));
    }
    assert_eq!(session.moves(), 2);
    assert_eq!(session.status(), GameStatus::Active);
}

#[test]
fn test_seeded_sessions_replay_identically() {
    let mut a = seeded(99);
    let mut b = seeded(99);
    assert_eq!(a.board().grid(), b.board().grid());

    for action in [
        GameAction::MoveDown,
        GameAction::MoveRight,
        GameAction::MoveUp,
        GameAction::MoveLeft,
    ] {
        assert_eq!(a.apply(action), b.apply(action));
    }
    assert_eq!(a.board().grid(), b.board().grid());
    assert_eq!(a.board().score(), b.board().score());
}

#[test]
fn test_restart_starts_fresh_game() {
    let mut session = seeded(5);
    for _ in 0..10 {
        session.apply(GameAction::MoveLeft);
        session.apply(GameAction::MoveDown);
    }

    assert_eq!(session.apply(GameAction::Restart), StepResult::Restarted);
    assert_eq!(session.games(), 2);
    assert_eq!(session.moves(), 0);
    assert_eq!(session.board().score(), 0);
    assert_eq!(session.board().occupied(), 2);
    assert_eq!(session.status(), GameStatus::Active);

    // Game 2 of base seed 5 is seeded with 6.
    assert_eq!(session.board().grid(), Board::with_seed(6).grid());
}

#[test]
fn test_final_move_ends_game_and_locks_input() {
    let board = Board::from_grid(ONE_MOVE_LEFT, StdRng::seed_from_u64(3)).unwrap();
    let mut session = Session::from_board(board, SessionConfig::default());
    assert_eq!(session.status(), GameStatus::Active);

    let outcome = match session.apply(GameAction::MoveLeft) {
        StepResult::GameOver(outcome) => outcome,
        other => panic!("expected game over, got {:?}", other),
    };
    assert!(!outcome.moved);
    assert_eq!(outcome.spawned.map(|(pos, _)| pos), Some(Position::new(3, 3)));
    assert_eq!(session.status(), GameStatus::Ended);
    assert!(session.board().is_end_game());

    let locked = *session.board().grid();
    assert_eq!(session.apply(GameAction::MoveRight), StepResult::Ignored);
    assert_eq!(*session.board().grid(), locked);
    assert_eq!(session.moves(), 1);

    // A restart is still accepted.
    assert_eq!(session.apply(GameAction::Restart), StepResult::Restarted);
    assert_eq!(session.status(), GameStatus::Active);
}

#[test]
fn test_random_session_reaches_game_over() {
    let mut session = seeded(2024);
    let order = [
        GameAction::MoveLeft,
        GameAction::MoveDown,
        GameAction::MoveRight,
        GameAction::MoveUp,
    ];

    let mut last_score = 0;
    let mut i = 0usize;
    while session.status() == GameStatus::Active {
        session.apply(order[i % order.len()]);
        assert!(session.board().score() >= last_score);
        last_score = session.board().score();
        i += 1;
        assert!(i < 1_000_000, "game did not end");
    }

    assert!(session.board().is_end_game());
    assert_eq!(session.moves() as usize, i);
}

#[test]
fn test_key_events_drive_session() {
    let mut session = seeded(1);
    let keys = [KeyCode::Left, KeyCode::Char('w'), KeyCode::Right, KeyCode::Char('s')];

    for code in keys {
        let action = handle_key_event(KeyEvent::from(code)).unwrap();
        assert!(session.apply(action).changed());
    }
    assert_eq!(session.moves(), 4);

    let restart = handle_key_event(KeyEvent::from(KeyCode::Char('r'))).unwrap();
    assert_eq!(session.apply(restart), StepResult::Restarted);
}
