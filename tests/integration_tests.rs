//! End-to-end game flow through the driver, plus the snapshot wire form.

use blockfall::core::Session;
use blockfall::engine::{Driver, DriverConfig, ScoreDisplay};
use blockfall::types::{GameAction, MoveOutcome, PieceKind, FILLED};

#[test]
fn test_gravity_alone_ends_the_game() {
    let mut driver = Driver::new(&DriverConfig::default(), 7).unwrap();

    let mut ticks = 0;
    while !driver.session().game_over() {
        ticks += driver.advance(1000).ticks;
        assert!(ticks < 10_000, "game never ended");
    }

    // Pieces stack in the middle columns, so no row ever fills.
    assert_eq!(driver.session().score(), 0);
    assert!(driver.session().active().is_none());
    assert_eq!(driver.advance(60_000).ticks, 0);

    let r = driver.dispatch(GameAction::Restart);
    assert_eq!(r.outcome, Some(MoveOutcome::Restarted));
    assert!(driver.running());
    assert_eq!(driver.session().board().filled_count(), 0);
}

#[test]
fn test_player_commands_interleave_with_gravity() {
    let config = DriverConfig {
        gravity_ms: 100,
        ..DriverConfig::default()
    };
    let mut driver = Driver::new(&config, 3).unwrap();
    assert!(driver.session_mut().spawn_kind(PieceKind::O));

    assert_eq!(driver.dispatch(GameAction::MoveLeft).outcome, Some(MoveOutcome::Moved));
    assert_eq!(driver.dispatch(GameAction::MoveLeft).outcome, Some(MoveOutcome::Moved));
    driver.advance(250);
    let piece = driver.session().active().unwrap();
    assert_eq!((piece.x, piece.y), (3, 2));
    assert_eq!(driver.until_next_tick(), Some(50));

    for _ in 0..16 {
        driver.dispatch(GameAction::MoveDown);
    }
    let r = driver.dispatch(GameAction::MoveDown);
    assert_eq!(r.outcome, Some(MoveOutcome::Locked { lines_cleared: 0 }));
    assert_eq!(driver.session().board().get(3, 19), Some(FILLED));
    assert_eq!(driver.session().board().get(4, 18), Some(FILLED));
}

#[test]
fn test_score_reported_when_line_clears() {
    let mut driver = Driver::new(&DriverConfig::default(), 21).unwrap();
    {
        let session = driver.session_mut();
        assert!(session.spawn_kind(PieceKind::I));
        let board = session.board_mut();
        board.fill_row(19, FILLED);
        for x in 4..8 {
            board.set(x, 19, 0);
        }
    }

    // 19 ticks to reach the floor, one more to lock.
    let mut display = ScoreDisplay::new(&driver);
    let mut last = None;
    for _ in 0..20 {
        let r = driver.advance(1000);
        display.observe(&r);
        last = Some(r);
    }
    let r = last.unwrap();
    assert_eq!(r.outcome, Some(MoveOutcome::Locked { lines_cleared: 1 }));
    assert_eq!(r.score, Some(100));
    assert_eq!(display.shown(), 100);
    assert_eq!(driver.session().board().filled_count(), 0);

    assert!(display.observe(&driver.dispatch(GameAction::Restart)));
    assert_eq!(display.shown(), 0);
}

#[test]
fn test_snapshot_serializes_to_json() {
    let mut session = Session::new(1);
    assert!(session.spawn_kind(PieceKind::O));
    session.board_mut().set(0, 19, FILLED);

    let json = serde_json::to_value(session.snapshot()).unwrap();
    assert_eq!(json["width"], 12);
    assert_eq!(json["height"], 20);
    assert_eq!(json["board"].as_array().unwrap().len(), 240);
    assert_eq!(json["board"][19 * 12], 1);
    assert_eq!(json["score"], 0);
    assert_eq!(json["paused"], false);
    assert_eq!(json["gameOver"], false);
    assert_eq!(json["active"]["kind"], "o");
    assert_eq!(json["active"]["x"], 5);
    assert_eq!(json["active"]["y"], 0);
    assert_eq!(json["active"]["shape"], serde_json::json!([[1, 1], [1, 1]]));
}

#[test]
fn test_actions_round_trip_through_json_names() {
    let action: GameAction = serde_json::from_str("\"togglePause\"").unwrap();
    assert_eq!(action, GameAction::TogglePause);
    assert_eq!(serde_json::to_string(&GameAction::MoveLeft).unwrap(), "\"moveLeft\"");

    let outcome = serde_json::to_value(MoveOutcome::Locked { lines_cleared: 2 }).unwrap();
    assert_eq!(outcome, serde_json::json!({"type": "locked", "linesCleared": 2}));
    assert_eq!(
        serde_json::to_value(MoveOutcome::Restarted).unwrap(),
        serde_json::json!({"type": "restarted"})
    );
}
