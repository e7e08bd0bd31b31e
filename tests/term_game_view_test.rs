use blockfall::core::Session;
use blockfall::input::KEY_HELP;
use blockfall::term::{AnchorY, GameView, Viewport};
use blockfall::types::{PieceKind, FILLED};

fn session_with_o() -> Session {
    let mut session = Session::new(1);
    assert!(session.spawn_kind(PieceKind::O));
    session
}

#[test]
fn term_view_renders_border_corners() {
    let snap = Session::new(1).snapshot();
    let view = GameView::default();

    // 12 cells * 2 columns + border = 26, 20 rows + border = 22.
    let fb = view.render(&snap, Viewport::new(26, 22));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(25, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 21).unwrap().ch, '└');
    assert_eq!(fb.get(25, 21).unwrap().ch, '┘');
}

#[test]
fn term_view_renders_locked_cell_as_two_chars_wide() {
    let mut session = session_with_o();
    session.board_mut().set(0, 19, FILLED);
    let snap = session.snapshot();

    let fb = GameView::default().render(&snap, Viewport::new(26, 22));

    let locked = fb.get(1, 20).unwrap();
    assert_eq!(locked.ch, '█');
    assert_eq!(fb.get(2, 20).unwrap().ch, '█');
    assert_eq!(fb.get(3, 20).unwrap().ch, '·');

    // Active O at (5, 0) covers columns 11..15 of row 1, drawn differently.
    let active = fb.get(11, 1).unwrap();
    assert_eq!(active.ch, '█');
    assert_ne!(active.style, locked.style);
    assert_eq!(fb.get(14, 1).unwrap().ch, '█');
    assert_eq!(fb.get(15, 1).unwrap().ch, '·');
}

#[test]
fn term_view_shows_pause_and_game_over_overlays() {
    let mut session = session_with_o();
    session.toggle_pause();
    let view = GameView::default().with_anchor_y(AnchorY::Top);
    let fb = view.render(&session.snapshot(), Viewport::new(26, 30));
    assert!(fb.row_text(11).contains("PAUSED"));

    let mut snap = session.snapshot();
    snap.paused = false;
    snap.game_over = true;
    let fb = view.render(&snap, Viewport::new(26, 30));
    assert!(fb.row_text(11).contains("GAME OVER"));
    assert!(!fb.row_text(11).contains("PAUSED"));
}

#[test]
fn term_view_side_panel_shows_score_and_help() {
    let mut session = session_with_o();
    session.board_mut().fill_row(19, FILLED);
    session.clear_lines();

    let view = GameView::default()
        .with_help(&KEY_HELP)
        .with_anchor_y(AnchorY::Top);
    let fb = view.render(&session.snapshot(), Viewport::new(80, 24));

    let text: Vec<String> = (0..24).map(|y| fb.row_text(y)).collect();
    assert!(text[0].contains("SCORE"));
    assert!(text[1].contains("100"));
    assert!(text[4].contains("PLAYING"));
    assert!(text.iter().any(|row| row.contains(KEY_HELP[0].1)));
}

#[test]
fn term_view_skips_panel_when_narrow() {
    let snap = session_with_o().snapshot();
    let fb = GameView::default().render(&snap, Viewport::new(30, 22));
    assert!((0..22).all(|y| !fb.row_text(y).contains("SCORE")));
}
