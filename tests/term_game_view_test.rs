use tetris_classic::core::{Game, GameSnapshot};
use tetris_classic::leaderboard::LeaderboardEntry;
use tetris_classic::term::{AnchorY, GameView, PanelInfo, Viewport};
use tetris_classic::types::PieceKind;

fn screen_text(fb: &tetris_classic::term::FrameBuffer) -> String {
    (0..fb.height())
        .map(|y| fb.row_text(y))
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn term_view_renders_border_corners() {
    let snap = Game::new(1).snapshot();
    let view = GameView::default();

    // 10*2 x 20*1 board pixels plus border => 22x22
    let fb = view.render(&snap, &PanelInfo::default(), Viewport::new(22, 22));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(21, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 21).unwrap().ch, '└');
    assert_eq!(fb.get(21, 21).unwrap().ch, '┘');
}

#[test]
fn term_view_renders_locked_cell_as_two_chars_wide() {
    let mut snap = Game::new(1).snapshot();
    snap.board[19][0] = PieceKind::I.cell_value();
    snap.active = None;
    snap.ghost_y = None;

    let fb = GameView::default().render(&snap, &PanelInfo::default(), Viewport::new(22, 22));

    assert_eq!(fb.get(1, 20).unwrap().ch, '█');
    assert_eq!(fb.get(2, 20).unwrap().ch, '█');
    assert_eq!(fb.get(3, 20).unwrap().ch, '·');
}

#[test]
fn term_view_after_hard_drop_shows_locked_piece() {
    let mut game = Game::new(1);
    game.hard_drop();

    let view = GameView::default().with_anchor_y(AnchorY::Top);
    let fb = view.render(&game.snapshot(), &PanelInfo::default(), Viewport::new(22, 22));

    // J locked at (3,18), (3..=5,19)
    assert_eq!(fb.get(1 + 3 * 2, 1 + 18).unwrap().ch, '█');
    for x in 3..=5u16 {
        assert_eq!(fb.get(1 + x * 2, 1 + 19).unwrap().ch, '█');
    }
}

#[test]
fn term_view_draws_side_panel_when_wide_enough() {
    let mut snap = Game::new(1).snapshot();
    snap.score = 1234;
    snap.level = 2;
    snap.lines = 21;

    let scores = [LeaderboardEntry::new("zoe", 4000, 40, 4)];
    let panel = PanelInfo {
        paused: false,
        player: "sam",
        high_scores: &scores,
    };
    let fb = GameView::default().render(&snap, &panel, Viewport::new(60, 22));
    let text = screen_text(&fb);

    for needle in ["SCORE", "1234", "LEVEL", "LINES", "21", "NEXT", "sam", "4000 zoe"] {
        assert!(text.contains(needle), "missing {:?}", needle);
    }
}

#[test]
fn term_view_inert_snapshot_shows_game_over() {
    let fb = GameView::default().render(
        &GameSnapshot::inert(),
        &PanelInfo::default(),
        Viewport::new(40, 24),
    );
    assert!(screen_text(&fb).contains("GAME OVER"));
}
