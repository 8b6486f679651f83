use rand::rngs::StdRng;
use rand::SeedableRng;

use tui_2048::core::Board;
use tui_2048::term::{tile_style, AnchorY, GameView, Viewport, BOARD_H, BOARD_W};
use tui_2048::types::{GameStatus, Grid};

fn board(grid: Grid) -> Board {
    Board::from_grid(grid, StdRng::seed_from_u64(1)).unwrap()
}

fn sample() -> Board {
    board([[2048, 0, 0, 0], [0, 0, 0, 16], [0, 4, 0, 0], [0, 0, 0, 0]])
}

#[test]
fn term_view_centers_board_in_80x24() {
    let view = GameView::default();
    let vp = Viewport::new(80, 24);
    assert_eq!(view.board_origin(vp), ((80 - BOARD_W) / 2, (24 - BOARD_H) / 2));
    assert_eq!(view.board_origin(vp), (24, 6));
}

#[test]
fn term_view_draws_score_line_above_board() {
    let fb = GameView::default().render(&sample(), GameStatus::Active, Viewport::new(80, 24));

    let row = fb.row_text(4);
    assert!(row.contains("Score:          0"), "{:?}", row);
    assert_eq!(row.find("Score:"), Some(31));
}

#[test]
fn term_view_centers_tile_values() {
    let fb = GameView::default().render(&sample(), GameStatus::Active, Viewport::new(80, 24));

    // 2048 at (0, 0): tile spans x 24..32, y 6..9; digits on the middle row.
    let digits: String = (26..30).map(|x| fb.get(x, 7).unwrap().ch).collect();
    assert_eq!(digits, "2048");
    assert_eq!(fb.get(25, 7).unwrap().ch, ' ');
    assert_eq!(fb.get(24, 6).unwrap().style, tile_style(2048));

    // 16 at (1, 3): tile spans x 48..56, y 9..12.
    assert_eq!(fb.get(51, 10).unwrap().ch, '1');
    assert_eq!(fb.get(52, 10).unwrap().ch, '6');

    // 4 at (2, 1): tile spans x 32..40, y 12..15.
    assert_eq!(fb.get(35, 13).unwrap().ch, '4');
    assert_eq!(fb.get(35, 13).unwrap().style, tile_style(4));

    // Empty cells carry the empty-tile colour and no digits.
    let empty = fb.get(44, 19 - 2).unwrap();
    assert_eq!(empty.ch, ' ');
    assert_eq!(empty.style, tile_style(0));
}

#[test]
fn term_view_game_over_overlay_only_when_ended() {
    let view = GameView::default();
    let vp = Viewport::new(80, 24);
    let b = sample();

    let active = view.render(&b, GameStatus::Active, vp);
    assert!((0..24).all(|y| !active.row_text(y).contains("GAME OVER")));

    let ended = view.render(&b, GameStatus::Ended, vp);
    assert!(ended.row_text(11).contains("GAME OVER"));
    assert!(ended.row_text(12).contains("r: new game"));
}

#[test]
fn term_view_draws_hint_below_board() {
    let fb = GameView::default().render(&sample(), GameStatus::Active, Viewport::new(80, 24));
    assert!(fb.row_text(19).contains("q quit"));
}

#[test]
fn term_view_top_anchor_keeps_score_on_first_row() {
    let view = GameView::default().with_anchor_y(AnchorY::Top);
    let fb = view.render(&sample(), GameStatus::Active, Viewport::new(80, 40));

    assert!(fb.row_text(0).contains("Score:"));
    let digits: String = (26..30).map(|x| fb.get(x, 3).unwrap().ch).collect();
    assert_eq!(digits, "2048");
}

#[test]
fn term_view_survives_tiny_viewport() {
    let view = GameView::default();
    for (w, h) in [(0, 0), (1, 1), (10, 5), (31, 11)] {
        let fb = view.render(&sample(), GameStatus::Ended, Viewport::new(w, h));
        assert_eq!((fb.width(), fb.height()), (w, h));
    }
}

#[test]
fn term_view_render_into_reuses_buffer_across_sizes() {
    let view = GameView::default();
    let b = sample();
    let mut fb = view.render(&b, GameStatus::Active, Viewport::new(40, 20));

    view.render_into(&b, GameStatus::Active, Viewport::new(80, 24), &mut fb);
    let fresh = view.render(&b, GameStatus::Active, Viewport::new(80, 24));
    assert_eq!(fb, fresh);
}
