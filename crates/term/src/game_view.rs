//! GameView: maps a `core::Board` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::Board;
use crate::fb::{decimal_width, CellStyle, FrameBuffer, Rgb};
use crate::types::{GameStatus, Tile, BOARD_SIZE};

/// Tile width in terminal columns.
pub const TILE_W: u16 = 8;

/// Tile height in terminal rows.
pub const TILE_H: u16 = 3;

/// Board width in terminal columns.
pub const BOARD_W: u16 = TILE_W * BOARD_SIZE as u16;

/// Board height in terminal rows.
pub const BOARD_H: u16 = TILE_H * BOARD_SIZE as u16;

/// Rows between the score line and the top of the board.
const SCORE_GAP: u16 = 2;

const SCORE_LABEL: &str = "Score: ";
const SCORE_WIDTH: u16 = 10;

const HINT: &str = "arrows/wasd move  r new game  q quit";
const GAME_OVER: &str = "GAME OVER";
const GAME_OVER_HINT: &str = "r: new game  q: quit";

const BACKDROP: Rgb = Rgb::new(0, 0, 0);
const DARK_TEXT: Rgb = Rgb::new(119, 110, 101);
const LIGHT_TEXT: Rgb = Rgb::new(249, 246, 242);

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// A lightweight terminal renderer for the 2048 board.
#[derive(Debug, Clone, Copy)]
pub struct GameView {
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        Self {
            anchor_y: AnchorY::Center,
        }
    }
}

impl GameView {
    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Top-left corner of the board inside `viewport`.
    ///
    /// With `AnchorY::Top` the score line sits on row 0 and the board below it.
    pub fn board_origin(&self, viewport: Viewport) -> (u16, u16) {
        let x = viewport.width.saturating_sub(BOARD_W) / 2;
        let y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(BOARD_H) / 2,
            AnchorY::Top => SCORE_GAP,
        };
        (x, y)
    }

    /// Render the board into an existing framebuffer.
    ///
    /// This is the allocation-free hot path. Callers can reuse a framebuffer
    /// across frames and only resize when the terminal size changes.
    pub fn render_into<R>(
        &self,
        board: &Board<R>,
        status: GameStatus,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(crate::fb::Cell {
            ch: ' ',
            style: CellStyle::new(LIGHT_TEXT, BACKDROP),
        });

        let (start_x, start_y) = self.board_origin(viewport);
        let text = CellStyle::new(LIGHT_TEXT, BACKDROP);

        // Score line, centered over the board.
        let score_w = SCORE_LABEL.len() as u16 + SCORE_WIDTH;
        let score_x = viewport.width.saturating_sub(score_w) / 2;
        let score_y = start_y.saturating_sub(SCORE_GAP);
        fb.put_str(score_x, score_y, SCORE_LABEL, text.bold());
        fb.put_u32_right(
            score_x + SCORE_LABEL.len() as u16,
            score_y,
            SCORE_WIDTH,
            board.score(),
            text.bold(),
        );

        // Tiles, one display row per board row.
        let mut y = start_y;
        for cell in board.cells() {
            let x = start_x + cell.pos.col as u16 * TILE_W;
            self.draw_tile(fb, x, y, cell.value);
            if cell.end_of_row {
                y += TILE_H;
            }
        }

        let hint_y = start_y + BOARD_H + 1;
        if hint_y < viewport.height {
            let hint_x = viewport.width.saturating_sub(HINT.len() as u16) / 2;
            fb.put_str(hint_x, hint_y, HINT, text.dim());
        }

        if status.is_over() {
            self.draw_game_over(fb, start_x, start_y);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render<R>(&self, board: &Board<R>, status: GameStatus, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(board, status, viewport, &mut fb);
        fb
    }

    fn draw_tile(&self, fb: &mut FrameBuffer, x: u16, y: u16, value: Tile) {
        let style = tile_style(value);
        fb.fill_rect(x, y, TILE_W, TILE_H, ' ', style);
        if value == 0 {
            return;
        }
        let w = decimal_width(value);
        let vx = x + TILE_W.saturating_sub(w) / 2;
        fb.put_u32(vx, y + TILE_H / 2, value, style);
    }

    fn draw_game_over(&self, fb: &mut FrameBuffer, start_x: u16, start_y: u16) {
        let style = CellStyle::new(Rgb::new(255, 255, 255), BACKDROP).bold();
        let mid_y = start_y + BOARD_H / 2 - 1;

        let banner_w = GAME_OVER_HINT.len() as u16 + 2;
        let banner_x = start_x + BOARD_W.saturating_sub(banner_w) / 2;
        fb.fill_rect(banner_x, mid_y - 1, banner_w, 4, ' ', style);

        let x = start_x + BOARD_W.saturating_sub(GAME_OVER.len() as u16) / 2;
        fb.put_str(x, mid_y, GAME_OVER, style);
        let x = start_x + BOARD_W.saturating_sub(GAME_OVER_HINT.len() as u16) / 2;
        fb.put_str(x, mid_y + 1, GAME_OVER_HINT, CellStyle { bold: false, ..style });
    }
}

/// Colors for a tile: dark text on the small values, light text above.
pub fn tile_style(value: Tile) -> CellStyle {
    let bg = match value {
        0 => Rgb::new(205, 193, 180),
        2 => Rgb::new(238, 228, 218),
        4 => Rgb::new(237, 224, 200),
        8 => Rgb::new(242, 177, 121),
        16 => Rgb::new(245, 149, 99),
        32 => Rgb::new(246, 124, 95),
        64 => Rgb::new(246, 94, 59),
        128 => Rgb::new(237, 207, 114),
        256 => Rgb::new(237, 204, 97),
        512 => Rgb::new(237, 200, 80),
        1024 => Rgb::new(237, 197, 63),
        2048 => Rgb::new(237, 194, 46),
        _ => Rgb::new(60, 58, 50),
    };
    let fg = if value <= 4 { DARK_TEXT } else { LIGHT_TEXT };
    CellStyle::new(fg, bg).bold()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tile_colors_are_distinct_up_to_2048() {
        let mut seen = Vec::new();
        let mut v = 2;
        while v <= 2048 {
            let bg = tile_style(v).bg;
            assert!(!seen.contains(&bg), "duplicate color for {}", v);
            seen.push(bg);
            v *= 2;
        }
        assert_ne!(tile_style(0).bg, tile_style(2).bg);
        assert_eq!(tile_style(8192), tile_style(4096));
    }

    #[test]
    fn board_origin_centers() {
        let view = GameView::default();
        assert_eq!(view.board_origin(Viewport::new(80, 24)), ((80 - 32) / 2, (24 - 12) / 2));
        assert_eq!(view.board_origin(Viewport::new(10, 5)), (0, 0));

        let top = GameView::default().with_anchor_y(AnchorY::Top);
        assert_eq!(top.board_origin(Viewport::new(80, 24)).1, SCORE_GAP);
    }
}
