//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer for terminal play. It avoids widget
//! toolkits and instead renders into a simple framebuffer that is flushed to a
//! crossterm backend.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Keep the board-to-screen mapping pure (`GameView`) and the terminal I/O
//!   separate (`TerminalRenderer`)
//! - Redraw only what changed between frames

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_2048_core as core;
pub use tui_2048_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{tile_style, AnchorY, GameView, Viewport, BOARD_H, BOARD_W, TILE_H, TILE_W};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
