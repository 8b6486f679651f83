//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the 2048 board engine: grid state, the slide/merge
//! algorithm, random tile spawning and end-of-game detection.
//! It has **zero dependencies** on UI, networking, or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical games
//! - **Testable**: Every rule is covered by unit tests
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//! - **Fast**: No allocation on the move path
//!
//! # Module Structure
//!
//! - [`board`]: 4x4 grid, score, moves, spawning, end-of-game check
//! - [`rng`]: tile value and placement draws, clock seeding
//!
//! # Game Rules
//!
//! - **Moves**: all tiles slide toward one edge; equal neighbours merge once per move
//! - **Score**: every merge adds the merged tile's new value
//! - **Spawn**: after every move a 2 (or, 1 time in 4, a 4) lands on a random empty cell
//! - **End**: the board is full and no two orthogonal neighbours are equal
//!
//! # Example
//!
//! ```
//! use tui_2048_core::Board;
//!
//! let mut board = Board::with_seed(12345);
//! assert_eq!(board.occupied(), 2);
//!
//! board.move_left();
//! board.move_up();
//!
//! assert!(!board.is_end_game());
//! assert_eq!(board.cells().count(), 16);
//! ```

pub mod board;
pub mod rng;

pub use tui_2048_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, CellVisit, Cells, MoveOutcome};
pub use rng::clock_seed;
