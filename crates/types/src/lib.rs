//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (engine, controller, terminal rendering).
//!
//! # Board Dimensions
//!
//! The board is a fixed 4x4 grid:
//!
//! - **Rows**: indexed 0-3, top to bottom
//! - **Columns**: indexed 0-3, left to right
//! - **Cells**: 16, stored row-major
//!
//! # Tile Values
//!
//! | Value | Meaning |
//! |-------|---------|
//! | `0` | Empty cell |
//! | `2`, `4`, `8`, ... | A tile; always a power of two |
//!
//! New tiles spawn as `2`, or as `4` with probability 1 in [`FOUR_ODDS`].
//!
//! # Examples
//!
//! ```
//! use tui_2048_types::{Direction, GameAction, Position, BOARD_SIZE};
//!
//! assert_eq!(BOARD_SIZE, 4);
//!
//! let action = GameAction::MoveLeft;
//! assert_eq!(action.direction(), Some(Direction::Left));
//!
//! let pos = Position::new(1, 2);
//! assert_eq!(pos.step(Direction::Up), Some(Position::new(0, 2)));
//! assert_eq!(Position::new(0, 2).step(Direction::Up), None);
//! ```

/// Board side length (4 rows, 4 columns)
pub const BOARD_SIZE: usize = 4;

/// Total number of cells on the board
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// Number of tiles placed on a fresh board
pub const START_TILES: usize = 2;

/// A spawned tile is a 4 with probability `1 / FOUR_ODDS`, otherwise a 2
pub const FOUR_ODDS: u32 = 4;

/// A single cell value. `0` is empty, anything else is a power of two.
pub type Tile = u32;

/// The grid, indexed `[row][col]`.
pub type Grid = [[Tile; BOARD_SIZE]; BOARD_SIZE];

/// Returns true if `value` may legally occupy a cell.
///
/// ```
/// use tui_2048_types::is_valid_tile;
///
/// assert!(is_valid_tile(0));
/// assert!(is_valid_tile(2));
/// assert!(is_valid_tile(2048));
/// assert!(!is_valid_tile(1));
/// assert!(!is_valid_tile(6));
/// ```
pub fn is_valid_tile(value: Tile) -> bool {
    value == 0 || (value >= 2 && value.is_power_of_two())
}

/// A (row, column) pair on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// True if the last column of its row.
    pub fn is_end_of_row(&self) -> bool {
        self.col + 1 == BOARD_SIZE
    }

    /// The neighbouring position one step in `dir`, or `None` at the edge.
    pub fn step(&self, dir: Direction) -> Option<Self> {
        let (dr, dc) = dir.delta();
        let row = self.row.checked_add_signed(dr)?;
        let col = self.col.checked_add_signed(dc)?;
        if row >= BOARD_SIZE || col >= BOARD_SIZE {
            return None;
        }
        Some(Self { row, col })
    }
}

/// The four directions tiles can be pushed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];

    /// (row, col) offset of one step in this direction.
    ///
    /// ```
    /// use tui_2048_types::Direction;
    ///
    /// assert_eq!(Direction::Left.delta(), (0, -1));
    /// assert_eq!(Direction::Down.delta(), (1, 0));
    /// ```
    pub fn delta(&self) -> (isize, isize) {
        match self {
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Left => "left",
            Direction::Right => "right",
            Direction::Up => "up",
            Direction::Down => "down",
        }
    }
}

/// Actions a player (or any other controller) can request.
///
/// Exiting is not an action: it never reaches the game and is handled by the
/// input loop directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Push all tiles left
    MoveLeft,
    /// Push all tiles right
    MoveRight,
    /// Push all tiles up
    MoveUp,
    /// Push all tiles down
    MoveDown,
    /// Throw away the current board and start a new game
    Restart,
}

impl GameAction {
    /// The direction of a move action, `None` for anything else.
    pub fn direction(&self) -> Option<Direction> {
        match self {
            GameAction::MoveLeft => Some(Direction::Left),
            GameAction::MoveRight => Some(Direction::Right),
            GameAction::MoveUp => Some(Direction::Up),
            GameAction::MoveDown => Some(Direction::Down),
            GameAction::Restart => None,
        }
    }

    /// Convert to camelCase string (used in logs)
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::MoveUp => "moveUp",
            GameAction::MoveDown => "moveDown",
            GameAction::Restart => "restart",
        }
    }
}

impl From<Direction> for GameAction {
    fn from(dir: Direction) -> Self {
        match dir {
            Direction::Left => GameAction::MoveLeft,
            Direction::Right => GameAction::MoveRight,
            Direction::Up => GameAction::MoveUp,
            Direction::Down => GameAction::MoveDown,
        }
    }
}

/// Lifecycle of a single game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameStatus {
    /// Moves are accepted.
    #[default]
    Active,
    /// Board is full and locked; only a restart is meaningful.
    Ended,
}

impl GameStatus {
    pub fn is_over(&self) -> bool {
        matches!(self, GameStatus::Ended)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_stays_in_bounds() {
        let corner = Position::new(0, 0);
        assert_eq!(corner.step(Direction::Left), None);
        assert_eq!(corner.step(Direction::Up), None);
        assert_eq!(corner.step(Direction::Right), Some(Position::new(0, 1)));
        assert_eq!(corner.step(Direction::Down), Some(Position::new(1, 0)));

        let far = Position::new(BOARD_SIZE - 1, BOARD_SIZE - 1);
        assert_eq!(far.step(Direction::Right), None);
        assert_eq!(far.step(Direction::Down), None);
    }

    #[test]
    fn action_direction_roundtrip() {
        for dir in Direction::ALL {
            assert_eq!(GameAction::from(dir).direction(), Some(dir));
        }
        assert_eq!(GameAction::Restart.direction(), None);
    }

    #[test]
    fn end_of_row_is_last_column_only() {
        assert!(Position::new(2, BOARD_SIZE - 1).is_end_of_row());
        assert!(!Position::new(2, 0).is_end_of_row());
    }
}
