//! Board module - the 2048 grid engine
//!
//! The board is a 4x4 grid of tiles plus the running score and the board's own
//! seeded random source. All four moves share a single sweep routine that is
//! parameterised by direction; spawning and end-of-game detection live here too.
//! Coordinates: (row, col) with row 0 at the top and col 0 on the left.

use std::iter::FusedIterator;

use arrayvec::ArrayVec;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::rng;
use crate::types::{
    is_valid_tile, Direction, Grid, Position, Tile, BOARD_SIZE, CELL_COUNT, START_TILES,
};

/// What a single move did to the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MoveOutcome {
    /// Whether any tile slid or merged.
    pub moved: bool,
    /// Number of merge events.
    pub merges: u32,
    /// Points added to the score (sum of merged tile values).
    pub points: u32,
    /// Where the new tile landed, if there was room for one.
    pub spawned: Option<(Position, Tile)>,
}

/// One step of the row-major board traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellVisit {
    pub pos: Position,
    /// Last column of its row; renderers start a new display row after it.
    pub end_of_row: bool,
    pub value: Tile,
}

/// The game board: grid, score and the per-game random source.
#[derive(Debug, Clone)]
pub struct Board<R = StdRng> {
    grid: Grid,
    score: u32,
    rng: R,
}

impl Board<StdRng> {
    /// Create a new board seeded from the wall clock, with two starting tiles.
    pub fn new() -> Self {
        Self::with_seed(rng::clock_seed())
    }

    /// Create a new board from an explicit seed (reproducible games).
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl Default for Board<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> Board<R> {
    #[inline(always)]
    fn at(&self, pos: Position) -> Tile {
        self.grid[pos.row][pos.col]
    }

    #[inline(always)]
    fn put(&mut self, pos: Position, value: Tile) {
        self.grid[pos.row][pos.col] = value;
    }

    /// Current score
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Score formatted for display: `"Score: "` and a 10-wide right-justified value.
    pub fn display_score(&self) -> String {
        format!("Score: {:>10}", self.score)
    }

    /// Get the tile at `pos`, or `None` if out of bounds
    pub fn get(&self, pos: Position) -> Option<Tile> {
        if pos.row >= BOARD_SIZE || pos.col >= BOARD_SIZE {
            return None;
        }
        Some(self.at(pos))
    }

    /// Borrow the raw grid
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Number of nonzero cells
    pub fn occupied(&self) -> usize {
        self.grid.iter().flatten().filter(|&&v| v != 0).count()
    }

    /// Largest tile on the board (0 on an empty board)
    pub fn highest_tile(&self) -> Tile {
        self.grid.iter().flatten().copied().max().unwrap_or(0)
    }

    /// Row-major traversal of every cell.
    ///
    /// Finite (16 items) and restartable: each call starts from (0, 0).
    pub fn cells(&self) -> Cells<'_> {
        Cells {
            grid: &self.grid,
            idx: 0,
        }
    }

    /// Callback form of [`Board::cells`]: `visit(position, end_of_row, value)`
    /// is invoked once per cell in row-major order.
    pub fn render_board<F>(&self, mut visit: F)
    where
        F: FnMut(Position, bool, Tile),
    {
        for cell in self.cells() {
            visit(cell.pos, cell.end_of_row, cell.value);
        }
    }

    /// True once the board is full and no two orthogonal neighbours match.
    pub fn is_end_game(&self) -> bool {
        if self.cells().any(|c| c.value == 0) {
            return false;
        }

        // Checking right and down covers every adjacent pair once.
        for cell in self.cells() {
            for dir in [Direction::Right, Direction::Down] {
                if let Some(next) = cell.pos.step(dir) {
                    if self.at(next) == cell.value {
                        return false;
                    }
                }
            }
        }

        true
    }
}

impl<R: Rng> Board<R> {
    /// Create a new board using the given random source, with two starting tiles.
    pub fn with_rng(rng: R) -> Self {
        let mut board = Self {
            grid: [[0; BOARD_SIZE]; BOARD_SIZE],
            score: 0,
            rng,
        };
        for _ in 0..START_TILES {
            board.spawn_tile();
        }
        board
    }

    /// Build a board from an explicit grid (score 0, nothing spawned).
    ///
    /// Returns `None` if any cell is neither 0 nor a power of two ≥ 2.
    pub fn from_grid(grid: Grid, rng: R) -> Option<Self> {
        if !grid.iter().flatten().all(|&v| is_valid_tile(v)) {
            return None;
        }
        Some(Self {
            grid,
            score: 0,
            rng,
        })
    }

    pub fn move_left(&mut self) {
        self.make_move(Direction::Left);
    }

    pub fn move_right(&mut self) {
        self.make_move(Direction::Right);
    }

    pub fn move_up(&mut self) {
        self.make_move(Direction::Up);
    }

    pub fn move_down(&mut self) {
        self.make_move(Direction::Down);
    }

    /// Slide and merge toward `dir`, then attempt one spawn.
    ///
    /// The spawn is attempted whether or not anything moved; it only fails
    /// when the board has no empty cell.
    pub fn make_move(&mut self, dir: Direction) -> MoveOutcome {
        let mut outcome = self.shift(dir);
        outcome.spawned = self.spawn_tile();
        outcome
    }

    /// Slide/merge pass with no randomness.
    ///
    /// Runs `BOARD_SIZE - 1` sweeps. Each sweep walks every lane from the edge
    /// tiles move toward, outward, resolving one step per (current, target)
    /// pair. `merged` follows a tile as it slides so a merge result never
    /// merges again in the same move.
    fn shift(&mut self, dir: Direction) -> MoveOutcome {
        let mut merged = [[false; BOARD_SIZE]; BOARD_SIZE];
        let mut outcome = MoveOutcome::default();

        for _ in 1..BOARD_SIZE {
            for lane in 0..BOARD_SIZE {
                for depth in 1..BOARD_SIZE {
                    let cur = sweep_position(dir, lane, depth);
                    let Some(target) = cur.step(dir) else {
                        continue;
                    };

                    let value = self.at(cur);
                    if value == 0 {
                        continue;
                    }

                    let dest = self.at(target);
                    if dest == 0 {
                        self.put(target, value);
                        self.put(cur, 0);
                        merged[target.row][target.col] = merged[cur.row][cur.col];
                        merged[cur.row][cur.col] = false;
                        outcome.moved = true;
                    } else if dest == value
                        && !merged[target.row][target.col]
                        && !merged[cur.row][cur.col]
                    {
                        let sum = value * 2;
                        self.put(target, sum);
                        self.put(cur, 0);
                        merged[target.row][target.col] = true;
                        merged[cur.row][cur.col] = false;
                        outcome.moved = true;
                        outcome.merges += 1;
                        outcome.points += sum;
                    }
                }
            }
        }

        self.score = self.score.saturating_add(outcome.points);
        outcome
    }

    /// Place a 2 (or, 1 time in 4, a 4) on a uniformly chosen empty cell.
    fn spawn_tile(&mut self) -> Option<(Position, Tile)> {
        let value = rng::tile_value(&mut self.rng);

        let empty: ArrayVec<Position, CELL_COUNT> = self
            .cells()
            .filter(|c| c.value == 0)
            .map(|c| c.pos)
            .collect();
        if empty.is_empty() {
            return None;
        }

        let pos = empty[rng::pick(&mut self.rng, empty.len())];
        self.put(pos, value);
        Some((pos, value))
    }
}

/// Position `depth` cells away from the edge `dir` pushes toward, within `lane`.
///
/// A lane is a row for horizontal moves and a column for vertical ones.
#[inline(always)]
fn sweep_position(dir: Direction, lane: usize, depth: usize) -> Position {
    let far = BOARD_SIZE - 1 - depth;
    match dir {
        Direction::Left => Position::new(lane, depth),
        Direction::Right => Position::new(lane, far),
        Direction::Up => Position::new(depth, lane),
        Direction::Down => Position::new(far, lane),
    }
}

/// Iterator returned by [`Board::cells`].
#[derive(Debug, Clone)]
pub struct Cells<'a> {
    grid: &'a Grid,
    idx: usize,
}

impl Iterator for Cells<'_> {
    type Item = CellVisit;

    fn next(&mut self) -> Option<CellVisit> {
        if self.idx >= CELL_COUNT {
            return None;
        }
        let pos = Position::new(self.idx / BOARD_SIZE, self.idx % BOARD_SIZE);
        self.idx += 1;
        Some(CellVisit {
            pos,
            end_of_row: pos.is_end_of_row(),
            value: self.grid[pos.row][pos.col],
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = CELL_COUNT.saturating_sub(self.idx);
        (left, Some(left))
    }
}

impl ExactSizeIterator for Cells<'_> {}

impl FusedIterator for Cells<'_> {}
