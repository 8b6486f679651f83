//! Session: the controller that owns exactly one board at a time.
//!
//! The board engine does not refuse moves after the game has ended; this is
//! where that gate lives, along with restarts and lifecycle logging.

use log::{debug, info, trace};

use crate::core::{clock_seed, Board, MoveOutcome};
use crate::types::{GameAction, GameStatus};

/// Session-wide settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SessionConfig {
    /// Base seed. Game `k` (1-based) is seeded with `seed + k - 1`.
    /// `None` seeds every game from the wall clock.
    pub seed: Option<u64>,
}

/// Result of applying one action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepResult {
    /// A move was applied and the game goes on.
    Moved(MoveOutcome),
    /// A move was applied and it ended the game.
    GameOver(MoveOutcome),
    /// A move arrived after the game ended; nothing changed.
    Ignored,
    /// A fresh board replaced the old one.
    Restarted,
}

impl StepResult {
    /// Whether the board (and therefore the screen) changed.
    pub fn changed(&self) -> bool {
        !matches!(self, StepResult::Ignored)
    }
}

#[derive(Debug, Clone)]
pub struct Session {
    board: Board,
    status: GameStatus,
    config: SessionConfig,
    /// Games started so far, including the current one.
    games: u32,
    /// Moves applied in the current game.
    moves: u32,
}

impl Session {
    pub fn new(config: SessionConfig) -> Self {
        let seed = seed_for_game(config, 1);
        info!("game 1 started (seed {})", seed);
        Self {
            board: Board::with_seed(seed),
            status: GameStatus::Active,
            config,
            games: 1,
            moves: 0,
        }
    }

    /// Adopt an existing board as game 1.
    pub fn from_board(board: Board, config: SessionConfig) -> Self {
        let status = if board.is_end_game() {
            GameStatus::Ended
        } else {
            GameStatus::Active
        };
        Self {
            board,
            status,
            config,
            games: 1,
            moves: 0,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn games(&self) -> u32 {
        self.games
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn apply(&mut self, action: GameAction) -> StepResult {
        let Some(dir) = action.direction() else {
            self.restart();
            return StepResult::Restarted;
        };

        if self.status.is_over() {
            trace!("{} ignored: game {} is over", action.as_str(), self.games);
            return StepResult::Ignored;
        }

        let outcome = self.board.make_move(dir);
        self.moves += 1;
        debug!(
            "{}: moved={} merges={} points={} spawned={:?} score={}",
            action.as_str(),
            outcome.moved,
            outcome.merges,
            outcome.points,
            outcome.spawned,
            self.board.score()
        );

        if self.board.is_end_game() {
            self.status = GameStatus::Ended;
            info!(
                "game {} over: score {}, highest tile {}, {} moves",
                self.games,
                self.board.score(),
                self.board.highest_tile(),
                self.moves
            );
            return StepResult::GameOver(outcome);
        }

        StepResult::Moved(outcome)
    }

    fn restart(&mut self) {
        self.games += 1;
        let seed = seed_for_game(self.config, self.games);
        info!(
            "game {} started (seed {}), previous score {}",
            self.games,
            seed,
            self.board.score()
        );
        self.board = Board::with_seed(seed);
        self.status = GameStatus::Active;
        self.moves = 0;
    }
}

fn seed_for_game(config: SessionConfig, game: u32) -> u64 {
    match config.seed {
        Some(base) => base.wrapping_add(u64::from(game) - 1),
        None => clock_seed(),
    }
}
