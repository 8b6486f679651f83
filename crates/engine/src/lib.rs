//! Game controller.
//!
//! [`Session`] sits between input and the board engine: it owns the single
//! live [`Board`](tui_2048_core::Board), refuses moves once the game has ended,
//! starts new games on request and logs the game lifecycle through `log`.
//!
//! All calls are synchronous and single-threaded; render after each call that
//! reports a change.
//!
//! ```
//! use tui_2048_engine::{Session, SessionConfig, StepResult};
//! use tui_2048_types::GameAction;
//!
//! let mut session = Session::new(SessionConfig { seed: Some(7) });
//! match session.apply(GameAction::MoveLeft) {
//!     StepResult::Moved(_) | StepResult::GameOver(_) => {}
//!     other => panic!("unexpected {:?}", other),
//! }
//! assert_eq!(session.moves(), 1);
//!
//! session.apply(GameAction::Restart);
//! assert_eq!(session.games(), 2);
//! assert_eq!(session.moves(), 0);
//! ```

pub mod session;

pub use tui_2048_core as core;
pub use tui_2048_types as types;

pub use session::{Session, SessionConfig, StepResult};
