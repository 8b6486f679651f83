//! TUI 2048 (workspace facade crate).
//!
//! Re-exports the member crates under `tui_2048::{core,engine,input,term,types}`
//! and holds the binary's command-line and logging setup.

pub mod cli;
pub mod logging;

pub use tui_2048_core as core;
pub use tui_2048_engine as engine;
pub use tui_2048_input as input;
pub use tui_2048_term as term;
pub use tui_2048_types as types;
