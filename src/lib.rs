//! Classic falling-block game (workspace facade crate).
//!
//! The engine and its front ends live in dedicated crates under `crates/`;
//! this package re-exports them as `tetris_classic::{core, input, leaderboard,
//! term, types}` and adds the pieces that tie them together: environment
//! configuration, the interactive play session, and headless replays.

pub use tetris_classic_core as core;
pub use tetris_classic_input as input;
pub use tetris_classic_leaderboard as leaderboard;
pub use tetris_classic_term as term;
pub use tetris_classic_types as types;

pub mod config;
pub mod replay;
pub mod session;

pub use config::GameConfig;
pub use session::Session;
