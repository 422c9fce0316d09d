//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into shell commands: engine actions
//! ([`crate::types::GameAction`]) plus the shell-only pause and restart.
//! Terminal auto-repeat provides held-key movement; there is no DAS/ARR layer.

pub mod map;

pub use tetris_classic_types as types;

pub use map::{map_key, should_quit, InputCommand};
