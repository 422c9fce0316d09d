//! Core game logic - pure, deterministic, and testable
//!
//! This crate is the game engine. It has **zero dependencies** on UI, storage,
//! or clocks, which makes it:
//!
//! - **Deterministic**: the same seed produces the same piece sequence and,
//!   given the same calls, the same board and score
//! - **Testable**: every rule is exercised by unit and property tests
//! - **Portable**: the terminal shell is just one possible caller
//!
//! # Module Structure
//!
//! - [`board`]: 10x20 locked-cell grid and line clearing
//! - [`pieces`]: static shape table and the horizontal kick order
//! - [`rng`]: 32-bit LCG piece generator
//! - [`scoring`]: line-clear points, level and gravity interval
//! - [`game_state`]: the [`Game`] engine itself
//! - [`snapshot`]: copyable read-only views for rendering
//! - [`handle`]: inert behavior for an absent game
//!
//! # Rules
//!
//! - Pieces spawn at anchor (3, 0) and fall one row per [`Game::tick`]
//! - A piece locks only when gravity or a hard drop cannot move it further
//! - Rotation is clockwise only, with horizontal kicks 0, -1, +1, -2, +2
//! - Clearing 1/2/3/4 rows with one lock scores 100/300/500/800
//! - A spawn that collides ends the game until the next reset
//!
//! # Example
//!
//! ```
//! use tetris_classic_core::Game;
//! use tetris_classic_types::{GameAction, MoveResult};
//!
//! let mut game = Game::new(12345);
//!
//! game.apply_action(GameAction::MoveRight);
//! game.apply_action(GameAction::RotateCw);
//! assert_eq!(game.apply_action(GameAction::HardDrop), MoveResult::Ok);
//!
//! assert_eq!(game.board().filled_count(), 4);
//! assert!(!game.game_over());
//! ```
//!
//! # Timing
//!
//! The engine has no clock. Call [`Game::tick`] on a timer; the suggested
//! interval is [`Game::drop_interval_ms`], `500 - 35 * level` ms with a 60 ms
//! floor.

pub mod board;
pub mod game_state;
pub mod handle;
pub mod pieces;
pub mod rng;
pub mod scoring;
pub mod snapshot;

pub use tetris_classic_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use game_state::{Game, Tetromino};
pub use handle::GameHandle;
pub use pieces::{cells_at, get_shape, try_rotate, KICK_OFFSETS, SHAPES};
pub use rng::Lcg;
pub use scoring::{calculate_level, drop_interval_ms, line_clear_score};
pub use snapshot::{ActiveSnapshot, GameSnapshot};
