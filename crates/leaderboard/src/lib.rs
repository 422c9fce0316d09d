//! Flat-file leaderboard.
//!
//! Records are stored one per line as `name,score,lines,level,timestamp` and
//! kept sorted by score (highest first), older records winning ties. Only the
//! best `keep` records survive a submit.
//!
//! ```no_run
//! use tetris_classic_leaderboard::Leaderboard;
//!
//! let board = Leaderboard::new("leaderboard.csv", 10);
//! board.submit_result("alice", 1200, 12, 1);
//! for entry in board.load_top(5) {
//!     println!("{} {}", entry.name, entry.score);
//! }
//! ```

pub mod entry;
pub mod store;

pub use entry::{sanitize_name, LeaderboardEntry, DEFAULT_PLAYER_NAME};
pub use store::{Leaderboard, DEFAULT_KEEP, DEFAULT_PATH};
