//! Runtime configuration from `TETRIS_*` environment variables.

use std::env;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::leaderboard::{Leaderboard, DEFAULT_KEEP, DEFAULT_PATH, DEFAULT_PLAYER_NAME};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Fixed seed for every game; `None` seeds each game from the clock.
    pub seed: Option<u32>,
    pub player: String,
    pub leaderboard_path: PathBuf,
    pub leaderboard_keep: usize,
    pub leaderboard_enabled: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: None,
            player: DEFAULT_PLAYER_NAME.to_string(),
            leaderboard_path: PathBuf::from(DEFAULT_PATH),
            leaderboard_keep: DEFAULT_KEEP,
            leaderboard_enabled: true,
        }
    }
}

impl GameConfig {
    /// Read the process environment.
    ///
    /// | Variable | Default |
    /// |----------|---------|
    /// | `TETRIS_SEED` | clock seed |
    /// | `TETRIS_PLAYER` | `$USER`, else `Player` |
    /// | `TETRIS_LEADERBOARD_PATH` | `leaderboard.csv` |
    /// | `TETRIS_LEADERBOARD_KEEP` | `10` |
    /// | `TETRIS_LEADERBOARD_DISABLED` | unset (`1`/`true` disables) |
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`GameConfig::from_env`] with a custom variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let non_empty = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        let seed = non_empty("TETRIS_SEED").and_then(|s| parse_seed(&s));

        let player = non_empty("TETRIS_PLAYER")
            .or_else(|| non_empty("USER"))
            .unwrap_or(defaults.player);

        let leaderboard_path = non_empty("TETRIS_LEADERBOARD_PATH")
            .map(PathBuf::from)
            .unwrap_or(defaults.leaderboard_path);

        let leaderboard_keep = non_empty("TETRIS_LEADERBOARD_KEEP")
            .and_then(|s| s.parse().ok())
            .filter(|&n: &usize| n > 0)
            .unwrap_or(defaults.leaderboard_keep);

        let leaderboard_enabled = !non_empty("TETRIS_LEADERBOARD_DISABLED")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        Self {
            seed,
            player,
            leaderboard_path,
            leaderboard_keep,
            leaderboard_enabled,
        }
    }

    /// Seed for the next game.
    pub fn next_seed(&self) -> u32 {
        self.seed.unwrap_or_else(clock_seed)
    }

    /// The configured store, or `None` when persistence is disabled.
    pub fn leaderboard(&self) -> Option<Leaderboard> {
        self.leaderboard_enabled
            .then(|| Leaderboard::new(&self.leaderboard_path, self.leaderboard_keep))
    }
}

/// Decimal or `0x`-prefixed hex.
pub fn parse_seed(s: &str) -> Option<u32> {
    let s = s.trim();
    match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u32::from_str_radix(hex, 16).ok(),
        None => s.parse().ok(),
    }
}

/// Seed derived from the wall clock.
pub fn clock_seed() -> u32 {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or(0);
    // Fold the high bits in so consecutive runs differ in more than the low word.
    (nanos ^ (nanos >> 32)) as u32
}
