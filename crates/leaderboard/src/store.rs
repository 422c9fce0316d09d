//! CSV file store.
//!
//! The `try_*` methods report failures as `anyhow` errors for callers that
//! want to surface them. The plain methods log the error chain to stderr and
//! collapse it to an empty list or `false`.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};

use crate::entry::{sanitize_name, LeaderboardEntry};

/// File used when no path is given.
pub const DEFAULT_PATH: &str = "leaderboard.csv";

/// Records kept (and returned by `load_top(0)`) when no count is given.
pub const DEFAULT_KEEP: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Leaderboard {
    path: PathBuf,
    keep: usize,
}

impl Default for Leaderboard {
    fn default() -> Self {
        Self::new(DEFAULT_PATH, DEFAULT_KEEP)
    }
}

impl Leaderboard {
    /// An empty path falls back to [`DEFAULT_PATH`], `keep == 0` to
    /// [`DEFAULT_KEEP`]. Nothing touches the disk until the first call.
    pub fn new(path: impl AsRef<Path>, keep: usize) -> Self {
        let path = path.as_ref();
        let path = if path.as_os_str().is_empty() {
            PathBuf::from(DEFAULT_PATH)
        } else {
            path.to_path_buf()
        };
        let keep = if keep == 0 { DEFAULT_KEEP } else { keep };
        Self { path, keep }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn keep(&self) -> usize {
        self.keep
    }

    /// Every readable record, ranked. A missing file is an empty board.
    ///
    /// Lines are decoded one at a time, so stray non-UTF-8 bytes only cost
    /// the record they appear in (or its name, replaced with U+FFFD).
    pub fn try_load_all(&self) -> Result<Vec<LeaderboardEntry>> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("failed to read {}", self.path.display()))
            }
        };

        let mut all: Vec<LeaderboardEntry> = bytes
            .split(|&b| b == b'\n')
            .filter_map(|line| LeaderboardEntry::parse_line(&String::from_utf8_lossy(line)))
            .collect();
        all.sort_by(LeaderboardEntry::rank_cmp);
        Ok(all)
    }

    /// The best `k` records (`k == 0` means [`DEFAULT_KEEP`]).
    pub fn load_top(&self, k: usize) -> Vec<LeaderboardEntry> {
        let k = if k == 0 { DEFAULT_KEEP } else { k };
        match self.try_load_all() {
            Ok(mut all) => {
                all.truncate(k);
                all
            }
            Err(e) => {
                eprintln!("[Leaderboard] Load error: {:#}", e);
                Vec::new()
            }
        }
    }

    /// Merge one record into the file, keeping the best `keep`.
    ///
    /// The name is sanitized and a zero timestamp is stamped with the current
    /// time before merging.
    pub fn try_submit(&self, mut entry: LeaderboardEntry) -> Result<()> {
        entry.name = sanitize_name(&entry.name);
        if entry.timestamp == 0 {
            entry.timestamp = now_epoch_seconds();
        }

        let mut all = self.try_load_all()?;
        all.push(entry);
        all.sort_by(LeaderboardEntry::rank_cmp);
        all.truncate(self.keep);

        self.write_all(&all)
    }

    pub fn submit(&self, entry: LeaderboardEntry) -> bool {
        match self.try_submit(entry) {
            Ok(()) => true,
            Err(e) => {
                eprintln!("[Leaderboard] Submit error: {:#}", e);
                false
            }
        }
    }

    /// Submit a finished game stamped with the current time.
    pub fn submit_result(&self, name: &str, score: u32, lines: u32, level: u32) -> bool {
        self.submit(LeaderboardEntry::new(name, score, lines, level))
    }

    /// Truncate the file (creating it if needed).
    pub fn try_clear(&self) -> Result<()> {
        fs::write(&self.path, "")
            .with_context(|| format!("failed to clear {}", self.path.display()))
    }

    pub fn clear(&self) -> bool {
        match self.try_clear() {
            Ok(()) => true,
            Err(e) => {
                eprintln!("[Leaderboard] Clear error: {:#}", e);
                false
            }
        }
    }

    fn write_all(&self, all: &[LeaderboardEntry]) -> Result<()> {
        let mut text = String::with_capacity(all.len() * 32);
        for entry in all {
            text.push_str(&entry.to_string());
            text.push('\n');
        }
        fs::write(&self.path, text)
            .with_context(|| format!("failed to write {}", self.path.display()))
    }
}

fn now_epoch_seconds() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}
