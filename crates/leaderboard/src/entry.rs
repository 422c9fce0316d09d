//! A single leaderboard record and its CSV line form.

use std::cmp::Ordering;
use std::fmt;

/// Name used when a submitted name is empty after sanitizing.
pub const DEFAULT_PLAYER_NAME: &str = "Player";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaderboardEntry {
    pub name: String,
    pub score: u32,
    pub lines: u32,
    pub level: u32,
    /// Seconds since the Unix epoch; 0 means "stamp on submit".
    pub timestamp: u64,
}

impl LeaderboardEntry {
    pub fn new(name: impl Into<String>, score: u32, lines: u32, level: u32) -> Self {
        Self {
            name: name.into(),
            score,
            lines,
            level,
            timestamp: 0,
        }
    }

    /// Parse one `name,score,lines,level,timestamp` line.
    ///
    /// Returns `None` for blank lines, missing fields and non-numeric values.
    /// Fields after the fifth are ignored.
    pub fn parse_line(line: &str) -> Option<Self> {
        let line = line.trim_end_matches(['\r', '\n']);
        if line.is_empty() {
            return None;
        }

        let mut fields = line.split(',');
        let name = fields.next()?;
        let score = fields.next()?.trim().parse().ok()?;
        let lines = fields.next()?.trim().parse().ok()?;
        let level = fields.next()?.trim().parse().ok()?;
        let timestamp = fields.next()?.trim().parse().ok()?;

        Some(Self {
            name: sanitize_name(name),
            score,
            lines,
            level,
            timestamp,
        })
    }

    /// Ranking order: score descending, then timestamp ascending.
    pub fn rank_cmp(&self, other: &Self) -> Ordering {
        other
            .score
            .cmp(&self.score)
            .then(self.timestamp.cmp(&other.timestamp))
    }
}

/// CSV line form (no trailing newline).
impl fmt::Display for LeaderboardEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},{},{},{},{}",
            self.name, self.score, self.lines, self.level, self.timestamp
        )
    }
}

/// Make a name safe for the CSV file.
///
/// Commas, tabs and line breaks become spaces, surrounding spaces are
/// trimmed, and an empty result becomes [`DEFAULT_PLAYER_NAME`].
pub fn sanitize_name(name: &str) -> String {
    let replaced: String = name
        .chars()
        .map(|c| match c {
            ',' | '\n' | '\r' | '\t' => ' ',
            c => c,
        })
        .collect();

    let trimmed = replaced.trim_matches(' ');
    if trimmed.is_empty() {
        DEFAULT_PLAYER_NAME.to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_replaces_separators() {
        assert_eq!(sanitize_name("a,b\tc\nd\re"), "a b c d e");
        assert_eq!(sanitize_name("  bob  "), "bob");
        assert_eq!(sanitize_name(",\t\n"), DEFAULT_PLAYER_NAME);
        assert_eq!(sanitize_name(""), DEFAULT_PLAYER_NAME);
    }

    #[test]
    fn parse_line_reads_all_fields() {
        let entry = LeaderboardEntry::parse_line("alice,1200,12,1,1700000000").unwrap();
        assert_eq!(entry.name, "alice");
        assert_eq!(entry.score, 1200);
        assert_eq!(entry.lines, 12);
        assert_eq!(entry.level, 1);
        assert_eq!(entry.timestamp, 1_700_000_000);

        assert_eq!(LeaderboardEntry::parse_line(&entry.to_string()), Some(entry));
    }

    #[test]
    fn parse_line_tolerates_crlf() {
        let entry = LeaderboardEntry::parse_line("bob,5,0,0,9\r").unwrap();
        assert_eq!(entry.timestamp, 9);
    }

    #[test]
    fn parse_line_rejects_malformed() {
        assert_eq!(LeaderboardEntry::parse_line(""), None);
        assert_eq!(LeaderboardEntry::parse_line("alice,100,1,0"), None);
        assert_eq!(LeaderboardEntry::parse_line("alice,lots,1,0,5"), None);
        assert_eq!(LeaderboardEntry::parse_line("alice,-3,1,0,5"), None);
    }

    #[test]
    fn rank_prefers_score_then_age() {
        let mut high = LeaderboardEntry::new("a", 500, 0, 0);
        high.timestamp = 20;
        let mut old = LeaderboardEntry::new("b", 300, 0, 0);
        old.timestamp = 10;
        let mut new = LeaderboardEntry::new("c", 300, 0, 0);
        new.timestamp = 30;

        let mut all = vec![new.clone(), old.clone(), high.clone()];
        all.sort_by(LeaderboardEntry::rank_cmp);
        assert_eq!(all, vec![high, old, new]);
    }
}
