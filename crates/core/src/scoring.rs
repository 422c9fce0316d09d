//! Scoring module - line-clear points, levels and gravity speed
//!
//! Points come from a flat table indexed by how many rows one lock cleared.
//! The level only feeds the suggested gravity interval; it never scales
//! points.

use crate::types::{
    BASE_DROP_MS, DROP_INTERVAL_FLOOR_MS, DROP_STEP_MS, LINES_PER_LEVEL, LINE_SCORES,
};

/// Points for clearing `lines` rows with one lock.
/// Counts above 4 cannot come from a single piece and score 0.
pub fn line_clear_score(lines: usize) -> u32 {
    LINE_SCORES.get(lines).copied().unwrap_or(0)
}

/// Level increases every 10 lines cleared
pub fn calculate_level(total_lines: u32) -> u32 {
    total_lines / LINES_PER_LEVEL
}

/// Suggested gravity interval for a level (milliseconds per row).
///
/// `500 - 35 * level`, never below 60.
pub fn drop_interval_ms(level: u32) -> u32 {
    BASE_DROP_MS
        .saturating_sub(level.saturating_mul(DROP_STEP_MS))
        .max(DROP_INTERVAL_FLOOR_MS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_clear_scores() {
        assert_eq!(line_clear_score(0), 0);
        assert_eq!(line_clear_score(1), 100);
        assert_eq!(line_clear_score(2), 300);
        assert_eq!(line_clear_score(3), 500);
        assert_eq!(line_clear_score(4), 800);
        assert_eq!(line_clear_score(5), 0);
    }

    #[test]
    fn test_level_calculation() {
        assert_eq!(calculate_level(0), 0);
        assert_eq!(calculate_level(9), 0);
        assert_eq!(calculate_level(10), 1);
        assert_eq!(calculate_level(29), 2);
        assert_eq!(calculate_level(100), 10);
    }

    #[test]
    fn test_drop_intervals() {
        assert_eq!(drop_interval_ms(0), 500);
        assert_eq!(drop_interval_ms(1), 465);
        assert_eq!(drop_interval_ms(5), 325);
        assert_eq!(drop_interval_ms(12), 80);
        assert_eq!(drop_interval_ms(13), 60); // 45 clamps to the floor
        assert_eq!(drop_interval_ms(1000), 60);
        assert_eq!(drop_interval_ms(u32::MAX), 60);
    }
}
