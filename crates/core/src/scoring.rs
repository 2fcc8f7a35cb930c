//! Scoring module - row-clear bonus, levels and gravity pacing
//!
//! Clearing several rows with one piece is rewarded quadratically: one row is
//! worth 1, two rows 4, three rows 9, four rows 16.

use crate::types::{DROP_INTERVALS_MS, DROP_INTERVAL_FLOOR_MS, LEVEL_THRESHOLD};

/// Points for clearing `rows` rows with a single freeze
pub fn line_clear_score(rows: u32) -> u32 {
    rows.saturating_mul(rows)
}

/// Level reached at `score`
pub fn level_for_score(score: u32) -> u32 {
    score / LEVEL_THRESHOLD
}

/// Gravity interval for a level, in milliseconds per row.
///
/// The field has no clock; the driving loop sleeps this long between ticks.
pub fn drop_interval_ms(level: u32) -> u32 {
    DROP_INTERVALS_MS
        .get(level as usize)
        .copied()
        .unwrap_or(DROP_INTERVAL_FLOOR_MS)
}
