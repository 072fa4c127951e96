//! End-of-level score formulas.

use crate::config::{MemoryConfig, SortingConfig};

/// `max(min, level*points - max(0, moves - pairs)*penalty - floor(elapsed/seconds_per_penalty))`
#[must_use]
pub fn memory_score(
    config: &MemoryConfig,
    level: u32,
    moves: u32,
    total_pairs: u32,
    elapsed_secs: u32,
) -> u32 {
    let base = i64::from(level) * i64::from(config.points_per_level);
    let extra_moves = i64::from(moves.saturating_sub(total_pairs));
    let move_penalty = extra_moves * i64::from(config.extra_move_penalty);
    let time_penalty = match config.seconds_per_penalty {
        0 => 0,
        per => i64::from(elapsed_secs / per),
    };
    clamp_score(base - move_penalty - time_penalty, config.min_score)
}

/// `max(min, items - max(0, attempts - items))`
#[must_use]
pub fn sorting_score(config: &SortingConfig, total_items: u32, attempts: u32) -> u32 {
    let penalty = i64::from(attempts.saturating_sub(total_items));
    clamp_score(i64::from(total_items) - penalty, config.min_score)
}

fn clamp_score(raw: i64, min: u32) -> u32 {
    u32::try_from(raw.max(i64::from(min))).unwrap_or(u32::MAX)
}
