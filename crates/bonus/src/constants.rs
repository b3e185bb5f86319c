//! Default constants for reward computation.

/// Default dividend of the time multiplier (`base_multiplier / elapsed`).
pub const DEFAULT_BASE_MULTIPLIER: u64 = 500;

/// Default credits per unit of time multiplier.
pub const DEFAULT_BASE_CREDITS: i64 = 10;

/// Bonus percentage for ranks outside the table and non-qualifying times.
pub const DEFAULT_BONUS_PERCENT: u32 = 1;

/// Default rank bonuses as `(rank, percent)` pairs.
pub const DEFAULT_RANK_BONUSES: [(u32, u32); 3] = [(1, 50), (2, 25), (3, 10)];
