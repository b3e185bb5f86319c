//! Bonus and reward error types.

/// Errors raised while building a leaderboard or bonus table.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BonusError {
    /// Ranks start at 1.
    #[error("invalid rank {0}: ranks start at 1")]
    InvalidRank(u32),

    /// Thresholds must be finite and strictly positive.
    #[error("invalid threshold {threshold} for rank {rank}")]
    InvalidThreshold { rank: u32, threshold: f64 },

    /// A leaderboard listed the same rank twice.
    #[error("duplicate leaderboard entry for rank {0}")]
    DuplicateRank(u32),

    /// Malformed `rank=threshold` list.
    #[error("invalid leaderboard entry: {0}")]
    Parse(String),
}

/// Errors raised by the reward formula.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RewardError {
    /// Elapsed time was zero, negative or not a number.
    #[error("elapsed time must be positive, got {elapsed}")]
    InvalidDuration { elapsed: f64 },

    /// Base credits were negative.
    #[error("base credits must be non-negative, got {base}")]
    NegativeBase { base: i64 },
}
