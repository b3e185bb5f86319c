//! Time-to-credit reward formula.

use crate::{
    BonusCalculator, BonusPolicy, DEFAULT_BASE_CREDITS, DEFAULT_BASE_MULTIPLIER, RankThresholds,
    RewardError,
};

/// `max(1, floor(base_multiplier / elapsed))`.
///
/// Fails for zero, negative and NaN elapsed times.
pub fn time_multiplier(base_multiplier: u64, elapsed: f64) -> Result<i64, RewardError> {
    if elapsed.is_nan() || elapsed <= 0.0 {
        return Err(RewardError::InvalidDuration { elapsed });
    }
    // `as` saturates for very small elapsed times
    let multiplier = (base_multiplier as f64 / elapsed).floor() as i64;
    Ok(multiplier.max(1))
}

/// `base_credits * multiplier`, saturating.
pub fn earned_credits(base_credits: i64, multiplier: i64) -> Result<i64, RewardError> {
    if base_credits < 0 {
        return Err(RewardError::NegativeBase { base: base_credits });
    }
    Ok(base_credits.saturating_mul(multiplier))
}

/// Breakdown of a computed reward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reward {
    /// Time multiplier.
    pub multiplier: i64,
    /// Credits before the rank bonus.
    pub earned: i64,
    /// Rank bonus on top of `earned`.
    pub bonus: i64,
    /// Total credits to deposit.
    pub amount: i64,
}

/// Converts elapsed time into credits, optionally adding a rank bonus.
///
/// The rank bonus is a percentage of the post-multiplier earned amount and is
/// added on top of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewardFormula<P = BonusCalculator> {
    base_multiplier: u64,
    base_credits: i64,
    policy: P,
}

impl RewardFormula {
    /// Formula with the given parameters and the default bonus table.
    pub fn with_defaults(base_multiplier: u64, base_credits: i64) -> Self {
        Self::new(base_multiplier, base_credits, BonusCalculator::default())
    }
}

impl Default for RewardFormula {
    fn default() -> Self {
        Self::with_defaults(DEFAULT_BASE_MULTIPLIER, DEFAULT_BASE_CREDITS)
    }
}

impl<P: BonusPolicy> RewardFormula<P> {
    pub fn new(base_multiplier: u64, base_credits: i64, policy: P) -> Self {
        Self {
            base_multiplier,
            base_credits,
            policy,
        }
    }

    /// Swap the bonus policy, keeping the parameters.
    pub fn with_policy<Q: BonusPolicy>(self, policy: Q) -> RewardFormula<Q> {
        RewardFormula {
            base_multiplier: self.base_multiplier,
            base_credits: self.base_credits,
            policy,
        }
    }

    pub fn base_multiplier(&self) -> u64 {
        self.base_multiplier
    }

    /// Base credits used when the caller supplies none.
    pub fn base_credits(&self) -> i64 {
        self.base_credits
    }

    pub fn policy(&self) -> &P {
        &self.policy
    }

    /// Compute the reward for `elapsed` with explicit base credits.
    pub fn reward(
        &self,
        elapsed: f64,
        base_credits: i64,
        thresholds: Option<&RankThresholds>,
    ) -> Result<Reward, RewardError> {
        let multiplier = time_multiplier(self.base_multiplier, elapsed)?;
        let earned = earned_credits(base_credits, multiplier)?;
        let bonus = thresholds
            .map(|thresholds| self.policy.apply_bonus(thresholds, elapsed, earned))
            .unwrap_or(0);

        Ok(Reward {
            multiplier,
            earned,
            bonus,
            amount: earned.saturating_add(bonus),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::NoBonus;
    use assert_matches::assert_matches;

    fn leaderboard() -> RankThresholds {
        "1=50,2=100,3=150".parse().expect("valid leaderboard")
    }

    #[test]
    fn test_time_multiplier() {
        assert_eq!(time_multiplier(500, 100.0), Ok(5));
        assert_eq!(time_multiplier(500, 45.0), Ok(11));
        assert_eq!(time_multiplier(500, 1000.0), Ok(1));
        assert_eq!(time_multiplier(500, 0.5), Ok(1000));
        assert_eq!(time_multiplier(500, f64::INFINITY), Ok(1));
    }

    #[test]
    fn test_time_multiplier_invalid_duration() {
        for elapsed in [0.0, -10.0, f64::NAN] {
            assert_matches!(
                time_multiplier(500, elapsed),
                Err(RewardError::InvalidDuration { .. })
            );
        }
    }

    #[test]
    fn test_time_multiplier_saturates() {
        assert_eq!(time_multiplier(u64::MAX, f64::MIN_POSITIVE), Ok(i64::MAX));
    }

    #[test]
    fn test_earned_credits() {
        assert_eq!(earned_credits(10, 5), Ok(50));
        assert_eq!(earned_credits(i64::MAX, 2), Ok(i64::MAX));
        assert_eq!(
            earned_credits(-1, 5),
            Err(RewardError::NegativeBase { base: -1 })
        );
    }

    #[test]
    fn test_reward_without_leaderboard() {
        let formula = RewardFormula::default();
        let reward = formula.reward(100.0, 10, None).expect("valid reward");

        assert_eq!(
            reward,
            Reward {
                multiplier: 5,
                earned: 50,
                bonus: 0,
                amount: 50,
            }
        );
    }

    #[test]
    fn test_bonus_applies_to_earned_amount() {
        let formula = RewardFormula::default();
        let reward = formula
            .reward(45.0, 10, Some(&leaderboard()))
            .expect("valid reward");

        assert_eq!(reward.earned, 110);
        assert_eq!(reward.bonus, 55);
        assert_eq!(reward.amount, 165);
    }

    #[test]
    fn test_reward_with_no_bonus_policy() {
        let formula = RewardFormula::default().with_policy(NoBonus);
        let reward = formula
            .reward(45.0, 10, Some(&leaderboard()))
            .expect("valid reward");

        assert_eq!(reward.amount, 110);
        assert_eq!(formula.base_multiplier(), 500);
        assert_eq!(formula.base_credits(), 10);
    }

    #[test]
    fn test_custom_multiplier() {
        let formula = RewardFormula::with_defaults(1000, 1);
        assert_eq!(formula.reward(100.0, 1, None).map(|r| r.amount), Ok(10));
    }
}
