//! Reward formula configuration.

use lapcredits_bonus::{BonusPolicy, DEFAULT_BASE_CREDITS, DEFAULT_BASE_MULTIPLIER, RewardFormula};
use serde::{Deserialize, Serialize};

use crate::RewardArgs;

/// Reward formula parameters as loaded from configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RewardConfig {
    /// Dividend of the time multiplier.
    pub base_multiplier: u64,

    /// Credits awarded per unit of time multiplier.
    pub base_credits: i64,
}

impl Default for RewardConfig {
    fn default() -> Self {
        Self {
            base_multiplier: DEFAULT_BASE_MULTIPLIER,
            base_credits: DEFAULT_BASE_CREDITS,
        }
    }
}

impl RewardConfig {
    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), String> {
        if self.base_multiplier == 0 {
            return Err("reward.base-multiplier must be greater than zero".to_string());
        }
        if self.base_credits < 0 {
            return Err("reward.base-credits must be non-negative".to_string());
        }
        Ok(())
    }

    /// Apply command line arguments to override the configuration.
    ///
    /// Only flags present on the command line replace configured values.
    pub fn apply_cli_args(&mut self, args: &RewardArgs) {
        if let Some(base_multiplier) = args.base_multiplier {
            self.base_multiplier = base_multiplier;
        }
        if let Some(base_credits) = args.base_credits {
            self.base_credits = base_credits;
        }
    }

    /// Build a reward formula with the given bonus policy.
    pub fn formula<P: BonusPolicy>(&self, policy: P) -> RewardFormula<P> {
        RewardFormula::new(self.base_multiplier, self.base_credits, policy)
    }
}
