//! CLI arguments for reward configuration.

use clap::Args;

/// Reward formula arguments.
///
/// Unset flags leave the loaded [`RewardConfig`](crate::RewardConfig)
/// untouched; see [`RewardConfig::apply_cli_args`](crate::RewardConfig::apply_cli_args).
#[derive(Debug, Args, Clone, Default, PartialEq, Eq)]
#[command(next_help_heading = "Rewards")]
pub struct RewardArgs {
    /// Dividend of the time multiplier (multiplier = base-multiplier / elapsed) [default: 500]
    #[arg(long = "reward.base-multiplier", value_name = "N")]
    pub base_multiplier: Option<u64>,

    /// Credits awarded per unit of time multiplier [default: 10]
    #[arg(long = "reward.base-credits", value_name = "N")]
    pub base_credits: Option<i64>,
}
