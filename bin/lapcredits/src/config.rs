//! Figment-based configuration loading.
//!
//! Configuration priority (highest wins):
//! 1. CLI arguments (applied after Figment load)
//! 2. Config file (TOML)
//! 3. Environment variables (`LAPCREDITS_` prefix, `__` between sections)
//! 4. Defaults
//!
//! ```toml
//! default_percent = 1
//!
//! [reward]
//! base_multiplier = 500
//! base_credits = 10
//!
//! [[bonus]]
//! rank = 1
//! percent = 50
//!
//! [[leaderboard]]
//! rank = 1
//! threshold = 50.0
//! ```

use std::path::Path;

use eyre::{Result, WrapErr, bail};
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use lapcredits_bonus::{BonusTable, DEFAULT_BONUS_PERCENT, RankBonus, RankThresholds};
use lapcredits_ledger::{RewardArgs, RewardConfig};
use serde::{Deserialize, Serialize};

/// Complete configuration. Every section is optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct LapcreditsConfig {
    /// Reward formula parameters
    pub(crate) reward: RewardConfig,

    /// Bonus percentage for unlisted ranks and non-qualifying times
    pub(crate) default_percent: u32,

    /// Rank bonuses; empty means the built-in table
    pub(crate) bonus: Vec<RankBonus>,

    /// Leaderboard used when none is given on the command line
    pub(crate) leaderboard: Option<RankThresholds>,
}

impl Default for LapcreditsConfig {
    fn default() -> Self {
        Self {
            reward: RewardConfig::default(),
            default_percent: DEFAULT_BONUS_PERCENT,
            bonus: Vec::new(),
            leaderboard: None,
        }
    }
}

impl LapcreditsConfig {
    /// Load configuration from defaults, environment, and config file.
    /// CLI overrides should be applied separately after loading.
    pub(crate) fn load(config_path: Option<&Path>) -> Result<Self> {
        let mut figment = Figment::new()
            .merge(Serialized::defaults(Self::default()))
            .merge(Env::prefixed("LAPCREDITS_").split("__"));

        if let Some(path) = config_path {
            if !path.exists() {
                bail!("config file {} does not exist", path.display());
            }
            figment = figment.merge(Toml::file(path));
        }

        figment.extract().wrap_err("Failed to load configuration")
    }

    /// Apply command line arguments to override the configuration.
    pub(crate) fn apply_cli_args(&mut self, reward_args: &RewardArgs) {
        self.reward.apply_cli_args(reward_args);
    }

    /// Bonus table described by this configuration.
    pub(crate) fn bonus_table(&self) -> BonusTable {
        if self.bonus.is_empty() {
            return BonusTable::new(BonusTable::default().iter(), self.default_percent);
        }
        BonusTable::new(self.bonus.iter().copied(), self.default_percent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;
    use lapcredits_bonus::Rank;

    const CONFIG_FILE: &str = "lapcredits.toml";

    fn load(jail: &Jail, contents: &str) -> figment::Result<LapcreditsConfig> {
        jail.create_file(CONFIG_FILE, contents)?;
        LapcreditsConfig::load(Some(Path::new(CONFIG_FILE))).map_err(|e| format!("{e:#}").into())
    }

    #[test]
    fn test_defaults_without_file() {
        Jail::expect_with(|_| {
            let config = LapcreditsConfig::load(None).map_err(|e| e.to_string())?;

            assert_eq!(config, LapcreditsConfig::default());
            assert_eq!(config.bonus_table(), BonusTable::default());
            Ok(())
        });
    }

    #[test]
    fn test_empty_file() {
        Jail::expect_with(|jail| {
            let config = load(jail, "")?;

            assert_eq!(config, LapcreditsConfig::default());
            Ok(())
        });
    }

    #[test]
    fn test_load_from_file() {
        Jail::expect_with(|jail| {
            let config = load(
                jail,
                r#"
                default_percent = 0

                [reward]
                base_multiplier = 1000
                base_credits = 2

                [[bonus]]
                rank = 1
                percent = 100

                [[leaderboard]]
                rank = 1
                threshold = 30.0

                [[leaderboard]]
                rank = 2
                threshold = 60.5
                "#,
            )?;

            assert_eq!(config.reward.base_multiplier, 1000);
            assert_eq!(config.reward.base_credits, 2);

            let table = config.bonus_table();
            assert_eq!(table.percentage(Rank::FIRST), 100);
            assert_eq!(table.percentage(Rank::new(2).expect("non-zero")), 0);

            let leaderboard = config.leaderboard.expect("leaderboard present");
            assert_eq!(leaderboard.len(), 2);
            assert_eq!(leaderboard.get(Rank::FIRST), Some(30.0));
            Ok(())
        });
    }

    #[test]
    fn test_partial_section_keeps_defaults() {
        Jail::expect_with(|jail| {
            let config = load(jail, "[reward]\nbase_credits = 3")?;

            assert_eq!(config.reward.base_credits, 3);
            assert_eq!(config.reward.base_multiplier, 500);
            Ok(())
        });
    }

    #[test]
    fn test_env_overrides_defaults() {
        Jail::expect_with(|jail| {
            jail.set_env("LAPCREDITS_REWARD__BASE_CREDITS", "7");
            jail.set_env("LAPCREDITS_DEFAULT_PERCENT", "4");

            let config = LapcreditsConfig::load(None).map_err(|e| e.to_string())?;

            assert_eq!(config.reward.base_credits, 7);
            assert_eq!(config.reward.base_multiplier, 500);
            assert_eq!(config.default_percent, 4);
            Ok(())
        });
    }

    #[test]
    fn test_file_overrides_env() {
        Jail::expect_with(|jail| {
            jail.set_env("LAPCREDITS_REWARD__BASE_CREDITS", "7");
            let config = load(jail, "[reward]\nbase_credits = 20")?;

            assert_eq!(config.reward.base_credits, 20);
            Ok(())
        });
    }

    #[test]
    fn test_cli_args_override_file() {
        Jail::expect_with(|jail| {
            let mut config = load(jail, "[reward]\nbase_multiplier = 1000\nbase_credits = 20")?;

            config.apply_cli_args(&RewardArgs {
                base_multiplier: None,
                base_credits: Some(10),
            });

            assert_eq!(config.reward.base_credits, 10);
            assert_eq!(config.reward.base_multiplier, 1000);
            Ok(())
        });
    }

    #[test]
    fn test_default_percent_applies_to_builtin_table() {
        Jail::expect_with(|jail| {
            let config = load(jail, "default_percent = 5")?;
            let table = config.bonus_table();

            assert_eq!(table.percentage(Rank::FIRST), 50);
            assert_eq!(table.percentage(Rank::new(9).expect("non-zero")), 5);
            Ok(())
        });
    }

    #[test]
    fn test_missing_file_rejected() {
        Jail::expect_with(|_| {
            assert!(LapcreditsConfig::load(Some(Path::new("missing.toml"))).is_err());
            Ok(())
        });
    }

    #[test]
    fn test_invalid_rank_rejected() {
        Jail::expect_with(|jail| {
            assert!(load(jail, "[[leaderboard]]\nrank = 0\nthreshold = 30.0").is_err());
            Ok(())
        });
    }

    #[test]
    fn test_invalid_threshold_rejected() {
        Jail::expect_with(|jail| {
            assert!(load(jail, "[[leaderboard]]\nrank = 1\nthreshold = -3.0").is_err());
            Ok(())
        });
    }

    #[test]
    fn test_duplicate_leaderboard_rank_rejected() {
        Jail::expect_with(|jail| {
            let contents = "[[leaderboard]]\nrank = 1\nthreshold = 30.0\n\n\
                            [[leaderboard]]\nrank = 1\nthreshold = 60.0";
            assert!(load(jail, contents).is_err());
            Ok(())
        });
    }
}
