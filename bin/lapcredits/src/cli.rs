//! Command line interface.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use eyre::{Result, eyre};
use lapcredits_bonus::{BonusCalculator, RankThresholds};
use lapcredits_ledger::{Ledger, RewardArgs};
use tracing::debug;

use crate::config::LapcreditsConfig;

/// Leaderboard credit rewards
#[derive(Debug, Parser)]
#[command(name = "lapcredits", version, about)]
pub(crate) struct Cli {
    #[command(flatten)]
    pub(crate) log_args: LogArgs,

    /// Path to a TOML configuration file
    #[arg(long, global = true, value_name = "FILE")]
    pub(crate) config: Option<PathBuf>,

    #[command(flatten)]
    pub(crate) reward: RewardArgs,

    /// Subcommand to execute
    #[command(subcommand)]
    pub(crate) command: Commands,
}

/// Logging configuration
#[derive(Debug, Args, Clone)]
pub(crate) struct LogArgs {
    /// Silence all output except errors
    #[arg(short, long, global = true)]
    pub(crate) quiet: bool,

    /// Verbose mode (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub(crate) verbosity: u8,

    /// Log filter directives
    #[arg(long = "log.filter", global = true, value_name = "DIRECTIVE")]
    pub(crate) filter: Option<String>,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Commands {
    /// Award credits for a run and print the resulting balance
    Award(AwardArgs),
    /// Show the rank bonus a run earns on a leaderboard
    Bonus(BonusArgs),
}

#[derive(Debug, Args)]
pub(crate) struct AwardArgs {
    /// Elapsed time of the run
    #[arg(long)]
    pub(crate) elapsed: f64,

    /// Base credits (defaults to reward.base-credits)
    #[arg(long)]
    pub(crate) base: Option<i64>,

    /// Leaderboard as rank=threshold pairs, e.g. 1=50,2=100,3=150
    #[arg(long)]
    pub(crate) leaderboard: Option<RankThresholds>,

    /// Opening balance
    #[arg(long, default_value_t = 0)]
    pub(crate) opening: i64,
}

#[derive(Debug, Args)]
pub(crate) struct BonusArgs {
    /// Elapsed time of the run
    #[arg(long)]
    pub(crate) elapsed: f64,

    /// Leaderboard as rank=threshold pairs, e.g. 1=50,2=100,3=150
    #[arg(long)]
    pub(crate) leaderboard: Option<RankThresholds>,

    /// Amount to apply the bonus to
    #[arg(long)]
    pub(crate) amount: Option<i64>,
}

/// Load the configuration and apply command line overrides.
pub(crate) fn load_config(cli: &Cli) -> Result<LapcreditsConfig> {
    let mut config = LapcreditsConfig::load(cli.config.as_deref())?;
    config.apply_cli_args(&cli.reward);
    config.reward.validate().map_err(|e| eyre!(e))?;
    debug!(reward = ?config.reward, "Reward configuration");
    Ok(config)
}

/// Execute the parsed command.
pub(crate) fn run(cli: Cli) -> Result<()> {
    let config = load_config(&cli)?;
    let calculator = BonusCalculator::new(config.bonus_table());

    match cli.command {
        Commands::Award(args) => {
            let leaderboard = args.leaderboard.or(config.leaderboard);
            let mut ledger = Ledger::with_formula(config.reward.formula(calculator))
                .with_opening_balance(args.opening)?;

            let base = args.base.unwrap_or(config.reward.base_credits);
            let amount = ledger.award_with_base(args.elapsed, base, leaderboard.as_ref())?;

            println!("awarded {amount} credits, balance {}", ledger.balance());
        }
        Commands::Bonus(args) => {
            let leaderboard = args.leaderboard.or(config.leaderboard).ok_or_else(|| {
                eyre!("a leaderboard is required, pass --leaderboard or set it in --config")
            })?;

            let percent = calculator.rank_bonus_percentage(&leaderboard, args.elapsed);
            let rank = calculator
                .qualifying_rank(&leaderboard, args.elapsed)
                .map(|rank| rank.to_string())
                .unwrap_or_else(|| "unranked".to_string());

            match args.amount {
                Some(amount) => {
                    let bonus = calculator.apply_bonus(&leaderboard, args.elapsed, amount);
                    println!("{rank}: {percent}% of {amount} = {bonus} bonus credits");
                }
                None => println!("{rank}: {percent}% bonus"),
            }
        }
    }

    Ok(())
}
