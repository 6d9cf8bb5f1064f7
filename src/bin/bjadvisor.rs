//! Manual blackjack table with strategy advice.

use std::io;

use anyhow::Result;
use bjadvisor::{DealerStand, NineSplitRule, PlayerBustRule, Shell, TableOptions};
use clap::{Parser, ValueEnum};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum NineSplit {
    /// Split nines against a dealer ace.
    Observed,
    /// Keep nines together against a dealer ace.
    StandAgainstAce,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum PlayerBust {
    /// The dealer still plays and the totals are compared as they stand.
    CompareTotals,
    /// A busted player loses and the dealer draws nothing.
    Loses,
}

#[derive(Debug, Parser)]
#[command(
    name = "bjadvisor",
    about = "Play a blackjack round with your own cards and get basic-strategy advice"
)]
struct Cli {
    /// Total the dealer stands on (17 or 18). Asked at start when omitted.
    #[arg(long, value_parser = clap::value_parser!(u8).range(17..=18))]
    dealer_stands_on: Option<u8>,

    /// How nines are played against a dealer ace.
    #[arg(long, value_enum, default_value = "observed")]
    nine_split: NineSplit,

    /// How a busted player hand is settled.
    #[arg(long, value_enum, default_value = "compare-totals")]
    player_bust: PlayerBust,

    /// Never suggest doubling down.
    #[arg(long)]
    no_double: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let options = TableOptions::default()
        .with_double(!cli.no_double)
        .with_nine_split(match cli.nine_split {
            NineSplit::Observed => NineSplitRule::Observed,
            NineSplit::StandAgainstAce => NineSplitRule::StandAgainstAce,
        })
        .with_player_bust(match cli.player_bust {
            PlayerBust::CompareTotals => PlayerBustRule::CompareTotals,
            PlayerBust::Loses => PlayerBustRule::Loses,
        });

    let stdin = io::stdin().lock();
    let stdout = io::stdout().lock();

    let mut shell = match cli.dealer_stands_on {
        Some(17) => {
            Shell::with_options(stdin, stdout, options.with_dealer_stand(DealerStand::On17))
        }
        Some(_) => {
            Shell::with_options(stdin, stdout, options.with_dealer_stand(DealerStand::On18))
        }
        None => Shell::with_options(stdin, stdout, options).asking_dealer_rule(),
    };
    shell.run()?;

    Ok(())
}
