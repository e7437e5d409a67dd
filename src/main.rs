//! Slot Machine Binary
//!
//! Loads a configuration, funds the house, and hands the machine to an
//! interactive console.

use anyhow::Context;
use clap::Parser;
use slots::*;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(version, about = "Play a weighted-reel slot machine")]
struct Args {
    /// configuration file, overriding SLOTS_CFG_PATH
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// house reserves to start with
    #[arg(short, long, default_value_t = 1000)]
    reserves: i64,
    /// seed the reels for a reproducible session
    #[arg(short, long)]
    seed: Option<u64>,
    /// terminal log level, repeat for more
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    log(args.verbose)?;
    let config = match args.config {
        Some(ref path) => Configuration::load(path),
        None => Configuration::locate(),
    }
    .context("loading configuration")?;
    log::debug!("configuration\n{}", config);
    match args.seed {
        Some(seed) => play(
            SlotMachine::with_spinner(config, Weighted::seeded(seed))?,
            args.reserves,
        ),
        None => play(SlotMachine::new(config)?, args.reserves),
    }
}

fn play<S: Spinner>(mut machine: SlotMachine<S>, reserves: i64) -> anyhow::Result<()> {
    machine
        .adjust_reserves(reserves)
        .context("funding house reserves")?;
    let tally = Console::from(machine).run()?;
    log::info!("session over: {}", tally);
    Ok(())
}
