pub mod error;
pub mod machine;
pub mod reels;
#[cfg(feature = "cli")]
pub mod console;

pub use error::*;
pub use machine::*;
pub use reels::*;
#[cfg(feature = "cli")]
pub use console::*;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Stakes, winnings and house reserves.
pub type Chips = u64;
/// Pay-table payout, applied to the stake. Exact decimal, so fractional
/// payouts like 0.5 or 1.25 settle without rounding.
pub type Multiplier = rust_decimal::Decimal;
/// Relative likelihood of a symbol landing on a reel.
pub type Weight = u32;

// ============================================================================
// MACHINE DEFAULTS
// Used for any field a configuration document leaves out.
// ============================================================================
/// Number of reels spun per play.
pub const DEFAULT_REELS: usize = 3;
/// Smallest stake the machine accepts.
pub const DEFAULT_MINIMUM_PLAY: Chips = 25;
/// Upper bound on a configured reel count.
pub const MAXIMUM_REELS: usize = 1024;

// ============================================================================
// CONFIGURATION DISCOVERY
// ============================================================================
/// Environment variable naming the configuration file.
pub const CONFIG_PATH_VAR: &str = "SLOTS_CFG_PATH";
/// Configuration file used when the environment variable is unset.
pub const CONFIG_PATH_DEFAULT: &str = ".slots.cfg";

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Writes DEBUG level to `logs/`, and to the terminal only as much as
/// `verbosity` asks for so the prompt stays readable.
#[cfg(feature = "cli")]
pub fn log(verbosity: u8) -> anyhow::Result<()> {
    use anyhow::Context;
    std::fs::create_dir_all("logs").context("create logs directory")?;
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .context("time moves slow")?
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).context("create log file")?,
    );
    let term = simplelog::TermLogger::new(
        match verbosity {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            _ => log::LevelFilter::Debug,
        },
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).context("initialize logger")
}
