//! Rotating-savings committee simulator.
//!
//! A fixed set of members contributes each month and one of them is drawn
//! to receive the pooled payout. Every member wins at most once per cycle.
//!
//! ## Modules
//!
//! - [`Member`], [`Registry`]: the fixed roster and its mutable state
//! - [`Picker`], [`Fair`]: pluggable source of draw randomness
//! - [`Payment`], [`Receipt`]: payout transfer
//! - [`Console`], [`Stream`]: prompts and output, terminal-backed with the `cli` feature
//! - [`Committee`]: the monthly cycle controller
//! - `Args`: command-line flags (requires `cli` feature)

#[cfg(feature = "cli")]
mod args;
mod committee;
mod console;
mod draw;
mod member;
mod payment;
mod registry;

#[cfg(feature = "cli")]
pub use args::*;
pub use committee::*;
pub use console::*;
pub use draw::*;
pub use member::*;
pub use payment::*;
pub use registry::*;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Balances, contributions and payouts in whole rupees.
pub type Rupees = i64;
/// Member identity as printed in the roster table.
pub type MemberId = u32;
/// One-based month counter of the outer loop.
pub type Month = usize;

// ============================================================================
// COMMITTEE PARAMETERS
// ============================================================================
/// Currency label appended to every amount shown on screen.
pub const CURRENCY: &str = "PKR";
/// Fixed roster, in display order.
pub const ROSTER: [(MemberId, &str); 4] = [
    (101, "Ali"),
    (102, "Ahmed"),
    (103, "Sara"),
    (104, "Ayesha"),
];
/// Amount paid to each month's winner.
pub const PAYOUT: Rupees = 20_000;
/// Length of the outer monthly loop.
pub const MONTHS: Month = 12;
/// Selection attempts per draw. One attempt may be spent on a cycle reset.
pub const DRAW_ATTEMPTS: usize = 2;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, WARN to terminal
/// so that log lines stay out of the interactive roster tables.
#[cfg(feature = "cli")]
pub fn log() -> anyhow::Result<()> {
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
        log::LevelFilter::Warn,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).context("initialize logger")
}
