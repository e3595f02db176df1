//! Committee Binary
//!
//! Interactive monthly lucky draw for a four-member savings committee.
//! Falls back to line-by-line reading when input is piped.
//!
//! Options: --seed, --months, --payout
use clap::Parser;
use committee::*;

fn main() -> anyhow::Result<()> {
    committee::log()?;
    let args = Args::parse();
    log::debug!("{:?}", args);
    match committee::interactive() {
        true => session(&args, Terminal),
        false => session(&args, Stream::new(std::io::stdin().lock(), std::io::stdout())),
    }
}

fn session<C: Console>(args: &Args, console: C) -> anyhow::Result<()> {
    Committee::new(args.picker(), console)
        .with_payout(args.payout)
        .run(args.months)
}
