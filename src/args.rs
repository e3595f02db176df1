use crate::*;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[arg(long, help = "Seed the lucky draw for a reproducible session")]
    pub seed: Option<u64>,
    #[arg(long, default_value_t = MONTHS, help = "Number of months to offer")]
    pub months: Month,
    #[arg(
        long,
        default_value_t = PAYOUT,
        value_parser = clap::value_parser!(i64).range(1..),
        help = "Amount paid to each winner"
    )]
    pub payout: Rupees,
}

impl Args {
    pub fn picker(&self) -> Fair {
        match self.seed {
            Some(seed) => Fair::seeded(seed),
            None => Fair::default(),
        }
    }
}
