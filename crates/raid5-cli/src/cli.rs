use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(author, version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Stripe bits across discs, optionally lose one disc and rebuild it.
    Simulate(SimulateArgs),

    /// Print which disc holds parity in each stripe row.
    Schedule(ScheduleArgs),
}

#[derive(Args, Debug, Clone)]
pub struct SimulateArgs {
    #[arg(
        long,
        env = "RAID5_DISCS",
        default_value_t = 3,
        value_parser = clap::value_parser!(u8).range(2..=9)
    )]
    pub discs: u8,

    #[command(flatten)]
    pub source: DataSource,

    /// Seed for `--random` data.
    #[arg(long, env = "RAID5_SEED", default_value_t = 0)]
    pub seed: u64,

    /// Index of the disc to lose after striping.
    #[arg(long, env = "RAID5_DAMAGE")]
    pub damage: Option<usize>,

    /// Read back while the damaged disc is still lost.
    #[arg(long, requires = "damage")]
    pub no_recover: bool,

    /// Write the read-back bits to this file.
    #[arg(long, env = "RAID5_OUTPUT")]
    pub output: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
#[group(required = true, multiple = false)]
pub struct DataSource {
    /// Bits to stripe, as '0'/'1' characters.
    #[arg(long, env = "RAID5_DATA")]
    pub data: Option<String>,

    /// Text file holding the bits to stripe.
    #[arg(long, env = "RAID5_INPUT")]
    pub input: Option<PathBuf>,

    /// Generate this many random bits.
    #[arg(long, value_name = "LEN")]
    pub random: Option<usize>,
}

#[derive(Args, Debug, Clone)]
pub struct ScheduleArgs {
    #[arg(
        long,
        env = "RAID5_DISCS",
        default_value_t = 3,
        value_parser = clap::value_parser!(u8).range(2..=9)
    )]
    pub discs: u8,

    #[arg(long, default_value_t = 10)]
    pub rows: usize,
}
