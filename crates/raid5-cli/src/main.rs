mod cli;
mod metrics_runtime;
mod persist;
mod simulator;

use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Command, DataSource, SimulateArgs};
use crate::persist::{read_bits_file, write_bits_file};
use crate::simulator::{random_bits, render_schedule, run_simulation};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    if !metrics_runtime::install() {
        warn!("metrics sink already installed");
    }

    match cli.command {
        Command::Simulate(args) => simulate(&args),
        Command::Schedule(args) => {
            print!("{}", render_schedule(usize::from(args.discs), args.rows));
            Ok(())
        }
    }
}

fn load_data(source: &DataSource, seed: u64) -> anyhow::Result<String> {
    if let Some(data) = &source.data {
        return Ok(data.clone());
    }
    if let Some(path) = &source.input {
        return read_bits_file(path);
    }
    Ok(random_bits(source.random.unwrap_or_default(), seed))
}

fn simulate(args: &SimulateArgs) -> anyhow::Result<()> {
    let data = load_data(&args.source, args.seed)?;
    let report = run_simulation(
        usize::from(args.discs),
        &data,
        args.damage,
        !args.no_recover,
    )?;
    print!("{}", report.render());

    if let Some(path) = &args.output {
        write_bits_file(path, &report.read_back)?;
        info!("saved data to {}", path.display());
    }
    Ok(())
}
