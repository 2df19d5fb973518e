//! Forge: sky sphere data preparation CLI
//!
//! Turns constellation boundary tables, star tables and colour tables into the
//! CSV files read by the sky renderer. Diagnostics go to stderr so generated
//! data can be piped from stdout.

mod cli;
mod colour_table;
mod curves;
mod fetch_boundaries;
mod join;
mod output;
mod precess;
mod stars;
mod vertices;

use clap::Parser;
use cli::{Cli, Commands};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match &cli.command {
        Commands::Vertices(args) => vertices::run(args, &cli),
        Commands::FetchBoundaries(args) => fetch_boundaries::run(args, &cli),
        Commands::JoinConstellations(args) => join::run(args, &cli),
        Commands::PrecessBorders(args) => precess::run(args, &cli),
        Commands::Ecliptic(args) => curves::run_ecliptic(args, &cli),
        Commands::GalacticEquator(args) => curves::run_galactic_equator(args, &cli),
        Commands::Grid(args) => curves::run_grid(args, &cli),
        Commands::MergeStars(args) => stars::run_merge(args, &cli),
        Commands::FilterHipparcos(args) => stars::run_filter_hipparcos(args, &cli),
        Commands::ColourTable(args) => colour_table::run(args, &cli),
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
