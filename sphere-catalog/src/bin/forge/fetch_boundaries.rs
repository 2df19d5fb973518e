//! Download of the IAU per-constellation boundary files

use crate::cli::{Cli, FetchBoundariesArgs};
use crate::output::{create_output, describe};
use indicatif::{ProgressBar, ProgressStyle};
use sphere_catalog::csv_io::write_vertices;
use sphere_catalog::fetch::{assemble, unique_codes, BoundaryFetcher};
use sphere_catalog::ingest::iau::CONSTELLATION_CODES;
use std::time::Duration;

pub fn run(args: &FetchBoundariesArgs, cli: &Cli) -> anyhow::Result<()> {
    let requested: Vec<&str> = if args.codes.is_empty() {
        CONSTELLATION_CODES.to_vec()
    } else {
        args.codes.iter().map(String::as_str).collect()
    };
    let codes = unique_codes(&requested);
    if codes.len() < requested.len() {
        tracing::warn!("Ignoring {} repeated code(s)", requested.len() - codes.len());
    }
    print_plan(args, cli, codes.len());

    let fetcher = BoundaryFetcher::new(&args.base_url, args.retries, Duration::from_secs(args.timeout_secs))?;
    let pb = create_progress_bar(codes.len() as u64);
    let outcomes = fetcher.fetch_all(&codes, args.concurrency, |code, result| {
        if let Err(e) = result {
            pb.println(format!("FAILED {}: {}", code, e));
        }
        pb.inc(1);
    })?;
    pb.finish_and_clear();

    let (vertices, failures) = assemble(&codes, outcomes);

    tracing::info!("=== Summary ===");
    tracing::info!("Fetched: {}", codes.len() - failures.len());
    tracing::info!("Failed: {}", failures.len());
    tracing::info!("Vertices: {}", vertices.len());
    for (code, err) in &failures {
        tracing::error!("{}: {}", code, err);
        for field_error in err.field_errors() {
            tracing::error!("  {}", field_error);
        }
    }

    if !failures.is_empty() && !args.allow_partial {
        anyhow::bail!(
            "{} downloads failed, nothing written. Re-run to retry or pass --allow-partial.",
            failures.len()
        );
    }

    write_vertices(create_output(args.output.as_deref())?, &vertices)?;
    tracing::info!("Vertices written to {}", describe(args.output.as_deref()));
    Ok(())
}

fn print_plan(args: &FetchBoundariesArgs, cli: &Cli, count: usize) {
    tracing::info!("=== IAU Boundary Download ===");
    tracing::info!("Source: {}", args.base_url);
    tracing::info!("Constellations: {}", count);
    tracing::info!("Concurrency: {}", args.concurrency);
    tracing::info!("Retries: {}", args.retries);
    tracing::debug!("Verbose: {}", cli.verbose);
}

fn create_progress_bar(total: u64) -> ProgressBar {
    let pb = ProgressBar::new(total);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({eta})")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-"),
    );
    pb
}
