//! Star table maintenance: refreshed-column merge and the Hipparcos filter

use crate::cli::{Cli, FilterHipparcosArgs, MergeStarsArgs};
use crate::output::{checked, create_file, log_field_errors, open_input};
use sphere_catalog::ingest::hipparcos::{read_hipparcos, write_hipparcos};
use sphere_catalog::ingest::stars::{merge_star_tables, StarTable};

pub fn run_merge(args: &MergeStarsArgs, cli: &Cli) -> anyhow::Result<()> {
    tracing::info!("=== Star Table Merge ===");
    tracing::info!("Original: {:?}", args.original);
    tracing::info!("Updated: {:?}", args.updated);
    tracing::debug!("Verbose: {}", cli.verbose);

    let original = StarTable::read(open_input(&args.original)?)?;
    let updated = StarTable::read(open_input(&args.updated)?)?;
    let merge = merge_star_tables(&original, &updated).map_err(log_field_errors)?;

    merge.table.write(create_file(&args.output)?)?;

    tracing::info!("=== Summary ===");
    tracing::info!("Rows merged: {}", merge.table.rows.len());
    tracing::info!("Position mismatches: {}", merge.mismatches.len());
    tracing::info!("Wrote {:?}", args.output);
    Ok(())
}

pub fn run_filter_hipparcos(args: &FilterHipparcosArgs, cli: &Cli) -> anyhow::Result<()> {
    tracing::info!("=== Hipparcos Column Filter ===");
    tracing::info!("Input: {:?}", args.input);
    tracing::debug!("Verbose: {}", cli.verbose);

    let source = args.input.display().to_string();
    let report = read_hipparcos(open_input(&args.input)?, &source)?;
    let stars = checked(report, &args.input)?;

    write_hipparcos(create_file(&args.output)?, &stars)?;
    tracing::info!("{} stars. Filtered data saved to {:?}", stars.len(), args.output);
    Ok(())
}
