//! bound_in_20 → vertex list and closed constellation borders

use crate::cli::{Cli, VerticesArgs};
use crate::output::{checked, create_file, read_text};
use sphere_catalog::csv_io::{write_segments, write_vertices};
use sphere_catalog::ingest::bound_in_20::{boundary_borders, parse_bound_in_20, BORDERS_FILE, VERTICES_FILE};
use sphere_catalog::lines::group_by_constellation;

pub fn run(args: &VerticesArgs, cli: &Cli) -> anyhow::Result<()> {
    print_plan(args, cli);

    let text = read_text(&args.input)?;
    let report = parse_bound_in_20(&text);
    let skipped = report.skipped;
    let vertices = checked(report, &args.input)?;
    let borders = boundary_borders(&vertices);

    let vertices_path = args.output_dir.join(VERTICES_FILE);
    write_vertices(create_file(&vertices_path)?, &vertices)?;
    tracing::info!("Wrote {:?}", vertices_path);

    let borders_path = args.output_dir.join(BORDERS_FILE);
    write_segments(create_file(&borders_path)?, &borders)?;
    tracing::info!("Wrote {:?}", borders_path);

    tracing::info!("=== Summary ===");
    tracing::info!("Vertices: {}", vertices.len());
    tracing::info!("Constellation loops: {}", group_by_constellation(&vertices).len());
    tracing::info!("Border segments: {}", borders.len());
    tracing::info!("Short lines dropped: {}", skipped);
    Ok(())
}

fn print_plan(args: &VerticesArgs, cli: &Cli) {
    tracing::info!("=== Boundary Vertices ===");
    tracing::info!("Input: {:?}", args.input);
    tracing::info!("Output directory: {:?}", args.output_dir);
    tracing::debug!("Verbose: {}", cli.verbose);
}
