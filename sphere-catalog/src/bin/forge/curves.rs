//! Reference curve and grid generators

use crate::cli::{Cli, CurveArgs, GridArgs};
use crate::output::{create_file, create_output, describe};
use sphere_catalog::csv_io::write_segments;
use sphere_catalog::lines::{ecliptic_segments, galactic_equator_segments, grid_lines};
use sphere_catalog::BorderSegment;
use std::io::Write;

pub fn run_ecliptic(args: &CurveArgs, cli: &Cli) -> anyhow::Result<()> {
    tracing::debug!("Verbose: {}", cli.verbose);
    let segments = ecliptic_segments(args.step)?;
    write_curve("Ecliptic", args, &segments)
}

pub fn run_galactic_equator(args: &CurveArgs, cli: &Cli) -> anyhow::Result<()> {
    tracing::debug!("Verbose: {}", cli.verbose);
    let segments = galactic_equator_segments(args.step)?;
    write_curve("Galactic equator", args, &segments)
}

fn write_curve(label: &str, args: &CurveArgs, segments: &[BorderSegment]) -> anyhow::Result<()> {
    write_segments(create_output(args.output.as_deref())?, segments)?;
    tracing::info!(
        "{}: {} segments at {}° written to {}",
        label,
        segments.len(),
        args.step,
        describe(args.output.as_deref())
    );
    Ok(())
}

pub fn run_grid(args: &GridArgs, cli: &Cli) -> anyhow::Result<()> {
    tracing::debug!("Verbose: {}", cli.verbose);
    let grid = grid_lines();

    match &args.output_dir {
        Some(dir) => {
            for (name, segments) in grid.outputs() {
                let path = dir.join(name);
                write_segments(create_file(&path)?, segments)?;
                tracing::info!("{}: {} segments", path.display(), segments.len());
            }
        }
        None => {
            // One section per file, each headed by its file name.
            let mut out = create_output(None)?;
            for (name, segments) in grid.outputs() {
                writeln!(out, "{}", name)?;
                let mut section = Vec::new();
                write_segments(&mut section, segments)?;
                out.write_all(&section)?;
                writeln!(out)?;
            }
            out.flush()?;
        }
    }
    Ok(())
}
