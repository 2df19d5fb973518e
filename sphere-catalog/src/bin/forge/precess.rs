//! Border lines carried to another epoch

use crate::cli::{Cli, PrecessArgs};
use crate::output::{checked, create_output, describe, open_input};
use sphere_catalog::csv_io::{read_segments, write_segments};
use sphere_catalog::lines::precess_segments;
use sphere_catalog::records::PRECESSED_BOUNDARY_STYLE;

pub fn run(args: &PrecessArgs, cli: &Cli) -> anyhow::Result<()> {
    let t = args.epoch.centuries();
    tracing::info!("=== Border Precession ===");
    tracing::info!("Input: {:?}", args.input);
    tracing::info!("Julian centuries from J2000: {:.6}", t);
    tracing::info!("Subdivision step: {}°", args.step);
    tracing::debug!("Verbose: {}", cli.verbose);

    let segments = checked(read_segments(open_input(&args.input)?)?, &args.input)?;
    let mut precessed = precess_segments(&segments, t, args.step)?;
    if !args.keep_style {
        precessed = precessed
            .into_iter()
            .map(|s| s.restyled(PRECESSED_BOUNDARY_STYLE))
            .collect();
    }

    write_segments(create_output(args.output.as_deref())?, &precessed)?;
    tracing::info!(
        "{} segments in, {} out, written to {}",
        segments.len(),
        precessed.len(),
        describe(args.output.as_deref())
    );
    Ok(())
}
