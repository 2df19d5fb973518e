//! Black-body colour table → Color32 literals

use crate::cli::{Cli, ColourTableArgs};
use crate::output::{checked, create_file, read_text};
use sphere_catalog::ingest::colour_table::parse_colour_table;
use std::io::Write;

pub fn run(args: &ColourTableArgs, cli: &Cli) -> anyhow::Result<()> {
    tracing::debug!("Verbose: {}", cli.verbose);

    let entries = checked(parse_colour_table(&read_text(&args.input)?), &args.input)?;

    let mut out = create_file(&args.output)?;
    for entry in &entries {
        writeln!(out, "{}", entry)?;
        tracing::debug!("{}", entry);
    }
    out.flush()?;

    tracing::info!("{} temperatures written to {:?}", entries.len(), args.output);
    Ok(())
}
