//! Vertex groups joined with the constellation names table

use crate::cli::{Cli, JoinArgs};
use crate::output::{checked, create_output, describe, open_input, read_text};
use sphere_catalog::csv_io::read_join_vertices;
use sphere_catalog::ingest::join::{join_constellations, name_rows};
use std::io::Write;

pub fn run(args: &JoinArgs, cli: &Cli) -> anyhow::Result<()> {
    tracing::info!("=== Constellation Join ===");
    tracing::info!("Vertices: {:?}", args.vertices);
    tracing::info!("Names: {:?}", args.names);
    tracing::debug!("Verbose: {}", cli.verbose);

    let vertices = checked(read_join_vertices(open_input(&args.vertices)?)?, &args.vertices)?;
    let names = name_rows(&read_text(&args.names)?);
    let lines = join_constellations(&vertices, &names, !args.no_names_header)?;

    let mut out = create_output(args.output.as_deref())?;
    for line in &lines {
        writeln!(out, "{}", line)?;
    }
    out.flush()?;

    tracing::info!("{} vertices joined into {} lines, written to {}", vertices.len(), lines.len(), describe(args.output.as_deref()));
    Ok(())
}
