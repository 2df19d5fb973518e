//! File plumbing shared by the subcommands

use anyhow::Context;
use sphere_catalog::{CatalogError, ParseReport};
use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter, Write};
use std::path::Path;

pub fn read_text(path: &Path) -> anyhow::Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read {:?}", path))
}

pub fn open_input(path: &Path) -> anyhow::Result<BufReader<File>> {
    let file = File::open(path).with_context(|| format!("Failed to open {:?}", path))?;
    Ok(BufReader::new(file))
}

pub fn create_file(path: &Path) -> anyhow::Result<BufWriter<File>> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).with_context(|| format!("Failed to create {:?}", parent))?;
    }
    let file = File::create(path).with_context(|| format!("Failed to create {:?}", path))?;
    Ok(BufWriter::new(file))
}

/// The given file, or stdout.
pub fn create_output(path: Option<&Path>) -> anyhow::Result<Box<dyn Write>> {
    match path {
        Some(path) => Ok(Box::new(create_file(path)?)),
        None => Ok(Box::new(BufWriter::new(io::stdout().lock()))),
    }
}

pub fn describe(path: Option<&Path>) -> String {
    path.map_or_else(|| "stdout".to_string(), |p| format!("{:?}", p))
}

/// Records of a clean report; otherwise logs every bad field and fails.
pub fn checked<T>(report: ParseReport<T>, source: &Path) -> anyhow::Result<Vec<T>> {
    let name = source.display().to_string();
    report.into_result(&name).map_err(log_field_errors)
}

pub fn log_field_errors(err: CatalogError) -> anyhow::Error {
    for field_error in err.field_errors() {
        tracing::error!("{}", field_error);
    }
    anyhow::Error::new(err).context("No output written")
}
