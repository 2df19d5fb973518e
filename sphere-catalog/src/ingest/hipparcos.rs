//! Column filter for the VizieR Hipparcos main catalogue export (I/239).

use crate::csv_io::{csv_reader, csv_writer, record_line};
use crate::errors::{CatalogError, CatalogResult, ParseReport};
use csv::StringRecord;
use sphere_core::angle::parse_decimal;
use std::io::{Read, Write};

pub const FILTERED_FILE: &str = "hipparcos_filtered.csv";

/// Source column and its renamed output column.
pub const COLUMN_MAP: [(&str, &str); 5] = [
    ("HIP", "hip_id"),
    ("_RA.icrs", "ra"),
    ("_DE.icrs", "dec"),
    ("Vmag", "vmag"),
    ("B-V", "bv"),
];

#[derive(Debug, Clone, PartialEq)]
pub struct HipparcosStar {
    pub hip_id: u32,
    pub ra: f64,
    pub dec: f64,
    pub vmag: Option<f64>,
    pub bv: Option<f64>,
}

fn column_indices(header: &StringRecord, source_name: &str) -> CatalogResult<[usize; 5]> {
    let mut indices = [0usize; 5];
    for (slot, (column, _)) in indices.iter_mut().zip(COLUMN_MAP) {
        *slot = header
            .iter()
            .position(|h| h == column)
            .ok_or_else(|| CatalogError::missing_column(source_name, column))?;
    }
    Ok(indices)
}

fn optional(value: &str) -> Result<Option<f64>, sphere_core::SphereError> {
    if value.is_empty() {
        Ok(None)
    } else {
        parse_decimal(value).map(Some)
    }
}

fn parse_hip_id(value: &str) -> Result<u32, sphere_core::SphereError> {
    value
        .parse::<u32>()
        .map_err(|_| sphere_core::SphereError::invalid_number(value, "HIP number"))
}

/// Reads the catalogue export keeping only the five mapped columns.
///
/// `HIP`, `_RA.icrs` and `_DE.icrs` are required per row; empty `Vmag` and
/// `B-V` cells are allowed.
pub fn read_hipparcos<R: Read>(rdr: R, source_name: &str) -> CatalogResult<ParseReport<HipparcosStar>> {
    let mut reader = csv_reader(rdr);
    let [hip, ra, dec, vmag, bv] = column_indices(reader.headers()?, source_name)?;
    let width = hip.max(ra).max(dec).max(vmag).max(bv) + 1;

    let mut report = ParseReport::new();
    for record in reader.records() {
        let record = record?;
        if record.len() < width {
            report.skipped += 1;
            continue;
        }
        let line = record_line(&record);
        let star = (
            report.check(line, "HIP", parse_hip_id(&record[hip])),
            report.check(line, "_RA.icrs", parse_decimal(&record[ra])),
            report.check(line, "_DE.icrs", parse_decimal(&record[dec])),
            report.check(line, "Vmag", optional(&record[vmag])),
            report.check(line, "B-V", optional(&record[bv])),
        );
        if let (Some(hip_id), Some(ra), Some(dec), Some(vmag), Some(bv)) = star {
            report.records.push(HipparcosStar { hip_id, ra, dec, vmag, bv });
        }
    }

    Ok(report)
}

pub fn write_hipparcos<W: Write>(wtr: W, stars: &[HipparcosStar]) -> CatalogResult<()> {
    let mut out = csv_writer(wtr);
    out.write_record(COLUMN_MAP.iter().map(|(_, renamed)| *renamed))?;
    for s in stars {
        out.serialize((s.hip_id, s.ra, s.dec, s.vmag, s.bv))?;
    }
    out.flush()?;
    Ok(())
}
