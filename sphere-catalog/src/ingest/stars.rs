//! Merges a refreshed star table into the existing one.
//!
//! Rows are paired by position. Each merged row is the original row plus the
//! last column of its partner. Pairs whose positions disagree are reported.

use crate::csv_io::{csv_reader, csv_writer, record_line};
use crate::errors::{CatalogError, CatalogResult, ParseReport};
use csv::StringRecord;
use sphere_core::AngleUnits;
use std::io::{Read, Write};

/// Squared RA/Dec distance above which a pair is reported.
pub const POSITION_TOLERANCE_SQ: f64 = 0.0001;

pub const MERGED_FILE: &str = "stars-merged.csv";

/// A CSV table with rows of fewer than three fields removed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StarTable {
    pub header: StringRecord,
    pub rows: Vec<StringRecord>,
}

impl StarTable {
    pub fn read<R: Read>(rdr: R) -> CatalogResult<Self> {
        let mut reader = csv_reader(rdr);
        let header = reader.headers()?.clone();
        let mut rows = Vec::new();
        let mut skipped = 0usize;
        for record in reader.records() {
            let record = record?;
            if record.len() > 2 {
                rows.push(record);
            } else {
                skipped += 1;
            }
        }
        if skipped > 0 {
            tracing::debug!(skipped, "dropped star rows with too few fields");
        }
        Ok(Self { header, rows })
    }

    pub fn write<W: Write>(&self, wtr: W) -> CatalogResult<()> {
        let mut out = csv_writer(wtr);
        out.write_record(&self.header)?;
        for row in &self.rows {
            out.write_record(row)?;
        }
        out.flush()?;
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StarMerge {
    pub table: StarTable,
    /// 0-based data row indices whose positions differ.
    pub mismatches: Vec<usize>,
}

fn with_last_field(base: &StringRecord, other: &StringRecord) -> StringRecord {
    let mut merged = base.clone();
    merged.push_field(other.iter().last().unwrap_or(""));
    merged
}

fn position(report: &mut ParseReport<()>, record: &StringRecord) -> Option<(f64, f64)> {
    let line = record_line(record);
    let ra = report.check(line, "ra", record[0].deg());
    let dec = report.check(line, "dec", record[1].deg());
    ra.zip(dec)
}

pub fn merge_star_tables(original: &StarTable, updated: &StarTable) -> CatalogResult<StarMerge> {
    if updated.rows.len() < original.rows.len() {
        return Err(CatalogError::rows_exhausted(
            "updated star table",
            original.rows.len(),
            updated.rows.len(),
        ));
    }

    let mut report = ParseReport::new();
    let mut rows = Vec::with_capacity(original.rows.len());
    let mut mismatches = Vec::new();

    for (i, (orig, new)) in original.rows.iter().zip(&updated.rows).enumerate() {
        if let (Some(a), Some(b)) = (position(&mut report, orig), position(&mut report, new)) {
            let distance_sq = (a.0 - b.0).powi(2) + (a.1 - b.1).powi(2);
            if distance_sq > POSITION_TOLERANCE_SQ {
                tracing::warn!(row = i, distance_sq, "star positions differ");
                mismatches.push(i);
            }
        }
        rows.push(with_last_field(orig, new));
    }
    report.into_result("star tables")?;

    Ok(StarMerge {
        table: StarTable {
            header: with_last_field(&original.header, &updated.header),
            rows,
        },
        mismatches,
    })
}
