//! CSV readers and writers for the vertex and line schemas.
//!
//! Readers are lenient about shape and strict about numbers: rows with too few
//! columns are dropped and counted, unparsable numbers end up in the returned
//! [`ParseReport`]. Extra trailing columns are ignored. A header row is
//! optional and recognised by its column names.

use crate::errors::{CatalogResult, ParseReport};
use crate::records::{BorderSegment, JoinVertex, Vertex};
use csv::{ReaderBuilder, StringRecord, Trim, WriterBuilder};
use sphere_core::AngleUnits;
use std::io::{Read, Write};

pub const VERTEX_HEADER: [&str; 3] = ["ra", "dec", "constellation"];

pub const SEGMENT_HEADER: [&str; 6] = ["ra_start", "dec_start", "ra_end", "dec_end", "colour", "width"];

pub const CONSTELLATION_COLUMN: &str = "constellation";

fn reader_builder(has_headers: bool) -> ReaderBuilder {
    let mut builder = ReaderBuilder::new();
    builder
        .delimiter(b',')
        .has_headers(has_headers)
        .flexible(true)
        .trim(Trim::All);
    builder
}

/// Flexible reader for tables addressed by column name. Blank lines are
/// skipped by `csv`.
pub fn csv_reader<R: Read>(rdr: R) -> csv::Reader<R> {
    reader_builder(true).from_reader(rdr)
}

/// Flexible reader that yields every row, a header row included.
pub fn csv_row_reader<R: Read>(rdr: R) -> csv::Reader<R> {
    reader_builder(false).from_reader(rdr)
}

/// True if `record` starts with the column names of `header`, ignoring case.
pub fn is_header_row(record: &StringRecord, header: &[&str]) -> bool {
    record.len() >= header.len()
        && record
            .iter()
            .zip(header)
            .all(|(field, name)| field.eq_ignore_ascii_case(name))
}

/// Writer that leaves the header to the caller.
pub fn csv_writer<W: Write>(wtr: W) -> csv::Writer<W> {
    WriterBuilder::new().has_headers(false).from_writer(wtr)
}

/// 1-based input line of a record.
pub fn record_line(record: &StringRecord) -> u64 {
    record.position().map_or(0, |p| p.line())
}

pub fn read_vertices<R: Read>(rdr: R) -> CatalogResult<ParseReport<Vertex>> {
    let mut report = ParseReport::new();

    for (i, record) in csv_row_reader(rdr).records().enumerate() {
        let record = record?;
        if i == 0 && is_header_row(&record, &VERTEX_HEADER) {
            continue;
        }
        if record.len() < VERTEX_HEADER.len() {
            report.skipped += 1;
            continue;
        }
        let line = record_line(&record);
        let ra = report.check(line, "ra", record[0].deg());
        let dec = report.check(line, "dec", record[1].deg());
        if let (Some(ra), Some(dec)) = (ra, dec) {
            report.records.push(Vertex::new(ra, dec, &record[2]));
        }
    }

    Ok(report)
}

/// Reads the vertex schema for joining. Coordinates must parse, but are kept as
/// the trimmed source text.
pub fn read_join_vertices<R: Read>(rdr: R) -> CatalogResult<ParseReport<JoinVertex>> {
    let mut report = ParseReport::new();

    for (i, record) in csv_row_reader(rdr).records().enumerate() {
        let record = record?;
        if i == 0 && is_header_row(&record, &VERTEX_HEADER) {
            continue;
        }
        if record.len() < VERTEX_HEADER.len() {
            report.skipped += 1;
            continue;
        }
        let line = record_line(&record);
        let ra = report.check(line, "ra", record[0].deg());
        let dec = report.check(line, "dec", record[1].deg());
        if ra.is_some() && dec.is_some() {
            report.records.push(JoinVertex::new(&record[0], &record[1], &record[2]));
        }
    }

    Ok(report)
}

pub fn write_vertices<W: Write>(wtr: W, vertices: &[Vertex]) -> CatalogResult<()> {
    let mut out = csv_writer(wtr);
    out.write_record(VERTEX_HEADER)?;
    for v in vertices {
        out.serialize(v)?;
    }
    out.flush()?;
    Ok(())
}

pub fn read_segments<R: Read>(rdr: R) -> CatalogResult<ParseReport<BorderSegment>> {
    let mut report = ParseReport::new();

    for (i, record) in csv_row_reader(rdr).records().enumerate() {
        let record = record?;
        if i == 0 && is_header_row(&record, &SEGMENT_HEADER) {
            continue;
        }
        if record.len() < SEGMENT_HEADER.len() {
            report.skipped += 1;
            continue;
        }
        let line = record_line(&record);
        let ra_start = report.check(line, "ra_start", record[0].deg());
        let dec_start = report.check(line, "dec_start", record[1].deg());
        let ra_end = report.check(line, "ra_end", record[2].deg());
        let dec_end = report.check(line, "dec_end", record[3].deg());
        let width = report.check(line, "width", record[5].deg());

        if let (Some(ra_start), Some(dec_start), Some(ra_end), Some(dec_end), Some(width)) =
            (ra_start, dec_start, ra_end, dec_end, width)
        {
            report.records.push(BorderSegment {
                ra_start,
                dec_start,
                ra_end,
                dec_end,
                colour: record[4].to_string(),
                width,
                constellation: record.get(6).filter(|c| !c.is_empty()).map(str::to_string),
            });
        }
    }

    Ok(report)
}

/// Writes line segments. The constellation column is present only if at least
/// one segment carries a code.
pub fn write_segments<W: Write>(wtr: W, segments: &[BorderSegment]) -> CatalogResult<()> {
    let with_code = segments.iter().any(|s| s.constellation.is_some());
    let mut out = csv_writer(wtr);

    if with_code {
        let mut header = StringRecord::from(SEGMENT_HEADER.to_vec());
        header.push_field(CONSTELLATION_COLUMN);
        out.write_record(&header)?;
    } else {
        out.write_record(SEGMENT_HEADER)?;
    }

    for s in segments {
        let row = (s.ra_start, s.dec_start, s.ra_end, s.dec_end, s.colour.as_str(), s.width);
        if with_code {
            let code = s.constellation.as_deref().unwrap_or("");
            out.serialize((row.0, row.1, row.2, row.3, row.4, row.5, code))?;
        } else {
            out.serialize(row)?;
        }
    }

    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::{BOUNDARY_STYLE, ECLIPTIC_STYLE};
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_read_vertices_drops_short_rows() {
        let input = "ra,dec,constellation\n10.5,20.25,AND\n11.0,21.0\n\n12.0,-3.5,AND\n";
        let report = read_vertices(input.as_bytes()).unwrap();
        assert!(report.is_clean());
        assert_eq!(report.skipped, 1);
        assert_eq!(report.records.len(), 2);
        assert_eq!(report.records[1], Vertex::new(12.0, -3.5, "AND"));
    }

    #[test]
    fn test_read_vertices_reports_bad_numbers() {
        let input = "ra,dec,constellation\n10.5,north,AND\nabc,1.0,AND\n1.0,2.0,AND\n";
        let report = read_vertices(input.as_bytes()).unwrap();
        assert_eq!(report.records.len(), 1);
        assert_eq!(report.errors.len(), 2);
        assert_eq!(report.errors[0].line, 2);
        assert_eq!(report.errors[0].field, "dec");
        assert_eq!(report.errors[0].error.value(), Some("north"));
        assert_eq!(report.errors[1].line, 3);
        assert_eq!(report.errors[1].field, "ra");
    }

    #[test]
    fn test_read_vertices_without_header() {
        let input = "342.9375,+35.1666667,AND\n356.25,+35.1666667,AND\n";
        let report = read_vertices(input.as_bytes()).unwrap();
        assert!(report.is_clean());
        assert_eq!(report.skipped, 0);
        assert_eq!(report.records.len(), 2);
        assert_eq!(report.records[0], Vertex::new(342.9375, 35.1666667, "AND"));
    }

    #[test]
    fn test_join_vertices_keep_source_text() {
        let input = "343.7690271, +35.1682405 ,AND\n1.50,-04.25,AND\n1.0,south,AND\n";
        let report = read_join_vertices(input.as_bytes()).unwrap();
        assert_eq!(report.errors.len(), 1);
        assert_eq!(report.errors[0].field, "dec");
        assert_eq!(
            report.records,
            [
                JoinVertex::new("343.7690271", "+35.1682405", "AND"),
                JoinVertex::new("1.50", "-04.25", "AND"),
            ]
        );
    }

    #[test]
    fn test_read_segments_without_header() {
        let input = "1.0,2.0,3.0,4.0,87C5FFFF,1,AND\n3.0,4.0,1.0,2.0,87C5FFFF,1,AND\n";
        let report = read_segments(input.as_bytes()).unwrap();
        assert!(report.is_clean());
        assert_eq!(report.records.len(), 2);
        assert_eq!(report.records[0].start(), (1.0, 2.0));
        assert_eq!(report.records[0].constellation.as_deref(), Some("AND"));
    }

    #[test]
    fn test_only_first_row_can_be_header() {
        let input = "RA,Dec,Constellation\n1.0,2.0,AND\nra,dec,constellation\n";
        let report = read_vertices(input.as_bytes()).unwrap();
        assert_eq!(report.records.len(), 1);
        assert_eq!(report.errors.len(), 2);
        assert_eq!(report.errors[0].line, 3);
    }

    #[test]
    fn test_segment_round_trip() {
        let segments = vec![
            BorderSegment::new((343.125, 34.5), (0.000123, -89.999999), BOUNDARY_STYLE).with_constellation("AND"),
            BorderSegment::new((1.0 / 3.0, 2.0 / 7.0), (359.9, 12.345678), BOUNDARY_STYLE).with_constellation("PEG"),
        ];
        let mut buf = Vec::new();
        write_segments(&mut buf, &segments).unwrap();

        let text = String::from_utf8(buf.clone()).unwrap();
        assert!(text.starts_with("ra_start,dec_start,ra_end,dec_end,colour,width,constellation\n"));

        let back = read_segments(buf.as_slice()).unwrap().into_result("buffer").unwrap();
        assert_eq!(back.len(), segments.len());
        for (a, b) in segments.iter().zip(&back) {
            assert_abs_diff_eq!(a.ra_start, b.ra_start, epsilon = 1e-6);
            assert_abs_diff_eq!(a.dec_start, b.dec_start, epsilon = 1e-6);
            assert_abs_diff_eq!(a.ra_end, b.ra_end, epsilon = 1e-6);
            assert_abs_diff_eq!(a.dec_end, b.dec_end, epsilon = 1e-6);
            assert_eq!(a.colour, b.colour);
            assert_eq!(a.width, b.width);
            assert_eq!(a.constellation, b.constellation);
        }
    }

    #[test]
    fn test_segments_without_code_have_six_columns() {
        let segments = vec![BorderSegment::new((0.0, 0.0), (5.0, 2.1), ECLIPTIC_STYLE)];
        let mut buf = Vec::new();
        write_segments(&mut buf, &segments).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("ra_start,dec_start,ra_end,dec_end,colour,width"));
        assert_eq!(lines.next().map(|l| l.split(',').count()), Some(6));
    }

    #[test]
    fn test_vertex_round_trip() {
        let vertices = vec![Vertex::new(82.5, -1.25, "ORI"), Vertex::new(83.0, -1.5, "ORI")];
        let mut buf = Vec::new();
        write_vertices(&mut buf, &vertices).unwrap();
        let back = read_vertices(buf.as_slice()).unwrap().into_result("buffer").unwrap();
        assert_eq!(back, vertices);
    }
}
