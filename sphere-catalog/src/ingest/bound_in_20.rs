//! Reader for the `bound_in_20` boundary table (J2000 constellation boundaries).
//!
//! Each line is whitespace delimited: `ra_hours dec code [...]`. Lines with
//! fewer than three fields are dropped. RA is converted to degrees and rounded
//! to six decimals; the declination is kept as given.

use crate::errors::ParseReport;
use crate::lines::borders::borders_from_vertices;
use crate::records::{BorderSegment, Vertex, BOUNDARY_STYLE};
use sphere_core::math::round_to;
use sphere_core::AngleUnits;

pub const RA_DECIMALS: i32 = 6;

pub const VERTICES_FILE: &str = "output_vertices.csv";
pub const BORDERS_FILE: &str = "output_borders.csv";

pub fn parse_bound_in_20(text: &str) -> ParseReport<Vertex> {
    let mut report = ParseReport::new();

    for (idx, line) in text.lines().enumerate() {
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() < 3 {
            report.skipped += 1;
            continue;
        }
        let line_no = idx as u64 + 1;
        let ra = report.check(line_no, "ra_hours", fields[0].hours());
        let dec = report.check(line_no, "dec", fields[1].deg());
        if let (Some(ra), Some(dec)) = (ra, dec) {
            report
                .records
                .push(Vertex::new(round_to(ra, RA_DECIMALS), dec, fields[2]));
        }
    }

    report
}

/// Closed boundary loops in the boundary style, tagged with their code.
pub fn boundary_borders(vertices: &[Vertex]) -> Vec<BorderSegment> {
    borders_from_vertices(vertices, BOUNDARY_STYLE, true)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
22.8625000 +35.1666667 AND
23.7500000 +35.1666667 AND
23.7500000 +21.0000000 AND

 0.5000000 +21.0000000 AND
10.5 -10
 9.5000000 -11.0000000 ANT   I
";

    #[test]
    fn test_parse_and_round() {
        let report = parse_bound_in_20(SAMPLE);
        assert!(report.is_clean());
        assert_eq!(report.skipped, 2);
        assert_eq!(report.records.len(), 5);
        assert_eq!(report.records[0].ra, 342.9375);
        assert_eq!(report.records[0].dec, 35.1666667);
        assert_eq!(report.records[3].ra, 7.5);
        assert_eq!(report.records[4].constellation, "ANT");
    }

    #[test]
    fn test_rounds_to_six_decimals() {
        let report = parse_bound_in_20("1.23456789 0 ORI\n");
        assert_eq!(report.records[0].ra, 18.518518);
    }

    #[test]
    fn test_bad_number_reported_with_line() {
        let report = parse_bound_in_20("1.0 2.0 AND\nx.5 2.0 AND\n");
        assert_eq!(report.records.len(), 1);
        assert_eq!(report.errors.len(), 1);
        assert_eq!(report.errors[0].line, 2);
        assert_eq!(report.errors[0].field, "ra_hours");
    }

    #[test]
    fn test_borders_close_each_constellation() {
        let vertices = parse_bound_in_20(SAMPLE).records;
        let borders = boundary_borders(&vertices);
        assert_eq!(borders.len(), 5);
        assert_eq!(borders[3].end(), (342.9375, 35.1666667));
        assert!(borders[4].is_degenerate());
        assert_eq!(borders[4].constellation.as_deref(), Some("ANT"));
        assert!(borders.iter().all(|b| b.colour == "87C5FFFF" && b.width == 1.0));
    }
}
