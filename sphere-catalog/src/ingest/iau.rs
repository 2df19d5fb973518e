//! IAU constellation boundary files.
//!
//! The IAU publishes one pipe-delimited text file per constellation:
//!
//! ```text
//! 22 57 04.5665 | +35.1682405 | AND
//! ```
//!
//! Fields are RA as `h m s`, declination in degrees, and the constellation code.

use crate::errors::ParseReport;
use crate::records::Vertex;
use sphere_core::AngleUnits;

pub const IAU_BOUNDARY_BASE_URL: &str = "https://www.iau.org/static/public/constellations/txt";

/// The 88 IAU constellation abbreviations in download order.
pub const CONSTELLATION_CODES: [&str; 88] = [
    "And", "Ant", "Aps", "Aqr", "Aql", "Ara", "Ari", "Aur", "Boo", "Cae", "Cam", "Cnc", "CVn", "CMa", "CMi",
    "Cap", "Car", "Cas", "Cen", "Cep", "Cet", "Cha", "Cir", "Col", "Com", "CrA", "CrB", "Crv", "Crt", "Cru",
    "Cyg", "Del", "Dor", "Dra", "Equ", "Eri", "For", "Gem", "Gru", "Her", "Hor", "Hya", "Hyi", "Ind", "Lac",
    "Leo", "LMi", "Lep", "Lib", "Lup", "Lyn", "Lyr", "Men", "Mic", "Mon", "Mus", "Nor", "Oct", "Oph", "Ori",
    "Pav", "Peg", "Per", "Phe", "Pic", "Psc", "PsA", "Pup", "Pyx", "Ret", "Sge", "Sgr", "Sco", "Scl", "Sct",
    "Ser", "Sex", "Tau", "Tel", "Tri", "TrA", "Tuc", "UMa", "UMi", "Vel", "Vir", "Vol", "Vul",
];

/// `<base>/<code lowercase>.txt`
pub fn boundary_url(base_url: &str, code: &str) -> String {
    format!("{}/{}.txt", base_url.trim_end_matches('/'), code.to_lowercase())
}

pub fn parse_iau_boundary(text: &str) -> ParseReport<Vertex> {
    let mut report = ParseReport::new();

    for (idx, line) in text.lines().enumerate() {
        let fields: Vec<&str> = line.split('|').map(str::trim).collect();
        if fields.len() < 3 {
            report.skipped += 1;
            continue;
        }
        let line_no = idx as u64 + 1;
        let ra = report.check(line_no, "ra", fields[0].hms());
        let dec = report.check(line_no, "dec", fields[1].deg());
        if let (Some(ra), Some(dec)) = (ra, dec) {
            report.records.push(Vertex::new(ra, dec, fields[2].to_uppercase()));
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::collections::HashSet;

    #[test]
    fn test_codes_are_unique() {
        let set: HashSet<_> = CONSTELLATION_CODES.iter().map(|c| c.to_lowercase()).collect();
        assert_eq!(set.len(), 88);
    }

    #[test]
    fn test_boundary_url() {
        assert_eq!(
            boundary_url(IAU_BOUNDARY_BASE_URL, "CVn"),
            "https://www.iau.org/static/public/constellations/txt/cvn.txt"
        );
        assert_eq!(boundary_url("http://127.0.0.1:9000/", "UMa"), "http://127.0.0.1:9000/uma.txt");
    }

    #[test]
    fn test_parse_lines() {
        let text = "05 30 00.0000 | -01.5000000 | ori\n\n05 36 00 | +10.0 | ORI\ngarbage\n";
        let report = parse_iau_boundary(text);
        assert!(report.is_clean());
        assert_eq!(report.skipped, 2);
        assert_eq!(report.records.len(), 2);
        assert_abs_diff_eq!(report.records[0].ra, 82.5, epsilon = 1e-12);
        assert_eq!(report.records[0].dec, -1.5);
        assert_eq!(report.records[0].constellation, "ORI");
        assert_abs_diff_eq!(report.records[1].ra, 84.0, epsilon = 1e-12);
    }

    #[test]
    fn test_serpens_halves_keep_their_codes() {
        let text = "15 08 | ignored\n15 08 00 | +00.0 | ser1\n18 56 00 | -03.0 | ser2\n";
        let report = parse_iau_boundary(text);
        let codes: Vec<_> = report.records.iter().map(|v| v.constellation.as_str()).collect();
        assert_eq!(codes, ["SER1", "SER2"]);
    }

    #[test]
    fn test_bad_ra_is_reported() {
        let report = parse_iau_boundary("5h | 1.0 | ORI\n");
        assert!(report.records.is_empty());
        assert_eq!(report.errors.len(), 1);
        assert_eq!(report.errors[0].field, "ra");
    }
}
