//! Converts a black-body colour table into `Color32` literals keyed by
//! temperature.
//!
//! The table alternates two rows per temperature (2° and 10° observer); only
//! the first of each pair is used. In a used row the first field is the
//! temperature and the three fields before the last are the 8-bit RGB values.

use crate::errors::ParseReport;
use sphere_core::SphereError;
use std::fmt;

pub const PROCESSED_FILE: &str = "processed.txt";

/// Minimum fields in a used row: temperature, r, g, b and a trailing field.
const MIN_FIELDS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColourEntry {
    pub temperature: u32,
    pub rgb: [u8; 3],
}

impl fmt::Display for ColourEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b] = self.rgb;
        write!(f, "({}, Color32::from_rgb({r}, {g}, {b}))", self.temperature)
    }
}

fn parse_channel(value: &str) -> Result<u8, SphereError> {
    value
        .parse::<u8>()
        .map_err(|_| SphereError::invalid_number(value, "8-bit colour channel"))
}

fn parse_temperature(value: &str) -> Result<u32, SphereError> {
    value
        .parse::<u32>()
        .map_err(|_| SphereError::invalid_number(value, "temperature in kelvin"))
}

/// Blank lines and `#` comments are removed before rows are paired.
pub fn parse_colour_table(text: &str) -> ParseReport<ColourEntry> {
    let mut report = ParseReport::new();

    let rows = text
        .lines()
        .enumerate()
        .filter(|(_, line)| {
            let line = line.trim();
            !line.is_empty() && !line.starts_with('#')
        })
        .step_by(2);

    for (idx, line) in rows {
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() < MIN_FIELDS {
            report.skipped += 1;
            continue;
        }
        let line_no = idx as u64 + 1;
        let n = fields.len();
        let temperature = report.check(line_no, "temperature", parse_temperature(fields[0]));
        let r = report.check(line_no, "r", parse_channel(fields[n - 4]));
        let g = report.check(line_no, "g", parse_channel(fields[n - 3]));
        let b = report.check(line_no, "b", parse_channel(fields[n - 2]));
        if let (Some(temperature), Some(r), Some(g), Some(b)) = (temperature, r, g, b) {
            report.records.push(ColourEntry {
                temperature,
                rgb: [r, g, b],
            });
        }
    }

    report
}
