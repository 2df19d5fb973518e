//! Pairs constellation boundary loops with rows of a constellation names table.
//!
//! Output lines look like `<names row>,ra;dec|ra;dec|...`, with coordinates
//! copied from the vertex file as written. Vertices are grouped into runs of
//! equal code. The second Serpens half (`SER2`) is appended to the line of the
//! preceding group after a `#` instead of consuming a names row.

use crate::errors::{CatalogError, CatalogResult};
use crate::records::JoinVertex;

pub const SERPENS_CAUDA: &str = "SER2";

pub const PAIR_SEPARATOR: &str = "|";
pub const LOOP_SEPARATOR: char = '#';

/// Placeholder paired with the names header row.
pub const VERTEX_PAIR_HEADER: &str = "ra;dec";

/// Trimmed rows of the names table having at least two comma-separated fields.
pub fn name_rows(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| line.split(',').count() > 1)
        .map(str::to_string)
        .collect()
}

fn vertex_pairs(run: &[JoinVertex]) -> String {
    run.iter()
        .map(|v| format!("{};{}", v.ra, v.dec))
        .collect::<Vec<_>>()
        .join(PAIR_SEPARATOR)
}

/// Joins runs of equal-code vertices with name rows in order.
///
/// When `names_have_header` is set, the first name row is emitted with
/// [`VERTEX_PAIR_HEADER`] and the runs pair with the rows after it.
pub fn join_constellations(
    vertices: &[JoinVertex],
    names: &[String],
    names_have_header: bool,
) -> CatalogResult<Vec<String>> {
    let mut lines = Vec::new();
    let mut rows = names.iter();

    if names_have_header {
        let header = rows
            .next()
            .ok_or_else(|| CatalogError::rows_exhausted("constellation names", 1, 0))?;
        lines.push(format!("{header},{VERTEX_PAIR_HEADER}"));
    }

    let mut current: Option<String> = None;
    let mut used = 0;
    for run in vertices.chunk_by(|a, b| a.constellation == b.constellation) {
        let pairs = vertex_pairs(run);

        if run[0].constellation == SERPENS_CAUDA {
            let line = current.as_mut().ok_or_else(|| {
                CatalogError::invalid_input(format!("{SERPENS_CAUDA} group has no preceding constellation"))
            })?;
            line.push(LOOP_SEPARATOR);
            line.push_str(&pairs);
            continue;
        }

        lines.extend(current.take());
        let name = rows.next().ok_or_else(|| {
            let offset = usize::from(names_have_header);
            CatalogError::rows_exhausted("constellation names", used + 1 + offset, names.len())
        })?;
        used += 1;
        current = Some(format!("{name},{pairs}"));
    }
    lines.extend(current);

    if rows.len() > 0 {
        tracing::debug!(unused = rows.len(), "constellation name rows left unpaired");
    }
    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(rows: &[&str]) -> Vec<String> {
        rows.iter().map(|r| r.to_string()).collect()
    }

    fn vertices(rows: &[(&str, &str, &str)]) -> Vec<JoinVertex> {
        rows.iter().map(|&(ra, dec, c)| JoinVertex::new(ra, dec, c)).collect()
    }

    #[test]
    fn test_name_rows_filter() {
        let text = "name,abbr\n  Andromeda,AND  \n\nlonely\nAntlia,ANT\n";
        assert_eq!(name_rows(text), names(&["name,abbr", "Andromeda,AND", "Antlia,ANT"]));
    }

    #[test]
    fn test_join_with_header() {
        let v = vertices(&[("1.5", "2", "AND"), ("3", "-4.25", "AND"), ("10", "0", "ANT")]);
        let n = names(&["name,abbr", "Andromeda,AND", "Antlia,ANT"]);
        let lines = join_constellations(&v, &n, true).unwrap();
        assert_eq!(
            lines,
            ["name,abbr,ra;dec", "Andromeda,AND,1.5;2|3;-4.25", "Antlia,ANT,10;0"]
        );
    }

    #[test]
    fn test_coordinates_are_copied_verbatim() {
        let v = vertices(&[("343.7690271", "+35.1682405", "AND"), ("1.50", "-04.250", "AND")]);
        let lines = join_constellations(&v, &names(&["Andromeda,AND"]), false).unwrap();
        assert_eq!(lines, ["Andromeda,AND,343.7690271;+35.1682405|1.50;-04.250"]);
    }

    #[test]
    fn test_serpens_cauda_shares_line() {
        let v = vertices(&[
            ("1", "1", "SER1"),
            ("2", "2", "SER1"),
            ("5", "5", "SER2"),
            ("6", "6", "SER2"),
            ("9", "9", "SEX"),
        ]);
        let n = names(&["Serpens,SER", "Sextans,SEX"]);
        let lines = join_constellations(&v, &n, false).unwrap();
        assert_eq!(lines, ["Serpens,SER,1;1|2;2#5;5|6;6", "Sextans,SEX,9;9"]);
    }

    #[test]
    fn test_reappearing_code_takes_a_new_row() {
        let v = vertices(&[("1", "1", "AND"), ("2", "2", "ANT"), ("3", "3", "AND")]);
        let n = names(&["Andromeda,AND", "Antlia,ANT", "Andromeda,AND"]);
        let lines = join_constellations(&v, &n, false).unwrap();
        assert_eq!(lines, ["Andromeda,AND,1;1", "Antlia,ANT,2;2", "Andromeda,AND,3;3"]);
    }

    #[test]
    fn test_names_exhausted() {
        let v = vertices(&[("1", "1", "AND"), ("2", "2", "ANT")]);
        let err = join_constellations(&v, &names(&["Andromeda,AND"]), false).unwrap_err();
        assert!(matches!(err, CatalogError::RowsExhausted { needed: 2, found: 1, .. }));
    }

    #[test]
    fn test_leading_serpens_cauda_is_rejected() {
        let v = vertices(&[("1", "1", "SER2")]);
        assert!(join_constellations(&v, &names(&["Serpens,SER"]), false).is_err());
    }
}
