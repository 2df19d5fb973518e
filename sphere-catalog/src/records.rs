//! Record types exchanged between the ingest, line and CSV layers.

use serde::Serialize;

/// One boundary vertex, in degrees.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Vertex {
    pub ra: f64,
    pub dec: f64,
    pub constellation: String,
}

impl Vertex {
    pub fn new(ra: f64, dec: f64, constellation: impl Into<String>) -> Self {
        Self {
            ra,
            dec,
            constellation: constellation.into(),
        }
    }
}

/// A vertex row whose coordinates are kept as the text they were read from.
#[derive(Debug, Clone, PartialEq)]
pub struct JoinVertex {
    pub ra: String,
    pub dec: String,
    pub constellation: String,
}

impl JoinVertex {
    pub fn new(ra: impl Into<String>, dec: impl Into<String>, constellation: impl Into<String>) -> Self {
        Self {
            ra: ra.into(),
            dec: dec.into(),
            constellation: constellation.into(),
        }
    }
}

/// Contiguous run of vertices sharing one constellation code.
///
/// Vertex order is the polygon winding. Never empty.
#[derive(Debug, Clone, PartialEq)]
pub struct ConstellationGroup {
    pub constellation: String,
    pub vertices: Vec<Vertex>,
}

/// Colour token and stroke width, passed through to the renderer unchanged.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineStyle {
    /// `RRGGBBAA` hex.
    pub colour: &'static str,
    pub width: f64,
}

impl LineStyle {
    pub const fn new(colour: &'static str, width: f64) -> Self {
        Self { colour, width }
    }
}

pub const BOUNDARY_STYLE: LineStyle = LineStyle::new("87C5FFFF", 1.0);
pub const PRECESSED_BOUNDARY_STYLE: LineStyle = LineStyle::new("87C5FF3F", 1.0);
pub const ECLIPTIC_STYLE: LineStyle = LineStyle::new("6BFF6B10", 1.0);
pub const GALACTIC_EQUATOR_STYLE: LineStyle = LineStyle::new("A66BFF10", 1.0);
pub const GRID_STYLE: LineStyle = LineStyle::new("D9620D10", 1.0);
pub const GRID_EMPHASIS_STYLE: LineStyle = LineStyle::new("D90D0D23", 2.0);

/// A drawable line between two sky positions.
#[derive(Debug, Clone, PartialEq)]
pub struct BorderSegment {
    pub ra_start: f64,
    pub dec_start: f64,
    pub ra_end: f64,
    pub dec_end: f64,
    pub colour: String,
    pub width: f64,
    pub constellation: Option<String>,
}

impl BorderSegment {
    pub fn new(start: (f64, f64), end: (f64, f64), style: LineStyle) -> Self {
        Self {
            ra_start: start.0,
            dec_start: start.1,
            ra_end: end.0,
            dec_end: end.1,
            colour: style.colour.to_string(),
            width: style.width,
            constellation: None,
        }
    }

    pub fn with_constellation(mut self, code: impl Into<String>) -> Self {
        self.constellation = Some(code.into());
        self
    }

    pub fn start(&self) -> (f64, f64) {
        (self.ra_start, self.dec_start)
    }

    pub fn end(&self) -> (f64, f64) {
        (self.ra_end, self.dec_end)
    }

    pub fn is_degenerate(&self) -> bool {
        self.start() == self.end()
    }

    pub fn restyled(mut self, style: LineStyle) -> Self {
        self.colour = style.colour.to_string();
        self.width = style.width;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_builders() {
        let seg = BorderSegment::new((1.0, 2.0), (3.0, 4.0), BOUNDARY_STYLE).with_constellation("ORI");
        assert_eq!(seg.colour, "87C5FFFF");
        assert_eq!(seg.width, 1.0);
        assert_eq!(seg.constellation.as_deref(), Some("ORI"));
        assert!(!seg.is_degenerate());

        let faded = seg.restyled(PRECESSED_BOUNDARY_STYLE);
        assert_eq!(faded.colour, "87C5FF3F");
        assert_eq!(faded.constellation.as_deref(), Some("ORI"));
    }

    #[test]
    fn test_degenerate() {
        let seg = BorderSegment::new((10.0, -5.0), (10.0, -5.0), GRID_STYLE);
        assert!(seg.is_degenerate());
    }
}
