//! Angle parsing from catalog tokens.
//!
//! Catalog files carry right ascension in three notations:
//!
//! ```text
//! Decimal hours:      22.8625000
//! Space separated:    22 51 45.0000
//! Colon / letters:    22:51:45   22h51m45s
//! ```
//!
//! and declination as signed decimal degrees (`+35.1666667`, `-09.25`).
//! [`AngleUnits`] parses a `str` in a known notation and always returns decimal
//! degrees. Failures carry the offending token so batch readers can report it.
//!
//! ```
//! use sphere_core::angle::AngleUnits;
//!
//! assert_eq!("05 30 00".hms().unwrap(), 82.5);
//! assert_eq!("5.5".hours().unwrap(), 82.5);
//! assert_eq!("+35.5".deg().unwrap(), 35.5);
//! assert!("NaN-ish".deg().is_err());
//! ```

use super::{hms_to_degrees, hours_to_degrees};
use crate::SphereError;
use once_cell::sync::Lazy;
use regex::Regex;

/// Parse strings as angles in a known notation, returning degrees.
pub trait AngleUnits {
    /// Parse as decimal degrees.
    fn deg(&self) -> Result<f64, SphereError>;
    /// Parse as decimal hours (1 hour = 15 degrees).
    fn hours(&self) -> Result<f64, SphereError>;
    /// Parse hours-minutes-seconds. See module docs for accepted separators.
    fn hms(&self) -> Result<f64, SphereError>;
}

impl AngleUnits for str {
    #[inline]
    fn deg(&self) -> Result<f64, SphereError> {
        parse_decimal(self)
    }

    #[inline]
    fn hours(&self) -> Result<f64, SphereError> {
        parse_decimal(self).map(hours_to_degrees)
    }

    #[inline]
    fn hms(&self) -> Result<f64, SphereError> {
        parse_hms(self)
    }
}

/// Parses a finite decimal number.
///
/// Non-finite spellings (`NaN`, `inf`) are rejected so they cannot leak into
/// generated files.
pub fn parse_decimal(s: &str) -> Result<f64, SphereError> {
    match s.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(SphereError::invalid_number(s.trim(), "decimal number")),
    }
}

static HMS_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"(?xi)
        ^\s*
        ([+-])?                          # optional sign
        (\d{1,3})                        # hours
        (?:[:h\s]+)                      # colon, h, spaces
        (\d{1,2})                        # minutes
        (?:[:m\s']+)                     # colon, m, spaces, apostrophe
        (\d{1,2}(?:\.\d*)?)              # seconds with optional decimal
        (?:[s\s"]*)                      # optional trailing marker
        $
        "#,
    )
    .expect("HMS pattern is valid")
});

/// Parses a sexagesimal right ascension and returns degrees.
///
/// The result may exceed 360° if the input exceeds 24h.
pub fn parse_hms(s: &str) -> Result<f64, SphereError> {
    let caps = HMS_REGEX
        .captures(s)
        .ok_or_else(|| SphereError::invalid_number(s.trim(), "sexagesimal hours"))?;

    let sign = caps
        .get(1)
        .map_or(1.0, |m| if m.as_str() == "-" { -1.0 } else { 1.0 });
    let field = |i: usize| parse_decimal(&caps[i]);

    Ok(sign * hms_to_degrees(field(2)?, field(3)?, field(4)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-10;

    #[test]
    fn test_decimal_parsing() {
        assert_eq!("45.5".deg().unwrap(), 45.5);
        assert_eq!("  -45.5  ".deg().unwrap(), -45.5);
        assert_eq!("+09.25".deg().unwrap(), 9.25);
        assert_eq!("1.5".hours().unwrap(), 22.5);
    }

    #[test]
    fn test_hms_space_separated() {
        let deg = "22 51 45.0000".hms().unwrap();
        let expected = (22.0 + 51.0 / 60.0 + 45.0 / 3600.0) * 15.0;
        assert!((deg - expected).abs() < EPSILON);

        assert_eq!("05 30 00".hms().unwrap(), 82.5);
        assert_eq!("5 30 0".hms().unwrap(), 82.5);
    }

    #[test]
    fn test_hms_other_separators() {
        assert_eq!("05:30:00".hms().unwrap(), 82.5);
        assert_eq!("05h30m00s".hms().unwrap(), 82.5);
        assert_eq!("05h 30m 00.0s".hms().unwrap(), 82.5);
        assert!(("-00:30:00".hms().unwrap() + 7.5).abs() < EPSILON);
    }

    #[test]
    fn test_hms_seconds_with_trailing_point() {
        assert_eq!("05 30 00.".hms().unwrap(), 82.5);
    }

    #[test]
    fn test_error_cases() {
        assert!("".deg().is_err());
        assert!("   ".deg().is_err());
        assert!("abc".deg().is_err());
        assert!("NaN".deg().is_err());
        assert!("inf".hours().is_err());
        assert!("05 30".hms().is_err());
        assert!("05 xx 00".hms().is_err());
        assert!("05:-30:00".hms().is_err());
    }

    #[test]
    fn test_error_carries_token() {
        let err = " 12 ab 00 ".hms().unwrap_err();
        assert_eq!(err.value(), Some("12 ab 00"));

        let err = "north".deg().unwrap_err();
        assert!(err.to_string().contains("'north'"));
    }
}
