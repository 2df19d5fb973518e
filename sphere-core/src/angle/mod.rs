//! Angle unit conversions and sexagesimal parsing.
//!
//! Every trigonometric call in the workspace takes its argument through
//! [`deg_to_rad`]; there is no other place where degrees become radians.
//! Right ascension arrives either as decimal hours or as an `h m s` triple and
//! leaves as decimal degrees.

mod parse;

pub use parse::{parse_decimal, parse_hms, AngleUnits};

use crate::constants::{
    DEG_TO_RAD, DEGREES_PER_HOUR, MINUTES_PER_HOUR, RAD_TO_DEG, SECONDS_PER_HOUR,
};

/// Degrees to radians.
#[inline]
pub fn deg_to_rad(deg: f64) -> f64 {
    deg * DEG_TO_RAD
}

/// Radians to degrees.
#[inline]
pub fn rad_to_deg(rad: f64) -> f64 {
    rad * RAD_TO_DEG
}

/// Decimal hours of right ascension to degrees (1h = 15°).
#[inline]
pub fn hours_to_degrees(hours: f64) -> f64 {
    hours * DEGREES_PER_HOUR
}

/// Sexagesimal right ascension to degrees: `(h + m/60 + s/3600) * 15`.
///
/// ```
/// use sphere_core::angle::hms_to_degrees;
///
/// assert_eq!(hms_to_degrees(5.0, 30.0, 0.0), 82.5);
/// ```
#[inline]
pub fn hms_to_degrees(hours: f64, minutes: f64, seconds: f64) -> f64 {
    hours_to_degrees(hours + minutes / MINUTES_PER_HOUR + seconds / SECONDS_PER_HOUR)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::PI;

    #[test]
    fn test_deg_to_rad() {
        assert_eq!(deg_to_rad(0.0), 0.0);
        assert!((deg_to_rad(180.0) - PI).abs() < 1e-15);
        assert!((deg_to_rad(-90.0) + PI / 2.0).abs() < 1e-15);
    }

    #[test]
    fn test_rad_to_deg_inverts() {
        for deg in [-270.0, -45.0, 0.0, 23.4, 359.9] {
            assert!((rad_to_deg(deg_to_rad(deg)) - deg).abs() < 1e-12);
        }
    }

    #[test]
    fn test_hms_to_degrees() {
        assert_eq!(hms_to_degrees(5.0, 30.0, 0.0), 82.5);
        assert_eq!(hms_to_degrees(0.0, 0.0, 0.0), 0.0);
        assert_eq!(hms_to_degrees(24.0, 0.0, 0.0), 360.0);
        assert!((hms_to_degrees(0.0, 0.0, 1.0) - 15.0 / 3600.0).abs() < 1e-15);
    }

    #[test]
    fn test_hours_to_degrees() {
        assert_eq!(hours_to_degrees(1.0), 15.0);
        assert_eq!(hours_to_degrees(22.8625), 342.9375);
    }
}
