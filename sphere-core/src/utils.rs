//! Epoch and angle range helpers.
//!
//! # Time Conversion
//!
//! The epoch conversion in [`crate::precession`] takes its time argument as
//! Julian centuries from J2000.0. [`jd_to_centuries`] and [`year_to_centuries`]
//! produce that argument from a Julian Date or a (Julian) epoch year.
//!
//! # Wrapping
//!
//! | Function | Behaviour | Output range |
//! |----------|-----------|--------------|
//! | [`wrap_circle`] | truncated remainder, sign follows the input | (-360°, 360°) |
//! | [`normalize_ra`] | Euclidean remainder | [0°, 360°) |
//!
//! The line generators use [`wrap_circle`]: their inputs are never negative, so it
//! only folds the closing sample back onto 0°. Precessed positions can drift
//! below zero and go through [`normalize_ra`].

use crate::constants::{
    DAYS_PER_JULIAN_CENTURY, DEGREES_PER_CIRCLE, J2000_JD, J2000_YEAR, YEARS_PER_JULIAN_CENTURY,
};

/// Converts a two-part Julian Date to Julian centuries from J2000.0.
///
/// ```
/// use sphere_core::utils::jd_to_centuries;
/// use sphere_core::constants::J2000_JD;
///
/// assert_eq!(jd_to_centuries(J2000_JD, 0.0), 0.0);
/// assert_eq!(jd_to_centuries(J2000_JD, 36525.0), 1.0);
/// ```
#[inline]
pub fn jd_to_centuries(jd1: f64, jd2: f64) -> f64 {
    ((jd1 - J2000_JD) + jd2) / DAYS_PER_JULIAN_CENTURY
}

/// Converts a Julian epoch year (e.g. `2023.0`) to Julian centuries from J2000.0.
///
/// ```
/// use sphere_core::utils::year_to_centuries;
///
/// assert_eq!(year_to_centuries(2000.0), 0.0);
/// assert!((year_to_centuries(2023.0) - 0.23).abs() < 1e-12);
/// ```
#[inline]
pub fn year_to_centuries(year: f64) -> f64 {
    (year - J2000_YEAR) / YEARS_PER_JULIAN_CENTURY
}

/// Remainder of `deg` by 360 with the sign of `deg`.
#[inline]
pub fn wrap_circle(deg: f64) -> f64 {
    deg % DEGREES_PER_CIRCLE
}

/// Normalizes a right ascension to [0°, 360°).
#[inline]
pub fn normalize_ra(deg: f64) -> f64 {
    let wrapped = deg.rem_euclid(DEGREES_PER_CIRCLE);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if wrapped >= DEGREES_PER_CIRCLE {
        0.0
    } else {
        wrapped
    }
}

/// Shortest signed difference `to - from` in degrees, in (-180°, 180°].
#[inline]
pub fn ra_difference(from: f64, to: f64) -> f64 {
    let mut diff = (to - from) % DEGREES_PER_CIRCLE;
    if diff > 180.0 {
        diff -= DEGREES_PER_CIRCLE;
    } else if diff <= -180.0 {
        diff += DEGREES_PER_CIRCLE;
    }
    diff
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jd_to_centuries_negative() {
        let t = jd_to_centuries(J2000_JD, -DAYS_PER_JULIAN_CENTURY);
        assert_eq!(t, -1.0);
    }

    #[test]
    fn test_year_to_centuries_b1875() {
        assert!((year_to_centuries(1875.0) + 1.25).abs() < 1e-12);
    }

    #[test]
    fn test_wrap_circle_keeps_sign() {
        assert_eq!(wrap_circle(365.0), 5.0);
        assert_eq!(wrap_circle(360.0), 0.0);
        assert_eq!(wrap_circle(-5.0), -5.0);
        assert_eq!(wrap_circle(12.5), 12.5);
    }

    #[test]
    fn test_normalize_ra() {
        assert_eq!(normalize_ra(0.0), 0.0);
        assert_eq!(normalize_ra(360.0), 0.0);
        assert_eq!(normalize_ra(-10.0), 350.0);
        assert_eq!(normalize_ra(725.0), 5.0);
        assert!(normalize_ra(-1e-20) < 360.0);
    }

    #[test]
    fn test_ra_difference() {
        assert_eq!(ra_difference(10.0, 20.0), 10.0);
        assert_eq!(ra_difference(20.0, 10.0), -10.0);
        assert!((ra_difference(350.0, 10.0) - 20.0).abs() < 1e-12);
        assert!((ra_difference(10.0, 350.0) + 20.0).abs() < 1e-12);
        assert_eq!(ra_difference(0.0, 180.0), 180.0);
    }
}
