//! Epoch conversion of equatorial coordinates.
//!
//! Boundary vertices come from catalogs referred to an older equinox. A vertex is
//! brought to J2000 with a fixed reference offset plus a tiny linear drift, then
//! moved to the target instant with a secular precession polynomial and the
//! periodic nutation terms from [`crate::nutation`]:
//!
//! ```text
//! δ(t) = δ + 0.0416667 + 1.385e-7 t  + (-0.0252 t + 0.00929 t² + 0.00006 t³) + Δδ(t)
//! α(t) = α + 0.0083333 + 1.397e-7 t  + (-47.0029 t - 0.06603 t² - 0.00006 t³) + Δα(t)
//! ```
//!
//! `t` is in Julian centuries from J2000.0 and is not range checked.
//!
//! [`convert_ra`] and [`convert_dec`] return raw values: right ascension is not
//! wrapped and declination may pass a pole. [`precess_position`] applies the
//! caller policy used for rendering: RA into [0°, 360°) and
//! [`flip_dec_over_poles`].
//!
//! ```
//! use sphere_core::precession::{flip_dec_over_poles, precess_position};
//!
//! assert_eq!(flip_dec_over_poles(91.0), 89.0);
//!
//! let (ra, dec) = precess_position(350.0, 45.0, 0.23);
//! assert!((0.0..360.0).contains(&ra));
//! assert!((-90.0..=90.0).contains(&dec));
//! ```

use crate::nutation::{nutation_in_dec, nutation_in_ra};
use crate::utils::normalize_ra;

/// Reference offset taking catalog declinations to the J2000 frame.
pub const DEC_REFERENCE_OFFSET: f64 = 0.0416667;

/// Linear drift of the declination reference offset, per century.
pub const DEC_REFERENCE_DRIFT: f64 = 1.385e-7;

/// Reference offset taking catalog right ascensions to the J2000 frame.
pub const RA_REFERENCE_OFFSET: f64 = 0.0083333;

/// Linear drift of the right ascension reference offset, per century.
pub const RA_REFERENCE_DRIFT: f64 = 1.397e-7;

/// Secular precession polynomial in declination. Zero at J2000.0.
#[inline]
pub fn precession_in_dec(t: f64) -> f64 {
    -0.0252 * t + 0.00929 * t * t + 0.00006 * t * t * t
}

/// Secular precession polynomial in right ascension. Zero at J2000.0.
#[inline]
pub fn precession_in_ra(t: f64) -> f64 {
    -47.0029 * t - 0.06603 * t * t - 0.00006 * t * t * t
}

/// Declination referred to J2000 before the time dependent terms.
#[inline]
pub fn dec_at_j2000(dec: f64, t: f64) -> f64 {
    dec + DEC_REFERENCE_OFFSET + DEC_REFERENCE_DRIFT * t
}

/// Right ascension referred to J2000 before the time dependent terms.
#[inline]
pub fn ra_at_j2000(ra: f64, t: f64) -> f64 {
    ra + RA_REFERENCE_OFFSET + RA_REFERENCE_DRIFT * t
}

/// Converts a catalog declination (degrees) to the instant `t`.
///
/// The result is not pole corrected; it can exceed ±90°.
pub fn convert_dec(dec: f64, t: f64) -> f64 {
    dec_at_j2000(dec, t) + precession_in_dec(t) + nutation_in_dec(t)
}

/// Converts a catalog right ascension (degrees) to the instant `t`.
///
/// The result is not wrapped; the caller decides how to bring it into range.
pub fn convert_ra(ra: f64, t: f64) -> f64 {
    ra_at_j2000(ra, t) + precession_in_ra(t) + nutation_in_ra(t)
}

/// Reflects a declination that went past a pole back onto the sphere.
///
/// Above +90° becomes `180 - dec`, below -90° becomes `-180 - dec`; anything
/// else passes through unchanged.
#[inline]
pub fn flip_dec_over_poles(dec: f64) -> f64 {
    if dec > 90.0 {
        180.0 - dec
    } else if dec < -90.0 {
        -180.0 - dec
    } else {
        dec
    }
}

/// Converts a position to the instant `t` and brings it back into range.
///
/// Returns `(ra, dec)` with RA in [0°, 360°) and the declination flipped over the
/// pole when the conversion pushed it past one.
pub fn precess_position(ra: f64, dec: f64, t: f64) -> (f64, f64) {
    (
        normalize_ra(convert_ra(ra, t)),
        flip_dec_over_poles(convert_dec(dec, t)),
    )
}
