//! Periodic nutation terms in right ascension and declination.
//!
//! The four leading lunisolar terms, with arguments built from the Sun's mean
//! longitude `L` and the Moon's node `Ω`:
//!
//! ```text
//! Δα = -17.2 sin Ω - 1.32 sin 2L - 0.23 sin(2L - Ω) + 0.21 sin 2Ω
//! Δδ =   9.2 cos Ω + 0.57 cos 2L + 0.10 cos(2L - Ω) - 0.09 cos 2Ω
//! ```
//!
//! Coefficients are added to the coordinate as they stand; see
//! [`crate::precession`] for how they combine with the secular terms.

mod fundamental_args;

pub use fundamental_args::FundamentalArgs;

use crate::angle::deg_to_rad;

/// Nutation term in right ascension.
pub fn nutation_in_ra(t: f64) -> f64 {
    let l = t.sun_mean_longitude();
    let om = t.moon_ascending_node_longitude();

    -17.2 * libm::sin(deg_to_rad(om)) - 1.32 * libm::sin(deg_to_rad(2.0 * l))
        - 0.23 * libm::sin(deg_to_rad(2.0 * l - om))
        + 0.21 * libm::sin(deg_to_rad(2.0 * om))
}

/// Nutation term in declination.
pub fn nutation_in_dec(t: f64) -> f64 {
    let l = t.sun_mean_longitude();
    let om = t.moon_ascending_node_longitude();

    9.2 * libm::cos(deg_to_rad(om))
        + 0.57 * libm::cos(deg_to_rad(2.0 * l))
        + 0.1 * libm::cos(deg_to_rad(2.0 * l - om))
        - 0.09 * libm::cos(deg_to_rad(2.0 * om))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_j2000_values() {
        let om = deg_to_rad(125.04452);
        let l2 = deg_to_rad(560.92);
        let expected_dec = 9.2 * om.cos() + 0.57 * l2.cos() + 0.1 * (l2 - om).cos()
            - 0.09 * (2.0 * om).cos();
        let expected_ra = -17.2 * om.sin() - 1.32 * l2.sin() - 0.23 * (l2 - om).sin()
            + 0.21 * (2.0 * om).sin();

        assert_abs_diff_eq!(nutation_in_dec(0.0), expected_dec, epsilon = 1e-12);
        assert_abs_diff_eq!(nutation_in_ra(0.0), expected_ra, epsilon = 1e-12);
    }

    #[test]
    fn test_amplitude_bounds() {
        for i in -100..=100 {
            let t = i as f64 * 0.01;
            assert!(nutation_in_ra(t).abs() <= 17.2 + 1.32 + 0.23 + 0.21 + 1e-12);
            assert!(nutation_in_dec(t).abs() <= 9.2 + 0.57 + 0.1 + 0.09 + 1e-12);
        }
    }
}
