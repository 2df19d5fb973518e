//! Fundamental arguments for the epoch conversion.
//!
//! Two slowly varying angles drive the periodic nutation terms:
//!
//! - the mean longitude of the Sun, `L`
//! - the longitude of the Moon's mean ascending node, `Ω`
//!
//! Both are cubic polynomials in Julian centuries from J2000.0 (Meeus, ch. 22).
//! Results are in degrees and deliberately left unnormalized; they are only ever
//! consumed through periodic functions.

/// Fundamental arguments evaluated at a time in Julian centuries from J2000.0.
///
/// ```
/// use sphere_core::nutation::FundamentalArgs;
///
/// let t: f64 = 0.0;
/// assert_eq!(t.sun_mean_longitude(), 280.46);
/// assert_eq!(t.moon_ascending_node_longitude(), 125.04452);
/// ```
pub trait FundamentalArgs {
    /// Mean longitude of the Sun (degrees), `L`.
    fn sun_mean_longitude(&self) -> f64;

    /// Longitude of the Moon's mean ascending node (degrees), `Ω`.
    fn moon_ascending_node_longitude(&self) -> f64;
}

impl FundamentalArgs for f64 {
    #[inline]
    fn sun_mean_longitude(&self) -> f64 {
        let t = *self;
        280.46 + 36000.771 * t + 0.0003875 * t * t - t * t * t / 38710000.0
    }

    #[inline]
    fn moon_ascending_node_longitude(&self) -> f64 {
        let t = *self;
        125.04452 - 1934.136261 * t + 0.0020708 * t * t + t * t * t / 450000.0
    }
}
