//! Numeric building blocks for sky sphere data preparation.
//!
//! `sphere-core` holds the pieces of the generators that are pure arithmetic:
//! unit conversions, sexagesimal parsing, and the epoch conversion that carries
//! catalog boundary vertices to a chosen instant.
//!
//! # Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`angle`] | The shared degree→radian helper, hours→degrees, HMS parsing |
//! | [`nutation`] | Fundamental arguments `L`, `Ω` and the periodic nutation terms |
//! | [`precession`] | Epoch conversion of RA/Dec and the flip-over-pole policy |
//! | [`utils`] | Julian century helpers, RA wrapping |
//! | [`constants`] | Epochs, unit factors, ecliptic and galactic pole parameters |
//! | [`errors`] | [`SphereError`] and [`SphereResult`] |
//!
//! # Epoch Conversion
//!
//! ```
//! use sphere_core::precession::{convert_dec, convert_ra, flip_dec_over_poles};
//! use sphere_core::utils::{normalize_ra, year_to_centuries};
//!
//! let t = year_to_centuries(2023.0);
//! let ra = normalize_ra(convert_ra(83.8, t));
//! let dec = flip_dec_over_poles(convert_dec(-5.4, t));
//! assert!((0.0..360.0).contains(&ra));
//! assert!((-90.0..=90.0).contains(&dec));
//! ```
//!
//! # Design Notes
//!
//! - **Degrees everywhere**: coordinates are stored and exchanged in degrees.
//!   Radians exist only as the argument of a trigonometric call, produced by
//!   [`angle::deg_to_rad`].
//!
//! - **Total functions**: the conversions never fail and never validate `t`.
//!   Errors only arise when text is turned into numbers.

pub mod angle;
pub mod constants;
pub mod errors;
pub mod math;
pub mod nutation;
pub mod precession;
pub mod utils;

pub use angle::{deg_to_rad, hms_to_degrees, AngleUnits};
pub use errors::{SphereError, SphereResult};
pub use precession::{convert_dec, convert_ra, flip_dec_over_poles, precess_position};
