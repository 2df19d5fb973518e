pub const J2000_JD: f64 = 2451545.0;

pub const J2000_YEAR: f64 = 2000.0;

pub const DAYS_PER_JULIAN_CENTURY: f64 = 36525.0;

pub const YEARS_PER_JULIAN_CENTURY: f64 = 100.0;

pub const DEGREES_PER_HOUR: f64 = 15.0;

pub const DEGREES_PER_CIRCLE: f64 = 360.0;

pub const MINUTES_PER_HOUR: f64 = 60.0;

pub const SECONDS_PER_HOUR: f64 = 3600.0;

#[allow(clippy::excessive_precision)]
#[allow(clippy::approx_constant)]
pub const PI: f64 = 3.141592653589793238462643;

#[allow(clippy::excessive_precision)]
pub const DEG_TO_RAD: f64 = 1.745329251994329576923691e-2;

#[allow(clippy::excessive_precision)]
pub const RAD_TO_DEG: f64 = 57.29577951308232087679815;

/// Obliquity of the ecliptic used for the ecliptic line: 23°26.3′.
pub const ECLIPTIC_OBLIQUITY_DEG: f64 = 23.0 + 26.3 / 60.0;

/// North galactic pole right ascension, 12h51m.
pub const GALACTIC_POLE_RA_DEG: f64 = (12.0 + 51.0 / 60.0) * DEGREES_PER_HOUR;

/// North galactic pole declination, +27°08′.
pub const GALACTIC_POLE_DEC_DEG: f64 = 27.0 + 8.0 / 60.0;
