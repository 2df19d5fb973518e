//! Fixed-step reference curves: ecliptic, galactic equator and the RA/Dec grid.
//!
//! Every curve is sampled at `ra = 0, step, 2·step, …` below 360° and each
//! sample is joined to the next one. The end point's RA wraps with `%`;
//! declinations are never pole-corrected here.

use crate::errors::{CatalogError, CatalogResult};
use crate::lines::MIN_STEP_DEG;
use crate::records::{
    BorderSegment, LineStyle, ECLIPTIC_STYLE, GALACTIC_EQUATOR_STYLE, GRID_EMPHASIS_STYLE, GRID_STYLE,
};
use libm::{atan, cos, sin, tan};
use sphere_core::angle::{deg_to_rad, rad_to_deg};
use sphere_core::constants::{
    DEGREES_PER_CIRCLE, ECLIPTIC_OBLIQUITY_DEG, GALACTIC_POLE_DEC_DEG, GALACTIC_POLE_RA_DEG,
};
use sphere_core::utils::wrap_circle;

pub const DEFAULT_STEP_DEG: f64 = 5.0;

pub const GRID_STEP_DEG: f64 = 5.0;

/// Declination of the ecliptic at right ascension `ra`, degrees.
pub fn ecliptic_dec(ra: f64) -> f64 {
    rad_to_deg(atan(sin(deg_to_rad(ra)) * tan(deg_to_rad(ECLIPTIC_OBLIQUITY_DEG))))
}

/// Declination of the galactic equator at right ascension `ra`, degrees.
pub fn galactic_equator_dec(ra: f64) -> f64 {
    -rad_to_deg(atan(
        cos(deg_to_rad(ra - GALACTIC_POLE_RA_DEG)) / tan(deg_to_rad(GALACTIC_POLE_DEC_DEG)),
    ))
}

fn sample_points(step: f64) -> CatalogResult<impl Iterator<Item = f64>> {
    if !step.is_finite() || !(MIN_STEP_DEG..=DEGREES_PER_CIRCLE).contains(&step) {
        return Err(CatalogError::invalid_input(format!(
            "step must be in [{MIN_STEP_DEG}, 360], got {step}"
        )));
    }
    Ok((0..)
        .map(move |i| i as f64 * step)
        .take_while(|ra| *ra < DEGREES_PER_CIRCLE))
}

/// Joins consecutive samples of `dec_of(ra)`.
pub fn curve_segments<F>(dec_of: F, step: f64, style: LineStyle) -> CatalogResult<Vec<BorderSegment>>
where
    F: Fn(f64) -> f64,
{
    Ok(sample_points(step)?
        .map(|ra| {
            let next = ra + step;
            BorderSegment::new(
                (ra, dec_of(ra)),
                (wrap_circle(next), wrap_circle(dec_of(next))),
                style,
            )
        })
        .collect())
}

pub fn ecliptic_segments(step: f64) -> CatalogResult<Vec<BorderSegment>> {
    curve_segments(ecliptic_dec, step, ECLIPTIC_STYLE)
}

pub fn galactic_equator_segments(step: f64) -> CatalogResult<Vec<BorderSegment>> {
    curve_segments(galactic_equator_dec, step, GALACTIC_EQUATOR_STYLE)
}

/// The four grid line sets, each written to its own file.
#[derive(Debug, Clone, PartialEq)]
pub struct GridLines {
    /// Constant-dec segments for every dec except the equator.
    pub meridians: Vec<BorderSegment>,
    /// Constant-RA segments at RA 0 and 180.
    pub prime_meridian: Vec<BorderSegment>,
    /// Constant-RA segments at every other RA.
    pub lines_of_latitude: Vec<BorderSegment>,
    pub equator: Vec<BorderSegment>,
}

impl GridLines {
    /// Sets paired with their output file names.
    pub fn outputs(&self) -> [(&'static str, &[BorderSegment]); 4] {
        [
            ("celestial-meridians.csv", self.meridians.as_slice()),
            ("prime-meridian.csv", self.prime_meridian.as_slice()),
            ("celestial-lines-of-latitude.csv", self.lines_of_latitude.as_slice()),
            ("celestial-equator.csv", self.equator.as_slice()),
        ]
    }
}

fn grid_ras() -> impl Iterator<Item = f64> {
    (0..72).map(|i| i as f64 * GRID_STEP_DEG)
}

fn grid_decs() -> impl Iterator<Item = f64> {
    (0..36).map(|i| -90.0 + i as f64 * GRID_STEP_DEG)
}

fn constant_ra(ra: f64, style: LineStyle) -> impl Iterator<Item = BorderSegment> {
    grid_decs().map(move |dec| BorderSegment::new((ra, dec), (ra, wrap_circle(dec + GRID_STEP_DEG)), style))
}

pub fn grid_lines() -> GridLines {
    let is_prime = |ra: f64| ra == 0.0 || ra == 180.0;

    let meridians = grid_ras()
        .flat_map(|ra| {
            grid_decs().filter(|dec| *dec != 0.0).map(move |dec| {
                BorderSegment::new((ra, dec), (wrap_circle(ra + GRID_STEP_DEG), dec), GRID_STYLE)
            })
        })
        .collect();

    let prime_meridian = [0.0, 180.0]
        .into_iter()
        .flat_map(|ra| constant_ra(ra, GRID_EMPHASIS_STYLE))
        .collect();

    let lines_of_latitude = grid_ras()
        .filter(|ra| !is_prime(*ra))
        .flat_map(|ra| constant_ra(ra, GRID_STYLE))
        .collect();

    let equator = grid_ras()
        .map(|ra| BorderSegment::new((ra, 0.0), (wrap_circle(ra + GRID_STEP_DEG), 0.0), GRID_EMPHASIS_STYLE))
        .collect();

    GridLines {
        meridians,
        prime_meridian,
        lines_of_latitude,
        equator,
    }
}
