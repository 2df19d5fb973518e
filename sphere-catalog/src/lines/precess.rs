//! Carries border lines to another epoch.
//!
//! Long segments are cut into pieces no longer than `step` degrees in either
//! coordinate before conversion, so a straight J2000 edge becomes a polyline
//! that follows the precessed sky. RA is interpolated the short way around.

use crate::errors::{CatalogError, CatalogResult};
use crate::lines::MIN_STEP_DEG;
use crate::records::BorderSegment;
use sphere_core::precess_position;
use sphere_core::utils::ra_difference;

pub const DEFAULT_SUBDIVISION_STEP_DEG: f64 = 10.0;

/// Number of pieces a segment is cut into. At least one. Steps below
/// [`MIN_STEP_DEG`] count as that minimum.
pub fn piece_count(segment: &BorderSegment, step: f64) -> usize {
    let step = step.max(MIN_STEP_DEG);
    let d_ra = ra_difference(segment.ra_start, segment.ra_end).abs();
    let d_dec = (segment.dec_end - segment.dec_start).abs();
    let pieces = (d_ra.max(d_dec) / step).ceil();
    if pieces >= 1.0 {
        pieces as usize
    } else {
        1
    }
}

/// Sample points from start to end inclusive, `piece_count + 1` of them.
pub fn subdivide(segment: &BorderSegment, step: f64) -> Vec<(f64, f64)> {
    let n = piece_count(segment, step);
    let d_ra = ra_difference(segment.ra_start, segment.ra_end);
    let d_dec = segment.dec_end - segment.dec_start;

    (0..=n)
        .map(|j| {
            let f = j as f64 / n as f64;
            (segment.ra_start + d_ra * f, segment.dec_start + d_dec * f)
        })
        .collect()
}

/// Subdivides and precesses every segment to `t` Julian centuries from J2000.
///
/// Output segments keep the source colour, width and constellation code.
pub fn precess_segments(segments: &[BorderSegment], t: f64, step: f64) -> CatalogResult<Vec<BorderSegment>> {
    if !step.is_finite() || step < MIN_STEP_DEG {
        return Err(CatalogError::invalid_input(format!(
            "subdivision step must be at least {MIN_STEP_DEG}, got {step}"
        )));
    }

    let mut out = Vec::with_capacity(segments.len());
    for segment in segments {
        let points: Vec<_> = subdivide(segment, step)
            .into_iter()
            .map(|(ra, dec)| precess_position(ra, dec, t))
            .collect();

        out.extend(points.windows(2).map(|pair| BorderSegment {
            ra_start: pair[0].0,
            dec_start: pair[0].1,
            ra_end: pair[1].0,
            dec_end: pair[1].1,
            colour: segment.colour.clone(),
            width: segment.width,
            constellation: segment.constellation.clone(),
        }));
    }

    tracing::debug!(input = segments.len(), output = out.len(), t, "precessed border segments");
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::BOUNDARY_STYLE;
    use approx::assert_abs_diff_eq;

    fn seg(start: (f64, f64), end: (f64, f64)) -> BorderSegment {
        BorderSegment::new(start, end, BOUNDARY_STYLE).with_constellation("UMA")
    }

    #[test]
    fn test_piece_count() {
        assert_eq!(piece_count(&seg((10.0, 0.0), (35.0, 0.0)), 10.0), 3);
        assert_eq!(piece_count(&seg((10.0, 0.0), (10.0, 20.0)), 10.0), 2);
        assert_eq!(piece_count(&seg((10.0, 0.0), (12.0, 1.0)), 10.0), 1);
        assert_eq!(piece_count(&seg((10.0, 5.0), (10.0, 5.0)), 10.0), 1);
    }

    #[test]
    fn test_subdivide_crosses_zero_the_short_way() {
        let points = subdivide(&seg((355.0, 10.0), (15.0, 30.0)), 10.0);
        assert_eq!(points.len(), 3);
        assert_abs_diff_eq!(points[0].0, 355.0, epsilon = 1e-12);
        assert_abs_diff_eq!(points[1].0, 365.0, epsilon = 1e-12);
        assert_abs_diff_eq!(points[1].1, 20.0, epsilon = 1e-12);
        assert_abs_diff_eq!(points[2].0, 375.0, epsilon = 1e-12);
    }

    #[test]
    fn test_precess_keeps_style_and_chain() {
        let input = [seg((100.0, 40.0), (130.0, 40.0))];
        let out = precess_segments(&input, 0.23, 10.0).unwrap();
        assert_eq!(out.len(), 3);
        assert!(out.iter().all(|s| s.colour == "87C5FFFF" && s.constellation.as_deref() == Some("UMA")));
        for pair in out.windows(2) {
            assert_eq!(pair[0].end(), pair[1].start());
        }
        let (ra, dec) = precess_position(100.0, 40.0, 0.23);
        assert_eq!(out[0].start(), (ra, dec));
    }

    #[test]
    fn test_precessed_ra_is_normalized() {
        let out = precess_segments(&[seg((0.5, 10.0), (359.5, 10.0))], 0.0, 10.0).unwrap();
        assert_eq!(out.len(), 1);
        assert!(out.iter().all(|s| (0.0..360.0).contains(&s.ra_start) && (0.0..360.0).contains(&s.ra_end)));
    }

    #[test]
    fn test_zero_length_segment() {
        let out = precess_segments(&[seg((50.0, -20.0), (50.0, -20.0))], 0.1, 10.0).unwrap();
        assert_eq!(out.len(), 1);
        assert!(out[0].is_degenerate());
    }

    #[test]
    fn test_rejects_bad_step() {
        let input = [seg((0.0, 0.0), (1.0, 0.0))];
        for step in [0.0, -1.0, 1e-12, MIN_STEP_DEG / 2.0, f64::NAN, f64::INFINITY] {
            assert!(precess_segments(&input, 0.0, step).is_err(), "step {step}");
        }
        assert_eq!(precess_segments(&input, 0.0, MIN_STEP_DEG).unwrap().len(), 1000);
    }

    #[test]
    fn test_piece_count_clamps_tiny_steps() {
        let segment = seg((0.0, 0.0), (1.0, 0.0));
        assert_eq!(piece_count(&segment, 1e-12), 1000);
        assert_eq!(piece_count(&segment, f64::NAN), 1000);
    }
}
