//! Line generation: constellation borders, reference curves, epoch conversion.

pub mod borders;
pub mod curves;
pub mod precess;

/// Smallest sampling or subdivision step accepted, in degrees.
pub const MIN_STEP_DEG: f64 = 1e-3;

pub use borders::{border_segments, borders_from_vertices, group_by_constellation};
pub use curves::{ecliptic_segments, galactic_equator_segments, grid_lines, GridLines};
pub use precess::precess_segments;
