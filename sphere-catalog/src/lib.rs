//! Batch transforms that turn raw catalog data into renderer-ready CSV.
//!
//! Inputs are constellation boundary tables (the `bound_in_20` file or the IAU
//! per-constellation text files), star tables and colour tables. Outputs are
//! vertex lists, closed border polylines, reference curves and filtered star
//! tables in the renderer's line schema
//! `ra_start,dec_start,ra_end,dec_end,colour,width[,constellation]`.
//!
//! # Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`records`] | [`Vertex`](records::Vertex), [`BorderSegment`](records::BorderSegment), [`LineStyle`](records::LineStyle) and the style constants |
//! | [`csv_io`] | Readers and writers for the vertex and line schemas |
//! | [`lines::borders`] | Contiguity grouping and closed-loop border construction |
//! | [`lines::curves`] | Ecliptic, galactic equator and grid generators |
//! | [`lines::precess`] | Subdivision and epoch conversion of border lines |
//! | [`ingest`] | `bound_in_20`, IAU boundaries, name join, star merge, Hipparcos filter, colour table |
//! | `fetch` | Parallel download of the IAU boundary files (`cli` feature) |
//! | [`errors`] | [`CatalogError`](errors::CatalogError), [`ParseReport`](errors::ParseReport) |
//!
//! # Quick Start
//!
//! ```
//! use sphere_catalog::ingest::parse_bound_in_20;
//! use sphere_catalog::lines::borders_from_vertices;
//! use sphere_catalog::records::BOUNDARY_STYLE;
//!
//! let text = "22.8625 +35.1666667 AND\n23.75 +35.1666667 AND\n23.75 +21.0 AND\n";
//! let vertices = parse_bound_in_20(text).into_result("bound_in_20.txt").unwrap();
//! let borders = borders_from_vertices(&vertices, BOUNDARY_STYLE, true);
//! assert_eq!(borders.len(), 3);
//! assert_eq!(borders[2].end(), (vertices[0].ra, vertices[0].dec));
//! ```
//!
//! # Features
//!
//! - **`cli`** (default) enables the remote fetch and the `forge` binary.

pub mod csv_io;
pub mod errors;
#[cfg(feature = "cli")]
pub mod fetch;
pub mod ingest;
pub mod lines;
pub mod records;

pub use errors::{CatalogError, CatalogResult, FieldError, ParseReport};
pub use records::{BorderSegment, ConstellationGroup, JoinVertex, LineStyle, Vertex};
