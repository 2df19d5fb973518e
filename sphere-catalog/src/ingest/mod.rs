//! Readers and transforms for the raw catalog inputs.

pub mod bound_in_20;
pub mod colour_table;
pub mod hipparcos;
pub mod iau;
pub mod join;
pub mod stars;

pub use bound_in_20::parse_bound_in_20;
pub use colour_table::{parse_colour_table, ColourEntry};
pub use hipparcos::{read_hipparcos, write_hipparcos, HipparcosStar};
pub use iau::{boundary_url, parse_iau_boundary, CONSTELLATION_CODES, IAU_BOUNDARY_BASE_URL};
pub use join::{join_constellations, name_rows};
pub use stars::{merge_star_tables, StarMerge, StarTable};
