//! Geometric algorithms over stop coordinates

mod distance;

pub use distance::{EARTH_RADIUS, compute_distance};
