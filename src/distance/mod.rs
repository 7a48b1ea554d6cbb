//! Great-circle distance primitives.
//!
//! - [`haversine_km`] — spherical distance between two coordinates
//! - [`path_length`] — open-path total over an ordered waypoint slice
//! - [`ensure_finite`] — upfront guard against NaN/infinite coordinates
//! - [`DistanceMatrix`] — dense pairwise matrix precomputed per group

mod haversine;
mod matrix;

pub use haversine::{ensure_finite, haversine_km, path_length};
pub use matrix::DistanceMatrix;
