//! # route-sequencer
//!
//! Delivery route sequencing library: groups a flat batch of delivery
//! waypoints by route and orders each route's stops into a near-minimal
//! open travel path over great-circle distance.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (Waypoint, RouteGroup, Tour)
//! - [`distance`] — Haversine distance, path length, and the distance matrix
//! - [`grouping`] — Route grouping in first-seen order and batch summaries
//! - [`sequencing`] — Multi-start nearest-neighbor sequencing, 2-opt refinement, and the batch pipeline
//! - [`error`] — Error type shared across the crate

pub mod distance;
pub mod error;
pub mod grouping;
pub mod models;
pub mod sequencing;
