//! Stop-order sequencing for route groups.
//!
//! - [`multi_start`] — Multi-start greedy nearest-neighbor sequencing
//! - [`two_opt`] — 2-opt segment-reversal refinement for open paths
//! - [`pipeline`] — Batch grouping plus opt-in sequencing

mod multi_start;
mod pipeline;
mod two_opt;

pub use multi_start::multi_start_nearest_neighbor;
pub use pipeline::{sequence_routes, OrderingDirective};
pub use two_opt::two_opt_improve;
