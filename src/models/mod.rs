//! Domain model types for route sequencing.
//!
//! Provides the core value types: locations with optional daily availability
//! windows and dwell durations, and the evaluated route solution produced by
//! the schedule evaluator.

mod location;
mod solution;

pub use location::{Admission, Location, ModelError, TimeOfDay, TimeWindow};
pub use solution::{RouteSolution, VIOLATION_PENALTY};
