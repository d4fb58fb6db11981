//! Geographic distance formulas and the all-pairs distance table.

mod matrix;

pub use matrix::{DistanceFormula, DistanceMatrix};
