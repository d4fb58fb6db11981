//! Schedule evaluation: the shared objective function for both searches.

mod evaluator;

pub use evaluator::ScheduleEvaluator;
