//! Genetic search over visit permutations.
//!
//! - [`GaConfig`] — population and operator parameters
//! - [`operators`] — permutation-preserving crossover, mutation, selection
//! - [`GaRunner`] — the evolutionary loop, with the schedule evaluator as
//!   fitness oracle

mod config;
pub mod operators;
mod runner;

pub use config::GaConfig;
pub use runner::{GaResult, GaRunner};
