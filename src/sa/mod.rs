//! Simulated annealing search over visit permutations.
//!
//! - [`SaConfig`] — temperature schedule parameters
//! - [`SaRunner`] — the cooling loop, sharing the swap neighborhood with
//!   the genetic mutation operator

mod config;
mod runner;

pub use config::SaConfig;
pub use runner::{SaResult, SaRunner};
