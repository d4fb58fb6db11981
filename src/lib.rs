//! # tourseq
//!
//! Single-vehicle route sequencing optimizer. Searches for a good visiting
//! order over a fixed set of geographic locations, each with an optional
//! daily availability window and a required dwell time, minimizing total
//! travel distance while penalizing schedule violations at 1000 per miss.
//!
//! ## Modules
//!
//! - [`models`] — Domain value types (Location, TimeOfDay, TimeWindow, RouteSolution)
//! - [`distance`] — Distance formulas and the all-pairs distance table
//! - [`evaluation`] — Schedule evaluation: the shared objective function
//! - [`ga`] — Genetic search over visit permutations
//! - [`sa`] — Simulated annealing search over visit permutations
//! - [`optimizer`] — Orchestration façade with a uniform `optimize` entry point
//!
//! ## Example
//!
//! ```
//! use tourseq::distance::DistanceFormula;
//! use tourseq::ga::GaConfig;
//! use tourseq::models::{Location, TimeOfDay};
//! use tourseq::optimizer::{Algorithm, RouteOptimizer};
//!
//! let locations = vec![
//!     Location::new(0, "Bund", 31.2397, 121.4900).with_stay_duration(30),
//!     Location::new(1, "Yu Garden", 31.2272, 121.4921).with_stay_duration(45),
//!     Location::new(2, "Jing'an Temple", 31.2235, 121.4454).with_stay_duration(30),
//! ];
//! let start = TimeOfDay::new(9, 0).unwrap();
//! let optimizer = RouteOptimizer::new(locations, 30.0, start, DistanceFormula::GreatCircle);
//!
//! let config = GaConfig::default()
//!     .with_population_size(20)
//!     .with_generations(20)
//!     .with_elite_size(2)
//!     .with_seed(42);
//! let best = optimizer.optimize(Algorithm::Genetic(config));
//! println!("{best}");
//! ```

pub mod distance;
pub mod evaluation;
pub mod ga;
pub mod models;
pub mod optimizer;
pub mod sa;
