//! Evaluated route solution type.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Penalty added to fitness per time-window violation.
///
/// Large enough that schedule compliance always dominates travel distance
/// when the two trade off.
pub const VIOLATION_PENALTY: f64 = 1000.0;

/// The result of evaluating one candidate visiting order.
///
/// Produced fresh by every evaluation and never mutated afterwards.
/// `fitness = total_distance + 1000 × violations`; lower is better.
///
/// # Examples
///
/// ```
/// use tourseq::models::RouteSolution;
///
/// let sol = RouteSolution::empty();
/// assert_eq!(sol.total_distance, 0.0);
/// assert_eq!(sol.violations, 0);
/// assert!(sol.fitness.is_infinite());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteSolution {
    /// Visiting order as location indices.
    pub route: Vec<usize>,
    /// Total travel distance in kilometers.
    pub total_distance: f64,
    /// Total elapsed time in minutes, including waits and dwell times.
    pub total_time: f64,
    /// Objective value; lower is better.
    pub fitness: f64,
    /// Number of locations first reached outside their window.
    pub violations: usize,
    /// Arrival time in minutes for each visited location, aligned with `route`.
    pub arrival_times: Vec<f64>,
}

impl RouteSolution {
    /// The solution for an empty route.
    ///
    /// Infinite fitness keeps it from ever winning over a real route.
    pub fn empty() -> Self {
        Self {
            route: Vec::new(),
            total_distance: 0.0,
            total_time: 0.0,
            fitness: f64::INFINITY,
            violations: 0,
            arrival_times: Vec::new(),
        }
    }

    /// Number of visited locations.
    pub fn len(&self) -> usize {
        self.route.len()
    }

    /// Returns `true` if no locations are visited.
    pub fn is_empty(&self) -> bool {
        self.route.is_empty()
    }
}

impl fmt::Display for RouteSolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let order = self
            .route
            .iter()
            .map(|i| i.to_string())
            .collect::<Vec<_>>()
            .join(" -> ");
        writeln!(f, "Route: {order}")?;
        writeln!(f, "Total distance: {:.2} km", self.total_distance)?;
        writeln!(f, "Total time: {:.2} min", self.total_time)?;
        writeln!(f, "Fitness: {:.2}", self.fitness)?;
        write!(f, "Violations: {}", self.violations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_solution() {
        let sol = RouteSolution::empty();
        assert!(sol.is_empty());
        assert_eq!(sol.len(), 0);
        assert_eq!(sol.total_distance, 0.0);
        assert_eq!(sol.total_time, 0.0);
        assert_eq!(sol.violations, 0);
        assert!(sol.fitness.is_infinite());
        assert!(sol.arrival_times.is_empty());
    }

    #[test]
    fn test_display() {
        let sol = RouteSolution {
            route: vec![0, 2, 1],
            total_distance: 12.5,
            total_time: 90.0,
            fitness: 12.5,
            violations: 0,
            arrival_times: vec![0.0, 25.0, 60.0],
        };
        let text = sol.to_string();
        assert!(text.contains("Route: 0 -> 2 -> 1"));
        assert!(text.contains("Total distance: 12.50 km"));
        assert!(text.contains("Violations: 0"));
    }
}
