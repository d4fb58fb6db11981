//! Dense distance matrix with pluggable coordinate formulas.

use crate::models::Location;
use serde::{Deserialize, Serialize};

/// Earth radius in kilometers.
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Kilometers per degree of latitude (and of longitude at the equator).
const KM_PER_DEGREE: f64 = 111.0;

/// Formula used to derive a distance from two coordinate pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DistanceFormula {
    /// Great-circle distance (haversine, Earth radius 6371 km).
    #[default]
    GreatCircle,
    /// Grid approximation: independent north-south and east-west components
    /// at 111 km per degree, east-west scaled by the cosine of the mean
    /// latitude, summed. Suits city street grids.
    GridApproximation,
}

impl DistanceFormula {
    /// Distance in kilometers between two `(latitude, longitude)` pairs.
    pub fn between(&self, from: (f64, f64), to: (f64, f64)) -> f64 {
        match self {
            Self::GreatCircle => haversine_km(from, to),
            Self::GridApproximation => grid_km(from, to),
        }
    }
}

fn haversine_km(from: (f64, f64), to: (f64, f64)) -> f64 {
    let (lat1, lon1) = from;
    let (lat2, lon2) = to;

    let phi1 = lat1.to_radians();
    let phi2 = lat2.to_radians();
    let delta_phi = (lat2 - lat1).to_radians();
    let delta_lambda = (lon2 - lon1).to_radians();

    let a = (delta_phi / 2.0).sin().powi(2)
        + phi1.cos() * phi2.cos() * (delta_lambda / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

fn grid_km(from: (f64, f64), to: (f64, f64)) -> f64 {
    let (lat1, lon1) = from;
    let (lat2, lon2) = to;

    let mean_lat = (lat1 + lat2) / 2.0;
    let ns = (lat1 - lat2).abs() * KM_PER_DEGREE;
    let ew = (lon1 - lon2).abs() * KM_PER_DEGREE * mean_lat.to_radians().cos();

    ns + ew
}

/// A dense n×n distance table stored in row-major order.
///
/// Built once per location set and formula choice; read-only afterwards.
/// Lookups outside the table are treated as unreachable and return `+∞`
/// rather than a phantom zero-length edge.
///
/// # Examples
///
/// ```
/// use tourseq::distance::{DistanceFormula, DistanceMatrix};
/// use tourseq::models::Location;
///
/// let locations = vec![
///     Location::new(0, "A", 31.2304, 121.4737),
///     Location::new(1, "B", 31.2396, 121.4994),
/// ];
/// let dm = DistanceMatrix::from_locations(&locations, DistanceFormula::GreatCircle);
/// assert_eq!(dm.size(), 2);
/// assert_eq!(dm.get(0, 0), 0.0);
/// assert!(dm.get(0, 1) > 0.0);
/// assert!(dm.get(0, 5).is_infinite());
/// ```
#[derive(Debug, Clone)]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
}

impl DistanceMatrix {
    /// Computes the all-pairs table from location coordinates.
    pub fn from_locations(locations: &[Location], formula: DistanceFormula) -> Self {
        let n = locations.len();
        let mut data = vec![0.0; n * n];
        for i in 0..n {
            for j in 0..n {
                if i != j {
                    data[i * n + j] = formula.between(locations[i].coords(), locations[j].coords());
                }
            }
        }
        Self { data, size: n }
    }

    /// Creates a table from an explicit n×n grid.
    ///
    /// Returns `None` if the data length doesn't match `size * size`.
    pub fn from_data(size: usize, data: Vec<f64>) -> Option<Self> {
        if data.len() != size * size {
            return None;
        }
        Some(Self { data, size })
    }

    /// Distance in kilometers from location `from` to location `to`.
    ///
    /// Pairs outside the table are unreachable: returns `+∞`.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        if from >= self.size || to >= self.size {
            return f64::INFINITY;
        }
        self.data[from * self.size + to]
    }

    /// Travel time in minutes between two locations at the given average
    /// speed in km/h.
    pub fn travel_time(&self, from: usize, to: usize, avg_speed_kmh: f64) -> f64 {
        self.get(from, to) / avg_speed_kmh * 60.0
    }

    /// Number of locations in this table.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if the table is symmetric within the given tolerance.
    pub fn is_symmetric(&self, tol: f64) -> bool {
        for i in 0..self.size {
            for j in (i + 1)..self.size {
                if (self.get(i, j) - self.get(j, i)).abs() > tol {
                    return false;
                }
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_locations() -> Vec<Location> {
        vec![
            Location::new(0, "Bund", 31.2397, 121.4900),
            Location::new(1, "Yu Garden", 31.2272, 121.4921),
            Location::new(2, "Jing'an Temple", 31.2235, 121.4454),
        ]
    }

    #[test]
    fn test_haversine_same_point() {
        let d = DistanceFormula::GreatCircle.between((36.1, -115.1), (36.1, -115.1));
        assert!(d < 1e-9);
    }

    #[test]
    fn test_haversine_known_distance() {
        // Las Vegas to Los Angeles, roughly 370 km.
        let d = DistanceFormula::GreatCircle.between((36.17, -115.14), (34.05, -118.24));
        assert!(d > 350.0 && d < 400.0, "expected ~370 km, got {d}");
    }

    #[test]
    fn test_grid_one_degree_latitude() {
        let d = DistanceFormula::GridApproximation.between((30.0, 121.0), (31.0, 121.0));
        assert!((d - 111.0).abs() < 1e-9);
    }

    #[test]
    fn test_grid_longitude_scales_with_latitude() {
        let at_equator = DistanceFormula::GridApproximation.between((0.0, 0.0), (0.0, 1.0));
        let at_60n = DistanceFormula::GridApproximation.between((60.0, 0.0), (60.0, 1.0));
        assert!((at_equator - 111.0).abs() < 1e-9);
        assert!((at_60n - 55.5).abs() < 0.01);
    }

    #[test]
    fn test_grid_at_least_great_circle() {
        // Manhattan-style sum never undercuts the straight line by much;
        // for axis-aligned moves the two are comparable, for diagonals the
        // grid estimate is longer.
        let a = (31.20, 121.40);
        let b = (31.30, 121.50);
        let grid = DistanceFormula::GridApproximation.between(a, b);
        let circle = DistanceFormula::GreatCircle.between(a, b);
        assert!(grid >= circle * 0.99, "grid {grid} vs circle {circle}");
    }

    #[test]
    fn test_from_locations_diagonal_zero() {
        let dm = DistanceMatrix::from_locations(&sample_locations(), DistanceFormula::GreatCircle);
        for i in 0..dm.size() {
            assert_eq!(dm.get(i, i), 0.0);
        }
    }

    #[test]
    fn test_from_locations_symmetric() {
        let dm = DistanceMatrix::from_locations(&sample_locations(), DistanceFormula::GreatCircle);
        assert!(dm.is_symmetric(1e-9));
    }

    #[test]
    fn test_out_of_range_is_unreachable() {
        let dm = DistanceMatrix::from_locations(&sample_locations(), DistanceFormula::GreatCircle);
        assert!(dm.get(0, 3).is_infinite());
        assert!(dm.get(9, 0).is_infinite());
        assert!(dm.get(9, 9).is_infinite());
    }

    #[test]
    fn test_travel_time() {
        let dm = DistanceMatrix::from_data(2, vec![0.0, 10.0, 10.0, 0.0]).expect("valid");
        // 10 km at 30 km/h = 20 minutes.
        assert!((dm.travel_time(0, 1, 30.0) - 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_from_data_invalid_size() {
        assert!(DistanceMatrix::from_data(2, vec![0.0, 1.0, 2.0]).is_none());
    }

    #[test]
    fn test_asymmetric_table() {
        let dm = DistanceMatrix::from_data(2, vec![0.0, 10.0, 15.0, 0.0]).expect("valid");
        assert!(!dm.is_symmetric(1e-9));
        assert_eq!(dm.get(0, 1), 10.0);
        assert_eq!(dm.get(1, 0), 15.0);
    }
}
