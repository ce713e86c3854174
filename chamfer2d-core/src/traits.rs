//! Core traits for chamfer2d

use crate::point::*;
use serde::{Deserialize, Serialize};

/// The closest indexed point to a query
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Neighbor {
    /// Position of the neighbor in the indexed cloud
    pub index: usize,
    /// Coordinates of the neighbor
    pub point: Point2d,
    /// Squared Euclidean distance from the query
    pub distance_squared: f64,
}

/// Trait for nearest neighbor search functionality
pub trait NearestNeighborSearch {
    /// Find the single nearest indexed point to `query`.
    ///
    /// Implementations are only constructible from non-empty clouds, so a
    /// neighbor always exists.
    fn nearest_one(&self, query: &Point2d) -> Neighbor;

    /// Number of indexed points
    fn len(&self) -> usize;

    /// Whether the index holds no points
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Mean squared distance from each point of `queries` to its nearest
    /// indexed point. Returns 0 for no queries.
    fn mean_nearest_distance_squared(&self, queries: &[Point2d]) -> f64 {
        if queries.is_empty() {
            return 0.0;
        }
        let total: f64 = queries
            .iter()
            .map(|q| self.nearest_one(q).distance_squared)
            .sum();
        total / queries.len() as f64
    }
}
