//! Chamfer distance between 2D point clouds
//!
//! The distance used here is the sum of the two directed mean squared
//! nearest neighbor distances:
//!
//! ```text
//! chamfer(A, B) = mean_{a∈A} min_{b∈B} |a-b|² + mean_{b∈B} min_{a∈A} |a-b|²
//! ```
//!
//! It is zero when the clouds coincide and is not normalized by two.

use crate::nearest_neighbor::{BruteForceSearch, KdTree};
use chamfer2d_core::{Error, NearestNeighborSearch, PointCloud2d, Result};
use log::trace;

fn ensure_non_empty(cloud: &PointCloud2d, which: &str) -> Result<()> {
    if cloud.is_empty() {
        return Err(Error::EmptyInput(format!(
            "{which} cloud is empty, Chamfer distance is undefined"
        )));
    }
    Ok(())
}

/// Chamfer distance between `a` and `b` using a fresh k-d tree per side.
///
/// Fails with [`Error::EmptyInput`] if either cloud is empty.
pub fn chamfer_distance(a: &PointCloud2d, b: &PointCloud2d) -> Result<f64> {
    ensure_non_empty(a, "first")?;
    ensure_non_empty(b, "second")?;

    let tree_b = KdTree::from_cloud(b)?;
    let dist_ab = tree_b.mean_nearest_distance_squared(a.as_slice());

    let tree_a = KdTree::from_cloud(a)?;
    let dist_ba = tree_a.mean_nearest_distance_squared(b.as_slice());

    trace!("chamfer: a->b {dist_ab:.6}, b->a {dist_ba:.6}");
    Ok(dist_ab + dist_ba)
}

/// O(N·M) reference implementation of [`chamfer_distance`]
pub fn chamfer_distance_brute_force(a: &PointCloud2d, b: &PointCloud2d) -> Result<f64> {
    ensure_non_empty(a, "first")?;
    ensure_non_empty(b, "second")?;

    let search_b = BruteForceSearch::new(b.as_slice())?;
    let search_a = BruteForceSearch::new(a.as_slice())?;
    Ok(search_b.mean_nearest_distance_squared(a.as_slice())
        + search_a.mean_nearest_distance_squared(b.as_slice()))
}

/// Evaluates Chamfer distances against a fixed base cloud.
///
/// The base cloud's tree is built once; each call to [`distance`] only
/// indexes the moving cloud. Results equal `chamfer_distance(base, moving)`.
///
/// [`distance`]: ChamferEvaluator::distance
#[derive(Debug, Clone)]
pub struct ChamferEvaluator {
    base: PointCloud2d,
    base_tree: KdTree,
}

impl ChamferEvaluator {
    /// Take a snapshot of `base` and index it
    pub fn new(base: PointCloud2d) -> Result<Self> {
        ensure_non_empty(&base, "base")?;
        let base_tree = KdTree::from_cloud(&base)?;
        Ok(Self { base, base_tree })
    }

    /// The cloud every distance is measured against
    pub fn base(&self) -> &PointCloud2d {
        &self.base
    }

    /// Chamfer distance from the base cloud to `moving`
    pub fn distance(&self, moving: &PointCloud2d) -> Result<f64> {
        ensure_non_empty(moving, "moving")?;

        let moving_tree = KdTree::from_cloud(moving)?;
        let dist_ab = moving_tree.mean_nearest_distance_squared(self.base.as_slice());
        let dist_ba = self.base_tree.mean_nearest_distance_squared(moving.as_slice());
        Ok(dist_ab + dist_ba)
    }
}
