//! Point cloud generators for the supported sampling regimes

use crate::random::{normal_batch, RandomSource};
use chamfer2d_core::{Error, Point2d, PointCloud2d, Result};
use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of points a cloud has unless the caller asks otherwise
pub const DEFAULT_CLOUD_SIZE: usize = 100;

/// Lattice nodes per axis for [`DistributionKind::Grid`]
const GRID_STEPS: usize = 11;
/// Lattice spacing before scaling
const GRID_SPACING: f64 = 0.1;
/// Scale applied to the unit lattice
const GRID_SCALE: f64 = 5.0;

/// Half-open range of cluster counts, `[MIN, MAX)`
const MIN_CLUSTERS: usize = 4;
const MAX_CLUSTERS: usize = 10;
const CLUSTER_SPREAD: f64 = 0.25;
const CLUSTER_OFFSET_SCALE: f64 = 4.0;

const UNIFORM_SCALE: f64 = 3.0;

/// Sampling regime used to build a cloud
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DistributionKind {
    /// Independent standard normals per axis
    Gaussian,
    /// Uniform on `[-1.5, 1.5]` per axis
    Uniform,
    /// Fixed 11×11 lattice spanning `[-2.5, 2.5]`
    Grid,
    /// Four to nine tight Gaussian blobs at random offsets
    Clusters,
}

impl DistributionKind {
    /// Every kind, in menu order
    pub const ALL: [DistributionKind; 4] = [
        DistributionKind::Gaussian,
        DistributionKind::Uniform,
        DistributionKind::Grid,
        DistributionKind::Clusters,
    ];

    /// Display name
    pub fn name(&self) -> &'static str {
        match self {
            DistributionKind::Gaussian => "Gaussian",
            DistributionKind::Uniform => "Uniform",
            DistributionKind::Grid => "Grid",
            DistributionKind::Clusters => "Clusters",
        }
    }
}

impl fmt::Display for DistributionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DistributionKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        DistributionKind::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::InvalidArgument(format!("unknown distribution kind '{s}'")))
    }
}

/// Produces mean-centered clouds from a randomness source
#[derive(Debug, Clone)]
pub struct CloudGenerator<R> {
    source: R,
}

impl<R: RandomSource> CloudGenerator<R> {
    /// Create a generator drawing from `source`
    pub fn new(source: R) -> Self {
        Self { source }
    }

    /// Generate a cloud of the given kind with roughly `n` points.
    ///
    /// The result is always centered so its mean is the origin. Grid clouds
    /// ignore `n`; cluster clouds drop the remainder of `n / k`.
    ///
    /// Clusters draws `k` in `[4, 9]` and puts `n / k` points in each cluster,
    /// so it is only guaranteed to be non-empty for `n >= 9`. Smaller sizes
    /// fail with [`Error::InvalidArgument`] whenever the draw gives `k > n`.
    pub fn generate(&mut self, kind: DistributionKind, n: usize) -> Result<PointCloud2d> {
        if n == 0 {
            return Err(Error::InvalidArgument(
                "requested cloud size must be positive".to_string(),
            ));
        }

        let mut cloud = match kind {
            DistributionKind::Gaussian => self.gaussian(n),
            DistributionKind::Uniform => self.uniform(n),
            DistributionKind::Grid => grid(),
            DistributionKind::Clusters => self.clusters(n),
        };

        if cloud.is_empty() {
            return Err(Error::InvalidArgument(format!(
                "{kind} generation with n = {n} produced no points"
            )));
        }

        cloud.center_at_origin();
        debug!("generated {} cloud with {} points", kind, cloud.len());
        Ok(cloud)
    }

    fn gaussian(&mut self, n: usize) -> PointCloud2d {
        let batch = normal_batch(&mut self.source, 2 * n);
        (0..n).map(|i| Point2d::new(batch[i], batch[n + i])).collect()
    }

    fn uniform(&mut self, n: usize) -> PointCloud2d {
        let mut cloud = PointCloud2d::with_capacity(n);
        for _ in 0..n {
            let x = UNIFORM_SCALE * (self.source.next_uniform() - 0.5);
            let y = UNIFORM_SCALE * (self.source.next_uniform() - 0.5);
            cloud.push(Point2d::new(x, y));
        }
        cloud
    }

    fn clusters(&mut self, n: usize) -> PointCloud2d {
        let batch = normal_batch(&mut self.source, 2 * n);

        let span = (MAX_CLUSTERS - MIN_CLUSTERS) as f64;
        let k = (self.source.next_uniform() * span).floor() as usize + MIN_CLUSTERS;
        let per_cluster = n / k;
        debug!("clusters: k = {k}, {per_cluster} points each");

        let mut cloud = PointCloud2d::with_capacity(k * per_cluster);
        // One counter walks the shared batch across all clusters.
        let mut ctr = 0;
        for _ in 0..k {
            let offset_x = CLUSTER_OFFSET_SCALE * (self.source.next_uniform() - 0.5);
            let offset_y = CLUSTER_OFFSET_SCALE * (self.source.next_uniform() - 0.5);
            for _ in 0..per_cluster {
                cloud.push(Point2d::new(
                    CLUSTER_SPREAD * batch[ctr] + offset_x,
                    CLUSTER_SPREAD * batch[n + ctr] + offset_y,
                ));
                ctr += 1;
            }
        }
        cloud
    }
}

/// The fixed lattice, before centering.
///
/// Integer step counts keep both endpoints exact instead of accumulating a
/// floating step.
fn grid() -> PointCloud2d {
    let coord = |i: usize| (-0.5 + GRID_SPACING * i as f64) * GRID_SCALE;
    let mut cloud = PointCloud2d::with_capacity(GRID_STEPS * GRID_STEPS);
    for i in 0..GRID_STEPS {
        for j in 0..GRID_STEPS {
            cloud.push(Point2d::new(coord(i), coord(j)));
        }
    }
    cloud
}

/// Generate a cloud with a fresh thread-local generator
pub fn generate_cloud(kind: DistributionKind, n: usize) -> Result<PointCloud2d> {
    CloudGenerator::new(rand::thread_rng()).generate(kind, n)
}
