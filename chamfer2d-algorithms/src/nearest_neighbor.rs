//! Nearest neighbor search implementations

use chamfer2d_core::{
    distance_squared, Error, NearestNeighborSearch, Neighbor, Point2d, PointCloud2d, Result,
};
use log::trace;

/// One tree node; children are positions in [`KdTree::nodes`]
#[derive(Debug, Clone)]
struct KdNode {
    point: Point2d,
    index: usize,
    axis: usize,
    left: Option<usize>,
    right: Option<usize>,
}

/// Balanced 2D k-d tree for single nearest neighbor queries.
///
/// The tree copies the coordinates it is built from and never changes
/// afterwards. Split axes alternate x, y by depth and every split is at the
/// median of the current axis, so the depth is `O(log n)`.
#[derive(Debug, Clone)]
pub struct KdTree {
    nodes: Vec<KdNode>,
    root: usize,
}

impl KdTree {
    /// Build a tree over `points`. Fails with [`Error::EmptyInput`] when
    /// there is nothing to index.
    pub fn new(points: &[Point2d]) -> Result<Self> {
        if points.is_empty() {
            return Err(Error::EmptyInput(
                "cannot build a k-d tree from an empty cloud".to_string(),
            ));
        }

        let mut items: Vec<(usize, Point2d)> = points.iter().copied().enumerate().collect();
        let mut nodes = Vec::with_capacity(points.len());
        let root = build_node(&mut items, 0, &mut nodes)
            .ok_or_else(|| Error::EmptyInput("k-d tree has no root".to_string()))?;

        trace!("built k-d tree over {} points", nodes.len());
        Ok(Self { nodes, root })
    }

    /// Build a tree over every point of `cloud`
    pub fn from_cloud(cloud: &PointCloud2d) -> Result<Self> {
        Self::new(cloud.as_slice())
    }

    fn search(&self, node: usize, query: &Point2d, best: &mut Neighbor) {
        let current = &self.nodes[node];
        let d = distance_squared(&current.point, query);
        if d < best.distance_squared {
            *best = Neighbor {
                index: current.index,
                point: current.point,
                distance_squared: d,
            };
        }

        let diff = query[current.axis] - current.point[current.axis];
        let (near, far) = if diff < 0.0 {
            (current.left, current.right)
        } else {
            (current.right, current.left)
        };

        if let Some(near) = near {
            self.search(near, query, best);
        }
        // The far side can only help if the splitting line is closer than the best so far.
        if diff * diff < best.distance_squared {
            if let Some(far) = far {
                self.search(far, query, best);
            }
        }
    }
}

/// Median-split `items` on the axis for `depth` and return the subtree root
fn build_node(
    items: &mut [(usize, Point2d)],
    depth: usize,
    nodes: &mut Vec<KdNode>,
) -> Option<usize> {
    if items.is_empty() {
        return None;
    }

    let axis = depth % 2;
    let mid = items.len() / 2;
    items.select_nth_unstable_by(mid, |a, b| a.1[axis].total_cmp(&b.1[axis]));
    let (index, point) = items[mid];

    let (lower, rest) = items.split_at_mut(mid);
    let left = build_node(lower, depth + 1, nodes);
    let right = build_node(&mut rest[1..], depth + 1, nodes);

    nodes.push(KdNode {
        point,
        index,
        axis,
        left,
        right,
    });
    Some(nodes.len() - 1)
}

impl NearestNeighborSearch for KdTree {
    fn nearest_one(&self, query: &Point2d) -> Neighbor {
        let root = &self.nodes[self.root];
        let mut best = Neighbor {
            index: root.index,
            point: root.point,
            distance_squared: distance_squared(&root.point, query),
        };
        self.search(self.root, query, &mut best);
        best
    }

    fn len(&self) -> usize {
        self.nodes.len()
    }
}

/// Simple brute force nearest neighbor search for small datasets
pub struct BruteForceSearch {
    points: Vec<Point2d>,
}

impl BruteForceSearch {
    pub fn new(points: &[Point2d]) -> Result<Self> {
        if points.is_empty() {
            return Err(Error::EmptyInput(
                "cannot search an empty cloud".to_string(),
            ));
        }
        Ok(Self {
            points: points.to_vec(),
        })
    }
}

impl NearestNeighborSearch for BruteForceSearch {
    fn nearest_one(&self, query: &Point2d) -> Neighbor {
        let mut best = Neighbor {
            index: 0,
            point: self.points[0],
            distance_squared: distance_squared(&self.points[0], query),
        };
        for (index, point) in self.points.iter().enumerate().skip(1) {
            let d = distance_squared(point, query);
            if d < best.distance_squared {
                best = Neighbor {
                    index,
                    point: *point,
                    distance_squared: d,
                };
            }
        }
        best
    }

    fn len(&self) -> usize {
        self.points.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::{seeded_source, RandomSource};

    fn random_points(seed: u64, n: usize) -> Vec<Point2d> {
        let mut rng = seeded_source(seed);
        (0..n)
            .map(|_| Point2d::new(10.0 * rng.next_uniform() - 5.0, 10.0 * rng.next_uniform() - 5.0))
            .collect()
    }

    fn depth(tree: &KdTree, node: Option<usize>) -> usize {
        match node {
            None => 0,
            Some(i) => {
                let n = &tree.nodes[i];
                1 + depth(tree, n.left).max(depth(tree, n.right))
            }
        }
    }

    #[test]
    fn test_empty_input_rejected() {
        assert!(matches!(KdTree::new(&[]), Err(Error::EmptyInput(_))));
        assert!(matches!(BruteForceSearch::new(&[]), Err(Error::EmptyInput(_))));
    }

    #[test]
    fn test_single_point() {
        let p = Point2d::new(1.5, -2.0);
        let tree = KdTree::new(&[p]).unwrap();
        assert_eq!(tree.len(), 1);

        let hit = tree.nearest_one(&p);
        assert_eq!(hit.point, p);
        assert_eq!(hit.distance_squared, 0.0);

        let miss = tree.nearest_one(&Point2d::new(4.5, 2.0));
        assert_eq!(miss.index, 0);
        assert_eq!(miss.distance_squared, 25.0);
    }

    #[test]
    fn test_self_query_returns_zero() {
        let points = random_points(4, 50);
        let tree = KdTree::new(&points).unwrap();
        for p in &points {
            assert_eq!(tree.nearest_one(p).distance_squared, 0.0);
        }
    }

    #[test]
    fn test_known_neighbor() {
        let points = vec![
            Point2d::new(2.0, 3.0),
            Point2d::new(5.0, 4.0),
            Point2d::new(9.0, 6.0),
            Point2d::new(4.0, 7.0),
            Point2d::new(8.0, 1.0),
            Point2d::new(7.0, 2.0),
        ];
        let tree = KdTree::new(&points).unwrap();
        let hit = tree.nearest_one(&Point2d::new(9.0, 2.0));
        assert_eq!(hit.index, 4);
        assert_eq!(hit.point, Point2d::new(8.0, 1.0));
        assert_eq!(hit.distance_squared, 2.0);
    }

    #[test]
    fn test_matches_brute_force() {
        for (seed, n) in [(1, 2), (2, 17), (3, 100), (4, 200)] {
            let points = random_points(seed, n);
            let tree = KdTree::new(&points).unwrap();
            let brute = BruteForceSearch::new(&points).unwrap();
            for q in random_points(seed + 100, 300) {
                let a = tree.nearest_one(&q);
                let b = brute.nearest_one(&q);
                assert!((a.distance_squared - b.distance_squared).abs() < 1e-12);
                assert_eq!(a.distance_squared, distance_squared(&a.point, &q));
            }
        }
    }

    #[test]
    fn test_duplicate_points() {
        let points = vec![Point2d::new(1.0, 1.0); 16];
        let tree = KdTree::new(&points).unwrap();
        let hit = tree.nearest_one(&Point2d::new(0.0, 1.0));
        assert_eq!(hit.distance_squared, 1.0);
    }

    #[test]
    fn test_tree_is_balanced() {
        let points = random_points(9, 1000);
        let tree = KdTree::new(&points).unwrap();
        assert_eq!(tree.len(), 1000);
        // 2^10 = 1024 > 1000
        assert!(depth(&tree, Some(tree.root)) <= 10);
    }

    #[test]
    fn test_every_index_present_once() {
        let points = random_points(12, 64);
        let tree = KdTree::new(&points).unwrap();
        let mut seen: Vec<usize> = tree.nodes.iter().map(|n| n.index).collect();
        seen.sort_unstable();
        assert_eq!(seen, (0..64).collect::<Vec<_>>());
    }
}
