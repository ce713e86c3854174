//! Integration tests for chamfer2d-algorithms
//!
//! These tests run the generators, transforms and both Chamfer
//! implementations together the way an interactive front end would.

use approx::assert_relative_eq;
use chamfer2d_algorithms::*;
use chamfer2d_core::{transform, Error, PointCloud2d, Transform2D};

fn random_cloud(seed: u64, n: usize) -> PointCloud2d {
    CloudGenerator::new(seeded_source(seed))
        .generate(DistributionKind::Uniform, n)
        .unwrap()
}

#[test]
fn test_kdtree_chamfer_matches_brute_force() {
    for n in [1, 2, 5, 50, 100, 200] {
        for seed in 0..5 {
            let a = random_cloud(seed, n);
            let b = random_cloud(seed + 1000, (n / 2).max(1));
            let fast = chamfer_distance(&a, &b).unwrap();
            let slow = chamfer_distance_brute_force(&a, &b).unwrap();
            assert_relative_eq!(fast, slow, epsilon = 1e-12, max_relative = 1e-12);
        }
    }
}

#[test]
fn test_chamfer_is_non_negative_and_zero_on_self() {
    let mut generator = CloudGenerator::new(seeded_source(77));
    for kind in DistributionKind::ALL {
        let cloud = generator.generate(kind, DEFAULT_CLOUD_SIZE).unwrap();
        assert_eq!(chamfer_distance(&cloud, &cloud).unwrap(), 0.0);

        let moved = transform(&cloud, 0.7, -0.2, 0.4);
        assert!(chamfer_distance(&cloud, &moved).unwrap() > 0.0);
    }
}

#[test]
fn test_chamfer_is_symmetric() {
    let a = random_cloud(3, 80);
    let b = random_cloud(4, 40);
    assert_relative_eq!(
        chamfer_distance(&a, &b).unwrap(),
        chamfer_distance(&b, &a).unwrap(),
        epsilon = 1e-12
    );
}

#[test]
fn test_translation_of_grid_grows_with_offset() {
    let grid = CloudGenerator::new(seeded_source(0))
        .generate(DistributionKind::Grid, DEFAULT_CLOUD_SIZE)
        .unwrap();
    let evaluator = ChamferEvaluator::new(grid.clone()).unwrap();

    // Lattice spacing is 0.5; half a step leaves every point 0.25 from its
    // nearest neighbor in both directions.
    let half_step = evaluator.distance(&transform(&grid, 0.25, 0.0, 0.0)).unwrap();
    assert_relative_eq!(half_step, 2.0 * 0.25 * 0.25, epsilon = 1e-9);

    // A full step lands back on the lattice except for one boundary column of
    // 11 points per direction, each 0.5 away.
    let full_step = evaluator.distance(&transform(&grid, 0.5, 0.0, 0.0)).unwrap();
    assert_relative_eq!(full_step, 2.0 * 11.0 * 0.25 / 121.0, epsilon = 1e-9);
    assert!(full_step < half_step);

    let far = evaluator.distance(&transform(&grid, 10.0, 0.0, 0.0)).unwrap();
    assert!(far > half_step);
}

#[test]
fn test_rotation_of_grid_by_quarter_turn_is_free() {
    let grid = CloudGenerator::new(seeded_source(0))
        .generate(DistributionKind::Grid, DEFAULT_CLOUD_SIZE)
        .unwrap();
    let rotated = Transform2D::rotation(std::f64::consts::FRAC_PI_2).apply(&grid);
    assert!(chamfer_distance(&grid, &rotated).unwrap() < 1e-20);
}

#[test]
fn test_evaluator_tracks_pointer_sweep() {
    let base = CloudGenerator::new(seeded_source(5))
        .generate(DistributionKind::Clusters, DEFAULT_CLOUD_SIZE)
        .unwrap();
    let evaluator = ChamferEvaluator::new(base.clone()).unwrap();
    for i in 0..20 {
        let x = -5.0 + 0.5 * i as f64;
        let moved = transform(&base, x, x / 2.0, 0.0);
        assert_eq!(
            evaluator.distance(&moved).unwrap(),
            chamfer_distance(&base, &moved).unwrap()
        );
    }
}

#[test]
fn test_error_kinds() {
    let err = "Banana".parse::<DistributionKind>().unwrap_err();
    assert!(matches!(err, Error::InvalidArgument(_)));

    let a = random_cloud(1, 10);
    let err = chamfer_distance(&a, &PointCloud2d::new()).unwrap_err();
    assert!(matches!(err, Error::EmptyInput(_)));
}
