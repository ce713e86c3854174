//! Point types and related functionality

use nalgebra::{Point2, Vector2};

/// A 2D point with double precision coordinates
pub type Point2d = Point2<f64>;

/// A 2D vector with double precision components
pub type Vector2d = Vector2<f64>;

/// Squared Euclidean distance between two points.
///
/// This is the metric used throughout the crate. It is never square-rooted,
/// the Chamfer distance averages squared distances.
#[inline]
pub fn distance_squared(a: &Point2d, b: &Point2d) -> f64 {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    dx * dx + dy * dy
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_squared() {
        let a = Point2d::new(0.0, 0.0);
        let b = Point2d::new(3.0, 4.0);
        assert_eq!(distance_squared(&a, &b), 25.0);
        assert_eq!(distance_squared(&b, &a), 25.0);
        assert_eq!(distance_squared(&a, &a), 0.0);
    }
}
