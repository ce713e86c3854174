//! 2D rigid transformation utilities

use crate::point::Point2d;
use crate::point_cloud::PointCloud2d;
use serde::{Deserialize, Serialize};

/// A rigid 2D transformation: translate by the offset, then rotate about the
/// origin by `angle` radians.
///
/// The order is fixed. A pure rotation is expressed with a zero offset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform2D {
    pub offset_x: f64,
    pub offset_y: f64,
    pub angle: f64,
}

impl Transform2D {
    /// Create a transformation from an offset and a rotation angle in radians
    pub fn new(offset_x: f64, offset_y: f64, angle: f64) -> Self {
        Self {
            offset_x,
            offset_y,
            angle,
        }
    }

    /// Create an identity transformation
    pub fn identity() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    /// Create a translation transformation
    pub fn translation(offset_x: f64, offset_y: f64) -> Self {
        Self::new(offset_x, offset_y, 0.0)
    }

    /// Create a rotation about the origin
    pub fn rotation(angle: f64) -> Self {
        Self::new(0.0, 0.0, angle)
    }

    /// Apply the transformation to a point
    pub fn transform_point(&self, point: &Point2d) -> Point2d {
        let x = point.x + self.offset_x;
        let y = point.y + self.offset_y;
        // An exact zero skips the trig entirely so translation stays bit-exact.
        if self.angle == 0.0 {
            return Point2d::new(x, y);
        }
        let (s, c) = self.angle.sin_cos();
        Point2d::new(x * c - y * s, x * s + y * c)
    }

    /// Apply the transformation to every point, returning a new cloud.
    ///
    /// The input is left untouched.
    pub fn apply(&self, cloud: &PointCloud2d) -> PointCloud2d {
        cloud.iter().map(|p| self.transform_point(p)).collect()
    }

    /// Get the inverse transformation.
    ///
    /// Undoing `R(p + d)` needs `R⁻¹(q) - d`, which in translate-then-rotate
    /// form is an offset of `-R d` followed by a rotation of `-angle`.
    pub fn inverse(&self) -> Self {
        let (s, c) = self.angle.sin_cos();
        let (dx, dy) = (self.offset_x, self.offset_y);
        Self::new(-(dx * c - dy * s), -(dx * s + dy * c), -self.angle)
    }

    /// Check if this is exactly the identity transformation
    pub fn is_identity(&self) -> bool {
        self.offset_x == 0.0 && self.offset_y == 0.0 && self.angle == 0.0
    }
}

impl Default for Transform2D {
    fn default() -> Self {
        Self::identity()
    }
}

/// Translate `cloud` by `(dx, dy)` and then rotate it by `theta` radians.
pub fn transform(cloud: &PointCloud2d, dx: f64, dy: f64, theta: f64) -> PointCloud2d {
    Transform2D::new(dx, dy, theta).apply(cloud)
}
