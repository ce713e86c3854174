//! Point cloud data structures and functionality

use crate::point::*;
use crate::transform::Transform2D;
use serde::{Deserialize, Serialize};
use std::ops::Index;

/// A generic point cloud container
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointCloud<T> {
    pub points: Vec<T>,
}

/// A point cloud with 2D points
pub type PointCloud2d = PointCloud<Point2d>;

impl<T> PointCloud<T> {
    /// Create a new empty point cloud
    pub fn new() -> Self {
        Self {
            points: Vec::new(),
        }
    }

    /// Create a new point cloud with specified capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            points: Vec::with_capacity(capacity),
        }
    }

    /// Create a point cloud from a vector of points
    pub fn from_points(points: Vec<T>) -> Self {
        Self { points }
    }

    /// Get the number of points in the cloud
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Check if the point cloud is empty
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Add a point to the cloud
    pub fn push(&mut self, point: T) {
        self.points.push(point);
    }

    /// Get an iterator over the points
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.points.iter()
    }

    /// Borrow the points as a slice
    pub fn as_slice(&self) -> &[T] {
        &self.points
    }
}

impl<T> Default for PointCloud<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Index<usize> for PointCloud<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        &self.points[index]
    }
}

impl<T> IntoIterator for PointCloud<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a PointCloud<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

impl<T> FromIterator<T> for PointCloud<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            points: Vec::from_iter(iter),
        }
    }
}

impl PointCloud<Point2d> {
    /// Build a cloud from `(x, y)` pairs
    pub fn from_xy(coords: &[(f64, f64)]) -> Self {
        coords.iter().map(|&(x, y)| Point2d::new(x, y)).collect()
    }

    /// Arithmetic mean of all points, `None` for an empty cloud
    pub fn centroid(&self) -> Option<Point2d> {
        if self.is_empty() {
            return None;
        }
        let n = self.len() as f64;
        let sum = self
            .points
            .iter()
            .fold(Vector2d::zeros(), |acc, p| acc + p.coords);
        Some(Point2d::from(sum / n))
    }

    /// Subtract the per-axis empirical mean from every point.
    ///
    /// Leaves an empty cloud untouched.
    pub fn center_at_origin(&mut self) {
        if let Some(centroid) = self.centroid() {
            for point in &mut self.points {
                point.coords -= centroid.coords;
            }
        }
    }

    /// Apply a transformation to all points in the cloud
    pub fn transform(&mut self, transform: &Transform2D) {
        for point in &mut self.points {
            *point = transform.transform_point(point);
        }
    }

    /// X coordinates in point order, the shape plotting front ends expect
    pub fn xs(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.x).collect()
    }

    /// Y coordinates in point order
    pub fn ys(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.y).collect()
    }
}
