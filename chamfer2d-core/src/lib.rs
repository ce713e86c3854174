//! Core data structures and traits for chamfer2d
//!
//! This crate provides the fundamental types shared by the generators, the
//! spatial index and the Chamfer evaluator: 2D points, point clouds, rigid
//! transforms, errors and the nearest neighbor search trait.

pub mod point;
pub mod point_cloud;
pub mod traits;
pub mod transform;
pub mod error;

pub use point::*;
pub use point_cloud::*;
pub use traits::*;
pub use transform::*;
pub use error::*;

/// Re-export commonly used types from nalgebra
pub use nalgebra::{Point2, Vector2};
