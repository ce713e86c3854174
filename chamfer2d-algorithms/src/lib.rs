//! # chamfer2d Algorithms
//!
//! Point cloud generation, nearest neighbor search and Chamfer distance
//! evaluation for 2D clouds.

pub mod random;
pub mod generation;
pub mod nearest_neighbor;
pub mod chamfer;

// Re-export commonly used items
pub use random::*;
pub use generation::*;
pub use nearest_neighbor::*;
pub use chamfer::*;
