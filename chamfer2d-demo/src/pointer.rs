//! Pointer handling: edit modes, hover lattice and pointer-to-transform mapping

use chamfer2d_core::{Error, Result, Transform2D};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How pointer movement perturbs the moving cloud
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EditMode {
    /// The pointer position is the offset
    Translate,
    /// The pointer's polar angle is the rotation
    Rotate,
}

impl EditMode {
    pub const ALL: [EditMode; 2] = [EditMode::Translate, EditMode::Rotate];

    pub fn name(&self) -> &'static str {
        match self {
            EditMode::Translate => "Translate",
            EditMode::Rotate => "Rotate",
        }
    }
}

impl fmt::Display for EditMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for EditMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        EditMode::ALL
            .into_iter()
            .find(|mode| mode.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::InvalidArgument(format!("unknown edit mode '{s}'")))
    }
}

/// Map a pointer position to the transform applied to the moving cloud
pub fn pointer_transform(mode: EditMode, x: f64, y: f64) -> Transform2D {
    match mode {
        EditMode::Translate => Transform2D::translation(x, y),
        EditMode::Rotate => Transform2D::rotation(y.atan2(x)),
    }
}

/// Invisible hover lattice over the plot area.
///
/// Pointer positions are quantized to its nodes so dragging moves the cloud
/// in steps of `delta`. Nodes follow a half-open layout: `min, min + delta,
/// ...` strictly below `max`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PointerGrid {
    pub range_x: [f64; 2],
    pub range_y: [f64; 2],
    pub delta: f64,
}

impl Default for PointerGrid {
    fn default() -> Self {
        Self {
            range_x: [-7.0, 7.0],
            range_y: [-7.0, 7.0],
            delta: 0.5,
        }
    }
}

impl PointerGrid {
    /// Reject empty ranges and non-positive spacing
    pub fn validate(&self) -> Result<()> {
        if !(self.delta > 0.0 && self.delta.is_finite()) {
            return Err(Error::InvalidArgument(format!(
                "pointer grid spacing must be positive, got {}",
                self.delta
            )));
        }
        for (axis, [min, max]) in [("x", self.range_x), ("y", self.range_y)] {
            if !(min < max) {
                return Err(Error::InvalidArgument(format!(
                    "pointer grid {axis} range [{min}, {max}] is empty"
                )));
            }
        }
        Ok(())
    }

    fn steps(&self, [min, max]: [f64; 2]) -> usize {
        ((max - min) / self.delta).ceil().max(1.0) as usize
    }

    /// Nodes per axis, `(x, y)`
    pub fn shape(&self) -> (usize, usize) {
        (self.steps(self.range_x), self.steps(self.range_y))
    }

    fn snap_axis(&self, value: f64, range: [f64; 2]) -> f64 {
        let last = (self.steps(range) - 1) as f64;
        let k = ((value - range[0]) / self.delta).round().clamp(0.0, last);
        range[0] + k * self.delta
    }

    /// Nearest lattice node to a pointer position
    pub fn snap(&self, x: f64, y: f64) -> (f64, f64) {
        (self.snap_axis(x, self.range_x), self.snap_axis(y, self.range_y))
    }

    /// Every lattice node, x-major
    pub fn nodes(&self) -> Vec<(f64, f64)> {
        let (nx, ny) = self.shape();
        let mut nodes = Vec::with_capacity(nx * ny);
        for i in 0..nx {
            for j in 0..ny {
                nodes.push((
                    self.range_x[0] + i as f64 * self.delta,
                    self.range_y[0] + j as f64 * self.delta,
                ));
            }
        }
        nodes
    }

    /// `steps` snapped positions along the diagonal from the lower-left
    /// corner to the upper-right corner
    pub fn diagonal(&self, steps: usize) -> Vec<(f64, f64)> {
        let span = |[min, max]: [f64; 2], t: f64| min + t * (max - min);
        (0..steps)
            .map(|i| {
                let t = if steps > 1 {
                    i as f64 / (steps - 1) as f64
                } else {
                    0.0
                };
                self.snap(span(self.range_x, t), span(self.range_y, t))
            })
            .collect()
    }
}
