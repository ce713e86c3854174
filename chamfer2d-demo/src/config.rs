//! Session configuration

use crate::pointer::{EditMode, PointerGrid};
use chamfer2d_algorithms::{DistributionKind, DEFAULT_CLOUD_SIZE};
use chamfer2d_core::{Error, Result};
use serde::{Deserialize, Serialize};

/// Configuration for an [`InteractionSession`](crate::InteractionSession)
///
/// Every field has a default, so a JSON file only needs the keys it changes:
///
/// ```json
/// { "kind": "Grid", "edit_mode": "Rotate", "seed": 7 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// Distribution of the first cloud
    pub kind: DistributionKind,
    /// Initial edit mode
    pub edit_mode: EditMode,
    /// Requested points per cloud
    pub points: usize,
    /// Seed for reproducible clouds (None draws from OS entropy)
    pub seed: Option<u64>,
    /// Hover lattice the pointer snaps to
    pub pointer_grid: PointerGrid,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            kind: DistributionKind::Clusters,
            edit_mode: EditMode::Translate,
            points: DEFAULT_CLOUD_SIZE,
            seed: None,
            pointer_grid: PointerGrid::default(),
        }
    }
}

impl DemoConfig {
    /// Parse a JSON document, filling missing keys with defaults
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Reject configurations no session could run with
    pub fn validate(&self) -> Result<()> {
        if self.points == 0 {
            return Err(Error::InvalidArgument(
                "points per cloud must be positive".to_string(),
            ));
        }
        self.pointer_grid.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = DemoConfig::default();
        assert_eq!(config.kind, DistributionKind::Clusters);
        assert_eq!(config.edit_mode, EditMode::Translate);
        assert_eq!(config.points, 100);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json() {
        let config = DemoConfig::from_json(r#"{ "kind": "Grid", "seed": 7 }"#).unwrap();
        assert_eq!(config.kind, DistributionKind::Grid);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.points, 100);
        assert_eq!(config.pointer_grid, PointerGrid::default());
    }

    #[test]
    fn test_nested_grid_json() {
        let config =
            DemoConfig::from_json(r#"{ "pointer_grid": { "delta": 0.25 } }"#).unwrap();
        assert_eq!(config.pointer_grid.delta, 0.25);
        assert_eq!(config.pointer_grid.range_x, [-7.0, 7.0]);
    }

    #[test]
    fn test_unknown_kind_in_json() {
        assert!(DemoConfig::from_json(r#"{ "kind": "Spiral" }"#).is_err());
    }

    #[test]
    fn test_json_round_trip() {
        let config = DemoConfig {
            kind: DistributionKind::Uniform,
            edit_mode: EditMode::Rotate,
            points: 250,
            seed: Some(3),
            pointer_grid: PointerGrid::default(),
        };
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(DemoConfig::from_json(&json).unwrap(), config);
    }

    #[test]
    fn test_zero_points_rejected() {
        let config = DemoConfig { points: 0, ..DemoConfig::default() };
        assert!(matches!(config.validate(), Err(Error::InvalidArgument(_))));
    }
}
