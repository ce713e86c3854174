//! Interaction session: the single owner of front-end state

use crate::config::DemoConfig;
use crate::pointer::{pointer_transform, EditMode};
use chamfer2d_algorithms::{seeded_source, ChamferEvaluator, CloudGenerator, DistributionKind, RandomSource};
use chamfer2d_core::{PointCloud2d, Result, Transform2D};
use log::{debug, info};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::Serialize;

/// Caption shown above the plot for a distance value
pub fn format_title(distance: f64) -> String {
    format!("Chamfer distance: {distance:.2}")
}

/// Everything a front end needs to redraw after one pointer event
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Frame {
    /// Increases by one per frame; a front end drops frames older than the
    /// newest one it has drawn
    pub sequence: u64,
    pub transform: Transform2D,
    pub transformed: PointCloud2d,
    pub distance: f64,
    pub title: String,
}

/// Owns the base cloud, the current modes and the cached evaluator.
///
/// Regenerating the cloud replaces the evaluator, so distances always refer
/// to the cloud currently on screen.
pub struct InteractionSession<R = ChaCha8Rng> {
    config: DemoConfig,
    generator: CloudGenerator<R>,
    kind: DistributionKind,
    edit_mode: EditMode,
    evaluator: ChamferEvaluator,
    sequence: u64,
}

impl InteractionSession<ChaCha8Rng> {
    /// Start a session, seeding from the config or from OS entropy
    pub fn new(config: DemoConfig) -> Result<Self> {
        let source = match config.seed {
            Some(seed) => seeded_source(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        Self::with_source(config, source)
    }
}

impl<R: RandomSource> InteractionSession<R> {
    /// Start a session drawing clouds from `source`
    pub fn with_source(config: DemoConfig, source: R) -> Result<Self> {
        config.validate()?;
        let mut generator = CloudGenerator::new(source);
        let base = generator.generate(config.kind, config.points)?;
        info!(
            "session started: {} cloud with {} points, {} mode",
            config.kind,
            base.len(),
            config.edit_mode
        );
        Ok(Self {
            kind: config.kind,
            edit_mode: config.edit_mode,
            evaluator: ChamferEvaluator::new(base)?,
            generator,
            config,
            sequence: 0,
        })
    }

    pub fn kind(&self) -> DistributionKind {
        self.kind
    }

    pub fn edit_mode(&self) -> EditMode {
        self.edit_mode
    }

    pub fn config(&self) -> &DemoConfig {
        &self.config
    }

    /// The cloud distances are measured against
    pub fn base(&self) -> &PointCloud2d {
        self.evaluator.base()
    }

    /// Switch distribution and draw a new base cloud
    pub fn set_kind(&mut self, kind: DistributionKind) -> Result<()> {
        let base = self.generator.generate(kind, self.config.points)?;
        self.evaluator = ChamferEvaluator::new(base)?;
        self.kind = kind;
        info!("distribution changed to {kind}");
        Ok(())
    }

    /// Draw a new base cloud of the current kind
    pub fn randomize(&mut self) -> Result<()> {
        self.set_kind(self.kind)
    }

    pub fn set_edit_mode(&mut self, mode: EditMode) {
        info!("edit mode changed to {mode}");
        self.edit_mode = mode;
    }

    /// Frame with the moving cloud on top of the base cloud
    pub fn initial_frame(&mut self) -> Result<Frame> {
        self.frame(Transform2D::identity())
    }

    /// Snap the pointer to the hover lattice and evaluate the resulting
    /// transform
    pub fn pointer_moved(&mut self, x: f64, y: f64) -> Result<Frame> {
        let (sx, sy) = self.config.pointer_grid.snap(x, y);
        self.frame(pointer_transform(self.edit_mode, sx, sy))
    }

    fn frame(&mut self, transform: Transform2D) -> Result<Frame> {
        let transformed = transform.apply(self.base());
        let distance = self.evaluator.distance(&transformed)?;
        self.sequence += 1;
        debug!(
            "frame {}: offset ({}, {}), angle {:.4}, distance {:.6}",
            self.sequence, transform.offset_x, transform.offset_y, transform.angle, distance
        );
        Ok(Frame {
            sequence: self.sequence,
            transform,
            transformed,
            distance,
            title: format_title(distance),
        })
    }
}
