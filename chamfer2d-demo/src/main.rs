//! Replays a pointer sweep through an interaction session and prints one
//! Chamfer distance read-out per step.
//!
//! ```text
//! chamfer2d-demo --kind grid --edit-mode rotate --steps 10
//! RUST_LOG=debug chamfer2d-demo --seed 3 --json
//! ```

use anyhow::{Context, Result};
use chamfer2d_algorithms::DistributionKind;
use chamfer2d_demo::{DemoConfig, EditMode, InteractionSession};
use clap::Parser;
use log::info;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "chamfer2d-demo", version, about = "Chamfer distance under pointer-driven rigid motion")]
struct Cli {
    /// JSON configuration file; command-line flags override its values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Distribution of the base cloud (Gaussian, Uniform, Grid, Clusters)
    #[arg(long)]
    kind: Option<DistributionKind>,

    /// How the pointer moves the cloud (Translate, Rotate)
    #[arg(long)]
    edit_mode: Option<EditMode>,

    /// Requested number of points
    #[arg(long)]
    points: Option<usize>,

    /// Seed for reproducible clouds
    #[arg(long)]
    seed: Option<u64>,

    /// Pointer positions along the sweep
    #[arg(long, default_value_t = 15)]
    steps: usize,

    /// Print each frame as a JSON line instead of its title
    #[arg(long)]
    json: bool,
}

fn load_config(cli: &Cli) -> Result<DemoConfig> {
    let mut config = match &cli.config {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            DemoConfig::from_json(&text)
                .with_context(|| format!("parsing config {}", path.display()))?
        }
        None => DemoConfig::default(),
    };

    if let Some(kind) = cli.kind {
        config.kind = kind;
    }
    if let Some(mode) = cli.edit_mode {
        config.edit_mode = mode;
    }
    if let Some(points) = cli.points {
        config.points = points;
    }
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }
    Ok(config)
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = load_config(&cli)?;
    let sweep = config.pointer_grid.diagonal(cli.steps);

    let mut session = InteractionSession::new(config).context("starting session")?;
    info!("replaying {} pointer positions", sweep.len());

    let mut frames = vec![session.initial_frame()?];
    for (x, y) in sweep {
        frames.push(session.pointer_moved(x, y)?);
    }

    for frame in &frames {
        if cli.json {
            println!("{}", serde_json::to_string(frame)?);
        } else {
            let t = frame.transform;
            println!(
                "{:>4}  offset ({:>5.1}, {:>5.1})  angle {:>7.3}  {}",
                frame.sequence, t.offset_x, t.offset_y, t.angle, frame.title
            );
        }
    }
    Ok(())
}
