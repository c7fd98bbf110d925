use std::fs::File;
use std::io::{self, BufWriter};

use anyhow::{bail, Context, Result};
use clap::Parser;
use lumen_renderer::{render, ImageBuffer, LogProgress, PpmWriter, SceneDesc};
use rand::rngs::StdRng;
use rand::SeedableRng;

mod cli;

use cli::{Args, OutputTarget};

fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::Builder::new()
        .filter_level(args.log_level.into())
        .parse_default_env()
        .init();

    if let Err(message) = args.validate() {
        bail!(message);
    }

    log::info!("Starting Lumen");

    let scene = match &args.scene {
        Some(path) => SceneDesc::load(path)
            .with_context(|| format!("Failed to load scene {}", path.display()))?,
        None => SceneDesc::demo(),
    };
    let world = scene.build().context("Failed to build scene")?;

    let config = args.render_config();
    let camera = config.camera();

    let mut rng = match args.seed {
        Some(seed) => {
            log::info!("Using seed {}", seed);
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };
    let mut progress = LogProgress::new();

    match args.output_target() {
        OutputTarget::Stdout => {
            let mut ppm = PpmWriter::new(BufWriter::new(io::stdout().lock()));
            render(&camera, &world, &config, &mut rng, &mut ppm, &mut progress)
                .context("Failed to write image to stdout")?;
        }
        OutputTarget::Ppm(path) => {
            let file = File::create(&path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            let mut ppm = PpmWriter::new(BufWriter::new(file));
            render(&camera, &world, &config, &mut rng, &mut ppm, &mut progress)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            log::info!("Image saved as {}", path.display());
        }
        OutputTarget::Png(path) => {
            let mut buffer = ImageBuffer::new();
            render(&camera, &world, &config, &mut rng, &mut buffer, &mut progress)
                .context("Failed to render image")?;
            buffer
                .save(&path)
                .with_context(|| format!("Failed to save {}", path.display()))?;
        }
    }

    Ok(())
}
