//! Simple path tracer example.
//!
//! Renders the demo scene at a low sample count and saves it to PPM.

use lumen_renderer::{render, NoProgress, PpmWriter, RenderConfig, SceneDesc};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fs::File;
use std::io::BufWriter;

fn main() {
    println!("Lumen Path Tracer - Simple Example");
    println!("==================================");

    let start = std::time::Instant::now();
    let world = SceneDesc::demo().build().expect("demo scene is valid");
    println!("Scene built in {:?}", start.elapsed());

    let config = RenderConfig {
        image_width: 200,
        samples_per_pixel: 16,
        max_depth: 10,
        ..RenderConfig::default()
    };

    println!(
        "Rendering {}x{} @ {} spp...",
        config.image_width,
        config.image_height(),
        config.samples_per_pixel
    );

    let filename = "output.ppm";
    let file = File::create(filename).expect("Failed to create image file");
    let mut ppm = PpmWriter::new(BufWriter::new(file));
    let mut rng = StdRng::seed_from_u64(42);

    let start = std::time::Instant::now();
    render(&config.camera(), &world, &config, &mut rng, &mut ppm, &mut NoProgress)
        .expect("Failed to save image");
    println!("Rendered in {:?}", start.elapsed());
    println!("Saved to {}", filename);
}
