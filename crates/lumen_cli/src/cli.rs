use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use log::LevelFilter;
use lumen_renderer::RenderConfig;

/// Log levels selectable on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Where the finished image goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    Stdout,
    Ppm(PathBuf),
    Png(PathBuf),
}

#[derive(Parser, Debug)]
#[command(name = "lumen")]
#[command(about = "Render spheres with a Monte Carlo path tracer")]
pub struct Args {
    /// Image width in pixels
    #[arg(long, default_value_t = 400)]
    pub width: u32,

    /// Width over height; the image height is derived from it
    #[arg(long, default_value_t = 16.0 / 9.0)]
    pub aspect_ratio: f64,

    /// Number of samples per pixel
    #[arg(long, short = 's', default_value_t = 100)]
    pub samples: u32,

    /// Maximum number of bounces per path
    #[arg(long, default_value_t = 50)]
    pub max_depth: u32,

    /// Seed for a reproducible render (random if omitted)
    #[arg(long)]
    pub seed: Option<u64>,

    /// JSON scene file (the built-in demo scene if omitted)
    #[arg(long)]
    pub scene: Option<PathBuf>,

    /// Output file: .png for PNG, anything else for plain PPM, "-" for stdout
    #[arg(short, long, default_value = "image.ppm")]
    pub output: String,

    /// Set the logging level (RUST_LOG takes precedence)
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,
}

impl Args {
    pub fn render_config(&self) -> RenderConfig {
        RenderConfig {
            image_width: self.width,
            aspect_ratio: self.aspect_ratio,
            samples_per_pixel: self.samples,
            max_depth: self.max_depth,
        }
    }

    pub fn output_target(&self) -> OutputTarget {
        if self.output == "-" {
            return OutputTarget::Stdout;
        }

        let path = PathBuf::from(&self.output);
        let is_png = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("png"));
        if is_png {
            OutputTarget::Png(path)
        } else {
            OutputTarget::Ppm(path)
        }
    }

    /// Reject settings the renderer cannot honour.
    pub fn validate(&self) -> Result<(), String> {
        if self.width == 0 {
            return Err("--width must be at least 1".to_string());
        }
        if self.samples == 0 {
            return Err("--samples must be at least 1".to_string());
        }
        if !(self.aspect_ratio.is_finite() && self.aspect_ratio > 0.0) {
            return Err(format!("--aspect-ratio must be positive, got {}", self.aspect_ratio));
        }
        Ok(())
    }
}
