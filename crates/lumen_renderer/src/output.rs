//! Image sinks: plain-text PPM streaming and in-memory buffers saved as PNG.

use std::io::{self, Write};
use std::path::Path;

use thiserror::Error;

/// Errors that can occur while saving an image.
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Image encoding error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Image buffer is incomplete: expected {expected} pixels, got {actual}")]
    Incomplete { expected: usize, actual: usize },
}

/// Consumer of finished pixels, in row-major order from the top scanline.
pub trait PixelSink {
    /// Called once before any pixel with the image dimensions.
    fn begin(&mut self, width: u32, height: u32) -> io::Result<()>;

    /// Receive the next pixel.
    fn write_pixel(&mut self, rgb: [u8; 3]) -> io::Result<()>;

    /// Called once after the last pixel.
    fn finish(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Writes the plain-text `P3` PPM format.
pub struct PpmWriter<W: Write> {
    writer: W,
}

impl<W: Write> PpmWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Return the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> PixelSink for PpmWriter<W> {
    fn begin(&mut self, width: u32, height: u32) -> io::Result<()> {
        writeln!(self.writer, "P3")?;
        writeln!(self.writer, "{} {}", width, height)?;
        writeln!(self.writer, "255")
    }

    fn write_pixel(&mut self, rgb: [u8; 3]) -> io::Result<()> {
        writeln!(self.writer, "{} {} {}", rgb[0], rgb[1], rgb[2])
    }

    fn finish(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

/// Simple image buffer for storing render output.
#[derive(Debug, Clone, Default)]
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<[u8; 3]>,
}

impl ImageBuffer {
    /// Create an empty buffer; dimensions are set by [`PixelSink::begin`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the pixel at (x, y), with y = 0 the top row.
    pub fn get(&self, x: u32, y: u32) -> Option<[u8; 3]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels.get(y as usize * self.width as usize + x as usize).copied()
    }

    /// Convert to packed RGB bytes.
    pub fn to_rgb_bytes(&self) -> Vec<u8> {
        self.pixels.iter().flatten().copied().collect()
    }

    /// Save as PNG (or any format `image` infers from the extension).
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), OutputError> {
        let expected = self.width as usize * self.height as usize;
        if self.pixels.len() != expected {
            return Err(OutputError::Incomplete {
                expected,
                actual: self.pixels.len(),
            });
        }

        let image = image::RgbImage::from_raw(self.width, self.height, self.to_rgb_bytes())
            .ok_or(OutputError::Incomplete {
                expected,
                actual: self.pixels.len(),
            })?;
        image.save(path.as_ref())?;
        log::info!("Image saved as {}", path.as_ref().display());
        Ok(())
    }
}

impl PixelSink for ImageBuffer {
    fn begin(&mut self, width: u32, height: u32) -> io::Result<()> {
        self.width = width;
        self.height = height;
        self.pixels.clear();
        self.pixels.reserve(width as usize * height as usize);
        Ok(())
    }

    fn write_pixel(&mut self, rgb: [u8; 3]) -> io::Result<()> {
        self.pixels.push(rgb);
        Ok(())
    }
}
