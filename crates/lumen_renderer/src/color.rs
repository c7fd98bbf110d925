//! Tone mapping from linear colors to 8-bit channels.

use lumen_math::{Color, Interval};

/// Output channel range before scaling by 256.
const INTENSITY: Interval = Interval::new(0.0, 0.999);

/// Apply gamma correction (gamma = 2.0).
#[inline]
pub fn linear_to_gamma(linear: f64) -> f64 {
    if linear > 0.0 {
        linear.sqrt()
    } else {
        0.0
    }
}

/// Convert a display-space color to 8-bit RGB.
///
/// Each channel is clamped to [0, 0.999] and scaled by 256.
pub fn color_to_rgb(color: Color) -> [u8; 3] {
    let channel = |c: f64| (256.0 * INTENSITY.clamp(c)) as u8;
    [channel(color.x), channel(color.y), channel(color.z)]
}

/// Average a sample sum and gamma-correct it, producing 8-bit RGB.
///
/// Call once per pixel, after all samples are summed.
pub fn samples_to_rgb(sum: Color, samples: u32) -> [u8; 3] {
    let scale = 1.0 / samples.max(1) as f64;
    let average = sum * scale;
    color_to_rgb(Color::new(
        linear_to_gamma(average.x),
        linear_to_gamma(average.y),
        linear_to_gamma(average.z),
    ))
}

/// Format a color as `"R G B"` without gamma correction.
pub fn color_string(color: Color) -> String {
    let [r, g, b] = color_to_rgb(color);
    format!("{r} {g} {b}")
}

/// Format an accumulated sample sum as `"R G B"`.
pub fn color_string_samples(sum: Color, samples: u32) -> String {
    let [r, g, b] = samples_to_rgb(sum, samples);
    format!("{r} {g} {b}")
}
