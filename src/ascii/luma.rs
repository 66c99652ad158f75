//! Per-pixel luminance using the ITU-R BT.601 weights.

use super::buffer::Pixel;
use super::ramp::Ramp;

/// Compute a pixel's perceptual luminance, normalized to [0, 1].
///
/// Uses the BT.601 weighting: Y = 0.299*R + 0.587*G + 0.114*B.
///
/// The result is rounded to 2 decimal places before use. That rounding is
/// not cosmetic: it decides which ramp bucket a pixel lands in, so it must
/// stay in place for output parity across runs and platforms.
pub fn luminance(pixel: Pixel) -> f64 {
    let y = 0.299 * pixel.r as f64 + 0.587 * pixel.g as f64 + 0.114 * pixel.b as f64;
    let y = (y / 255.0).clamp(0.0, 1.0);
    (y * 100.0).round() / 100.0
}

/// Map a luminance value to a ramp bucket index.
///
/// `round(luminance * (len - 1))`, rounding half up (`f64::round`), so
/// luminance 0.0 yields index 0 and luminance 1.0 yields the last index.
/// A 2-glyph ramp splits exactly at 0.50, which rounds up to index 1.
pub fn ramp_index(luminance: f64, levels: usize) -> usize {
    debug_assert!(levels >= 2);
    (luminance * (levels - 1) as f64).round() as usize
}

/// Pick the glyph for a pixel: luminance, then bucket, then ramp lookup.
pub fn glyph_for(pixel: Pixel, ramp: &Ramp) -> char {
    ramp.glyph(ramp_index(luminance(pixel), ramp.len()))
}
