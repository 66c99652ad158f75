//! Aspect-ratio-preserving resize to a target column count.

use super::buffer::{PixelBuffer, PixelFormat};
use super::AsciiError;

/// Compute the output height for a column count, preserving aspect ratio.
///
/// `scale = columns / width`, `rows = round(height * scale)`, rounding half
/// up (`f64::round`). The tie-break is part of the contract: callers and
/// tests rely on e.g. a 4x2 image at 2 columns producing exactly 1 row.
pub fn scaled_rows(width: u32, height: u32, target_columns: u32) -> u32 {
    let scale = target_columns as f64 / width as f64;
    (height as f64 * scale).round() as u32
}

/// Resize a buffer to `target_columns` wide, preserving aspect ratio.
///
/// The output is exactly `target_columns` pixels wide and `scaled_rows`
/// high. Resampling is a deterministic box filter: every destination pixel
/// averages the source pixels its cell covers, and a cell whose span rounds
/// empty (upscaling) samples the nearest source pixel instead. The input is
/// never mutated.
///
/// Fails with [`AsciiError::InvalidDimension`] when `target_columns` is 0
/// or when the scaled height rounds to 0 (a zero-height result is not
/// renderable).
pub fn resize(src: &PixelBuffer, target_columns: u32) -> Result<PixelBuffer, AsciiError> {
    if target_columns == 0 {
        return Err(AsciiError::InvalidDimension {
            what: "columns",
            value: 0,
        });
    }

    // Identity: same column count means same buffer, no resampling error.
    if target_columns == src.width() {
        return Ok(src.clone());
    }

    let target_rows = scaled_rows(src.width(), src.height(), target_columns);
    if target_rows == 0 {
        return Err(AsciiError::InvalidDimension {
            what: "rows",
            value: 0,
        });
    }

    let src_w = src.width();
    let src_h = src.height();
    let bpp = src.format().bytes_per_pixel();
    let data = src.data();

    // Source span per destination cell, in pixels.
    let cell_w = src_w as f64 / target_columns as f64;
    let cell_h = src_h as f64 / target_rows as f64;

    let mut out = Vec::with_capacity((target_columns as usize) * (target_rows as usize) * 3);

    for cy in 0..target_rows {
        for cx in 0..target_columns {
            let start_x = ((cx as f64 * cell_w) as u32).min(src_w - 1);
            let start_y = ((cy as f64 * cell_h) as u32).min(src_h - 1);
            // At least one source pixel per cell, clamped to the image.
            let end_x = (((cx + 1) as f64 * cell_w) as u32).clamp(start_x + 1, src_w);
            let end_y = (((cy + 1) as f64 * cell_h) as u32).clamp(start_y + 1, src_h);

            let mut sum_r = 0u64;
            let mut sum_g = 0u64;
            let mut sum_b = 0u64;
            let mut count = 0u64;

            for py in start_y..end_y {
                for px in start_x..end_x {
                    let idx = ((py * src_w + px) as usize) * bpp;
                    sum_r += data[idx] as u64;
                    sum_g += data[idx + 1] as u64;
                    sum_b += data[idx + 2] as u64;
                    count += 1;
                }
            }

            out.push((sum_r / count) as u8);
            out.push((sum_g / count) as u8);
            out.push((sum_b / count) as u8);
        }
    }

    // Alpha, if the source had one, is consumed here: averaged cells are RGB.
    PixelBuffer::new(out, target_columns, target_rows, PixelFormat::Rgb)
}
