//! Frame assembly: classified cells plus dimensions.

use super::buffer::{Pixel, PixelBuffer};
use super::color::{classify_color, ColorCategory};
use super::luma::glyph_for;
use super::ramp::Ramp;
use super::AsciiError;

/// One output cell: a glyph paired with its terminal color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyledGlyph {
    pub color: ColorCategory,
    pub glyph: char,
}

/// Classify a single pixel into a styled glyph.
///
/// Pure and order-independent: luminance picks the glyph, hue/lightness
/// pick the color, and the two computations never feed each other.
pub fn classify(pixel: Pixel, ramp: &Ramp) -> StyledGlyph {
    StyledGlyph {
        color: classify_color(pixel),
        glyph: glyph_for(pixel, ramp),
    }
}

/// An ASCII-rendered frame: one styled glyph per pixel of the resized
/// image, row-major, with explicit dimensions.
///
/// Rows are recovered by chunking the flat cell vector by `width`; the
/// renderer materializes the line breaks. Frames are built fresh per
/// conversion and hold no state across calls.
#[derive(Debug, Clone)]
pub struct AsciiFrame {
    cells: Vec<StyledGlyph>,
    width: u32,
    height: u32,
}

impl AsciiFrame {
    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn cells(&self) -> &[StyledGlyph] {
        &self.cells
    }

    /// Iterate rows of exactly `width` cells each.
    pub fn rows(&self) -> impl Iterator<Item = &[StyledGlyph]> {
        self.cells.chunks(self.width as usize)
    }
}

/// Build a frame by classifying every pixel of `buffer` in row-major order.
///
/// The result has exactly `buffer.height()` rows of exactly
/// `buffer.width()` cells. Fails fast on the first malformed pixel; no
/// partial frames are produced.
pub fn build_frame(buffer: &PixelBuffer, ramp: &Ramp) -> Result<AsciiFrame, AsciiError> {
    let mut cells = Vec::with_capacity(buffer.len());
    for pixel in buffer.pixels() {
        cells.push(classify(pixel, ramp));
    }

    if cells.len() != buffer.len() {
        // Unreachable for a constructor-validated buffer; kept so a
        // hand-built buffer cannot yield a short frame.
        return Err(AsciiError::InvalidPixel { index: cells.len() });
    }

    Ok(AsciiFrame {
        cells,
        width: buffer.width(),
        height: buffer.height(),
    })
}
