//! ASCII conversion pipeline for still images.
//!
//! This module converts a decoded pixel buffer into a colored ASCII frame
//! for terminal display:
//!
//! 1. **Resize** - Scale to a target column count, preserving aspect ratio
//! 2. **Luminance** - BT.601 brightness per pixel, bucketed onto a glyph
//!    ramp
//! 3. **Color** - RGB to HLS, then onto the 8 ANSI foreground colors
//! 4. **Frame assembly** - One styled glyph per pixel, row-major
//!
//! Every stage is a pure function over its input buffer; the whole pass is
//! O(width * height) with no shared state, and it fails fast on the first
//! invalid input rather than emitting a partial frame.

pub mod buffer;
pub mod color;
pub mod frame;
pub mod luma;
pub mod ramp;
pub mod resize;

pub use buffer::{Pixel, PixelBuffer, PixelFormat};
pub use color::{categorize, classify_color, rgb_to_hls, ColorCategory};
pub use frame::{build_frame, classify, AsciiFrame, StyledGlyph};
pub use luma::{glyph_for, luminance, ramp_index};
pub use ramp::{Ramp, DEFAULT_RAMP};
pub use resize::{resize, scaled_rows};

/// Errors produced by the conversion pipeline.
#[derive(Debug, thiserror::Error)]
pub enum AsciiError {
    /// A target or source dimension is zero or degenerate.
    #[error("invalid {what}: {value} (must be a positive integer)")]
    InvalidDimension { what: &'static str, value: i64 },

    /// A pixel index is not covered by the buffer's data. With `u8`
    /// channels an out-of-range channel value is unrepresentable, so this
    /// is the remaining caller contract violation.
    #[error("pixel {index} is not covered by the buffer data")]
    InvalidPixel { index: usize },

    /// A glyph ramp that cannot represent a luminance scale.
    #[error("invalid glyph ramp: {reason}")]
    InvalidRamp { reason: &'static str },
}
