//! RGB to ANSI color classification.
//!
//! Pixels are mapped onto the 8 standard terminal foreground colors by
//! lightness first (very light pixels are White, very dark ones Black) and
//! by hue inside the mid-lightness band. The hue circle is split into six
//! 60-degree sectors with Red wrapping around zero.

use std::fmt;

use super::buffer::Pixel;

/// One of the 8 standard terminal foreground colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorCategory {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
}

impl ColorCategory {
    /// ANSI foreground code (SGR parameter) for this color.
    pub fn ansi_code(&self) -> u8 {
        match self {
            ColorCategory::Black => 30,
            ColorCategory::Red => 31,
            ColorCategory::Green => 32,
            ColorCategory::Yellow => 33,
            ColorCategory::Blue => 34,
            ColorCategory::Magenta => 35,
            ColorCategory::Cyan => 36,
            ColorCategory::White => 37,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ColorCategory::Black => "black",
            ColorCategory::Red => "red",
            ColorCategory::Green => "green",
            ColorCategory::Yellow => "yellow",
            ColorCategory::Blue => "blue",
            ColorCategory::Magenta => "magenta",
            ColorCategory::Cyan => "cyan",
            ColorCategory::White => "white",
        }
    }
}

impl fmt::Display for ColorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Convert normalized RGB ([0,1] each) to (hue in degrees [0,360),
/// lightness [0,1], saturation [0,1]).
///
/// Follows the classic HLS transform: lightness is the mid-range of the
/// channels, hue comes from the dominant channel, and achromatic input
/// (max == min) reports hue 0 and saturation 0.
pub fn rgb_to_hls(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    let maxc = r.max(g).max(b);
    let minc = r.min(g).min(b);
    let lightness = (maxc + minc) / 2.0;

    if maxc == minc {
        return (0.0, lightness, 0.0);
    }

    let delta = maxc - minc;
    let saturation = if lightness <= 0.5 {
        delta / (maxc + minc)
    } else {
        delta / (2.0 - maxc - minc)
    };

    let rc = (maxc - r) / delta;
    let gc = (maxc - g) / delta;
    let bc = (maxc - b) / delta;

    let hue = if r == maxc {
        bc - gc
    } else if g == maxc {
        2.0 + rc - bc
    } else {
        4.0 + gc - rc
    };
    let hue = (hue / 6.0).rem_euclid(1.0);

    (hue * 360.0, lightness, saturation)
}

/// Classify a (hue degrees, lightness) pair into a color category.
///
/// Lightness dominates: >= 0.70 is White and <= 0.20 is Black regardless of
/// hue. In between, the hue sectors are half-open on the lower bound and
/// closed on the upper, with Red covering the wrap (h <= 30 or h > 330).
/// The partition is total: every input maps to exactly one category.
pub fn categorize(hue: f64, lightness: f64) -> ColorCategory {
    if lightness >= 0.70 {
        ColorCategory::White
    } else if lightness <= 0.20 {
        ColorCategory::Black
    } else if hue > 30.0 && hue <= 90.0 {
        ColorCategory::Yellow
    } else if hue > 90.0 && hue <= 150.0 {
        ColorCategory::Green
    } else if hue > 150.0 && hue <= 210.0 {
        ColorCategory::Cyan
    } else if hue > 210.0 && hue <= 270.0 {
        ColorCategory::Blue
    } else if hue > 270.0 && hue <= 330.0 {
        ColorCategory::Magenta
    } else {
        // hue <= 30 or hue > 330, including achromatic pixels (hue 0)
        ColorCategory::Red
    }
}

/// Classify a pixel's color. Never fails for a well-formed pixel;
/// saturation is computed by the transform but plays no part here.
pub fn classify_color(pixel: Pixel) -> ColorCategory {
    let (hue, lightness, _saturation) = rgb_to_hls(
        pixel.r as f64 / 255.0,
        pixel.g as f64 / 255.0,
        pixel.b as f64 / 255.0,
    );
    categorize(hue, lightness)
}
