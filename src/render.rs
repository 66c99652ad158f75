//! Terminal rendering for ASCII frames.
//!
//! Serializes a finished [`AsciiFrame`] into ANSI escape sequences and
//! writes it to the output in one shot. Color codes are a stateful side
//! channel of the terminal, so the renderer always resets attributes after
//! the frame.

use std::io::Write;

use crate::ascii::AsciiFrame;

/// ANSI reset-all-attributes sequence.
const RESET: &str = "\x1b[0m";

/// Whether to emit color escape sequences or bare glyphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// 8-color ANSI foreground escapes per glyph
    #[default]
    Ansi,
    /// Plain glyphs, no escape sequences
    Mono,
}

/// Render a frame to a string.
///
/// Each cell becomes `ESC[<code>m<glyph>` (or the bare glyph in mono
/// mode), rows are separated by newlines, and colored output ends with a
/// reset so no color state leaks past the frame. The string carries no
/// trailing newline; [`write_frame`] appends the final line terminator.
pub fn render_frame(frame: &AsciiFrame, mode: ColorMode) -> String {
    // Escape prefix is 5 bytes per cell plus the trailing reset.
    let mut out = match mode {
        ColorMode::Ansi => String::with_capacity(frame.cells().len() * 6 + RESET.len()),
        ColorMode::Mono => String::with_capacity(frame.cells().len() + frame.height() as usize),
    };

    for (i, row) in frame.rows().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        for cell in row {
            if mode == ColorMode::Ansi {
                out.push_str(&format!("\x1b[{}m", cell.color.ansi_code()));
            }
            out.push(cell.glyph);
        }
    }

    if mode == ColorMode::Ansi {
        out.push_str(RESET);
    }

    out
}

/// Write a rendered frame to `out`, terminated by a newline, in a single
/// `write_all` followed by a flush.
pub fn write_frame(
    out: &mut impl Write,
    frame: &AsciiFrame,
    mode: ColorMode,
) -> std::io::Result<()> {
    let mut rendered = render_frame(frame, mode);
    rendered.push('\n');
    out.write_all(rendered.as_bytes())?;
    out.flush()
}
