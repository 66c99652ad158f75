//! Command-line interface definitions and helpers.
//!
//! Validation lives here, in typed `value_parser` functions: a bad column
//! count or ramp is rejected at parse time with a message the user can act
//! on. The conversion pipeline itself never re-prompts or retries.

use clap::Parser;
use std::path::PathBuf;

use crate::ascii::Ramp;

/// Parse and validate the output column count (positive whole number).
fn parse_columns(s: &str) -> Result<u32, String> {
    let columns: u32 = s
        .parse()
        .map_err(|_| format!("'{}' is not a whole number. Example: 30", s))?;
    if columns == 0 {
        return Err("Columns must be greater than 0. Example: 30".to_string());
    }
    Ok(columns)
}

/// Parse and validate a glyph ramp (at least 2 distinct glyphs).
fn parse_ramp(s: &str) -> Result<String, String> {
    Ramp::parse(s).map_err(|e| e.to_string())?;
    Ok(s.to_string())
}

/// Render an image as colored ASCII art in the terminal
#[derive(Parser, Debug)]
#[command(name = "imgscii")]
#[command(version, about = "Colored ASCII art from images", long_about = None)]
pub struct Args {
    /// Image file to render
    pub image: PathBuf,

    /// Output width in columns (default: config file or 60)
    #[arg(short, long, value_parser = parse_columns)]
    pub columns: Option<u32>,

    /// Glyph ramp ordered from densest ink to sparsest
    #[arg(long, value_parser = parse_ramp)]
    pub ramp: Option<String>,

    /// Reverse the ramp (for dark terminal backgrounds)
    #[arg(long)]
    pub invert: bool,

    /// Disable ANSI color output
    #[arg(long)]
    pub no_color: bool,

    /// Config file path
    #[arg(long)]
    pub config: Option<PathBuf>,
}
