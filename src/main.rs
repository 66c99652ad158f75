use std::error::Error;
use std::io;
use std::path::Path;

use clap::Parser;

use imgscii::ascii::{self, Ramp};
use imgscii::cli::Args;
use imgscii::config::{Config, DEFAULT_COLUMNS};
use imgscii::decode;
use imgscii::render::{self, ColorMode};

fn main() {
    let args = Args::parse();

    // Load config file
    // If --config is specified, require the file to exist and parse
    // Otherwise, fall back to defaults if the default config is unusable
    let cfg = if let Some(ref path) = args.config {
        match Config::load(Some(path)) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
    } else {
        match Config::load(None) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Warning: Failed to load config file: {}", e);
                eprintln!("Using default settings.\n");
                Config::default()
            }
        }
    };

    // Merge settings: CLI args > config file > built-in defaults
    let columns = args.columns.or(cfg.output.columns).unwrap_or(DEFAULT_COLUMNS);

    let ramp = match args.ramp.or(cfg.ascii.ramp) {
        Some(glyphs) => match Ramp::parse(&glyphs) {
            Ok(r) => r,
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        },
        None => Ramp::default(),
    };
    let ramp = if args.invert || cfg.ascii.invert {
        ramp.inverted()
    } else {
        ramp
    };

    let mode = if args.no_color || !cfg.output.color {
        ColorMode::Mono
    } else {
        ColorMode::Ansi
    };

    if let Err(e) = run(&args.image, columns, &ramp, mode) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Decode, resize, classify, render. Fails fast; no partial output.
fn run(image: &Path, columns: u32, ramp: &Ramp, mode: ColorMode) -> Result<(), Box<dyn Error>> {
    let buffer = decode::open_image(image)?;
    let resized = ascii::resize(&buffer, columns)?;
    log::debug!(
        "resized {}x{} -> {}x{}",
        buffer.width(),
        buffer.height(),
        resized.width(),
        resized.height()
    );
    let frame = ascii::build_frame(&resized, ramp)?;

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    render::write_frame(&mut handle, &frame, mode)?;

    Ok(())
}
