//! Image decoding boundary.
//!
//! Turns a file on disk into the pipeline's [`PixelBuffer`]. Decoding is
//! delegated to the `image` crate; everything past this point works on raw
//! RGB(A) bytes and never touches the filesystem.

use std::path::{Path, PathBuf};

use crate::ascii::{PixelBuffer, PixelFormat};

/// Errors from opening and decoding an image file.
///
/// Covers the missing-file, unreadable-format, and corrupt-data cases the
/// decoder can hit; the pipeline propagates these opaquely.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// The file could not be opened or decoded.
    #[error("could not open image '{}': {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    /// The file decoded to an image with a zero dimension.
    #[error("image '{}' has no pixels", path.display())]
    Empty { path: PathBuf },
}

/// Decode an image file into a pixel buffer.
///
/// Sources with an alpha channel keep it in the buffer (the classifier
/// skips it); everything else lands as packed RGB.
pub fn open_image(path: &Path) -> Result<PixelBuffer, DecodeError> {
    let img = image::open(path).map_err(|source| DecodeError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let width = img.width();
    let height = img.height();
    log::debug!("decoded '{}' at {}x{}", path.display(), width, height);

    let (data, format) = if img.color().has_alpha() {
        (img.to_rgba8().into_raw(), PixelFormat::Rgba)
    } else {
        (img.to_rgb8().into_raw(), PixelFormat::Rgb)
    };

    PixelBuffer::new(data, width, height, format).map_err(|_| DecodeError::Empty {
        path: path.to_path_buf(),
    })
}
