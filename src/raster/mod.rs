// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! Cover image I/O.
//!
//! Decodes any raster format the `image` crate understands into a
//! [`PixelGrid`] and writes grids back out. Writing is restricted to
//! lossless encoders: the steganography layer stores data in the low four
//! bits of each channel, which any lossy recompression would destroy.

pub mod error;
pub mod grid;

use std::path::Path;

use image::{ImageError, ImageFormat, ImageReader};
use tracing::debug;

pub use error::{RasterError, Result};
pub use grid::{Pixel, PixelGrid, CHANNELS};

/// Load an image file and convert it to 8-bit RGB.
///
/// The format is detected from the file contents, falling back to the
/// extension only when the signature is not recognised. Alpha is dropped and
/// higher bit depths are truncated to 8 bits.
pub fn load(path: impl AsRef<Path>) -> Result<PixelGrid> {
    let path = path.as_ref();
    let img = ImageReader::open(path)
        .and_then(|reader| reader.with_guessed_format())
        .map_err(|e| RasterError::Decode(ImageError::IoError(e)))?
        .decode()
        .map_err(RasterError::Decode)?
        .to_rgb8();
    debug!(path = %path.display(), width = img.width(), height = img.height(), "loaded cover image");
    Ok(PixelGrid::from_rgb_image(&img))
}

/// Persist a grid to `path` in the lossless format implied by its extension.
///
/// The format is checked before the file is created, so an unsupported
/// extension never leaves a partial file behind.
pub fn save(grid: &PixelGrid, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let format = output_format(path)?;
    let img = grid.to_rgb_image()?;
    img.save_with_format(path, format).map_err(RasterError::Encode)?;
    debug!(path = %path.display(), ?format, "saved stego image");
    Ok(())
}

/// Resolve the output format for `path`, rejecting anything lossy.
pub fn output_format(path: impl AsRef<Path>) -> Result<ImageFormat> {
    let format = ImageFormat::from_path(path).map_err(|_| RasterError::UnknownFormat)?;
    if is_lossless_rgb8(format) {
        Ok(format)
    } else {
        Err(RasterError::UnsupportedOutput(format))
    }
}

/// Formats whose encoder stores 8-bit RGB bit-exactly.
fn is_lossless_rgb8(format: ImageFormat) -> bool {
    matches!(
        format,
        ImageFormat::Png
            | ImageFormat::Bmp
            | ImageFormat::Tiff
            | ImageFormat::Tga
            | ImageFormat::Pnm
            | ImageFormat::Qoi
            | ImageFormat::WebP
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lossless_extensions_accepted() {
        for name in ["a.png", "a.bmp", "a.tiff", "a.tga", "a.ppm", "a.qoi", "A.PNG"] {
            assert!(output_format(name).is_ok(), "{name} should be accepted");
        }
    }

    #[test]
    fn lossy_extensions_rejected() {
        match output_format("photo.jpg") {
            Err(RasterError::UnsupportedOutput(ImageFormat::Jpeg)) => {}
            other => panic!("expected UnsupportedOutput(Jpeg), got {other:?}"),
        }
        assert!(matches!(output_format("anim.gif"), Err(RasterError::UnsupportedOutput(_))));
    }

    #[test]
    fn unknown_extension_rejected() {
        assert!(matches!(output_format("out.xyz"), Err(RasterError::UnknownFormat)));
        assert!(matches!(output_format("no_extension"), Err(RasterError::UnknownFormat)));
    }
}
