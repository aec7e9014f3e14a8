// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! Error types for loading and persisting cover images.

use std::fmt;

use image::{ImageError, ImageFormat};

/// Errors that can occur while decoding or encoding a raster image.
#[derive(Debug)]
pub enum RasterError {
    /// The input file could not be read or decoded as an image.
    Decode(ImageError),
    /// The pixel grid could not be encoded to the output file.
    Encode(ImageError),
    /// Buffer length does not match `rows * cols * 3`, or the grid is too
    /// large for the image codec's 32-bit dimensions.
    InvalidDimensions,
    /// The output format would not preserve every pixel bit exactly.
    UnsupportedOutput(ImageFormat),
    /// The output path has no extension the image codec recognises.
    UnknownFormat,
}

impl fmt::Display for RasterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Decode(e) => write!(f, "could not decode image: {e}"),
            Self::Encode(e) => write!(f, "could not encode image: {e}"),
            Self::InvalidDimensions => write!(f, "invalid pixel grid dimensions"),
            Self::UnsupportedOutput(format) => {
                write!(f, "{format:?} is not a lossless 8-bit RGB output format")
            }
            Self::UnknownFormat => write!(f, "cannot infer image format from output path"),
        }
    }
}

impl std::error::Error for RasterError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Decode(e) | Self::Encode(e) => Some(e),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, RasterError>;
