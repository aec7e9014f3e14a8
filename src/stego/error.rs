// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! Error types for the steganography pipeline.
//!
//! [`StegoError`] covers all failure modes from image loading through
//! nibble embedding and frame extraction.

use core::fmt;

use crate::raster::RasterError;

/// Errors that can occur during steganographic hiding or extraction.
#[derive(Debug)]
pub enum StegoError {
    /// The ranked cells ran out before every nibble was written or read.
    /// Both counts are in nibbles.
    Capacity { needed: usize, available: usize },
    /// The decoded header does not start with the magic tag.
    NotEncoded,
    /// The header declares a body length this host cannot address.
    BodyTooLarge(u64),
    /// A frame buffer is shorter than its header declares.
    FrameTruncated { expected: usize, actual: usize },
    /// The cover image could not be loaded or the result could not be saved.
    Image(RasterError),
}

impl fmt::Display for StegoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Capacity { needed, available } => write!(
                f,
                "not enough busy pixels: need {needed} nibbles, image has {available}"
            ),
            Self::NotEncoded => write!(f, "not an encoded image"),
            Self::BodyTooLarge(len) => write!(f, "declared payload length {len} is too large"),
            Self::FrameTruncated { expected, actual } => {
                write!(f, "payload frame truncated: expected {expected} bytes, got {actual}")
            }
            Self::Image(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for StegoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Image(e) => Some(e),
            _ => None,
        }
    }
}

impl From<RasterError> for StegoError {
    fn from(e: RasterError) -> Self {
        Self::Image(e)
    }
}
