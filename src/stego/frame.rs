// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! Payload frame construction and parsing.
//!
//! The frame is the binary container written into the ranked cells:
//!
//! ```text
//! [8 bytes] magic tag (ASCII "BUSYSTEG")
//! [8 bytes] body length (little-endian u64)
//! [N bytes] body
//! ```
//!
//! Total frame size = 16 + body_len bytes = 32 + 2 * body_len nibbles.

use crate::stego::error::StegoError;

/// Magic tag identifying an image encoded by this crate.
pub const TAG: [u8; 8] = *b"BUSYSTEG";

/// Header size: tag(8) + length(8).
pub const HEADER_LEN: usize = 16;

/// Parsed frame header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameHeader {
    /// Declared body length in bytes.
    pub body_len: u64,
}

impl FrameHeader {
    /// Header for a body of `len` bytes.
    pub fn for_body(len: usize) -> Self {
        Self { body_len: len as u64 }
    }

    /// Serialize to the 16-byte wire form.
    pub fn to_bytes(&self) -> [u8; HEADER_LEN] {
        let mut out = [0u8; HEADER_LEN];
        out[..8].copy_from_slice(&TAG);
        out[8..].copy_from_slice(&self.body_len.to_le_bytes());
        out
    }

    /// Parse the leading 16 bytes of `data`.
    ///
    /// # Errors
    /// - [`StegoError::FrameTruncated`] if `data` is shorter than a header.
    /// - [`StegoError::NotEncoded`] if the tag does not match.
    pub fn parse(data: &[u8]) -> Result<Self, StegoError> {
        let header: &[u8; HEADER_LEN] = data
            .get(..HEADER_LEN)
            .and_then(|h| h.try_into().ok())
            .ok_or(StegoError::FrameTruncated { expected: HEADER_LEN, actual: data.len() })?;

        let (tag, len) = header.split_at(8);
        if tag != TAG {
            return Err(StegoError::NotEncoded);
        }
        let mut len_bytes = [0u8; 8];
        len_bytes.copy_from_slice(len);
        Ok(Self { body_len: u64::from_le_bytes(len_bytes) })
    }

    /// Body length as a host size.
    pub fn body_len(&self) -> Result<usize, StegoError> {
        usize::try_from(self.body_len).map_err(|_| StegoError::BodyTooLarge(self.body_len))
    }

    /// Full frame length (header + body) in bytes.
    pub fn frame_len(&self) -> Result<usize, StegoError> {
        self.body_len()?
            .checked_add(HEADER_LEN)
            .ok_or(StegoError::BodyTooLarge(self.body_len))
    }
}

/// Build a frame around `body`.
pub fn wrap(body: &[u8]) -> Vec<u8> {
    let mut frame = Vec::with_capacity(HEADER_LEN + body.len());
    frame.extend_from_slice(&FrameHeader::for_body(body.len()).to_bytes());
    frame.extend_from_slice(body);
    frame
}

/// Validate a header and return the body length it declares.
pub fn unwrap_header(header: &[u8]) -> Result<usize, StegoError> {
    FrameHeader::parse(header)?.body_len()
}

/// Validate a complete frame and return its body.
///
/// `frame` may be longer than the declared frame; trailing bytes are ignored.
pub fn unwrap_frame(frame: &[u8]) -> Result<&[u8], StegoError> {
    let header = FrameHeader::parse(frame)?;
    let frame_len = header.frame_len()?;
    frame
        .get(HEADER_LEN..frame_len)
        .ok_or(StegoError::FrameTruncated { expected: frame_len, actual: frame.len() })
}
