// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! Capacity estimation.
//!
//! Capacity is exact, not an estimate: it is the number of cells with
//! positive energy, each of which carries one nibble. The frame header takes
//! [`HEADER_LEN`] bytes of that.

use crate::raster::PixelGrid;
use crate::stego::energy::compute_energy;
use crate::stego::frame::HEADER_LEN;

/// Number of nibbles the image can carry, header included.
pub fn capacity(grid: &PixelGrid) -> usize {
    compute_energy(grid).positive_cells()
}

/// Largest payload body (in bytes) that [`hide`](crate::stego::hide) accepts
/// for this image, or 0 if not even an empty frame fits.
pub fn max_payload_len(grid: &PixelGrid) -> usize {
    (capacity(grid) / 2).saturating_sub(HEADER_LEN)
}
