// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! Nibble embedding and extraction.
//!
//! Each ranked cell carries one nibble in the low four bits of its channel
//! value. A byte occupies two consecutive cells, high nibble first. The high
//! four bits of every channel are never touched, which keeps the energy map
//! (and so the cell order) stable across embedding.

use crate::raster::PixelGrid;
use crate::stego::error::StegoError;
use crate::stego::rank::Cell;

/// Bits of a channel value that carry no payload.
pub const HIGH_NIBBLE: u8 = 0xF0;

/// Bits of a channel value that carry one payload nibble.
pub const LOW_NIBBLE: u8 = 0x0F;

/// Number of cells needed to carry `bytes` bytes (saturating).
pub fn nibbles_for(bytes: usize) -> usize {
    bytes.saturating_mul(2)
}

/// Split bytes into nibbles, high half first.
fn nibbles(bytes: &[u8]) -> impl Iterator<Item = u8> + '_ {
    bytes.iter().flat_map(|&b| [b >> 4, b & LOW_NIBBLE])
}

/// Write `bytes` into the low nibbles of the leading cells of `cells`.
///
/// Capacity is checked before the first write: on
/// [`StegoError::Capacity`] the grid is left exactly as it was.
pub fn embed_nibbles(grid: &mut PixelGrid, cells: &[Cell], bytes: &[u8]) -> Result<(), StegoError> {
    let needed = nibbles_for(bytes.len());
    if needed > cells.len() {
        return Err(StegoError::Capacity { needed, available: cells.len() });
    }

    for (cell, nibble) in cells.iter().zip(nibbles(bytes)) {
        let old = grid.get(cell.row, cell.col, cell.channel);
        grid.set(cell.row, cell.col, cell.channel, (old & HIGH_NIBBLE) | nibble);
    }
    Ok(())
}

/// Read `count` bytes from the low nibbles of the leading cells of `cells`.
///
/// Fails with [`StegoError::Capacity`] if fewer than `2 * count` cells
/// exist, before allocating the output.
pub fn decode_nibbles(grid: &PixelGrid, cells: &[Cell], count: usize) -> Result<Vec<u8>, StegoError> {
    let needed = nibbles_for(count);
    if needed > cells.len() {
        return Err(StegoError::Capacity { needed, available: cells.len() });
    }

    let low = |cell: &Cell| grid.get(cell.row, cell.col, cell.channel) & LOW_NIBBLE;
    Ok(cells[..needed]
        .chunks_exact(2)
        .map(|pair| (low(&pair[0]) << 4) | low(&pair[1]))
        .collect())
}
