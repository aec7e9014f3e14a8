// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! Hide/extract pipeline.
//!
//! Hide:
//! 1. Energy map of the high-nibble snapshot
//! 2. Rank positive-energy cells (busiest first, nonce tie-break)
//! 3. Frame the payload (tag + LE length + body)
//! 4. Write the frame two nibbles per byte into the ranked cells
//!
//! Extract recomputes steps 1–2 on the stego image, which yields the same
//! order because embedding never touches high nibbles, then reads the
//! header, checks the tag, and reads the full frame.

use std::path::Path;

use tracing::{debug, trace};

use crate::raster::{self, PixelGrid};
use crate::stego::energy::compute_energy;
use crate::stego::error::StegoError;
use crate::stego::frame::{self, FrameHeader, HEADER_LEN};
use crate::stego::nibble::{decode_nibbles, embed_nibbles, nibbles_for};
use crate::stego::rank::{rank_cells, Cell};

/// Energy map + ranking, shared by both directions.
fn ranked_cells(grid: &PixelGrid) -> Vec<Cell> {
    let energy = compute_energy(grid);
    let cells = rank_cells(&energy);
    trace!(rows = grid.rows(), cols = grid.cols(), capacity = cells.len(), "ranked cells");
    cells
}

/// Hide `data` inside `grid`.
///
/// Only the low nibble of the chosen channel values changes. If the image is
/// too small the grid is returned untouched.
///
/// # Errors
/// [`StegoError::Capacity`] if the image has fewer than `32 + 2 * data.len()`
/// positive-energy cells.
pub fn hide(grid: &mut PixelGrid, data: &[u8]) -> Result<(), StegoError> {
    let cells = ranked_cells(grid);
    let framed = frame::wrap(data);
    debug!(
        body_len = data.len(),
        needed = nibbles_for(framed.len()),
        available = cells.len(),
        "embedding payload"
    );
    embed_nibbles(grid, &cells, &framed)
}

/// Recover the payload hidden in `grid`.
///
/// # Errors
/// - [`StegoError::Capacity`] if the image cannot hold the header, or the
///   declared body runs past the last ranked cell.
/// - [`StegoError::NotEncoded`] if the tag does not match.
/// - [`StegoError::BodyTooLarge`] if the declared length overflows.
pub fn extract(grid: &PixelGrid) -> Result<Vec<u8>, StegoError> {
    let cells = ranked_cells(grid);

    let header_bytes = decode_nibbles(grid, &cells, HEADER_LEN)?;
    let header = FrameHeader::parse(&header_bytes)?;
    debug!(body_len = header.body_len, available = cells.len(), "found payload header");

    // Re-read from the start; decoding is cheap next to the energy map.
    let framed = decode_nibbles(grid, &cells, header.frame_len()?)?;
    Ok(frame::unwrap_frame(&framed)?.to_vec())
}

/// Load `image_in`, hide `data`, and save the result to `image_out`.
///
/// The output format is validated before any work is done; it must be a
/// lossless format (see [`raster::output_format`]).
pub fn hide_file(
    image_in: impl AsRef<Path>,
    data: &[u8],
    image_out: impl AsRef<Path>,
) -> Result<(), StegoError> {
    raster::output_format(image_out.as_ref())?;
    let mut grid = raster::load(image_in)?;
    hide(&mut grid, data)?;
    raster::save(&grid, image_out)?;
    Ok(())
}

/// Load `image_in` and recover the payload hidden in it.
pub fn extract_file(image_in: impl AsRef<Path>) -> Result<Vec<u8>, StegoError> {
    let grid = raster::load(image_in)?;
    extract(&grid)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Diagonal ramp: every cell has positive energy on all channels.
    fn busy_grid(rows: usize, cols: usize) -> PixelGrid {
        PixelGrid::from_fn(rows, cols, |r, c| {
            let v = (((r + c) % 16) * 0x10) as u8;
            [v, 0xF0 - v, v ^ 0x50]
        })
    }

    #[test]
    fn roundtrip_small() {
        let mut grid = busy_grid(16, 16);
        hide(&mut grid, b"hidden text").unwrap();
        assert_eq!(extract(&grid).unwrap(), b"hidden text");
    }

    #[test]
    fn roundtrip_empty() {
        let mut grid = busy_grid(8, 8);
        hide(&mut grid, &[]).unwrap();
        assert!(extract(&grid).unwrap().is_empty());
    }

    #[test]
    fn unencoded_image_rejected() {
        let grid = busy_grid(16, 16);
        assert!(matches!(extract(&grid), Err(StegoError::NotEncoded)));
    }

    #[test]
    fn rehide_overwrites() {
        let mut grid = busy_grid(16, 16);
        hide(&mut grid, b"first payload, rather long").unwrap();
        hide(&mut grid, b"second").unwrap();
        assert_eq!(extract(&grid).unwrap(), b"second");
    }

    #[test]
    fn declared_length_past_capacity() {
        let mut grid = busy_grid(8, 8);
        let cells = ranked_cells(&grid);
        // Forge a header claiming far more body than the image holds.
        let header = FrameHeader { body_len: 10_000 }.to_bytes();
        embed_nibbles(&mut grid, &cells, &header).unwrap();
        match extract(&grid) {
            Err(StegoError::Capacity { needed, available }) => {
                assert_eq!(needed, 2 * (10_000 + HEADER_LEN));
                assert_eq!(available, cells.len());
            }
            other => panic!("expected Capacity, got {other:?}"),
        }
    }

    #[test]
    fn tiny_image_cannot_hold_header() {
        let mut grid = busy_grid(2, 2);
        assert!(matches!(
            hide(&mut grid, &[]),
            Err(StegoError::Capacity { needed: 32, available: 12 })
        ));
        assert!(matches!(extract(&grid), Err(StegoError::Capacity { .. })));
    }
}
