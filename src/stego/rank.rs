// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! Cell selection and ranking.
//!
//! Selects every (row, col, channel) cell with positive energy and sorts
//! them into the order in which nibbles are written and read. Busiest cells
//! come first. Cells of equal energy are spread by a positional nonce, so a
//! short payload is not packed into one corner of a uniformly busy region.
//!
//! The order is a strict total order: two distinct cells never compare
//! equal, so the result does not depend on sort stability and encoder and
//! decoder always agree.

use core::cmp::Ordering;

use crate::raster::CHANNELS;
use crate::stego::energy::EnergyMap;

/// Channel weight in the nonce. Large enough that channels never interleave
/// for images of practical size.
pub const NONCE_CHANNEL_WEIGHT: u64 = 10_666_589;

/// Constant offset added to every nonce.
pub const NONCE_OFFSET: u64 = 2239;

/// One embeddable cell with its ranking key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
    pub channel: usize,
    /// Local contrast of this cell (always > 0 for ranked cells).
    pub energy: u8,
    /// Positional tie-breaker, see [`cell_nonce`].
    pub nonce: u64,
}

impl Cell {
    pub fn new(row: usize, col: usize, channel: usize, energy: u8) -> Self {
        Self {
            row,
            col,
            channel,
            energy,
            nonce: cell_nonce(row, col, channel),
        }
    }
}

/// Cells order by embedding priority: `a < b` means `a` is used first.
///
/// Energy descending, then nonce descending, then (row, col, channel)
/// ascending. The last step only matters when two cells share a nonce,
/// e.g. (1, 2) and (2, 1) on the same channel.
impl Ord for Cell {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .energy
            .cmp(&self.energy)
            .then_with(|| other.nonce.cmp(&self.nonce))
            .then_with(|| {
                (self.row, self.col, self.channel).cmp(&(other.row, other.col, other.channel))
            })
    }
}

impl PartialOrd for Cell {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// `channel² × 10666589 + row² + col² + 2239`, in wrapping u64 arithmetic.
///
/// Content-independent, so it survives embedding unchanged. Not a secret.
pub fn cell_nonce(row: usize, col: usize, channel: usize) -> u64 {
    let (r, c, ch) = (row as u64, col as u64, channel as u64);
    ch.wrapping_mul(ch)
        .wrapping_mul(NONCE_CHANNEL_WEIGHT)
        .wrapping_add(r.wrapping_mul(r))
        .wrapping_add(c.wrapping_mul(c))
        .wrapping_add(NONCE_OFFSET)
}

/// Collect positive-energy cells in raster order.
fn collect_cells(map: &EnergyMap) -> Vec<Cell> {
    let mut cells = Vec::with_capacity(map.positive_cells());
    for row in 0..map.rows() {
        for col in 0..map.cols() {
            for channel in 0..CHANNELS {
                let energy = map.get(row, col, channel);
                if energy == 0 {
                    continue; // flat: never embed here
                }
                cells.push(Cell::new(row, col, channel, energy));
            }
        }
    }
    cells
}

/// Rank all positive-energy cells of `map` into embedding order.
///
/// The length of the result is the image capacity in nibbles.
pub fn rank_cells(map: &EnergyMap) -> Vec<Cell> {
    let mut cells = collect_cells(map);
    // Strict total order, so an unstable sort is still deterministic.
    cells.sort_unstable();
    cells
}
