// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! Local-contrast ("energy") map.
//!
//! For each pixel and channel, the energy is the largest absolute difference
//! between that pixel and any of its 8 neighbours. Busy regions (edges,
//! texture) score high; flat regions score zero and are never used for
//! embedding.
//!
//! The map is computed from a snapshot with the low nibble of every channel
//! cleared. Embedding only rewrites low nibbles, so the map of a stego image
//! is bit-identical to the map of its cover. This is what lets the decoder
//! rebuild the exact embedding order from the stego image alone.
//!
//! Borders use edge replication: out-of-image neighbours take the value of
//! the nearest in-image pixel.

use crate::raster::{Pixel, PixelGrid, CHANNELS};
use crate::stego::nibble::HIGH_NIBBLE;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Number of neighbour directions in a 3×3 window.
const DIRECTIONS: usize = 8;

/// Row offsets of the 8 neighbours (paired with [`DX`]).
const DY: [isize; DIRECTIONS] = [-1, -1, -1, 0, 0, 1, 1, 1];

/// Column offsets of the 8 neighbours (paired with [`DY`]).
const DX: [isize; DIRECTIONS] = [-1, 0, 1, -1, 1, -1, 0, 1];

/// Per-pixel, per-channel local-contrast scores.
///
/// Same shape as the [`PixelGrid`] it was computed from. Every score is a
/// multiple of 16 in `0..=240`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnergyMap {
    rows: usize,
    cols: usize,
    scores: Vec<Pixel>,
}

impl EnergyMap {
    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Energy of one (row, col, channel) cell.
    pub fn get(&self, row: usize, col: usize, channel: usize) -> u8 {
        debug_assert!(row < self.rows && col < self.cols && channel < CHANNELS);
        self.scores[row * self.cols + col][channel]
    }

    /// Number of cells with strictly positive energy.
    pub fn positive_cells(&self) -> usize {
        self.scores
            .iter()
            .flatten()
            .filter(|&&e| e > 0)
            .count()
    }
}

/// Compute the energy map of `grid`.
///
/// Works on a private masked copy; `grid` itself is never modified.
pub fn compute_energy(grid: &PixelGrid) -> EnergyMap {
    let rows = grid.rows();
    let cols = grid.cols();
    if grid.is_empty() {
        return EnergyMap { rows, cols, scores: Vec::new() };
    }

    let padded = masked_padded(grid);

    #[cfg(feature = "parallel")]
    let scores = (0..DIRECTIONS)
        .into_par_iter()
        .map(|d| neighbour_diff(&padded, rows, cols, d))
        .reduce(|| vec![[0; CHANNELS]; rows * cols], max_merge);

    #[cfg(not(feature = "parallel"))]
    let scores = (0..DIRECTIONS)
        .map(|d| neighbour_diff(&padded, rows, cols, d))
        .fold(vec![[0; CHANNELS]; rows * cols], max_merge);

    EnergyMap { rows, cols, scores }
}

/// Copy `grid` with every channel masked to its high nibble, padded by one
/// replicated pixel on each side. Result is `(rows + 2) × (cols + 2)`.
fn masked_padded(grid: &PixelGrid) -> Vec<Pixel> {
    let rows = grid.rows();
    let cols = grid.cols();
    let mut padded = Vec::with_capacity((rows + 2) * (cols + 2));
    for pr in 0..rows + 2 {
        let r = pr.saturating_sub(1).min(rows - 1);
        for pc in 0..cols + 2 {
            let c = pc.saturating_sub(1).min(cols - 1);
            padded.push(grid.pixel(r, c).map(|v| v & HIGH_NIBBLE));
        }
    }
    padded
}

/// Absolute per-channel difference between each pixel and its neighbour in
/// direction `d`, over the cropped `rows × cols` region.
fn neighbour_diff(padded: &[Pixel], rows: usize, cols: usize, d: usize) -> Vec<Pixel> {
    let stride = cols + 2;
    let mut out = Vec::with_capacity(rows * cols);
    for r in 0..rows {
        // Interior pixel (r, c) sits at (r + 1, c + 1) in the padded buffer,
        // so its neighbour is always in bounds.
        let nr = (r as isize + 1 + DY[d]) as usize;
        for c in 0..cols {
            let nc = (c as isize + 1 + DX[d]) as usize;
            let center = padded[(r + 1) * stride + c + 1];
            let neighbour = padded[nr * stride + nc];
            out.push([
                center[0].abs_diff(neighbour[0]),
                center[1].abs_diff(neighbour[1]),
                center[2].abs_diff(neighbour[2]),
            ]);
        }
    }
    out
}

/// Fold `b` into `a` by per-channel maximum.
fn max_merge(mut a: Vec<Pixel>, b: Vec<Pixel>) -> Vec<Pixel> {
    for (x, y) in a.iter_mut().zip(&b) {
        for ch in 0..CHANNELS {
            x[ch] = x[ch].max(y[ch]);
        }
    }
    a
}
