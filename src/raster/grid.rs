// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! In-memory pixel storage.
//!
//! Provides [`PixelGrid`], a `rows × cols` array of 8-bit RGB pixels in
//! row-major order. This is the only image representation the steganography
//! layer sees; file formats live in the parent module.

use image::RgbImage;

use super::error::{RasterError, Result};

/// Number of channels per pixel (R, G, B).
pub const CHANNELS: usize = 3;

/// One 8-bit RGB pixel.
pub type Pixel = [u8; CHANNELS];

/// Grid of 3-channel 8-bit pixels.
///
/// Pixels are stored row-major: index = row * cols + col. Channel 0 is red,
/// 1 is green and 2 is blue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    rows: usize,
    cols: usize,
    pixels: Vec<Pixel>,
}

impl PixelGrid {
    /// Create a new grid with every channel set to zero.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self::filled(rows, cols, [0; CHANNELS])
    }

    /// Create a grid with every pixel set to `pixel`.
    pub fn filled(rows: usize, cols: usize, pixel: Pixel) -> Self {
        Self {
            rows,
            cols,
            pixels: vec![pixel; rows * cols],
        }
    }

    /// Create a grid by evaluating `f(row, col)` for every position.
    pub fn from_fn(rows: usize, cols: usize, mut f: impl FnMut(usize, usize) -> Pixel) -> Self {
        let mut pixels = Vec::with_capacity(rows * cols);
        for row in 0..rows {
            for col in 0..cols {
                pixels.push(f(row, col));
            }
        }
        Self { rows, cols, pixels }
    }

    /// Wrap an interleaved RGB byte buffer of length `rows * cols * 3`.
    pub fn from_raw(rows: usize, cols: usize, data: &[u8]) -> Result<Self> {
        let expected = rows
            .checked_mul(cols)
            .and_then(|n| n.checked_mul(CHANNELS))
            .ok_or(RasterError::InvalidDimensions)?;
        if data.len() != expected {
            return Err(RasterError::InvalidDimensions);
        }
        let pixels = data
            .chunks_exact(CHANNELS)
            .map(|px| [px[0], px[1], px[2]])
            .collect();
        Ok(Self { rows, cols, pixels })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// True when the grid has no pixels at all.
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Get one channel value.
    ///
    /// # Panics
    /// If `row`, `col` or `channel` is out of range.
    pub fn get(&self, row: usize, col: usize, channel: usize) -> u8 {
        debug_assert!(channel < CHANNELS, "channel {channel} >= {CHANNELS}");
        self.pixels[self.index(row, col)][channel]
    }

    /// Set one channel value.
    ///
    /// # Panics
    /// If `row`, `col` or `channel` is out of range.
    pub fn set(&mut self, row: usize, col: usize, channel: usize, val: u8) {
        debug_assert!(channel < CHANNELS, "channel {channel} >= {CHANNELS}");
        let idx = self.index(row, col);
        self.pixels[idx][channel] = val;
    }

    pub fn pixel(&self, row: usize, col: usize) -> Pixel {
        self.pixels[self.index(row, col)]
    }

    pub fn set_pixel(&mut self, row: usize, col: usize, pixel: Pixel) {
        let idx = self.index(row, col);
        self.pixels[idx] = pixel;
    }

    /// Raw read-only access to all pixels in row-major order.
    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }

    /// Interleaved RGB bytes, row-major.
    pub fn to_raw(&self) -> Vec<u8> {
        self.pixels.iter().flatten().copied().collect()
    }

    /// Copy an [`RgbImage`] into a grid (`rows = height`, `cols = width`).
    pub fn from_rgb_image(img: &RgbImage) -> Self {
        let rows = img.height() as usize;
        let cols = img.width() as usize;
        let pixels = img.pixels().map(|p| p.0).collect();
        Self { rows, cols, pixels }
    }

    /// Copy the grid into an [`RgbImage`].
    ///
    /// Fails with [`RasterError::InvalidDimensions`] if either side exceeds
    /// `u32::MAX`.
    pub fn to_rgb_image(&self) -> Result<RgbImage> {
        let width = u32::try_from(self.cols).map_err(|_| RasterError::InvalidDimensions)?;
        let height = u32::try_from(self.rows).map_err(|_| RasterError::InvalidDimensions)?;
        RgbImage::from_raw(width, height, self.to_raw()).ok_or(RasterError::InvalidDimensions)
    }

    fn index(&self, row: usize, col: usize) -> usize {
        // Row overflow is caught by the Vec bounds check; column overflow
        // would silently wrap into the next row.
        assert!(col < self.cols, "col {col} >= {}", self.cols);
        debug_assert!(row < self.rows, "row {row} >= {}", self.rows);
        row * self.cols + col
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_get_set() {
        let mut grid = PixelGrid::new(3, 2);
        assert_eq!(grid.rows(), 3);
        assert_eq!(grid.cols(), 2);
        assert_eq!(grid.get(2, 1, 2), 0);

        grid.set(2, 1, 2, 0xAB);
        assert_eq!(grid.get(2, 1, 2), 0xAB);
        assert_eq!(grid.pixel(2, 1), [0, 0, 0xAB]);
        // Neighbouring channels untouched
        assert_eq!(grid.get(2, 1, 1), 0);
        assert_eq!(grid.get(2, 0, 2), 0);
    }

    #[test]
    fn from_fn_is_row_major() {
        let grid = PixelGrid::from_fn(2, 3, |r, c| [r as u8, c as u8, 7]);
        assert_eq!(grid.pixels()[4], [1, 1, 7]);
        assert_eq!(grid.pixel(1, 2), [1, 2, 7]);
    }

    #[test]
    fn from_raw_checks_length() {
        assert!(matches!(
            PixelGrid::from_raw(2, 2, &[0u8; 11]),
            Err(RasterError::InvalidDimensions)
        ));
        let data: Vec<u8> = (0..12).collect();
        let grid = PixelGrid::from_raw(2, 2, &data).unwrap();
        assert_eq!(grid.pixel(0, 1), [3, 4, 5]);
        assert_eq!(grid.to_raw(), data);
    }

    #[test]
    fn rgb_image_conversion_preserves_layout() {
        let grid = PixelGrid::from_fn(4, 5, |r, c| [r as u8, c as u8, (r * 5 + c) as u8]);
        let img = grid.to_rgb_image().unwrap();
        assert_eq!(img.width(), 5);
        assert_eq!(img.height(), 4);
        assert_eq!(img.get_pixel(3, 2).0, [2, 3, 13]);
        assert_eq!(PixelGrid::from_rgb_image(&img), grid);
    }

    #[test]
    #[should_panic(expected = "col 3 >= 3")]
    fn column_past_end_panics() {
        let grid = PixelGrid::new(2, 3);
        // (0, 3) would alias (1, 0) without the column check.
        let _ = grid.get(0, 3, 0);
    }

    #[test]
    #[should_panic]
    fn row_past_end_panics() {
        let mut grid = PixelGrid::new(2, 3);
        grid.set(2, 0, 0, 1);
    }

    #[test]
    fn empty_grid() {
        let grid = PixelGrid::new(0, 10);
        assert!(grid.is_empty());
        assert!(grid.to_raw().is_empty());
    }
}
