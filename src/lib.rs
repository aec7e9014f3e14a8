// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! # busysteg
//!
//! Hides arbitrary binary payloads in the pixel data of a lossless RGB image
//! and recovers them bit-exactly.
//!
//! Data goes into the low four bits of individual channel values, preferring
//! the image's busiest regions: each (row, col, channel) cell is scored by
//! the largest difference to its 8 neighbours, computed on the high nibbles
//! only, and cells are filled in descending score order. Flat regions are
//! never touched. Because embedding leaves high nibbles alone, the decoder
//! recomputes the same order from the stego image without any key or side
//! channel.
//!
//! There is no encryption: anyone running this crate can read the payload.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use busysteg::{hide, extract, raster};
//!
//! let mut grid = raster::load("cover.png").unwrap();
//! hide(&mut grid, b"secret bytes").unwrap();
//! raster::save(&grid, "stego.png").unwrap();
//!
//! let grid = raster::load("stego.png").unwrap();
//! assert_eq!(extract(&grid).unwrap(), b"secret bytes");
//! ```

pub mod raster;
pub mod stego;

pub use raster::{PixelGrid, RasterError};
pub use stego::{hide, extract, hide_file, extract_file, StegoError};
pub use stego::{capacity, max_payload_len};
