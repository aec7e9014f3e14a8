// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! Energy-ranked nibble steganography.
//!
//! - **energy**: per-channel local contrast of the high-nibble snapshot.
//! - **rank**: strict total order over positive-energy cells.
//! - **nibble**: low-nibble writer/reader over ranked cells.
//! - **frame**: `BUSYSTEG` tag + LE u64 length + body.
//!
//! [`hide`] and [`extract`] compose these; both recompute the energy map and
//! ranking from scratch on every call.

pub mod error;
pub mod energy;
pub mod rank;
pub mod nibble;
pub mod frame;
pub mod capacity;
mod pipeline;

pub use error::StegoError;
pub use pipeline::{hide, extract, hide_file, extract_file};
pub use capacity::{capacity, max_payload_len};
