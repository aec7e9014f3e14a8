// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! Hand-built covers with known energy layouts.
//!
//! The expected rankings below are pinned: if any of them changes, images
//! hidden by an older build can no longer be extracted.

use busysteg::stego::energy::compute_energy;
use busysteg::stego::rank::{rank_cells, Cell};
use busysteg::{capacity, extract, hide, PixelGrid, StegoError};

fn positions(cells: &[Cell]) -> Vec<(usize, usize, usize)> {
    cells.iter().map(|c| (c.row, c.col, c.channel)).collect()
}

#[test]
fn black_image_has_no_capacity() {
    let mut grid = PixelGrid::new(8, 8);
    assert_eq!(capacity(&grid), 0);
    match hide(&mut grid, &[]) {
        Err(StegoError::Capacity { needed: 32, available: 0 }) => {}
        other => panic!("expected Capacity, got {other:?}"),
    }
    assert_eq!(grid, PixelGrid::new(8, 8));
}

#[test]
fn corner_pixel_ranking() {
    let mut grid = PixelGrid::filled(8, 8, [0x80; 3]);
    grid.set_pixel(0, 0, [0x00; 3]);
    let cells = rank_cells(&compute_energy(&grid));

    assert!(cells.iter().all(|c| c.energy == 0x80));
    // Channel 2 has the largest nonce weight, then larger row² + col².
    // (0,1) and (1,0) share a nonce and fall back to raster order.
    let expected = vec![
        (1, 1, 2), (0, 1, 2), (1, 0, 2), (0, 0, 2),
        (1, 1, 1), (0, 1, 1), (1, 0, 1), (0, 0, 1),
        (1, 1, 0), (0, 1, 0), (1, 0, 0), (0, 0, 0),
    ];
    assert_eq!(positions(&cells), expected);

    // 12 nibbles cannot hold a 16-byte header.
    assert!(matches!(
        hide(&mut grid, &[]),
        Err(StegoError::Capacity { needed: 32, available: 12 })
    ));
}

#[test]
fn strong_edge_ranks_before_weak_edge() {
    let mut grid = PixelGrid::filled(8, 8, [0x80; 3]);
    grid.set(4, 4, 0, 0x00); // strong: 0x80 step
    grid.set(0, 7, 1, 0x70); // weak: 0x10 step
    let cells = rank_cells(&compute_energy(&grid));

    assert_eq!(cells.len(), 9 + 4);
    for cell in &cells[..9] {
        assert_eq!(cell.energy, 0x80);
        assert_eq!(cell.channel, 0);
        assert!(cell.row.abs_diff(4) <= 1 && cell.col.abs_diff(4) <= 1);
    }
    for cell in &cells[9..] {
        assert_eq!(cell.energy, 0x10);
        assert_eq!(cell.channel, 1);
    }
    // Within the strong edge, the farthest-from-origin pixel has the largest nonce.
    assert_eq!((cells[0].row, cells[0].col), (5, 5));
}

#[test]
fn stripes_roundtrip() {
    let mut grid = PixelGrid::from_fn(20, 20, |r, _| {
        if r % 2 == 0 {
            [0x10, 0x20, 0x30]
        } else {
            [0xE0, 0xD0, 0xC0]
        }
    });
    assert_eq!(capacity(&grid), 1200);
    let data: Vec<u8> = (0..=255).collect();
    hide(&mut grid, &data).unwrap();
    assert_eq!(extract(&grid).unwrap(), data);
}

#[test]
fn low_nibble_noise_on_flat_image_has_no_capacity() {
    // Same high nibble everywhere: the image looks noisy at full precision
    // but is flat to the energy map.
    let grid = PixelGrid::from_fn(16, 16, |r, c| {
        let n = ((r * 16 + c) % 16) as u8;
        [0x90 | n, 0x90 | (n ^ 0x0F), 0x90 | (n >> 1)]
    });
    assert_eq!(capacity(&grid), 0);
    assert!(matches!(extract(&grid), Err(StegoError::Capacity { needed: 32, available: 0 })));
}
