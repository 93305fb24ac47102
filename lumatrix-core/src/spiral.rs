//! Procedural spiral path for the demo animation.

use heapless::Vec;
use libm::{cos, sin};
use lumatrix_protocol::GRID_SIZE;

use crate::framebuffer::{Coord, PIXEL_COUNT};

/// Generate an outward spiral of grid coordinates
///
/// For step `t` the path visits `angle = 0.1 t`, `radius = 0.5 angle`,
/// truncating `center + radius * cos/sin(angle)` toward zero (the whole
/// sum, not per term). Points outside `0..grid_size` on either axis are
/// excluded; duplicates, common near the center where consecutive steps
/// land on the same cell, are removed preserving first occurrence. The
/// result may therefore be shorter than `num_points`, or empty.
///
/// Deterministic and restartable: identical inputs produce identical
/// output, with no hidden state. `grid_size` is capped at the matrix
/// dimension.
pub fn spiral(grid_size: u8, num_points: u16) -> Vec<Coord, PIXEL_COUNT> {
    let grid = grid_size.min(GRID_SIZE) as i32;
    let center = (grid / 2) as f64;

    let mut seen = [[false; GRID_SIZE as usize]; GRID_SIZE as usize];
    let mut path = Vec::new();

    for t in 0..num_points {
        let angle = 0.1 * t as f64;
        let radius = 0.5 * angle;

        let x = (center + radius * cos(angle)) as i32;
        let y = (center + radius * sin(angle)) as i32;

        if x < 0 || x >= grid || y < 0 || y >= grid {
            continue;
        }
        if seen[y as usize][x as usize] {
            continue;
        }
        seen[y as usize][x as usize] = true;
        // Capacity is one slot per grid pixel
        let _ = path.push(Coord::new(x as u8, y as u8));
    }

    path
}
