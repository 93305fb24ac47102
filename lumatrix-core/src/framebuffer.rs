//! Pixel grid state and change diffing.

use heapless::Vec;
use lumatrix_protocol::{Rgb, GRID_SIZE};

/// Total pixels in the grid
pub const PIXEL_COUNT: usize = (GRID_SIZE as usize) * (GRID_SIZE as usize);

/// Grid coordinate
///
/// Valid domain is `0..GRID_SIZE` on both axes. Producers in this crate
/// only emit in-range coordinates; the wire encoder clamps as a last
/// resort so out-of-range values never reach the device.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Coord {
    pub x: u8,
    pub y: u8,
}

impl Coord {
    /// Create a coordinate
    pub const fn new(x: u8, y: u8) -> Self {
        Self { x, y }
    }
}

/// One pixel whose color differs between two framebuffers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PixelChange {
    pub coord: Coord,
    pub color: Rgb,
}

/// Complete 32x32 grid of current pixel colors
///
/// Always fully populated; pixels never written are black. Represents
/// the entire visual state, so two buffers can be diffed without any
/// notion of "unset" cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Framebuffer {
    pixels: [[Rgb; GRID_SIZE as usize]; GRID_SIZE as usize],
}

impl Default for Framebuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl Framebuffer {
    /// Create an all-black framebuffer
    pub const fn new() -> Self {
        Self {
            pixels: [[Rgb::BLACK; GRID_SIZE as usize]; GRID_SIZE as usize],
        }
    }

    /// Color at a coordinate
    ///
    /// Out-of-range coordinates read as black.
    pub fn get(&self, coord: Coord) -> Rgb {
        if coord.x < GRID_SIZE && coord.y < GRID_SIZE {
            self.pixels[coord.y as usize][coord.x as usize]
        } else {
            Rgb::BLACK
        }
    }

    /// Set the color at a coordinate
    ///
    /// Out-of-range coordinates are silently dropped.
    pub fn set(&mut self, coord: Coord, color: Rgb) {
        if coord.x < GRID_SIZE && coord.y < GRID_SIZE {
            self.pixels[coord.y as usize][coord.x as usize] = color;
        }
    }
}

/// Pixels whose color differs between two framebuffers
///
/// Returns exactly the changed coordinates with their new color, in
/// row-major order; equality is exact per channel. Equal buffers produce
/// an empty set, which lets a tick complete with zero packets sent.
/// Linear in grid size, no allocation beyond the change vector.
pub fn diff(previous: &Framebuffer, current: &Framebuffer) -> Vec<PixelChange, PIXEL_COUNT> {
    let mut changes = Vec::new();
    for y in 0..GRID_SIZE {
        for x in 0..GRID_SIZE {
            let coord = Coord::new(x, y);
            let color = current.get(coord);
            if previous.get(coord) != color {
                // Capacity is one slot per grid pixel
                let _ = changes.push(PixelChange { coord, color });
            }
        }
    }
    changes
}
