//! Spiral demo animation.
//!
//! The animation path bypasses the framebuffer diff: every generated
//! coordinate is encoded and sent directly, one pixel command per
//! point, in path order.

use lumatrix_protocol::{Command, Rgb};

use crate::dispatch::{send_batch, BatchError};
use crate::framebuffer::Coord;
use crate::spiral::spiral;
use crate::traits::Transport;

/// Paint the spiral path onto the panel
///
/// `color_at` picks the color for each visited cell. Pacing between
/// pixels is the caller's concern. Returns the number of pixels
/// painted; a transport failure carries the count already applied.
pub fn paint_spiral<T, F>(
    transport: &mut T,
    grid_size: u8,
    num_points: u16,
    mut color_at: F,
) -> Result<usize, BatchError<T::Error>>
where
    T: Transport,
    F: FnMut(Coord) -> Rgb,
{
    let path = spiral(grid_size, num_points);
    send_batch(
        transport,
        path.iter().map(|&coord| {
            Command::SetPixel {
                color: color_at(coord),
                x: coord.x,
                y: coord.y,
            }
            .encode()
        }),
    )
}
