//! Clock face rendering.

use lumatrix_protocol::{Rgb, GRID_SIZE};

use crate::font::glyph_for;
use crate::framebuffer::{Coord, Framebuffer};

/// Render a time string into a fresh framebuffer
///
/// Starts from an all-black buffer and stamps each glyph's `'1'` cells
/// white at `(x_offset + col, y_offset + row)`. The cursor advances 4
/// columns per digit and 2 after the colon. Characters without a glyph
/// contribute nothing and do not advance. Stamps falling outside the
/// grid are dropped; an oversized string simply renders past the
/// visible edge and those pixels are lost.
///
/// Pure and deterministic: identical inputs produce identical buffers.
/// The prior frame is never touched; it stays readable for diffing.
pub fn render_time(time: &str, x_offset: i16, y_offset: i16) -> Framebuffer {
    let mut frame = Framebuffer::new();
    let mut cursor = x_offset;

    for c in time.chars() {
        if let Some(glyph) = glyph_for(c) {
            for (row, bits) in glyph.rows.iter().enumerate() {
                for (col, bit) in bits.bytes().enumerate() {
                    if bit != b'1' {
                        continue;
                    }
                    let x = cursor + col as i16;
                    let y = y_offset + row as i16;
                    if (0..GRID_SIZE as i16).contains(&x) && (0..GRID_SIZE as i16).contains(&y) {
                        frame.set(Coord::new(x as u8, y as u8), Rgb::WHITE);
                    }
                }
            }
            cursor += glyph.advance as i16;
        }
    }

    frame
}
