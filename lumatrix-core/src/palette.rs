//! Palette generation helpers.

use heapless::Vec;
use lumatrix_protocol::{Rgb, PALETTE_SLOTS};

/// Build an evenly spaced rainbow palette
///
/// Hues step by `360 / count` whole degrees at full saturation and
/// value, so the wheel is covered without quite closing the loop.
/// `count` is capped at the palette slot count; zero yields an empty
/// palette.
pub fn rainbow(count: usize) -> Vec<Rgb, PALETTE_SLOTS> {
    let count = count.min(PALETTE_SLOTS);
    let mut colors = Vec::new();
    if count == 0 {
        return colors;
    }

    let step = (360 / count) as f32;
    for i in 0..count {
        let _ = colors.push(Rgb::from_hsv(step * i as f32, 1.0, 1.0));
    }
    colors
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rainbow_length() {
        assert_eq!(rainbow(31).len(), 31);
        assert_eq!(rainbow(7).len(), 7);
    }

    #[test]
    fn test_rainbow_starts_red() {
        assert_eq!(rainbow(31)[0], Rgb::new(255, 0, 0));
    }

    #[test]
    fn test_rainbow_covers_the_wheel() {
        let colors = rainbow(31);
        // Hues 0 and 330 are far apart on the wheel
        assert_ne!(colors[0], colors[30]);
        // Around a third of the way we are in the greens
        let third = colors[10];
        assert!(third.g > third.r && third.g > third.b);
    }

    #[test]
    fn test_rainbow_empty_and_capped() {
        assert!(rainbow(0).is_empty());
        assert_eq!(rainbow(100).len(), PALETTE_SLOTS);
    }
}
