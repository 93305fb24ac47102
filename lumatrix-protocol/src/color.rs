//! Color primitive shared by the framebuffer and the wire encoders.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// 8-bit RGB color
///
/// Channels are full 0-255 range. The panel interprets them at reduced
/// precision, but no software-side quantization is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// All channels off
    pub const BLACK: Self = Self::new(0, 0, 0);

    /// All channels full
    pub const WHITE: Self = Self::new(255, 255, 255);

    /// Create a color from channel values
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Convert from HSV
    ///
    /// `h_deg` is the hue in degrees (wrapped into 0..360); `s` and `v`
    /// are saturation and value in `0.0..=1.0`.
    pub fn from_hsv(h_deg: f32, s: f32, v: f32) -> Self {
        let mut h = h_deg % 360.0;
        if h < 0.0 {
            h += 360.0;
        }

        // Hue sector and the fractional position within it
        let hs = h / 60.0;
        let sector = hs as u8 % 6;
        let f = hs - hs as u8 as f32;

        let p = v * (1.0 - s);
        let q = v * (1.0 - s * f);
        let t = v * (1.0 - s * (1.0 - f));

        let (r, g, b) = match sector {
            0 => (v, t, p),
            1 => (q, v, p),
            2 => (p, v, t),
            3 => (p, q, v),
            4 => (t, v, p),
            _ => (v, p, q),
        };

        Self::new((r * 255.0) as u8, (g * 255.0) as u8, (b * 255.0) as u8)
    }
}
